//! The fixed near-Earth-object table

use super::types::*;

/// Container database the table lives in
pub const DEFAULT_DATABASE: &str = "NeoDB";

pub static NEO: TableSchema = TableSchema {
    name: "Neo",
    source_file: "data/neo_v2.csv",
    columns: &[
        Column::new("id", ColumnType::Integer),
        Column::new("name", ColumnType::Text),
        Column::new("est_diameter_min", ColumnType::Real),
        Column::new("est_diameter_max", ColumnType::Real),
        Column::new("relative_velocity", ColumnType::Real),
        Column::new("miss_distance", ColumnType::Real),
        Column::new("orbiting_body", ColumnType::Text),
        Column::new("sentry_object", ColumnType::Boolean),
        Column::new("absolute_magnitude", ColumnType::Real),
        Column::new("hazardous", ColumnType::Boolean),
    ],
};
