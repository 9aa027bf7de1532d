use crate::parser::NeoRecord;
use crate::schema::{TableRef, TableSchema};

/// Generate DROP TABLE SQL for a target table
pub fn generate_drop_table(target: &TableRef) -> String {
    format!("DROP TABLE IF EXISTS {}", target)
}

/// Generate CREATE TABLE SQL for a table schema
pub fn generate_create_table(target: &TableRef, schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE {} (\n", target);

    let columns: Vec<String> = schema
        .columns
        .iter()
        .map(|col| format!("    {} {}", col.name, col.col_type.sql_type()))
        .collect();

    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n)");

    sql
}

/// `INSERT INTO db.table (cols) VALUES ` - shared by both insert modes
pub fn generate_insert_prefix(target: &TableRef, schema: &TableSchema) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ",
        target,
        schema.column_names().join(", ")
    )
}

/// Single-row insert with `?` placeholders
pub fn generate_placeholder_insert(target: &TableRef, schema: &TableSchema) -> String {
    let placeholders: Vec<&str> = schema.columns.iter().map(|_| "?").collect();
    format!(
        "{}({})",
        generate_insert_prefix(target, schema),
        placeholders.join(", ")
    )
}

/// One statement inserting every record as a literal tuple, in input order.
///
/// Returns `None` for an empty slice, since `VALUES` needs at least one row.
pub fn generate_bulk_insert(
    target: &TableRef,
    schema: &TableSchema,
    records: &[NeoRecord],
) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let tuples: Vec<String> = records
        .iter()
        .map(|record| {
            let literals: Vec<String> = record.values().iter().map(|v| v.to_literal()).collect();
            format!("({})", literals.join(","))
        })
        .collect();

    let mut sql = generate_insert_prefix(target, schema);
    sql.push_str(&tuples.join(","));
    sql.push(';');

    Some(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NEO;

    fn target() -> TableRef {
        TableRef::new("NeoDB", "Neo")
    }

    fn record(id: i64, name: &str) -> NeoRecord {
        NeoRecord {
            id,
            name: name.to_string(),
            est_diameter_min: 0.25,
            est_diameter_max: 0.5,
            relative_velocity: 1000.5,
            miss_distance: 42.0,
            orbiting_body: "Earth".to_string(),
            sentry_object: false,
            absolute_magnitude: 19.5,
            hazardous: true,
        }
    }

    #[test]
    fn test_generate_drop_table() {
        assert_eq!(generate_drop_table(&target()), "DROP TABLE IF EXISTS NeoDB.Neo");
    }

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table(&target(), &NEO);
        assert!(sql.starts_with("CREATE TABLE NeoDB.Neo ("));
        assert!(sql.contains("id INTEGER"));
        assert!(sql.contains("name TEXT"));
        assert!(sql.contains("miss_distance REAL"));
        assert!(sql.contains("hazardous INTEGER"));
        assert!(sql.find("sentry_object").unwrap() < sql.find("absolute_magnitude").unwrap());
    }

    #[test]
    fn test_generate_placeholder_insert() {
        let sql = generate_placeholder_insert(&target(), &NEO);
        assert!(sql.starts_with("INSERT INTO NeoDB.Neo (id, name, est_diameter_min"));
        assert!(sql.ends_with("VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"));
    }

    #[test]
    fn test_generate_bulk_insert() {
        let records = vec![record(1, "first"), record(2, "second")];
        let sql = generate_bulk_insert(&target(), &NEO, &records).unwrap();

        assert!(sql.ends_with(
            "VALUES (1,'first',0.25,0.5,1000.5,42,'Earth',0,19.5,1),\
             (2,'second',0.25,0.5,1000.5,42,'Earth',0,19.5,1);"
        ));
    }

    #[test]
    fn test_generate_bulk_insert_empty() {
        assert!(generate_bulk_insert(&target(), &NEO, &[]).is_none());
    }

    #[test]
    fn test_generate_bulk_insert_keeps_quotes_raw() {
        let sql = generate_bulk_insert(&target(), &NEO, &[record(1, "it's")]).unwrap();
        assert!(sql.contains("(1,'it's',"));
    }
}
