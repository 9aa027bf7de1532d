use anyhow::Result;
use serde::{de, Deserialize, Deserializer};
use std::io::Read;

/// One row of the NEO source file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NeoRecord {
    pub id: i64,
    pub name: String,
    pub est_diameter_min: f64,
    pub est_diameter_max: f64,
    pub relative_velocity: f64,
    pub miss_distance: f64,
    pub orbiting_body: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub sentry_object: bool,
    pub absolute_magnitude: f64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub hazardous: bool,
}

impl NeoRecord {
    /// Values in the column order of [`crate::schema::NEO`]
    pub fn values(&self) -> [SqlValue; 10] {
        [
            SqlValue::Integer(self.id),
            SqlValue::Text(self.name.clone()),
            SqlValue::Real(self.est_diameter_min),
            SqlValue::Real(self.est_diameter_max),
            SqlValue::Real(self.relative_velocity),
            SqlValue::Real(self.miss_distance),
            SqlValue::Text(self.orbiting_body.clone()),
            SqlValue::from(self.sentry_object),
            SqlValue::Real(self.absolute_magnitude),
            SqlValue::from(self.hazardous),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Integer(if b { 1 } else { 0 })
    }
}

impl SqlValue {
    pub fn bind_to(&self, idx: usize, stmt: &mut rusqlite::Statement) -> rusqlite::Result<()> {
        match self {
            SqlValue::Integer(i) => stmt.raw_bind_parameter(idx, i)?,
            SqlValue::Real(f) => stmt.raw_bind_parameter(idx, f)?,
            SqlValue::Text(s) => stmt.raw_bind_parameter(idx, s.as_str())?,
        }
        Ok(())
    }

    /// Render as an SQL literal for a bulk VALUES list.
    ///
    /// Text is wrapped in single quotes without escaping, so a value that
    /// itself contains `'` yields a malformed statement. Non-finite reals
    /// render as bare `NaN`/`inf`, which SQLite rejects.
    pub fn to_literal(&self) -> String {
        match self {
            SqlValue::Integer(i) => i.to_string(),
            SqlValue::Real(f) => f.to_string(),
            SqlValue::Text(s) => format!("'{}'", s),
        }
    }
}

/// Accepts `True`/`False` in any case as well as `1`/`0`
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| de::Error::custom(format!("invalid boolean {:?}", raw)))
}

fn parse_flag(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Some(false)
    } else {
        None
    }
}

/// Read every row of a CSV source into memory, in file order
pub fn read_records<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<NeoRecord>> {
    let mut records = Vec::new();

    for result in reader.deserialize::<NeoRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                let message = match err.position() {
                    Some(pos) => format!("Failed to parse record on line {}", pos.line()),
                    None => "Failed to parse record".to_string(),
                };
                return Err(anyhow::Error::new(err).context(message));
            }
        };
        records.push(record);
    }

    Ok(records)
}
