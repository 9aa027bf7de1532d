use anyhow::{bail, Result};

/// Checks that a database or table name can be interpolated into SQL as-is.
///
/// `kind` names the identifier in the error message ("table", "database").
pub fn validate_identifier(kind: &str, value: &str) -> Result<()> {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        bail!("{} name is empty", kind);
    };
    if !is_ident_start(first) || !chars.all(is_ident_continue) {
        bail!(
            "{} name {:?} must be alphanumeric or underscore and start with a letter or underscore",
            kind,
            value
        );
    }
    Ok(())
}

fn is_ident_start(value: char) -> bool {
    value == '_' || value.is_ascii_alphabetic()
}

fn is_ident_continue(value: char) -> bool {
    is_ident_start(value) || value.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        assert!(validate_identifier("table", "Neo").is_ok());
        assert!(validate_identifier("table", "_neo_2022").is_ok());
        assert!(validate_identifier("database", "NeoDB").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        let err = validate_identifier("table", "").unwrap_err();
        assert_eq!(err.to_string(), "table name is empty");
    }

    #[test]
    fn test_rejects_sql_fragments() {
        assert!(validate_identifier("table", "1neo").is_err());
        assert!(validate_identifier("table", "neo; DROP TABLE x").is_err());
        assert!(validate_identifier("database", "neo-db").is_err());
        let err = validate_identifier("database", "a.b").unwrap_err();
        assert!(err.to_string().starts_with("database name"));
    }
}
