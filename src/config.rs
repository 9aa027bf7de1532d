use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

use crate::schema::{TableRef, DEFAULT_DATABASE, NEO};

/// How rows are written into the destination table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InsertMode {
    /// One `INSERT ... VALUES (...),(...)` statement built from quoted literals.
    /// Text containing `'` breaks the statement.
    #[default]
    Literal,
    /// One prepared statement executed per row with bound parameters
    Parameterized,
}

/// Database login. SQLite does not authenticate, but both fields must be set.
#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.user.trim().is_empty() {
            bail!("Database user must not be empty");
        }
        if self.password.is_empty() {
            bail!("Database password must not be empty");
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Everything a single load run needs
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub source: PathBuf,
    pub credentials: Credentials,
    /// Directory standing in for the database server
    pub data_dir: PathBuf,
    pub database: String,
    pub table: String,
    pub insert_mode: InsertMode,
}

impl LoadOptions {
    /// Options with the default source, database and table names
    pub fn new(credentials: Credentials, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: PathBuf::from(NEO.source_file),
            credentials,
            data_dir: data_dir.into(),
            database: DEFAULT_DATABASE.to_string(),
            table: NEO.name.to_string(),
            insert_mode: InsertMode::default(),
        }
    }

    pub fn target(&self) -> TableRef {
        TableRef::new(&self.database, &self.table)
    }

    /// File backing the container database
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.db", self.database))
    }
}
