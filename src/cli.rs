use clap::Parser;
use std::path::PathBuf;

use crate::config::{Credentials, InsertMode, LoadOptions};

#[derive(Parser, Debug)]
#[command(name = "neo-csv-to-sqlite")]
#[command(version, about = "Load Neo csv-file to a SQLite database")]
pub struct Cli {
    /// Source .csv file
    #[arg(short, long, default_value = "data/neo_v2.csv")]
    pub file: PathBuf,

    /// Database username
    #[arg(short, long)]
    pub user: String,

    /// Database password
    #[arg(short, long)]
    pub password: String,

    /// Result table name
    #[arg(short, long, default_value = "Neo")]
    pub tablename: String,

    /// Directory holding the database files
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Container database name
    #[arg(long, default_value = "NeoDB")]
    pub database: String,

    /// How rows are inserted
    #[arg(long, value_enum, default_value_t = InsertMode::Literal)]
    pub insert_mode: InsertMode,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            source: self.file.clone(),
            credentials: Credentials::new(&self.user, &self.password),
            data_dir: self.data_dir.clone(),
            database: self.database.clone(),
            table: self.tablename.clone(),
            insert_mode: self.insert_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["neo-csv-to-sqlite", "-u", "root", "-p", "pw"]).unwrap();
        let options = cli.load_options();

        assert_eq!(options.source, PathBuf::from("data/neo_v2.csv"));
        assert_eq!(options.table, "Neo");
        assert_eq!(options.database, "NeoDB");
        assert_eq!(options.data_dir, PathBuf::from("."));
        assert_eq!(options.insert_mode, InsertMode::Literal);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "neo-csv-to-sqlite",
            "--file",
            "neo.csv",
            "--user",
            "root",
            "--password",
            "pw",
            "--tablename",
            "Asteroids",
            "--insert-mode",
            "parameterized",
        ])
        .unwrap();

        assert_eq!(cli.file, PathBuf::from("neo.csv"));
        assert_eq!(cli.tablename, "Asteroids");
        assert_eq!(cli.insert_mode, InsertMode::Parameterized);
    }

    #[test]
    fn test_credentials_required() {
        assert!(Cli::try_parse_from(["neo-csv-to-sqlite", "-p", "pw"]).is_err());
        assert!(Cli::try_parse_from(["neo-csv-to-sqlite", "-u", "root"]).is_err());
    }
}
