use anyhow::{bail, Context, Result};
use rusqlite::{Connection, DatabaseName};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema_gen::{
    generate_bulk_insert, generate_create_table, generate_drop_table, generate_placeholder_insert,
};
use crate::config::{Credentials, InsertMode, LoadOptions};
use crate::parser::{read_records, NeoRecord};
use crate::schema::{validate_identifier, TableRef, TableSchema, NEO};
use crate::ui::{Phase, Ui};

const BATCH_SIZE: usize = 1000;

/// Outcome of a completed load
#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub records: u64,
    pub database_path: PathBuf,
    pub target: TableRef,
}

pub struct NeoWriter {
    conn: Connection,
    target: TableRef,
}

impl NeoWriter {
    /// Open a connection for `credentials` against the server rooted at `data_dir`.
    ///
    /// Nothing is created on disk until [`NeoWriter::ensure_database`].
    pub fn connect(credentials: &Credentials, data_dir: &Path, target: TableRef) -> Result<Self> {
        credentials.validate()?;

        if !data_dir.is_dir() {
            bail!("Failed to connect: data directory {:?} does not exist", data_dir);
        }

        let conn = Connection::open_in_memory().context("Failed to open database connection")?;
        info!(user = %credentials.user, data_dir = ?data_dir, "Connected");

        Ok(Self { conn, target })
    }

    /// Attach the container database, creating its file if absent
    pub fn ensure_database(&self, db_path: &Path) -> Result<()> {
        let database = self.target.database.as_str();
        let path = db_path
            .to_str()
            .with_context(|| format!("Database path is not valid UTF-8: {:?}", db_path))?;

        self.conn
            .execute(&format!("ATTACH DATABASE ?1 AS {}", database), [path])
            .with_context(|| format!("Failed to open database {} at {:?}", database, db_path))?;

        let schema = Some(DatabaseName::Attached(database));
        self.conn
            .pragma_update_and_check(schema, "journal_mode", "WAL", |row| row.get::<_, String>(0))
            .context("Failed to set journal mode")?;
        self.conn
            .pragma_update(schema, "synchronous", "NORMAL")
            .context("Failed to set synchronous mode")?;

        debug!(database, path, "Database ready");
        Ok(())
    }

    /// Drop any existing target table and create it fresh
    pub fn replace_table(&self, schema: &TableSchema) -> Result<()> {
        self.conn
            .execute(&generate_drop_table(&self.target), [])
            .with_context(|| format!("Failed to drop table: {}", self.target))?;

        self.conn
            .execute(&generate_create_table(&self.target, schema), [])
            .with_context(|| format!("Failed to create table: {}", self.target))?;

        info!(table = %self.target, "Table recreated");
        Ok(())
    }

    /// Insert all records with one literal `INSERT ... VALUES` statement.
    ///
    /// Returns the number of source records, not SQLite's change count.
    pub fn insert_literal(
        &mut self,
        schema: &TableSchema,
        records: &[NeoRecord],
        ui: &mut impl Ui,
    ) -> Result<u64> {
        let Some(sql) = generate_bulk_insert(&self.target, schema, records) else {
            warn!(table = %self.target, "No records to insert");
            return Ok(0);
        };
        debug!(bytes = sql.len(), rows = records.len(), "Built bulk insert");

        let tx = self.conn.transaction()?;
        let inserted = tx
            .execute(&sql, [])
            .with_context(|| format!("Failed to insert records into {}", self.target))?
            as u64;
        tx.commit()?;

        let count = records.len() as u64;
        if inserted != count {
            warn!(
                read = count,
                inserted,
                table = %self.target,
                "Inserted row count differs from source; text fields may contain quotes"
            );
        }

        ui.set_progress(inserted, count, self.target.to_string());
        Ok(count)
    }

    /// Insert all records through a prepared statement, one transaction
    pub fn insert_parameterized(
        &mut self,
        schema: &TableSchema,
        records: &[NeoRecord],
        ui: &mut impl Ui,
    ) -> Result<u64> {
        let insert_sql = generate_placeholder_insert(&self.target, schema);
        let total = records.len() as u64;

        let tx = self.conn.transaction()?;
        let mut count: u64 = 0;

        for batch in records.chunks(BATCH_SIZE) {
            insert_batch(&tx, &insert_sql, batch)
                .with_context(|| format!("Failed to insert records into {}", self.target))?;
            count += batch.len() as u64;
            ui.set_progress(count, total, self.target.to_string());
        }

        tx.commit()?;
        Ok(count)
    }

    /// Checkpoint the write-ahead log into the database file
    pub fn flush(&self) -> Result<()> {
        let sql = format!("PRAGMA {}.wal_checkpoint(TRUNCATE)", self.target.database);
        let (busy, log_frames, checkpointed) = self
            .conn
            .query_row(&sql, [], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            })
            .context("Failed to flush tables")?;

        if busy != 0 {
            warn!(log_frames, checkpointed, "Checkpoint could not complete");
        } else {
            debug!(log_frames, checkpointed, "Checkpoint complete");
        }
        Ok(())
    }
}

/// Insert a batch of rows into the database
fn insert_batch(tx: &rusqlite::Transaction, sql: &str, batch: &[NeoRecord]) -> Result<()> {
    let mut stmt = tx.prepare_cached(sql)?;

    for record in batch {
        for (idx, value) in record.values().iter().enumerate() {
            value.bind_to(idx + 1, &mut stmt)?;
        }
        stmt.raw_execute()?;
    }

    Ok(())
}

/// Load the source CSV into a freshly recreated table.
///
/// The source is opened before connecting, so a missing file leaves the
/// database untouched. Everything after that is destructive.
pub fn load_csv(options: &LoadOptions, ui: &mut impl Ui) -> Result<LoadSummary> {
    validate_identifier("table", &options.table)?;
    validate_identifier("database", &options.database)?;

    let mut reader = csv::Reader::from_path(&options.source)
        .with_context(|| format!("Failed to open source file: {:?}", options.source))?;

    ui.set_phase(Phase::Connecting);
    let target = options.target();
    let mut writer = NeoWriter::connect(&options.credentials, &options.data_dir, target.clone())?;
    let database_path = options.database_path();
    writer.ensure_database(&database_path)?;

    ui.set_phase(Phase::PreparingSchema);
    writer.replace_table(&NEO)?;

    ui.set_phase(Phase::Reading);
    let records = read_records(&mut reader)
        .with_context(|| format!("Failed to read {:?}", options.source))?;
    ui.log(format!("Read {} records from {:?}", records.len(), options.source));

    ui.set_phase(Phase::Inserting);
    let count = match options.insert_mode {
        InsertMode::Literal => writer.insert_literal(&NEO, &records, ui)?,
        InsertMode::Parameterized => writer.insert_parameterized(&NEO, &records, ui)?,
    };

    ui.set_phase(Phase::Flushing);
    writer.flush()?;

    ui.set_phase(Phase::Complete);
    Ok(LoadSummary {
        records: count,
        database_path,
        target,
    })
}
