use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, OptionalExtension, Row};
use tracing::{debug, info};

use super::{AliasStore, SeqRepoConfig, StoreError};
use crate::core::alias::{store_namespace, AliasRecord};

const COLUMNS: &str = "seq_id, namespace, alias, added, is_current";

const SQL_SCHEMA_VERSION: &str = "SELECT value FROM meta WHERE key = 'schema version'";

/// A read-only handle to the alias database of one SeqRepo instance.
///
/// Open it once and share it by reference; every lookup reuses the same
/// connection and its cached prepared statements.
#[derive(Debug)]
pub struct SeqRepo {
    connection: Connection,
    path: PathBuf,
}

impl SeqRepo {
    /// Alias database schema version this reader understands
    pub const SCHEMA_VERSION: &'static str = "1";

    /// Open the alias database of the instance described by `config`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InstanceNotFound` if the database file does not exist,
    /// `StoreError::UnsupportedSchema` if its schema version is not supported,
    /// or `StoreError::Database` if SQLite fails.
    pub fn open(config: &SeqRepoConfig) -> Result<Self, StoreError> {
        Self::open_db(config.aliases_db_path())
    }

    /// Open an `aliases.sqlite3` file directly
    ///
    /// # Errors
    ///
    /// See [`SeqRepo::open`].
    pub fn open_db<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(StoreError::InstanceNotFound(path.to_path_buf()));
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let connection = Connection::open_with_flags(path, flags)?;

        let version: Option<String> = connection
            .query_row(SQL_SCHEMA_VERSION, [], |row| row.get(0))
            .optional()?;
        match version.as_deref() {
            Some(Self::SCHEMA_VERSION) => {}
            other => {
                return Err(StoreError::UnsupportedSchema {
                    found: other.unwrap_or("none").to_string(),
                    expected: Self::SCHEMA_VERSION,
                });
            }
        }

        info!("Opened SeqRepo alias database {}", path.display());

        Ok(Self {
            connection,
            path: path.to_path_buf(),
        })
    }

    /// Path of the open alias database
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn row_to_record(row: &Row) -> rusqlite::Result<AliasRecord> {
        Ok(AliasRecord {
            seq_id: row.get(0)?,
            namespace: row.get(1)?,
            alias: row.get(2)?,
            added: row.get(3)?,
            is_current: row.get(4)?,
        })
    }
}

impl AliasStore for SeqRepo {
    fn find_by_alias(
        &self,
        namespace: &str,
        alias: &str,
    ) -> Result<Option<AliasRecord>, StoreError> {
        let namespace = store_namespace(namespace);
        debug!("Looking up alias {namespace}:{alias}");

        let mut statement = self.connection.prepare_cached(&format!(
            "SELECT {COLUMNS} FROM seqalias
            WHERE namespace = ?1 AND alias = ?2 AND is_current = 1
            ORDER BY seq_id, namespace, alias
            LIMIT 1"
        ))?;
        let record = statement
            .query_row((namespace, alias), Self::row_to_record)
            .optional()?;
        Ok(record)
    }

    fn find_by_seq_id(
        &self,
        seq_id: &str,
        namespace: &str,
    ) -> Result<Vec<AliasRecord>, StoreError> {
        let namespace = store_namespace(namespace);
        debug!("Looking up {namespace} aliases of sequence {seq_id}");

        let mut statement = self.connection.prepare_cached(&format!(
            "SELECT {COLUMNS} FROM seqalias
            WHERE seq_id = ?1 AND namespace = ?2 AND is_current = 1
            ORDER BY seq_id, namespace, alias"
        ))?;
        let records = statement
            .query_map((seq_id, namespace), Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn find_all_by_seq_id(&self, seq_id: &str) -> Result<Vec<AliasRecord>, StoreError> {
        debug!("Looking up all aliases of sequence {seq_id}");

        let mut statement = self.connection.prepare_cached(&format!(
            "SELECT {COLUMNS} FROM seqalias
            WHERE seq_id = ?1 AND is_current = 1
            ORDER BY seq_id, namespace, alias"
        ))?;
        let records = statement
            .query_map((seq_id,), Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }
}
