//! Read-only access to a SeqRepo alias table.
//!
//! The resolver only needs two lookups, so the store is hidden behind the
//! narrow [`AliasStore`] trait:
//!
//! - [`seqrepo::SeqRepo`]: reads `aliases.sqlite3` from a SeqRepo instance directory
//! - [`memory::InMemoryAliasStore`]: a vector-backed store for tests and embedding
//!
//! Both implementations apply the same SeqRepo conventions: only current aliases
//! are returned, the `RefSeq` namespace is queried as `NCBI`, and rows come back
//! ordered by `(seq_id, namespace, alias)`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vmc_resolver::store::{AliasStore, SeqRepoConfig};
//! use vmc_resolver::store::seqrepo::SeqRepo;
//!
//! let config = SeqRepoConfig::from_env();
//! let store = SeqRepo::open(&config).unwrap();
//!
//! if let Some(row) = store.find_by_alias("NCBI", "NC_000019.10").unwrap() {
//!     for vmc in store.find_by_seq_id(&row.seq_id, "VMC").unwrap() {
//!         println!("{}", vmc.curie());
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::core::alias::AliasRecord;

pub mod config;
pub mod memory;
pub mod seqrepo;

pub use config::SeqRepoConfig;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SeqRepo alias database not found: {}", .0.display())]
    InstanceNotFound(PathBuf),

    #[error("Unsupported alias database schema version: {found} (expected {expected})")]
    UnsupportedSchema { found: String, expected: &'static str },

    #[error("Alias database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// The alias lookups needed to translate an identifier into a digest
pub trait AliasStore {
    /// First current alias row with the given namespace and alias, if any
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying store cannot be queried.
    fn find_by_alias(&self, namespace: &str, alias: &str)
        -> Result<Option<AliasRecord>, StoreError>;

    /// All current alias rows for `seq_id` within `namespace`, in store order
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying store cannot be queried.
    fn find_by_seq_id(&self, seq_id: &str, namespace: &str)
        -> Result<Vec<AliasRecord>, StoreError>;

    /// All current alias rows for `seq_id` across every namespace
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying store cannot be queried.
    fn find_all_by_seq_id(&self, seq_id: &str) -> Result<Vec<AliasRecord>, StoreError>;
}
