//! # vmc-resolver
//!
//! A library for translating assigned sequence identifiers into VMC sequence digests.
//!
//! Sequences are known by many names: `NC_000019.10` at NCBI, `chr19` at UCSC,
//! `19` at Ensembl. A content-derived digest such as
//! `VMC:GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl` names the sequence itself.
//!
//! `vmc-resolver` reads the alias table of a local
//! [SeqRepo](https://github.com/biocommons/biocommons.seqrepo) instance, which already
//! records the VMC digest of every sequence it holds, and maps any known alias to it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vmc_resolver::{Identifier, IdentifierResolver, SeqRepo, SeqRepoConfig};
//!
//! // Open the instance named by SEQREPO_ROOT_DIR / SEQREPO_INSTANCE
//! let store = SeqRepo::open(&SeqRepoConfig::from_env()).unwrap();
//!
//! let resolver = IdentifierResolver::new(&store);
//! let digest = resolver.resolve(&Identifier::new("NCBI", "NC_000019.10")).unwrap();
//! assert_eq!(digest, "VMC:GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Identifier and alias row types
//! - [`store`]: The alias store trait, SeqRepo reader and in-memory store
//! - [`resolver`]: Identifier to digest resolution
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod resolver;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::alias::AliasRecord;
pub use core::identifier::Identifier;
pub use resolver::engine::{IdentifierResolver, ResolveError, Resolution};
pub use store::seqrepo::SeqRepo;
pub use store::{AliasStore, SeqRepoConfig, StoreError};
