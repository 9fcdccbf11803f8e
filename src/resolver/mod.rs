//! Translation of assigned identifiers into VMC sequence digests.
//!
//! Resolution is two lookups against an [`AliasStore`](crate::store::AliasStore):
//!
//! 1. Find the sequence key for `(namespace, accession)`
//! 2. Find the `VMC` aliases of that sequence key and take the first
//!
//! The result is returned as `VMC:<alias>`.
//!
//! ## Example
//!
//! ```rust
//! use vmc_resolver::{AliasRecord, Identifier, IdentifierResolver};
//! use vmc_resolver::store::memory::InMemoryAliasStore;
//!
//! let store = InMemoryAliasStore::from_records([
//!     AliasRecord::new("IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl", "NCBI", "NC_000019.10"),
//!     AliasRecord::new("IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl", "VMC", "GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl"),
//! ]);
//!
//! let resolver = IdentifierResolver::new(&store);
//! let digest = resolver.resolve(&Identifier::new("NCBI", "NC_000019.10")).unwrap();
//! assert_eq!(digest, "VMC:GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl");
//! ```

pub mod engine;
