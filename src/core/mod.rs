//! Core data types for identifier resolution.
//!
//! - [`Identifier`](identifier::Identifier): an externally assigned `(namespace, accession)` pair
//! - [`AliasRecord`](alias::AliasRecord): one row of the SeqRepo alias table
//!
//! ## Namespaces
//!
//! | Namespace | Example alias |
//! |-----------|---------------|
//! | NCBI      | NC_000019.10  |
//! | Ensembl   | 19            |
//! | UCSC      | chr19         |
//! | VMC       | GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl |
//!
//! `RefSeq` is accepted as a synonym for `NCBI`.

pub mod alias;
pub mod identifier;
