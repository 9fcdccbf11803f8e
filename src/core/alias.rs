use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Namespace under which SeqRepo stores VMC sequence digests
pub const VMC_NAMESPACE: &str = "VMC";

/// Namespace under which SeqRepo stores NCBI RefSeq accessions
pub const NCBI_NAMESPACE: &str = "NCBI";

/// Alternate name accepted for [`NCBI_NAMESPACE`]
pub const REFSEQ_NAMESPACE: &str = "RefSeq";

/// Map a caller-supplied namespace to the name SeqRepo stores it under.
///
/// SeqRepo keeps RefSeq accessions in the `NCBI` namespace.
#[must_use]
pub fn store_namespace(namespace: &str) -> &str {
    if namespace == REFSEQ_NAMESPACE {
        NCBI_NAMESPACE
    } else {
        namespace
    }
}

/// One row of the SeqRepo alias table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    /// Internal sequence key shared by every alias of the same sequence
    pub seq_id: String,

    pub namespace: String,

    pub alias: String,

    /// When the alias was loaded, if the store records it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<NaiveDateTime>,

    /// Whether the alias is current (superseded aliases are kept but hidden)
    pub is_current: bool,
}

impl AliasRecord {
    pub fn new(
        seq_id: impl Into<String>,
        namespace: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            seq_id: seq_id.into(),
            namespace: namespace.into(),
            alias: alias.into(),
            added: None,
            is_current: true,
        }
    }

    #[must_use]
    pub fn with_added(mut self, added: NaiveDateTime) -> Self {
        self.added = Some(added);
        self
    }

    #[must_use]
    pub fn superseded(mut self) -> Self {
        self.is_current = false;
        self
    }

    /// The alias in `<namespace>:<alias>` form
    pub fn curie(&self) -> String {
        format!("{}:{}", self.namespace, self.alias)
    }
}
