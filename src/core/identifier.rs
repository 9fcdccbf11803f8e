use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier '{0}' is not of the form <namespace>:<accession>")]
    MissingSeparator(String),

    #[error("Identifier '{0}' has an empty namespace")]
    EmptyNamespace(String),

    #[error("Identifier '{0}' has an empty accession")]
    EmptyAccession(String),
}

/// An externally assigned sequence identifier, e.g. `NCBI:NC_000019.10`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// Authority that assigned the accession (e.g. `NCBI`, `Ensembl`)
    pub namespace: String,

    /// Accession within the namespace
    pub accession: String,
}

impl Identifier {
    pub fn new(namespace: impl Into<String>, accession: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            accession: accession.into(),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.accession)
    }
}

/// Parse a CURIE such as `NCBI:NC_000019.10`.
///
/// Splits on the first `:` so accessions may themselves contain colons.
impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (namespace, accession) = s
            .split_once(':')
            .ok_or_else(|| IdentifierError::MissingSeparator(s.to_string()))?;

        let namespace = namespace.trim();
        let accession = accession.trim();

        if namespace.is_empty() {
            return Err(IdentifierError::EmptyNamespace(s.to_string()));
        }
        if accession.is_empty() {
            return Err(IdentifierError::EmptyAccession(s.to_string()));
        }

        Ok(Self::new(namespace, accession))
    }
}
