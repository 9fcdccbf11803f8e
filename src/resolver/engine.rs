use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::alias::{AliasRecord, VMC_NAMESPACE};
use crate::core::identifier::Identifier;
use crate::store::{AliasStore, StoreError};

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No sequence found for {0}")]
    NotFound(Identifier),

    #[error("Sequence {seq_id} for {identifier} has no VMC digest")]
    NoDigest {
        identifier: Identifier,
        seq_id: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResolveError {
    /// The identifier the failure relates to, if any
    pub fn identifier(&self) -> Option<&Identifier> {
        match self {
            Self::NotFound(identifier) | Self::NoDigest { identifier, .. } => Some(identifier),
            Self::Store(_) => None,
        }
    }
}

/// Outcome of resolving one identifier in a batch
#[derive(Debug)]
pub struct Resolution {
    pub identifier: Identifier,
    pub result: Result<String, ResolveError>,
}

impl Resolution {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Serializable form of a [`Resolution`] for JSON output
#[derive(Debug, Serialize)]
pub struct ResolutionSummary<'a> {
    pub namespace: &'a str,
    pub accession: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> From<&'a Resolution> for ResolutionSummary<'a> {
    fn from(resolution: &'a Resolution) -> Self {
        let (digest, error) = match &resolution.result {
            Ok(digest) => (Some(digest.as_str()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            namespace: &resolution.identifier.namespace,
            accession: &resolution.identifier.accession,
            digest,
            error,
        }
    }
}

/// Translates assigned identifiers into VMC sequence digests.
///
/// The resolver borrows a store handle owned by the caller, so a single
/// connection serves every lookup.
pub struct IdentifierResolver<'a, S: AliasStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: AliasStore + ?Sized> IdentifierResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve `identifier` to its digest, e.g. `VMC:GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl`
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::NotFound` if no current alias matches the identifier,
    /// `ResolveError::NoDigest` if the matched sequence has no VMC alias, or
    /// `ResolveError::Store` if a lookup fails.
    pub fn resolve(&self, identifier: &Identifier) -> Result<String, ResolveError> {
        self.resolve_record(identifier).map(|record| record.curie())
    }

    /// Like [`resolve`](Self::resolve) but returns the full VMC alias row
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_record(&self, identifier: &Identifier) -> Result<AliasRecord, ResolveError> {
        let seq_id = self.find_seq_id(identifier)?;

        let digests = self.store.find_by_seq_id(&seq_id, VMC_NAMESPACE)?;
        debug!(
            "Sequence {seq_id} has {} {VMC_NAMESPACE} alias(es)",
            digests.len()
        );

        digests
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::NoDigest {
                identifier: identifier.clone(),
                seq_id,
            })
    }

    /// Resolve each identifier in order; failures are recorded, not propagated
    pub fn resolve_all<I>(&self, identifiers: I) -> Vec<Resolution>
    where
        I: IntoIterator<Item = Identifier>,
    {
        identifiers
            .into_iter()
            .map(|identifier| {
                let result = self.resolve(&identifier);
                if let Err(e) = &result {
                    warn!("{e}");
                }
                Resolution { identifier, result }
            })
            .collect()
    }

    /// Every current alias of the sequence `identifier` refers to
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::NotFound` if no current alias matches the identifier,
    /// or `ResolveError::Store` if a lookup fails.
    pub fn aliases(&self, identifier: &Identifier) -> Result<Vec<AliasRecord>, ResolveError> {
        let seq_id = self.find_seq_id(identifier)?;
        Ok(self.store.find_all_by_seq_id(&seq_id)?)
    }

    fn find_seq_id(&self, identifier: &Identifier) -> Result<String, ResolveError> {
        let record = self
            .store
            .find_by_alias(&identifier.namespace, &identifier.accession)?
            .ok_or_else(|| ResolveError::NotFound(identifier.clone()))?;
        debug!("{identifier} is sequence {}", record.seq_id);
        Ok(record.seq_id)
    }
}
