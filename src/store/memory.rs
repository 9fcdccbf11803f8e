use super::{AliasStore, StoreError};
use crate::core::alias::{store_namespace, AliasRecord};

/// Alias store held entirely in memory.
///
/// Applies the same filtering and ordering as the SQLite-backed store, so it can
/// stand in for a SeqRepo instance in tests or small embedded tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAliasStore {
    records: Vec<AliasRecord>,
}

impl InMemoryAliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = AliasRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Insert a row, keeping rows sorted by `(seq_id, namespace, alias)`
    pub fn insert(&mut self, record: AliasRecord) {
        let index = self
            .records
            .partition_point(|existing| key(existing) <= key(&record));
        self.records.insert(index, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn current(&self) -> impl Iterator<Item = &AliasRecord> {
        self.records.iter().filter(|r| r.is_current)
    }
}

fn key(record: &AliasRecord) -> (&str, &str, &str) {
    (
        record.seq_id.as_str(),
        record.namespace.as_str(),
        record.alias.as_str(),
    )
}

impl AliasStore for InMemoryAliasStore {
    fn find_by_alias(
        &self,
        namespace: &str,
        alias: &str,
    ) -> Result<Option<AliasRecord>, StoreError> {
        let namespace = store_namespace(namespace);
        Ok(self
            .current()
            .find(|r| r.namespace == namespace && r.alias == alias)
            .cloned())
    }

    fn find_by_seq_id(
        &self,
        seq_id: &str,
        namespace: &str,
    ) -> Result<Vec<AliasRecord>, StoreError> {
        let namespace = store_namespace(namespace);
        Ok(self
            .current()
            .filter(|r| r.seq_id == seq_id && r.namespace == namespace)
            .cloned()
            .collect())
    }

    fn find_all_by_seq_id(&self, seq_id: &str) -> Result<Vec<AliasRecord>, StoreError> {
        Ok(self
            .current()
            .filter(|r| r.seq_id == seq_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryAliasStore {
        InMemoryAliasStore::from_records([
            AliasRecord::new("seq1", "VMC", "GS_z"),
            AliasRecord::new("seq1", "NCBI", "NC_000019.10"),
            AliasRecord::new("seq1", "VMC", "GS_a"),
            AliasRecord::new("seq1", "VMC", "GS_old").superseded(),
            AliasRecord::new("seq0", "NCBI", "dup"),
            AliasRecord::new("seq1", "NCBI", "dup"),
        ])
    }

    #[test]
    fn test_insert_keeps_order() {
        let store = store();
        assert_eq!(store.len(), 6);

        let vmc: Vec<String> = store
            .find_by_seq_id("seq1", "VMC")
            .unwrap()
            .into_iter()
            .map(|r| r.alias)
            .collect();
        assert_eq!(vmc, vec!["GS_a", "GS_z"]);
    }

    #[test]
    fn test_find_by_alias() {
        let store = store();
        let record = store.find_by_alias("RefSeq", "NC_000019.10").unwrap().unwrap();
        assert_eq!(record.seq_id, "seq1");

        // Tie-break follows store order
        let record = store.find_by_alias("NCBI", "dup").unwrap().unwrap();
        assert_eq!(record.seq_id, "seq0");

        assert!(store.find_by_alias("NCBI", "missing").unwrap().is_none());
    }

    #[test]
    fn test_find_all_hides_superseded() {
        let store = store();
        let all = store.find_all_by_seq_id("seq1").unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|r| r.is_current));
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryAliasStore::new();
        assert!(store.is_empty());
        assert!(store.find_all_by_seq_id("seq1").unwrap().is_empty());
    }
}
