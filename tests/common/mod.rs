//! Builds throwaway SeqRepo instances on disk for integration tests.

#![allow(dead_code)]

use std::path::Path;

use rusqlite::Connection;
use tempfile::TempDir;

pub const CHR19_SEQ_ID: &str = "IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl";
pub const CHR19_DIGEST: &str = "VMC:GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl";
pub const INSTANCE: &str = "master";

/// `(seq_id, namespace, alias, is_current)`
pub type Row<'a> = (&'a str, &'a str, &'a str, bool);

pub const CHR19_ROWS: &[Row] = &[
    (CHR19_SEQ_ID, "NCBI", "NC_000019.10", true),
    (CHR19_SEQ_ID, "UCSC", "chr19", true),
    (CHR19_SEQ_ID, "Ensembl", "19", true),
    (CHR19_SEQ_ID, "VMC", "GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl", true),
    ("sup_seq", "NCBI", "NC_000019.9", false),
    ("sup_seq", "VMC", "GS_superseded", true),
    ("orphan_seq", "NCBI", "NC_999999.1", true),
];

/// Create `<root>/<instance>/aliases.sqlite3` with the SeqRepo alias schema
pub fn create_instance(root: &Path, instance: &str, rows: &[Row]) {
    let dir = root.join(instance);
    std::fs::create_dir_all(&dir).unwrap();

    let connection = Connection::open(dir.join("aliases.sqlite3")).unwrap();
    connection
        .execute_batch(
            "CREATE TABLE meta (key TEXT NOT NULL, value TEXT NOT NULL);
            CREATE UNIQUE INDEX meta_key_idx ON meta (key);
            INSERT INTO meta (key, value) VALUES ('schema version', '1');
            CREATE TABLE seqalias (
                seqalias_id INTEGER PRIMARY KEY,
                seq_id TEXT NOT NULL,
                alias TEXT NOT NULL,
                added TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                is_current INT NOT NULL DEFAULT 1,
                namespace TEXT NOT NULL DEFAULT ''
            );
            CREATE INDEX seqalias_seq_id_idx ON seqalias (seq_id);
            CREATE INDEX seqalias_namespace_alias_idx ON seqalias (namespace, alias);",
        )
        .unwrap();

    for (seq_id, namespace, alias, is_current) in rows {
        connection
            .execute(
                "INSERT INTO seqalias (seq_id, namespace, alias, is_current) VALUES (?1, ?2, ?3, ?4)",
                (seq_id, namespace, alias, is_current),
            )
            .unwrap();
    }
}

/// A temporary SeqRepo root holding one `master` instance with the chr19 rows
pub fn chr19_root() -> TempDir {
    let root = TempDir::new().unwrap();
    create_instance(root.path(), INSTANCE, CHR19_ROWS);
    root
}
