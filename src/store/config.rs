use std::path::{Path, PathBuf};

/// Environment variable naming the directory that holds SeqRepo instances
pub const ROOT_DIR_ENV: &str = "SEQREPO_ROOT_DIR";

/// Environment variable naming the instance within the root directory
pub const INSTANCE_ENV: &str = "SEQREPO_INSTANCE";

pub const DEFAULT_ROOT_DIR: &str = "/usr/local/share/seqrepo";

pub const DEFAULT_INSTANCE: &str = "master";

/// File name of the alias database inside an instance directory
pub const ALIASES_DB_NAME: &str = "aliases.sqlite3";

/// Location of a SeqRepo instance on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRepoConfig {
    pub root_dir: PathBuf,
    pub instance: String,
}

impl SeqRepoConfig {
    pub fn new(root_dir: impl Into<PathBuf>, instance: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            instance: instance.into(),
        }
    }

    /// Read `SEQREPO_ROOT_DIR` and `SEQREPO_INSTANCE`, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Unset and empty values both fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            root_dir: var(ROOT_DIR_ENV).map_or_else(|| PathBuf::from(DEFAULT_ROOT_DIR), PathBuf::from),
            instance: var(INSTANCE_ENV).unwrap_or_else(|| DEFAULT_INSTANCE.to_string()),
        }
    }

    /// `<root_dir>/<instance>`
    pub fn instance_path(&self) -> PathBuf {
        self.root_dir.join(&self.instance)
    }

    /// `<root_dir>/<instance>/aliases.sqlite3`
    pub fn aliases_db_path(&self) -> PathBuf {
        self.instance_path().join(ALIASES_DB_NAME)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }
}

impl Default for SeqRepoConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_DIR, DEFAULT_INSTANCE)
    }
}
