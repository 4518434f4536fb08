//! Engine configuration.
//!
//! Settings come from a small TOML file. Every field is optional; a missing
//! file is the same as an empty one.
//!
//! ```toml
//! language = "ido"
//! world_file = "world.json"
//! seed = 42
//! wrap_width = 80
//! transcript = "kerno_log.txt"
//! show_hints = true
//!
//! [aliases]
//! grab = "take"
//! n = "north"
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use crate::data_paths::data_path;
use crate::vocab::{Language, Vocabulary};

pub const CONFIG_ENV: &str = "KERNO_CONFIG";
pub const CONFIG_FILE: &str = "kerno.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub language: Language,
    /// World document; relative paths are resolved against the data directory.
    pub world_file: PathBuf,
    /// Fixed RNG seed for ambient events. Unset means a fresh seed every run.
    pub seed: Option<u64>,
    /// Wrap width for rendered text. Unset means the terminal width.
    pub wrap_width: Option<usize>,
    /// Append-only transcript file. Unset means no transcript.
    pub transcript: Option<PathBuf>,
    pub show_hints: bool,
    /// Extra input words, each mapped onto an existing word.
    pub aliases: BTreeMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            world_file: PathBuf::from("world.json"),
            seed: None,
            wrap_width: None,
            transcript: None,
            show_hints: true,
            aliases: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    /// Load the first configuration file found, or defaults if there is none.
    ///
    /// Lookup order: `$KERNO_CONFIG`, `kerno.toml` in the data directory,
    /// then `kerno/kerno.toml` in the user's config directory.
    ///
    /// # Errors
    /// Fails if `$KERNO_CONFIG` names a missing file, or if a found file
    /// can't be read or parsed.
    pub fn load() -> Result<Self> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }
        let candidates = [
            Some(data_path(CONFIG_FILE)),
            dirs::config_dir().map(|dir| dir.join("kerno").join(CONFIG_FILE)),
        ];
        match candidates.into_iter().flatten().find(|path| path.is_file()) {
            Some(path) => Self::load_from(&path),
            None => {
                info!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific TOML file.
    ///
    /// # Errors
    /// Fails if the file can't be read or isn't valid configuration TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading config file '{}'", path.display()))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("parsing config TOML from '{}'", path.display()))?;
        info!("configuration loaded from '{}'", path.display());
        Ok(config)
    }

    /// Resolved path of the world document.
    pub fn world_path(&self) -> PathBuf {
        if self.world_file.is_absolute() {
            self.world_file.clone()
        } else {
            data_path(&self.world_file)
        }
    }

    /// Vocabulary for the configured language with all aliases applied.
    pub fn vocabulary(&self) -> Vocabulary {
        let mut vocab = Vocabulary::new(self.language);
        for (alias, existing) in &self.aliases {
            vocab.add_alias(alias, existing);
        }
        vocab
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::vocab::{Token, Verb};

    #[test]
    fn empty_file_gives_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.show_hints);
        assert_eq!(config.world_file, PathBuf::from("world.json"));
    }

    #[test]
    fn load_from_reads_all_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
language = "ido"
world_file = "/tmp/other.json"
seed = 7
wrap_width = 60
transcript = "log.txt"
show_hints = false

[aliases]
grab = "take"
"#
        )
        .unwrap();

        let config = EngineConfig::load_from(file.path()).unwrap();
        assert_eq!(config.language, Language::Ido);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.wrap_width, Some(60));
        assert_eq!(config.transcript, Some(PathBuf::from("log.txt")));
        assert!(!config.show_hints);
        assert_eq!(config.world_path(), PathBuf::from("/tmp/other.json"));

        let vocab = config.vocabulary();
        assert_eq!(vocab.resolve("grab"), Some(Token::Verb(Verb::Take)));
        assert_eq!(vocab.resolve("prenar"), Some(Token::Verb(Verb::Take)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "langauge = \"ido\"").unwrap();
        let err = EngineConfig::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config TOML"));
    }

    #[test]
    fn missing_file_is_an_error_for_load_from() {
        assert!(EngineConfig::load_from(Path::new("/definitely/not/here.toml")).is_err());
    }
}
