//! Hashing configuration
//!
//! Layered with figment: built-in defaults, then an optional TOML file, then
//! `HASHKIT_`-prefixed environment variables (`__` separates nested keys, e.g.
//! `HASHKIT_TORRENT__PIECE_LENGTH`).

use crate::error::ValidationError;
use crate::hashing::{HasherParams, TorrentParams};
use crate::Result;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use log::debug;

/// Chunk size used when reading sources
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "HASHKIT_";

/// Settings of a hash context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Bytes requested from a source per read
    pub chunk_size: usize,
    pub torrent: TorrentConfig,
}

/// BitTorrent info hash settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorrentConfig {
    /// Fixed piece length; derived from the bound file size when unset
    pub piece_length: Option<u64>,
    /// Mark the torrent private
    pub private: bool,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            torrent: TorrentConfig::default(),
        }
    }
}

impl HashConfig {
    /// Figment with every layer; the TOML layer is skipped when `path` is `None`
    /// or does not exist
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(HashConfig::default()));

        if let Some(path) = path.filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load defaults overridden by the environment
    pub fn load() -> Result<Self> {
        Self::extract(Self::figment(None))
    }

    /// Load defaults, the TOML file at `path`, then the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::extract(Self::figment(Some(path.as_ref())))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: HashConfig = figment.extract()?;
        config.validate()?;
        debug!(
            "Loaded hash configuration: chunk_size={}, piece_length={:?}, private={}",
            config.chunk_size,
            config.torrent.piece_length,
            config.torrent.private
        );
        Ok(config)
    }

    /// Reject values no context can work with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(
                ValidationError::invalid_configuration("chunk_size must be positive").into(),
            );
        }
        if self.torrent.piece_length == Some(0) {
            return Err(ValidationError::invalid_configuration(
                "torrent.piece_length must be positive",
            )
            .into());
        }
        Ok(())
    }

    pub(crate) fn hasher_params(&self) -> HasherParams {
        HasherParams {
            torrent: TorrentParams {
                piece_length: self.torrent.piece_length,
                private: self.torrent.private,
                file: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        let config = HashConfig::default();
        assert_eq!(config.chunk_size, 8192);
        assert_eq!(config.torrent.piece_length, None);
        assert!(!config.torrent.private);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = HashConfig {
            chunk_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::Validation(ValidationError::InvalidConfiguration { .. }))
        ));

        let config = HashConfig {
            torrent: TorrentConfig {
                piece_length: Some(0),
                private: false,
            },
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("piece_length"));
    }

    #[test]
    fn test_layered_loading() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "hashkit.toml",
                r#"
                chunk_size = 4096

                [torrent]
                private = true
                "#,
            )?;
            jail.set_env("HASHKIT_TORRENT__PIECE_LENGTH", "16384");

            let config = HashConfig::load_from("hashkit.toml").expect("config loads");
            assert_eq!(config.chunk_size, 4096);
            assert!(config.torrent.private);
            assert_eq!(config.torrent.piece_length, Some(16384));
            Ok(())
        });
    }

    #[test]
    fn test_environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("hashkit.toml", "chunk_size = 4096")?;
            jail.set_env("HASHKIT_CHUNK_SIZE", "65536");

            let config = HashConfig::load_from("hashkit.toml").expect("config loads");
            assert_eq!(config.chunk_size, 65536);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        Jail::expect_with(|_jail| {
            let config = HashConfig::load_from("absent.toml").expect("config loads");
            assert_eq!(config, HashConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_invalid_environment_value() {
        Jail::expect_with(|jail| {
            jail.set_env("HASHKIT_CHUNK_SIZE", "0");
            let err = HashConfig::load().unwrap_err();
            assert!(err.to_string().contains("chunk_size"));
            Ok(())
        });
    }

    #[test]
    fn test_hasher_params_carry_torrent_settings() {
        let config = HashConfig {
            torrent: TorrentConfig {
                piece_length: Some(32768),
                private: true,
            },
            ..Default::default()
        };
        let params = config.hasher_params();
        assert_eq!(params.torrent.piece_length, Some(32768));
        assert!(params.torrent.private);
        assert!(params.torrent.file.is_none());
    }
}
