use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read metadata config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid metadata config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// Edition
///
/// Platform release the synthesized metadata should look like.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    Crm2011,
    Crm2013,
    Crm2015,
    Crm2016,
    #[default]
    Dynamics365,
}

impl Edition {
    /// Resolver rules available on this edition.
    #[must_use]
    pub const fn resolver_config(self) -> ResolverConfig {
        match self {
            Self::Crm2011 => ResolverConfig {
                unique_identifier: false,
                image: false,
            },
            Self::Crm2013 => ResolverConfig {
                unique_identifier: false,
                image: true,
            },
            Self::Crm2015 | Self::Crm2016 | Self::Dynamics365 => ResolverConfig {
                unique_identifier: true,
                image: true,
            },
        }
    }
}

///
/// ResolverConfig
///
/// Which of the edition-specific resolution rules are active.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolverConfig {
    /// Raw guid fields resolve to `UniqueIdentifier`.
    pub unique_identifier: bool,

    /// Raw byte fields resolve to `Image`.
    pub image: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Edition::default().resolver_config()
    }
}

///
/// MetadataConfig
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataConfig {
    pub edition: Edition,
    pub unique_identifier: Option<bool>,
    pub image: Option<bool>,
}

impl MetadataConfig {
    #[must_use]
    pub const fn for_edition(edition: Edition) -> Self {
        Self {
            edition,
            unique_identifier: None,
            image: None,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    /// Edition preset with explicit overrides applied.
    #[must_use]
    pub fn resolver_config(&self) -> ResolverConfig {
        let preset = self.edition.resolver_config();

        ResolverConfig {
            unique_identifier: self.unique_identifier.unwrap_or(preset.unique_identifier),
            image: self.image.unwrap_or(preset.image),
        }
    }
}
