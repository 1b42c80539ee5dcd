use crate::{config::ConfigError, node::DescriptorError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for the metadata crates. None of the registry operations
/// fail; these come from configuration, explicit descriptor construction and
/// the process-wide registry setup.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("the process-wide metadata registry is already installed")]
    RegistryInstalled,
}
