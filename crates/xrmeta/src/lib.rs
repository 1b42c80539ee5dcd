//! ## Crate layout
//! - `schema`: declarations, catalog, scanner, resolver and registry.
//! - `macros`: `#[derive(Entity)]` and `#[derive(Enum)]`.
//!
//! Entity types declared with the derive macros are collected into the
//! global type catalog before `main`. [`init`] turns that catalog into the
//! process-wide [`registry`] exactly once.

pub use xrmeta_schema as schema;
pub use xrmeta_schema_derive as macros;

// export so the derive output resolves inside this crate's own tests
extern crate self as xrmeta;

/// re-exports
///
/// macros can use these, stops the user having to specify all the dependencies
/// in the Cargo.toml file manually
pub mod __reexports {
    pub use ctor;
}

use schema::{Error, config::MetadataConfig, registry::MetadataRegistry};
use std::sync::OnceLock;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// REGISTRY
/// the process-wide metadata registry
///

static REGISTRY: OnceLock<MetadataRegistry> = OnceLock::new();

/// The process-wide registry, created with the default configuration on
/// first use unless [`install_registry`] ran before.
pub fn registry() -> &'static MetadataRegistry {
    REGISTRY.get_or_init(|| MetadataRegistry::with_config(&MetadataConfig::default()))
}

/// Create the process-wide registry with an explicit configuration.
pub fn install_registry(config: &MetadataConfig) -> Result<&'static MetadataRegistry, Error> {
    let mut installed = false;
    let registry = REGISTRY.get_or_init(|| {
        installed = true;
        MetadataRegistry::with_config(config)
    });

    if installed {
        tracing::debug!(?config, "installed metadata registry");
        Ok(registry)
    } else {
        Err(Error::RegistryInstalled)
    }
}

/// Populate the process-wide registry from the global type catalog.
///
/// Only the first call in a process scans; later calls return `false`.
pub fn init() -> bool {
    let catalog = schema::catalog::catalog_read();

    registry().initialize_from_scan(&*catalog)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        macros::{Entity, Enum},
        registry,
        schema::{
            node::{AttributeDescriptor, AttributeKind, EntityDescriptor},
            types::{DeclaredType as _, EntityType as _},
            value::{EntityReference, Money, OptionSetValue},
        },
    };
}
