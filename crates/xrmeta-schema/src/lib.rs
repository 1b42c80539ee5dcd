//! Entity/attribute metadata synthesized from statically declared types.
//!
//! ## Crate layout
//! - `catalog`: the ordered set of type declarations the scanner reads.
//! - `config`: edition presets and resolver flags, loadable from TOML.
//! - `node`: declarations (`TypeDecl`, `FieldDecl`) and descriptors.
//! - `registry`: the latched, case-insensitive descriptor registry.
//! - `resolve`: field shape → attribute kind decision table.
//! - `scan`: entity type discovery over a `TypeSource`.
//! - `types`: field shapes and the declared-type traits.
//! - `value`: platform value types used as field types.

pub mod catalog;
pub mod config;
pub mod error;
pub mod id;
pub mod node;
pub mod registry;
pub mod resolve;
pub mod scan;
pub mod types;
pub mod value;

pub use error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        catalog::{TypeCatalog, TypeSource},
        config::{Edition, MetadataConfig, ResolverConfig},
        id::MetadataId,
        node::*,
        registry::MetadataRegistry,
        resolve::FieldResolver,
        types::{DeclaredType, EntityType, FieldShape, NameKey, Wrapped, WrappedValue},
        value::{EntityReference, Money, OptionSetValue},
    };
    pub use serde::{Deserialize, Serialize};
}
