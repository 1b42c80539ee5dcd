//! Field shape → attribute kind resolution.
//!
//! The decision table is evaluated top to bottom and the first matching rule
//! wins:
//!
//! 1. text → `String`
//! 2. entity reference → `Lookup`
//! 3. option set value → `Picklist`
//! 4. money → `Money`
//! 5. optional wrapper, by wrapped type (see [`resolve_wrapped`])
//! 6. raw guid → `UniqueIdentifier`, only with `unique_identifier` enabled
//! 7. raw bytes → `Image`, only with `image` enabled
//! 8. declared entity → `Lookup`
//! 9. anything else → no attribute

use crate::{
    config::ResolverConfig,
    node::{AttributeDescriptor, AttributeKind, EntityDescriptor, FieldDecl, TypeDecl},
    types::{FieldShape, Wrapped},
};

/// Wrapped type name that always resolves to `State`.
pub const STATE_CODE: &str = "statecode";

///
/// FieldResolver
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldResolver {
    config: ResolverConfig,
}

impl FieldResolver {
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> ResolverConfig {
        self.config
    }

    /// Attribute kind for a declared field shape, or `None` when no rule
    /// applies.
    #[must_use]
    pub const fn resolve_kind(&self, shape: &FieldShape) -> Option<AttributeKind> {
        match shape {
            FieldShape::Text => Some(AttributeKind::String),
            FieldShape::EntityReference => Some(AttributeKind::Lookup),
            FieldShape::OptionSetValue => Some(AttributeKind::Picklist),
            FieldShape::Money => Some(AttributeKind::Money),
            FieldShape::Optional(wrapped) => resolve_wrapped(wrapped),
            FieldShape::Guid if self.config.unique_identifier => {
                Some(AttributeKind::UniqueIdentifier)
            }
            FieldShape::Bytes if self.config.image => Some(AttributeKind::Image),
            FieldShape::Entity(_) => Some(AttributeKind::Lookup),
            FieldShape::Guid | FieldShape::Bytes | FieldShape::Other(_) => None,
        }
    }

    /// Descriptor for one annotated field, stamped with a fresh id and the
    /// owning entity's logical name.
    #[must_use]
    pub fn resolve(
        &self,
        field: &FieldDecl,
        entity_logical_name: &str,
    ) -> Option<AttributeDescriptor> {
        let logical_name = field.logical_name?;

        let Some(kind) = self.resolve_kind(&field.shape) else {
            tracing::debug!(
                entity = entity_logical_name,
                field = field.ident,
                shape = ?field.shape,
                "no attribute kind for field, skipping"
            );
            return None;
        };

        Some(AttributeDescriptor::new(
            logical_name,
            entity_logical_name,
            kind,
        ))
    }

    /// Descriptors for every annotated field of `decl`, in declaration order.
    #[must_use]
    pub fn resolve_fields(
        &self,
        decl: &TypeDecl,
        entity_logical_name: &str,
    ) -> Vec<AttributeDescriptor> {
        decl.annotated_fields()
            .filter_map(|(_, field)| self.resolve(field, entity_logical_name))
            .collect()
    }

    /// A complete entity descriptor for `decl` under `logical_name`.
    ///
    /// Blank names never reach this point from the scanner, so `None` only
    /// comes back for hand-built input.
    #[must_use]
    pub fn build_entity(&self, decl: &TypeDecl, logical_name: &str) -> Option<EntityDescriptor> {
        let entity = EntityDescriptor::new(logical_name).ok()?;
        let attributes = self.resolve_fields(decl, logical_name);

        Some(entity.with_attributes(attributes))
    }
}

/// Rule 5: the value type inside an optional wrapper.
///
/// The exact `statecode` name check runs before the general enum fallback and
/// is case-sensitive.
#[must_use]
pub const fn resolve_wrapped(wrapped: &Wrapped) -> Option<AttributeKind> {
    match wrapped {
        Wrapped::Int32 => Some(AttributeKind::Integer),
        Wrapped::Double => Some(AttributeKind::Double),
        Wrapped::Bool => Some(AttributeKind::Boolean),
        Wrapped::Decimal => Some(AttributeKind::Decimal),
        Wrapped::DateTime => Some(AttributeKind::DateTime),
        Wrapped::Guid => Some(AttributeKind::Lookup),
        Wrapped::Int64 => Some(AttributeKind::BigInt),
        Wrapped::Enum(name) | Wrapped::Other(name) if is_state_code(name) => {
            Some(AttributeKind::State)
        }
        Wrapped::Enum(_) => Some(AttributeKind::State),
        Wrapped::Other(_) => None,
    }
}

const fn is_state_code(name: &str) -> bool {
    let (a, b) = (name.as_bytes(), STATE_CODE.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}
