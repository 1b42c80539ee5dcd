use crate::id::MetadataId;
use derive_more::Display;
use serde::Serialize;

///
/// AttributeKind
///
/// Closed set of attribute metadata kinds a field can resolve to.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum AttributeKind {
    BigInt,
    Boolean,
    DateTime,
    Decimal,
    Double,
    Image,
    Integer,
    Lookup,
    Money,
    Picklist,
    State,
    String,
    UniqueIdentifier,
}

///
/// AttributeDescriptor
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AttributeDescriptor {
    pub id: MetadataId,
    pub logical_name: String,

    /// Logical name of the owning entity.
    pub entity_logical_name: String,

    pub kind: AttributeKind,
}

impl AttributeDescriptor {
    /// Build a descriptor with a freshly generated id.
    #[must_use]
    pub fn new(
        logical_name: impl Into<String>,
        entity_logical_name: impl Into<String>,
        kind: AttributeKind,
    ) -> Self {
        Self {
            id: MetadataId::generate(),
            logical_name: logical_name.into(),
            entity_logical_name: entity_logical_name.into(),
            kind,
        }
    }
}
