use crate::{
    node::TypeDecl,
    value::{EntityReference, Money, OptionSetValue},
};
use derive_more::Display;
use serde::Serialize;

///
/// FieldShape
///
/// Structured category of a field's declared value type. Computed once per
/// field when the declaration is built and never from field values.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum FieldShape {
    Text,
    EntityReference,
    OptionSetValue,
    Money,
    Optional(Wrapped),
    Guid,
    Bytes,

    /// A type that is itself a declared entity.
    Entity(&'static str),

    /// Anything else, carrying the declared type name.
    Other(&'static str),
}

///
/// Wrapped
///
/// The value type inside an optional wrapper.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Wrapped {
    Int32,
    Double,
    Bool,
    Decimal,
    DateTime,
    Guid,
    Int64,
    Enum(&'static str),
    Other(&'static str),
}

impl Wrapped {
    /// Declared name of a non-primitive wrapped type.
    #[must_use]
    pub const fn type_name(&self) -> Option<&'static str> {
        match self {
            Self::Enum(name) | Self::Other(name) => Some(*name),
            _ => None,
        }
    }
}

///
/// DeclaredType
///
/// Implemented by every type usable as an annotated entity field.
///

pub trait DeclaredType {
    const SHAPE: FieldShape;
}

///
/// EntityType
///
/// Implemented by `#[derive(Entity)]` for every declared entity struct.
///

pub trait EntityType: DeclaredType {
    const DECL: TypeDecl;
}

///
/// WrappedValue
///
/// Implemented by types that may appear inside `Option<T>` fields.
///

pub trait WrappedValue {
    const WRAPPED: Wrapped;
}

impl<T: WrappedValue> DeclaredType for Option<T> {
    const SHAPE: FieldShape = FieldShape::Optional(T::WRAPPED);
}

macro_rules! impl_declared {
    ($($ty:ty => $shape:expr),* $(,)?) => {
        $(
            impl DeclaredType for $ty {
                const SHAPE: FieldShape = $shape;
            }
        )*
    };
}

macro_rules! impl_wrapped {
    ($($ty:ty => $wrapped:expr),* $(,)?) => {
        $(
            impl WrappedValue for $ty {
                const WRAPPED: Wrapped = $wrapped;
            }
        )*
    };
}

impl_declared! {
    String => FieldShape::Text,
    &'static str => FieldShape::Text,
    EntityReference => FieldShape::EntityReference,
    OptionSetValue => FieldShape::OptionSetValue,
    Money => FieldShape::Money,
    uuid::Uuid => FieldShape::Guid,
    Vec<u8> => FieldShape::Bytes,

    // non-optional primitives carry no attribute kind of their own
    bool => FieldShape::Other("bool"),
    i32 => FieldShape::Other("i32"),
    i64 => FieldShape::Other("i64"),
    f64 => FieldShape::Other("f64"),
    rust_decimal::Decimal => FieldShape::Other("Decimal"),
    chrono::NaiveDateTime => FieldShape::Other("NaiveDateTime"),

    // text and platform values are nullable on the platform side, so the
    // optional form keeps the shape of the bare type
    Option<String> => FieldShape::Text,
    Option<&'static str> => FieldShape::Text,
    Option<EntityReference> => FieldShape::EntityReference,
    Option<OptionSetValue> => FieldShape::OptionSetValue,
    Option<Money> => FieldShape::Money,
}

impl<Tz: chrono::TimeZone> DeclaredType for chrono::DateTime<Tz> {
    const SHAPE: FieldShape = FieldShape::Other("DateTime");
}

impl_wrapped! {
    i32 => Wrapped::Int32,
    f64 => Wrapped::Double,
    bool => Wrapped::Bool,
    rust_decimal::Decimal => Wrapped::Decimal,
    chrono::NaiveDateTime => Wrapped::DateTime,
    uuid::Uuid => Wrapped::Guid,
    i64 => Wrapped::Int64,
}

impl<Tz: chrono::TimeZone> WrappedValue for chrono::DateTime<Tz> {
    const WRAPPED: Wrapped = Wrapped::DateTime;
}

///
/// NameKey
///
/// Case-insensitive logical name key.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NameKey(String);

impl NameKey {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NameKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
