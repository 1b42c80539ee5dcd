//! Derive macros that turn annotated Rust types into static metadata
//! declarations.

use proc_macro::TokenStream;

mod entity;
mod r#enum;
mod helper;

/// Declare an entity type and register it in the global type catalog.
///
/// ```ignore
/// #[derive(Entity)]
/// #[entity(logical_name = "account")]
/// pub struct Account {
///     #[attribute(logical_name = "name")]
///     pub name: String,
/// }
/// ```
#[proc_macro_derive(Entity, attributes(entity, attribute))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive_entity(input.into()).into()
}

/// Mark an enum as an enumeration value type for optional fields.
#[proc_macro_derive(Enum, attributes(enum_type))]
pub fn derive_enum(input: TokenStream) -> TokenStream {
    r#enum::derive_enum(input.into()).into()
}
