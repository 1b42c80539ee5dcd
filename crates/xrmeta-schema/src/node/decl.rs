use crate::types::FieldShape;
use serde::Serialize;

///
/// DeclKind
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum DeclKind {
    /// Structurally compatible with the base entity shape.
    #[default]
    Entity,
    Record,
}

///
/// TypeDecl
///
/// Static declaration of one record type, as exposed to the scanner.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct TypeDecl {
    pub ident: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_name: Option<&'static str>,

    pub kind: DeclKind,

    #[serde(default, skip_serializing_if = "<[_]>::is_empty")]
    pub fields: &'static [FieldDecl],
}

impl TypeDecl {
    #[must_use]
    pub const fn is_entity(&self) -> bool {
        matches!(self.kind, DeclKind::Entity)
    }

    /// The logical name annotation, unless it is missing or blank.
    #[must_use]
    pub fn annotated_name(&self) -> Option<&'static str> {
        self.logical_name.filter(|name| !name.trim().is_empty())
    }

    /// Fields carrying a logical name annotation, in declaration order.
    pub fn annotated_fields(&self) -> impl Iterator<Item = (&'static str, &'static FieldDecl)> {
        self.fields
            .iter()
            .filter_map(|field| field.logical_name.map(|name| (name, field)))
    }

    // get_field
    #[must_use]
    pub fn get_field(&self, ident: &str) -> Option<&'static FieldDecl> {
        self.fields.iter().find(|f| f.ident == ident)
    }
}

///
/// FieldDecl
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct FieldDecl {
    pub ident: &'static str,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_name: Option<&'static str>,

    pub shape: FieldShape,
}
