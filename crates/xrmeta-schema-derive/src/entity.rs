use crate::helper::{as_tokens, quote_option, type_name};
use darling::{Error as DarlingError, FromDeriveInput, FromField, FromMeta, ast::Data};
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::BTreeMap;
use syn::{Attribute, DeriveInput, Generics, Ident, LitStr, Type};

///
/// EntityInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
struct EntityInput {
    ident: Ident,
    generics: Generics,
    data: Data<(), EntityField>,

    #[darling(default)]
    logical_name: Option<LitStr>,
}

///
/// EntityField
///

#[derive(Debug, FromField)]
#[darling(forward_attrs(attribute))]
struct EntityField {
    ident: Option<Ident>,
    ty: Type,
    attrs: Vec<Attribute>,
}

///
/// AttributeArgs
/// contents of `#[attribute(...)]`
///

#[derive(Debug, FromMeta)]
struct AttributeArgs {
    logical_name: LitStr,
}

///
/// FieldNode
///

struct FieldNode<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    logical_name: Option<LitStr>,
}

impl FieldNode<'_> {
    fn schema_part(&self) -> TokenStream {
        let ident = self.ident.to_string();
        let logical_name = quote_option(self.logical_name.as_ref(), as_tokens);

        // unannotated fields are never resolved, so their type needs no
        // DeclaredType impl
        let shape = if self.logical_name.is_some() {
            let ty = self.ty;
            quote!(<#ty as ::xrmeta::schema::types::DeclaredType>::SHAPE)
        } else {
            let name = type_name(self.ty);
            quote!(::xrmeta::schema::types::FieldShape::Other(#name))
        };

        quote! {
            ::xrmeta::schema::node::FieldDecl {
                ident: #ident,
                logical_name: #logical_name,
                shape: #shape,
            }
        }
    }
}

// derive_entity
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let node = match EntityInput::from_derive_input(&input) {
        Ok(node) => node,
        Err(err) => return err.write_errors(),
    };

    match expand(&node) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(node: &EntityInput) -> Result<TokenStream, DarlingError> {
    if !node.generics.params.is_empty() {
        return Err(
            DarlingError::custom("Entity cannot be derived for generic types")
                .with_span(&node.ident),
        );
    }

    let fields = field_nodes(node)?;

    let ident = &node.ident;
    let ident_str = ident.to_string();
    let logical_name = quote_option(node.logical_name.as_ref(), as_tokens);
    let field_parts = fields.iter().map(FieldNode::schema_part);

    Ok(quote! {
        impl ::xrmeta::schema::types::DeclaredType for #ident {
            const SHAPE: ::xrmeta::schema::types::FieldShape =
                ::xrmeta::schema::types::FieldShape::Entity(#ident_str);
        }

        impl ::xrmeta::schema::types::EntityType for #ident {
            const DECL: ::xrmeta::schema::node::TypeDecl = ::xrmeta::schema::node::TypeDecl {
                ident: #ident_str,
                logical_name: #logical_name,
                kind: ::xrmeta::schema::node::DeclKind::Entity,
                fields: &[#(#field_parts),*],
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        #[::xrmeta::__reexports::ctor::ctor(unsafe, anonymous, crate_path = ::xrmeta::__reexports::ctor)]
        fn __ctor() {
            ::xrmeta::schema::catalog::catalog_write()
                .register(<#ident as ::xrmeta::schema::types::EntityType>::DECL);
        }
    })
}

// Parse `#[attribute(...)]` on every field and reject duplicate logical
// names within the struct.
fn field_nodes(node: &EntityInput) -> Result<Vec<FieldNode<'_>>, DarlingError> {
    let Data::Struct(fields) = &node.data else {
        return Err(DarlingError::unsupported_shape("enum"));
    };

    let mut errors = DarlingError::accumulator();
    let mut seen = BTreeMap::<String, &Ident>::new();
    let mut nodes = Vec::with_capacity(fields.len());

    for field in fields.iter() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        if field.attrs.len() > 1 {
            errors.push(
                DarlingError::custom("a field takes at most one #[attribute(...)]")
                    .with_span(ident),
            );
            continue;
        }

        let logical_name = match field.attrs.first() {
            Some(attr) => match errors.handle(AttributeArgs::from_meta(&attr.meta)) {
                Some(args) => Some(args.logical_name),
                None => continue,
            },
            None => None,
        };

        if let Some(lit) = &logical_name
            && let Some(prev) = seen.insert(lit.value(), ident)
        {
            errors.push(
                DarlingError::custom(format!(
                    "attribute logical name '{}' is already used by field '{prev}'",
                    lit.value()
                ))
                .with_span(lit),
            );
        }

        nodes.push(FieldNode {
            ident,
            ty: &field.ty,
            logical_name,
        });
    }

    errors.finish_with(nodes)
}
