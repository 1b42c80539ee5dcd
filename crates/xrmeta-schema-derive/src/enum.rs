use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Ident, LitStr};

///
/// EnumInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(enum_type), supports(enum_any))]
struct EnumInput {
    ident: Ident,

    /// Declared name reported to the resolver, defaults to the type ident.
    #[darling(default)]
    name: Option<LitStr>,
}

// derive_enum
pub fn derive_enum(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let node = match EnumInput::from_derive_input(&input) {
        Ok(node) => node,
        Err(err) => return err.write_errors(),
    };

    let ident = &node.ident;
    let name = node
        .name
        .as_ref()
        .map_or_else(|| ident.to_string(), LitStr::value);

    quote! {
        impl ::xrmeta::schema::types::WrappedValue for #ident {
            const WRAPPED: ::xrmeta::schema::types::Wrapped =
                ::xrmeta::schema::types::Wrapped::Enum(#name);
        }
    }
}
