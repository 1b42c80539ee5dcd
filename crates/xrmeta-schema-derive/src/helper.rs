use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Quote an `Option`, applying the transform to the inner value when present.
pub fn quote_option<T, F>(opt: Option<&T>, transform: F) -> TokenStream
where
    F: FnOnce(&T) -> TokenStream,
{
    if let Some(v) = opt {
        let transformed = transform(v);
        quote!(Some(#transformed))
    } else {
        quote!(None)
    }
}

/// Pass through a tokenizable value unchanged.
pub fn as_tokens<T: ToTokens>(t: &T) -> TokenStream {
    quote!(#t)
}

/// Render a type as the string the declaration reports for it.
pub fn type_name<T: ToTokens>(t: &T) -> String {
    t.to_token_stream().to_string().replace(' ', "")
}
