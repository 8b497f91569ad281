use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Expr};

pub(crate) fn expand(args: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(args as Expr);
    log::debug!("stringified `{}`", quote!(#expr));
    codegen(&expr).into()
}

// the text is rendered from the tokens, so it has normalized spacing rather than the source's
fn codegen(expr: &Expr) -> TokenStream2 {
    let source = quote!(#expr).to_string();
    quote!((#expr, #source))
}
