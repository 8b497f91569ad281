//! INTERNAL; DO NOT USE. Please use the `cloaked` crate to access the functionality implemented here

use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;

mod consts;
mod function_like;
mod logger;

#[proc_macro]
#[proc_macro_error]
pub fn cloaked(input: TokenStream) -> TokenStream {
    logger::init();
    function_like::cloaked::expand(input)
}

// not naming this `stringify` to avoid shadowing `core::stringify` in this scope
#[proc_macro]
#[proc_macro_error]
pub fn stringify_(input: TokenStream) -> TokenStream {
    logger::init();
    function_like::stringify::expand(input)
}
