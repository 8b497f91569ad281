use std::{fmt, str};

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use proc_macro_error::abort_call_site;
use quote::quote;
use syn::{parse_macro_input, Expr, ExprLit, Lit, LitStr};

use crate::consts;

use self::args::Args;

mod args;

pub(crate) fn expand(args: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as Args);
    let expr = match args.single() {
        Some(expr) => expr,
        None => abort_call_site!("`cloaked!` takes exactly one argument"),
    };

    match Cloaked::from_expr(expr) {
        Ok(cloaked) => {
            log::debug!("cloaked a {}-byte string literal", cloaked.bytes().len());
            log::trace!("{:?} -> {:?}", cloaked.text, cloaked.bytes());
            cloaked.codegen().into()
        }
        Err(e) => {
            log::warn!("{}", e);
            abort_call_site!("{}", e)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Error {
    /// The argument is not a single, plain string literal
    RequiresStaticStringLiteral,
    /// Converting the text into UTF-8 bytes failed
    // `str` is always valid UTF-8, so `encode` never produces this
    #[allow(dead_code)]
    EncodingFailed,
    /// The bytes do not decode back into the original text
    RoundTripMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RequiresStaticStringLiteral => {
                f.write_str("`cloaked!` requires a static string literal")
            }
            Error::EncodingFailed => f.write_str("conversion of string to bytes failed"),
            Error::RoundTripMismatch => f.write_str("string back-validation failed"),
        }
    }
}

impl std::error::Error for Error {}

/// A string literal that was validated and turned into its UTF-8 bytes
#[derive(Debug)]
pub(crate) struct Cloaked {
    text: String,
    bytes: Vec<u8>,
}

impl Cloaked {
    /// Validates the macro argument
    pub(crate) fn from_expr(expr: &Expr) -> Result<Self, Error> {
        let literal = static_string_literal(expr).ok_or(Error::RequiresStaticStringLiteral)?;

        Self::from_text(literal.value())
    }

    pub(crate) fn from_text(text: String) -> Result<Self, Error> {
        let bytes = encode(&text)?;
        validate(&bytes, &text)?;

        Ok(Self { text, bytes })
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Builds an expression that constructs the `String` from `bytes` and panics if they are not
    /// valid UTF-8
    ///
    /// Every byte goes through `black_box` on its own, so the optimizer cannot fold the array
    /// back into one constant that holds the text.
    pub(crate) fn codegen(&self) -> TokenStream2 {
        let len = self.bytes.len();
        let bytes = self.bytes.iter();
        let message = consts::INVALID_UTF8_MESSAGE;

        quote!({
            let bytes: [u8; #len] = [#(::cloaked::export::black_box(#bytes)),*];
            ::cloaked::export::String::from_utf8(::cloaked::export::Vec::from(bytes))
                .expect(#message)
        })
    }
}

fn static_string_literal(expr: &Expr) -> Option<&LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            attrs,
            lit: Lit::Str(literal),
        }) if attrs.is_empty() && literal.suffix().is_empty() => Some(literal),
        // `macro_rules!` forwards `$e:expr` fragments wrapped in invisible delimiters
        Expr::Group(group) if group.attrs.is_empty() => static_string_literal(&group.expr),
        _ => None,
    }
}

fn encode(text: &str) -> Result<Vec<u8>, Error> {
    Ok(text.as_bytes().to_vec())
}

fn validate(bytes: &[u8], original: &str) -> Result<(), Error> {
    match str::from_utf8(bytes) {
        Ok(reconstructed) if reconstructed == original => Ok(()),
        _ => Err(Error::RoundTripMismatch),
    }
}
