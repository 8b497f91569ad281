//! Expands static string literals into a runtime construction from their UTF-8 bytes.
//!
//! `cloaked!("secret")` is replaced at compile time by code that builds the `String` from the
//! byte array `[115, 101, 99, 114, 101, 116]`, so the call site holds bytes instead of text.
//!
//! ```
//! let password = cloaked::cloaked!("secret");
//! assert_eq!("secret", password);
//! ```
//!
//! Each byte is passed through [`core::hint::black_box`] on its own, so the optimizer cannot fold
//! the array back into a constant and the text does not show up in the compiled program. The
//! bytes are still written one instruction at a time, so this defeats a plain string search but
//! not disassembly. It is not encryption.
//!
//! # `no_std`
//!
//! The generated code only needs `alloc`, so the macros work in `no_std` crates that provide a
//! global allocator.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[doc(hidden)]
pub mod export;

/// Builds a `String` at runtime from the UTF-8 bytes of a static string literal
///
/// The argument must be exactly one plain string literal (normal or raw). Anything else, including
/// numbers, byte strings, `concat!` and other macro calls, is rejected at compile time with
/// "`cloaked!` requires a static string literal".
///
/// ```
/// assert_eq!("", cloaked::cloaked!(""));
/// assert_eq!("é", cloaked::cloaked!("é"));
/// ```
///
/// The expansion panics if the bytes fail to decode as UTF-8. The macro checks the round trip
/// before emitting any code, so this cannot happen for a literal that compiled.
pub use cloaked_macros::cloaked;

/// Pairs the value of an expression with its source text
///
/// The text is rendered from the parsed tokens, not copied from the file, so spacing is
/// normalized: `stringify!(x+y)` gives `"x + y"`.
///
/// ```
/// let (value, source) = cloaked::stringify!(1 + 2);
/// assert_eq!(3, value);
/// assert_eq!("1 + 2", source);
/// ```
pub use cloaked_macros::stringify_ as stringify;
