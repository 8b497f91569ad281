//! Items the code generated by `cloaked!` refers to

pub use alloc::{string::String, vec::Vec};
pub use core::hint::black_box;
