#![no_std]

extern crate alloc;
extern crate std;

use alloc::string::String;

fn greeting() -> String {
    cloaked::cloaked!("hello from alloc")
}

fn main() {
    assert_eq!("hello from alloc", greeting());
}
