macro_rules! hidden {
    ($literal:expr) => {
        cloaked::cloaked!($literal)
    };
}

fn main() {
    assert_eq!("forwarded", hidden!("forwarded"));
}
