fn main() {
    let _ = cloaked::cloaked!("a", "b");
}
