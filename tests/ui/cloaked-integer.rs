fn main() {
    let _ = cloaked::cloaked!(1);
}
