fn main() {
    let _ = cloaked::cloaked!(b"secret");
}
