fn main() {
    let _ = cloaked::cloaked!('s');
}
