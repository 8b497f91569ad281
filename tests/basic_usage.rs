fn main() {
    let secret = cloaked::cloaked!("secret");
    assert_eq!("secret", secret);

    let (value, source) = cloaked::stringify!(1 + 2);
    assert_eq!(3, value);
    assert_eq!("1 + 2", source);
}
