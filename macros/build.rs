fn main() {
    println!("cargo:rerun-if-env-changed=CLOAKED_LOG");
}
