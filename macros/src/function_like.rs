pub(crate) mod cloaked;
pub(crate) mod stringify;
