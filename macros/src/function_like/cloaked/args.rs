use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Expr, Token,
};

pub(crate) struct Args {
    pub(crate) exprs: Punctuated<Expr, Token![,]>,
}

impl Args {
    /// The only argument, or `None` if there are zero or more than one
    pub(crate) fn single(&self) -> Option<&Expr> {
        if self.exprs.len() == 1 {
            self.exprs.first()
        } else {
            None
        }
    }
}

impl Parse for Args {
    fn parse(input: ParseStream) -> Result<Self, syn::Error> {
        Ok(Self {
            exprs: Punctuated::parse_terminated(input)?,
        })
    }
}
