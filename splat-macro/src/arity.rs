use {
    syn::{
        parse::{Parse, ParseStream},
        LitInt,
    },
    thiserror::Error,
};

/// The largest arity any of the generator macros will accept.
pub const CEILING: usize = 128;

/// The inclusive upper bound on tuple sizes for which implementations are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arity {
    max: usize,
}

/// Reasons a generator macro rejects its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArityError {
    #[error("`{0}` is not a valid arity: expected a non-negative integer")]
    Unrepresentable(String),
    #[error("arity {requested} exceeds the supported maximum of {ceiling}")]
    TooLarge { requested: usize, ceiling: usize },
}

impl Arity {
    pub fn new(max: usize) -> Result<Self, ArityError> {
        if max > CEILING {
            Err(ArityError::TooLarge {
                requested: max,
                ceiling: CEILING,
            })
        } else {
            Ok(Arity { max })
        }
    }

    pub fn max(self) -> usize {
        self.max
    }

    /// Every tuple size from zero up to and including the maximum.
    pub fn sizes(self) -> impl Iterator<Item = usize> {
        0..=self.max()
    }
}

impl Parse for Arity {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit
            .base10_parse::<usize>()
            .map_err(|_| syn::Error::new(lit.span(), ArityError::Unrepresentable(lit.to_string())))?;
        Arity::new(max).map_err(|e| syn::Error::new(lit.span(), e))
    }
}
