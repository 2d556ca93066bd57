//! Code generation for the per-arity trait implementations in the `splat` crate.
//!
//! Rust has no variadic generics, so every trait `splat` implements over tuples is implemented
//! once per tuple size. Each macro here takes a single integer literal, the largest tuple size
//! to cover, and expands to implementations for every size from zero up to and including it. The
//! generated code names items by `crate::` paths and is only meaningful inside `splat` itself.

extern crate proc_macro;

mod arity;
mod generate;

use {arity::Arity, proc_macro::TokenStream, syn::parse_macro_input};

/// `Unwrap` for owned, shared and unique tuples of every size up to the bound.
#[proc_macro]
pub fn impl_unwrap(input: TokenStream) -> TokenStream {
    let arity = parse_macro_input!(input as Arity);
    generate::unwrap_impls(arity).into()
}

/// `ApplyOnce`, `ApplyMut` and `Apply` for every callable, over owned, shared and unique tuples of
/// every size up to the bound.
#[proc_macro]
pub fn impl_apply(input: TokenStream) -> TokenStream {
    let arity = parse_macro_input!(input as Arity);
    generate::apply_impls(arity).into()
}
