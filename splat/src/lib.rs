/*!
![license: MIT](https://img.shields.io/github/license/boltlabs-inc/splat)
[![crates.io](https://img.shields.io/crates/v/splat)](https://crates.io/crates/splat)
[![docs.rs documentation](https://docs.rs/splat/badge.svg)](https://docs.rs/splat)

> **splat (verb):** To spread the elements of a collection out as the individual arguments of a
> call.

Code that invokes user-supplied callbacks with a varying number of arguments usually collects
those arguments into a tuple. This crate provides the two small pieces that make such code pleasant
to write, without any runtime cost:

- [`unwrap`](unwrap()) collapses a one-element tuple to its element and passes every other tuple through
  untouched, so a callback producing "one value" need not be treated differently from one
  producing several.
- [`ForwardApply`] wraps any function or closure so that it can be called with a single tuple,
  whose elements are passed on as separate positional arguments.

Both are resolved entirely at compile time. Which behavior applies is decided by the static type
of what is passed in, and passing a tuple that does not fit the wrapped function is a type error,
not a panic.

## Quick reference

| You have | You write | You get |
| :------- | :-------- | :------ |
| `t: (T,)` | [`unwrap(t)`](unwrap()) | `T`, moved out |
| `t: &(T,)` | [`unwrap(&t)`](unwrap()) | `&T` |
| `t: &mut (T,)` | [`unwrap(&mut t)`](unwrap()) | `&mut T` |
| any other tuple, or a reference to one | [`unwrap(t)`](unwrap()) | the same value, unchanged |
| `f: impl Fn(A, B) -> R` | [`forward_apply(f).call((a, b))`](ForwardApply::call) | `R` |
| `f: impl FnMut(A, B) -> R` | [`forward_apply(f).call_mut((a, b))`](ForwardApply::call_mut) | `R` |
| `f: impl FnOnce(A, B) -> R` | [`forward_apply(f).call_once((a, b))`](ForwardApply::call_once) | `R` |
| `f: impl Fn(&A, &B) -> R` | [`forward_apply(f).call(&(a, b))`](ForwardApply::call) | `R` |

# Examples

```
use splat::prelude::*;

let add = forward_apply(|a: i32, b: i32| a + b);
assert_eq!(add.call((3, 4)), 7);

let pairs = vec![(1, 2), (3, 4), (5, 6)];
let sums: Vec<i32> = pairs.into_iter().map(add.as_fn::<(i32, i32)>()).collect();
assert_eq!(sums, [3, 7, 11]);

assert_eq!(unwrap((42,)), 42);
assert_eq!(unwrap((1, 2)), (1, 2));
```

# Supported arities

Tuples of up to [`MAX_ARITY`] elements are supported: 16 by default, or 64 with the
`large-tuples` feature enabled.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

/// Invoke one of the `splat-macro` generators with the largest arity enabled by features.
macro_rules! for_each_supported_arity {
    ($($generate:ident)::+) => {
        #[cfg(not(feature = "large-tuples"))]
        $($generate)::+!(16);
        #[cfg(feature = "large-tuples")]
        $($generate)::+!(64);
    };
}

pub mod apply;

mod forward;
mod unwrap;

pub use forward::{forward_apply, ForwardApply};
pub use unwrap::{unwrap, Unwrap};

/// The largest tuple size for which [`Unwrap`] and the [`apply`] traits are implemented.
#[cfg(not(feature = "large-tuples"))]
pub const MAX_ARITY: usize = 16;

/// The largest tuple size for which [`Unwrap`] and the [`apply`] traits are implemented.
#[cfg(feature = "large-tuples")]
pub const MAX_ARITY: usize = 64;

/// The prelude module for quickly getting started with splat.
///
/// This module is designed to be imported as `use splat::prelude::*;`.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::apply::{Apply, ApplyMut, ApplyOnce};
    #[doc(no_inline)]
    pub use crate::forward::{forward_apply, ForwardApply};
    #[doc(no_inline)]
    pub use crate::unwrap::{unwrap, Unwrap};
}
