//! Calling a function with its arguments spread out from a single tuple.
//!
//! The three traits here mirror the three closure traits of the standard library. Every
//! `F: FnOnce(A, B) -> R` is [`ApplyOnce<(A, B)>`](ApplyOnce), every `F: FnMut(A, B) -> R` is
//! also [`ApplyMut<(A, B)>`](ApplyMut), and every `F: Fn(A, B) -> R` is also
//! [`Apply<(A, B)>`](Apply), for tuples of up to [`MAX_ARITY`](crate::MAX_ARITY) elements.
//!
//! Elements are passed in the order they appear in the tuple, and keep their value category:
//!
//! - An owned tuple `(A, B)` moves each element into the matching parameter of an `F(A, B)`.
//! - A shared reference `&'a (A, B)` is spread into an `F(&'a A, &'a B)`.
//! - A unique reference `&'a mut (A, B)` is spread into an `F(&'a mut A, &'a mut B)`.
//!
//! Tuples that themselves contain references are owned tuples like any other, so
//! `(&a, &mut b)` is spread into an `F(&A, &mut B)`.
//!
//! # Examples
//!
//! ```
//! use splat::apply::{Apply, ApplyMut, ApplyOnce};
//!
//! let add = |a: i32, b: i32| a + b;
//! assert_eq!(add.apply((3, 4)), 7);
//!
//! let mut log = Vec::new();
//! let mut record = |level: &str, message: String| log.push(format!("[{}] {}", level, message));
//! record.apply_mut(("info", "started".to_string()));
//! record.apply_mut(("warn", "slow".to_string()));
//! assert_eq!(log, ["[info] started", "[warn] slow"]);
//!
//! let name = String::from("splat");
//! let consume = move |suffix: &str| name + suffix;
//! assert_eq!(consume.apply_once(("!",)), "splat!");
//! ```
//!
//! Spreading a borrowed tuple hands out borrows of its elements:
//!
//! ```
//! use splat::apply::ApplyMut;
//!
//! let mut bounds = (10, 3);
//! let mut swap = |lo: &mut i32, hi: &mut i32| std::mem::swap(lo, hi);
//! swap.apply_mut(&mut bounds);
//! assert_eq!(bounds, (3, 10));
//! ```
//!
//! A tuple whose shape does not match the function's parameters is rejected at compile time:
//!
//! ```compile_fail
//! use splat::apply::Apply;
//!
//! let add = |a: i32, b: i32| a + b;
//! add.apply((1, 2, 3));
//! ```
//!
//! ```compile_fail
//! use splat::apply::Apply;
//!
//! let add = |a: i32, b: i32| a + b;
//! add.apply(("one", 2));
//! ```

/// A function which can be called once with its arguments spread from `Args`.
///
/// Implemented for every `F: FnOnce(..) -> R`; see the [module documentation](self).
pub trait ApplyOnce<Args> {
    /// The return type of the function.
    type Output;

    /// Call the function once, consuming it.
    fn apply_once(self, args: Args) -> Self::Output;
}

/// A function which can be called repeatedly, possibly mutating its own state, with its
/// arguments spread from `Args`.
///
/// Implemented for every `F: FnMut(..) -> R`; see the [module documentation](self).
pub trait ApplyMut<Args>: ApplyOnce<Args> {
    /// Call the function by unique reference.
    fn apply_mut(&mut self, args: Args) -> Self::Output;
}

/// A function which can be called repeatedly through a shared reference with its arguments
/// spread from `Args`.
///
/// Implemented for every `F: Fn(..) -> R`; see the [module documentation](self).
pub trait Apply<Args>: ApplyMut<Args> {
    /// Call the function by shared reference.
    fn apply(&self, args: Args) -> Self::Output;
}

for_each_supported_arity!(splat_macro::impl_apply);
