/// Collapse a one-element tuple to its element, leaving every other tuple as it is.
///
/// `Unwrap` is implemented for owned tuples, shared references to tuples, and unique references
/// to tuples, of every size up to [`MAX_ARITY`](crate::MAX_ARITY). Which of them a value is
/// decides what comes out:
///
/// | `Self` | [`Output`](Unwrap::Output) |
/// | :----- | :------------------------- |
/// | `(T,)` | `T` |
/// | `&'a (T,)` | `&'a T` |
/// | `&'a mut (T,)` | `&'a mut T` |
/// | any other tuple `X`, `&'a X` or `&'a mut X` | `Self` |
///
/// The choice is made by the type alone, so no branch is taken at runtime, and no element is ever
/// cloned.
///
/// # Examples
///
/// ```
/// use splat::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(String,) as Unwrap>::Output, String);
/// assert_type_eq_all!(<&'static (String,) as Unwrap>::Output, &'static String);
/// assert_type_eq_all!(<(u8, u8) as Unwrap>::Output, (u8, u8));
/// assert_type_eq_all!(<() as Unwrap>::Output, ());
/// assert_type_eq_all!(<&'static mut (u8,) as Unwrap>::Output, &'static mut u8);
/// ```
pub trait Unwrap: Sized {
    /// What the value collapses to.
    type Output;

    /// Collapse `self`. See [`unwrap()`] for examples.
    fn unwrap(self) -> Self::Output;
}

/// Return the sole element of a one-element tuple, or any other tuple unchanged.
///
/// The value category of the argument carries through to the result: unwrapping an owned tuple
/// moves its element out, unwrapping a reference yields a reference into the tuple.
///
/// # Examples
///
/// A one-element tuple yields its element:
///
/// ```
/// use splat::unwrap;
///
/// assert_eq!(unwrap(("hello",)), "hello");
///
/// let mut counter = (0,);
/// *unwrap(&mut counter) += 1;
/// assert_eq!(counter, (1,));
/// assert_eq!(*unwrap(&counter), 1);
/// ```
///
/// Tuples of any other size, including the empty tuple, come back as they went in:
///
/// ```
/// use splat::unwrap;
///
/// assert_eq!(unwrap(()), ());
/// assert_eq!(unwrap((1, 'b', "c")), (1, 'b', "c"));
///
/// let pair = (String::from("left"), String::from("right"));
/// let same: &(String, String) = unwrap(&pair);
/// assert!(std::ptr::eq(same, &pair));
/// ```
///
/// Only tuples can be unwrapped:
///
/// ```compile_fail
/// use splat::unwrap;
///
/// let _ = unwrap(5_u8);
/// ```
#[inline]
pub fn unwrap<T: Unwrap>(value: T) -> T::Output {
    value.unwrap()
}

for_each_supported_arity!(splat_macro::impl_unwrap);
