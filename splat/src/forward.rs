use crate::apply::{Apply, ApplyMut, ApplyOnce};
use static_assertions::assert_impl_all;

/// A function wrapped so that it is called with a single tuple, whose elements become its
/// positional arguments.
///
/// A `ForwardApply<F>` owns exactly one `F`, fixed when the adapter is built. Calling the adapter
/// calls that `F` with the tuple spread out, in order, and returns whatever it returns. Which
/// calls are available depends on what `F` supports:
///
/// | Method | Receiver | Requires |
/// | :----- | :------- | :------- |
/// | [`call`](ForwardApply::call) | `&self` | [`F: Apply<Args>`](Apply), i.e. `Fn` |
/// | [`call_mut`](ForwardApply::call_mut) | `&mut self` | [`F: ApplyMut<Args>`](ApplyMut), i.e. `FnMut` |
/// | [`call_once`](ForwardApply::call_once) | `self` | [`F: ApplyOnce<Args>`](ApplyOnce), i.e. `FnOnce` |
///
/// `Args` may be an owned tuple, or a shared or unique reference to one; see the
/// [`apply`](crate::apply) module for how each is spread.
///
/// The adapter adds no state and no synchronization of its own: it is `Send`, `Sync`, `Clone`,
/// `Copy`, `Eq` or `Hash` exactly when `F` is. It is always `Debug`, without showing `F`, since
/// closures are not.
///
/// # Examples
///
/// ```
/// use splat::prelude::*;
///
/// let add = forward_apply(|a: i32, b: i32| a + b);
/// assert_eq!(add.call((3, 4)), 7);
///
/// let mut total = 0;
/// let mut accumulate = forward_apply(|n: i32| total += n);
/// accumulate.call_mut((5,));
/// accumulate.call_mut((6,));
/// drop(accumulate);
/// assert_eq!(total, 11);
/// ```
///
/// An adapter around a function that mutates its own state cannot be called through a shared
/// reference:
///
/// ```compile_fail
/// use splat::prelude::*;
///
/// let mut calls = 0;
/// let counter = forward_apply(move || {
///     calls += 1;
///     calls
/// });
/// counter.call(());
/// ```
#[derive(Derivative, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derivative(Debug(bound = ""))]
pub struct ForwardApply<F> {
    #[derivative(Debug = "ignore")]
    func: F,
}

assert_impl_all!(ForwardApply<fn(u8) -> u8>: Copy, Send, Sync, std::fmt::Debug);

impl<F> ForwardApply<F> {
    /// Wrap an existing function, moving it into the adapter.
    ///
    /// See also [`forward_apply`], which does the same as a free function.
    pub const fn new(func: F) -> Self {
        ForwardApply { func }
    }

    /// Build the wrapped function from `args`, using its [`From`] implementation.
    ///
    /// This is how a function type which is itself built from one or more values is constructed
    /// directly inside the adapter; several constructor arguments are passed as one tuple.
    /// Construction from no arguments at all is [`Default::default`].
    ///
    /// # Examples
    ///
    /// ```
    /// use splat::prelude::*;
    ///
    /// struct Scale(i32);
    ///
    /// impl From<i32> for Scale {
    ///     fn from(factor: i32) -> Self {
    ///         Scale(factor)
    ///     }
    /// }
    ///
    /// impl ApplyOnce<(i32,)> for Scale {
    ///     type Output = i32;
    ///
    ///     fn apply_once(self, args: (i32,)) -> i32 {
    ///         self.apply(args)
    ///     }
    /// }
    ///
    /// impl ApplyMut<(i32,)> for Scale {
    ///     fn apply_mut(&mut self, args: (i32,)) -> i32 {
    ///         self.apply(args)
    ///     }
    /// }
    ///
    /// impl Apply<(i32,)> for Scale {
    ///     fn apply(&self, (x,): (i32,)) -> i32 {
    ///         self.0 * x
    ///     }
    /// }
    ///
    /// let triple = ForwardApply::<Scale>::with(3);
    /// assert_eq!(triple.call((14,)), 42);
    /// ```
    pub fn with<A>(args: A) -> Self
    where
        F: From<A>,
    {
        ForwardApply {
            func: F::from(args),
        }
    }

    /// Call the wrapped function through a shared reference, with its arguments spread from
    /// `args`.
    #[inline]
    pub fn call<Args>(&self, args: Args) -> <F as ApplyOnce<Args>>::Output
    where
        F: Apply<Args>,
    {
        self.func.apply(args)
    }

    /// Call the wrapped function through a unique reference, with its arguments spread from
    /// `args`. The function may mutate its own state.
    #[inline]
    pub fn call_mut<Args>(&mut self, args: Args) -> <F as ApplyOnce<Args>>::Output
    where
        F: ApplyMut<Args>,
    {
        self.func.apply_mut(args)
    }

    /// Consume the adapter, calling the wrapped function once with its arguments spread from
    /// `args`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splat::forward_apply;
    ///
    /// let greeting = String::from("hello");
    /// let greet = forward_apply(move |name: &str| greeting + ", " + name);
    /// assert_eq!(greet.call_once(("world",)), "hello, world");
    /// ```
    #[inline]
    pub fn call_once<Args>(self, args: Args) -> <F as ApplyOnce<Args>>::Output
    where
        F: ApplyOnce<Args>,
    {
        self.func.apply_once(args)
    }

    /// Borrow the adapter as an ordinary closure taking one tuple argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use splat::forward_apply;
    ///
    /// let distance = forward_apply(|x: i32, y: i32| x.abs() + y.abs());
    /// let points = [(1, -2), (-3, 4)];
    /// let total: i32 = points.iter().copied().map(distance.as_fn::<(i32, i32)>()).sum();
    /// assert_eq!(total, 10);
    /// ```
    pub fn as_fn<Args>(&self) -> impl Fn(Args) -> <F as ApplyOnce<Args>>::Output + '_
    where
        F: Apply<Args>,
    {
        move |args| self.call(args)
    }

    /// Borrow the adapter uniquely as an ordinary closure taking one tuple argument.
    pub fn as_fn_mut<Args>(&mut self) -> impl FnMut(Args) -> <F as ApplyOnce<Args>>::Output + '_
    where
        F: ApplyMut<Args>,
    {
        move |args| self.call_mut(args)
    }

    /// Turn the adapter into an ordinary closure taking one tuple argument.
    pub fn into_fn_mut<Args>(mut self) -> impl FnMut(Args) -> <F as ApplyOnce<Args>>::Output
    where
        F: ApplyMut<Args>,
    {
        move |args| self.call_mut(args)
    }

    /// Unwrap the adapter, returning the function it was built from.
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F> From<F> for ForwardApply<F> {
    fn from(func: F) -> Self {
        ForwardApply::new(func)
    }
}

/// Wrap `func` in a [`ForwardApply`], inferring the adapter's type from it.
///
/// The adapter always owns a plain `F`: whether `func` is a named function, a closure held in a
/// variable, or a temporary, it is moved (or copied, if it is `Copy`) into the adapter.
///
/// # Examples
///
/// ```
/// use splat::forward_apply;
///
/// fn add(a: i32, b: i32) -> i32 {
///     a + b
/// }
///
/// assert_eq!(forward_apply(add).call((3, 4)), 7);
///
/// let hello = || "hello";
/// assert_eq!(forward_apply(hello).call(()), "hello");
/// assert_eq!(hello(), "hello");
/// ```
pub fn forward_apply<F>(func: F) -> ForwardApply<F> {
    ForwardApply::new(func)
}
