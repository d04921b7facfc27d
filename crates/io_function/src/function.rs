use crate::log_short_circuit;
use std::io;

/// A computation from `T` to `R` that may fail with an [`io::Error`].
///
/// Implemented for every `Fn(T) -> io::Result<R>`.
pub trait IoFunction<T, R> {
    /// Map the input to the output or fail.
    fn apply(&self, t: T) -> io::Result<R>;

    /// Composes a new function that passes a successful output into `after`.
    /// On failure `after` is not called and the error is returned as is.
    fn and_then<S, G>(self, after: G) -> impl IoFunction<T, S>
    where
        Self: Sized,
        G: Fn(R) -> S,
    {
        move |t: T| match self.apply(t) {
            Ok(r) => Ok(after(r)),
            Err(e) => {
                log_short_circuit(&e);
                Err(e)
            }
        }
    }

    /// Same as [`IoFunction::and_then`] except `after` can also fail.
    fn and_then_io<S, G>(self, after: G) -> impl IoFunction<T, S>
    where
        Self: Sized,
        G: IoFunction<R, S>,
    {
        move |t: T| match self.apply(t) {
            Ok(r) => after.apply(r),
            Err(e) => {
                log_short_circuit(&e);
                Err(e)
            }
        }
    }

    /// Composes a new function that maps its input with `before` and passes the result into `self`.
    fn compose<V, G>(self, before: G) -> impl IoFunction<V, R>
    where
        Self: Sized,
        G: Fn(V) -> T,
    {
        move |v: V| self.apply(before(v))
    }

    /// Same as [`IoFunction::compose`] except `before` can also fail.
    /// On failure `self` is not called.
    fn compose_io<V, G>(self, before: G) -> impl IoFunction<V, R>
    where
        Self: Sized,
        G: IoFunction<V, T>,
    {
        move |v: V| match before.apply(v) {
            Ok(t) => self.apply(t),
            Err(e) => {
                log_short_circuit(&e);
                Err(e)
            }
        }
    }
}

impl<F, T, R> IoFunction<T, R> for F
where
    F: Fn(T) -> io::Result<R>,
{
    fn apply(&self, t: T) -> io::Result<R> {
        self(t)
    }
}

/// Returns its input. Never fails.
#[must_use]
pub fn identity<T>() -> impl IoFunction<T, T> + Copy {
    |t: T| -> io::Result<T> { Ok(t) }
}
