use crate::{log_short_circuit, IoFunction};
use std::io;

/// A computation from `(T, U)` to `R` that may fail with an [`io::Error`].
///
/// Implemented for every `Fn(T, U) -> io::Result<R>`, so function items and closures can be used
/// directly:
/// ```
/// use io_function::IoBiFunction;
/// use std::{io, path::Path};
///
/// fn is_directory(path: &Path, follow_links: bool) -> io::Result<bool> {
///     let metadata = if follow_links {
///         path.metadata()?
///     } else {
///         path.symlink_metadata()?
///     };
///     Ok(metadata.is_dir())
/// }
///
/// let is_file = is_directory.and_then(|is_dir: bool| !is_dir);
/// assert!(!is_file.apply(Path::new("."), true).unwrap());
/// ```
pub trait IoBiFunction<T, U, R> {
    /// Map the inputs to the output or fail.
    /// Errors from the wrapped computation are returned unchanged.
    fn apply(&self, t: T, u: U) -> io::Result<R>;

    /// Composes a new function that passes a successful output into `after`.
    /// On failure `after` is not called and the error is returned as is.
    fn and_then<S, G>(self, after: G) -> impl IoBiFunction<T, U, S>
    where
        Self: Sized,
        G: Fn(R) -> S,
    {
        move |t: T, u: U| match self.apply(t, u) {
            Ok(r) => Ok(after(r)),
            Err(e) => {
                log_short_circuit(&e);
                Err(e)
            }
        }
    }

    /// Same as [`IoBiFunction::and_then`] except `after` can also fail.
    fn and_then_io<S, G>(self, after: G) -> impl IoBiFunction<T, U, S>
    where
        Self: Sized,
        G: IoFunction<R, S>,
    {
        move |t: T, u: U| match self.apply(t, u) {
            Ok(r) => after.apply(r),
            Err(e) => {
                log_short_circuit(&e);
                Err(e)
            }
        }
    }
}

impl<F, T, U, R> IoBiFunction<T, U, R> for F
where
    F: Fn(T, U) -> io::Result<R>,
{
    fn apply(&self, t: T, u: U) -> io::Result<R> {
        self(t, u)
    }
}

/// Ignores its inputs and returns `None`. Never fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Noop;

impl<T, U, R> IoBiFunction<T, U, Option<R>> for Noop {
    fn apply(&self, _t: T, _u: U) -> io::Result<Option<R>> {
        Ok(None)
    }
}

/// The shared [`Noop`].
pub const NOOP: Noop = Noop;

/// Returns the shared [`Noop`].
#[must_use]
pub const fn noop() -> Noop {
    NOOP
}
