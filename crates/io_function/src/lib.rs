//! Function adapters for computations that can fail with an [`std::io::Error`].
//!
//! Any closure or function item returning an [`std::io::Result`] is already an adapter:
//! [`IoFunction`] covers `Fn(T) -> io::Result<R>` and [`IoBiFunction`] covers
//! `Fn(T, U) -> io::Result<R>`. The traits add composition that stops at the first failure.

/// Two argument computations that can fail.
pub mod bi_function;

/// Single argument computations that can fail.
pub mod function;

pub use bi_function::{noop, IoBiFunction, Noop, NOOP};
pub use function::{identity, IoFunction};

/// Logs that a composition stopped before reaching its follow-up.
pub(crate) fn log_short_circuit(err: &std::io::Error) {
    log::trace!("Skipping follow-up after failure: {err}");
}
