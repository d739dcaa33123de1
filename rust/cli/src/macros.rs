//! Small helpers for the exit-code plumbing in [`crate::run`].

/// Writes a line to `$dest`, returning [`crate::exit_code::ERROR`] from the
/// enclosing function when the write fails.
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
