//! Unwrap helpers with good error messages.
//!
//! These replace `unwrap()` and `expect()` in test code, carrying the
//! error value into the panic message and `#[track_caller]` for accurate
//! panic locations.

use std::fmt::Debug;

/// Unwrap a `Result`, panicking with context on error.
///
/// # Panics
///
/// Panics if the result is `Err`, with a message including the error
/// value.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with a custom message if `None`.
///
/// # Panics
///
/// Panics if the option is `None`, with the provided message.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_ok() {
        let result: Result<i32, &str> = Ok(42);
        assert_eq!(must(result), 42);
    }

    #[test]
    fn test_must_some() {
        assert_eq!(must_some(Some(7), "expected a value"), 7);
    }

    #[test]
    #[should_panic(expected = "must: unexpected Err")]
    fn test_must_err_panics() {
        let result: Result<i32, &str> = Err("boom");
        let _ = must(result);
    }
}
