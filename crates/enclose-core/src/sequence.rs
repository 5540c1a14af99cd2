//! Even numbers and Fibonacci numbers, computed recursively and iteratively.
//!
//! Fibonacci here starts `1, 1, 2, 3, 5`, so `fibonacci(0) == fibonacci(1) == 1`.
//! Even numbers are 1-indexed: `even(1) == 2`, and `even(0) == 0`.

use thiserror::Error;

/// Largest `n` accepted by [`recursive_even`]; each step is one stack frame.
pub const MAX_RECURSIVE_EVEN: u64 = 5_000;

/// Largest `n` accepted by [`recursive_fibonacci`]; the call tree doubles per step.
pub const MAX_RECURSIVE_FIBONACCI: u64 = 35;

/// Largest `n` accepted by [`iterative_even`]; the loop runs once per step.
pub const MAX_ITERATIVE_EVEN: u64 = 100_000_000;

/// A sequence value that could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The result does not fit in a `u64`.
    #[error("result for n = {0} does not fit in 64 bits")]
    Overflow(u64),
    /// The recursive variant would recurse too deep.
    #[error("n = {n} is too large for the recursive method (at most {max})")]
    TooDeep {
        /// The requested index.
        n: u64,
        /// The largest accepted index.
        max: u64,
    },
    /// The iterative variant would loop too long.
    #[error("n = {n} is too large for the iterative method (at most {max})")]
    TooManySteps {
        /// The requested index.
        n: u64,
        /// The largest accepted index.
        max: u64,
    },
}

/// Which way to compute a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Method {
    /// Loop from the base case up.
    #[default]
    Iterative,
    /// Recurse down to the base case.
    Recursive,
}

/// The n-th even number, recursively.
///
/// # Errors
///
/// Returns [`SequenceError::TooDeep`] if `n` exceeds [`MAX_RECURSIVE_EVEN`].
pub fn recursive_even(n: u64) -> Result<u64, SequenceError> {
    if n > MAX_RECURSIVE_EVEN {
        return Err(SequenceError::TooDeep {
            n,
            max: MAX_RECURSIVE_EVEN,
        });
    }
    Ok(even_step(n))
}

const fn even_step(n: u64) -> u64 {
    if n == 0 { 0 } else { even_step(n - 1) + 2 }
}

/// The n-th even number, iteratively. Takes `n` steps.
///
/// # Errors
///
/// Returns [`SequenceError::TooManySteps`] if `n` exceeds [`MAX_ITERATIVE_EVEN`].
pub const fn iterative_even(n: u64) -> Result<u64, SequenceError> {
    if n > MAX_ITERATIVE_EVEN {
        return Err(SequenceError::TooManySteps {
            n,
            max: MAX_ITERATIVE_EVEN,
        });
    }
    let mut result: u64 = 0;
    let mut step = 0;
    while step < n {
        result += 2;
        step += 1;
    }
    Ok(result)
}

/// The n-th Fibonacci number, recursively.
///
/// # Errors
///
/// Returns [`SequenceError::TooDeep`] if `n` exceeds [`MAX_RECURSIVE_FIBONACCI`].
pub fn recursive_fibonacci(n: u64) -> Result<u64, SequenceError> {
    if n > MAX_RECURSIVE_FIBONACCI {
        return Err(SequenceError::TooDeep {
            n,
            max: MAX_RECURSIVE_FIBONACCI,
        });
    }
    Ok(fibonacci_step(n))
}

const fn fibonacci_step(n: u64) -> u64 {
    if n < 2 {
        1
    } else {
        fibonacci_step(n - 1) + fibonacci_step(n - 2)
    }
}

/// The n-th Fibonacci number, iteratively.
///
/// # Errors
///
/// Returns [`SequenceError::Overflow`] if the result does not fit in a `u64`.
pub fn iterative_fibonacci(n: u64) -> Result<u64, SequenceError> {
    let (mut previous, mut current): (u64, u64) = (1, 1);
    for _ in 1..n {
        let next = current
            .checked_add(previous)
            .ok_or(SequenceError::Overflow(n))?;
        previous = current;
        current = next;
    }
    Ok(current)
}

/// The n-th even number by `method`.
///
/// # Errors
///
/// See [`recursive_even`] and [`iterative_even`].
pub fn even(n: u64, method: Method) -> Result<u64, SequenceError> {
    match method {
        Method::Iterative => iterative_even(n),
        Method::Recursive => recursive_even(n),
    }
}

/// The n-th Fibonacci number by `method`.
///
/// # Errors
///
/// See [`recursive_fibonacci`] and [`iterative_fibonacci`].
pub fn fibonacci(n: u64, method: Method) -> Result<u64, SequenceError> {
    match method {
        Method::Iterative => iterative_fibonacci(n),
        Method::Recursive => recursive_fibonacci(n),
    }
}
