use crate::error::{Error, Result};

/// Add two integers
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Subtract one integer from another
pub fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

/// Multiply two integers
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Divide one integer by another, rejecting a zero divisor
pub fn divide(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        tracing::debug!(dividend = a, "rejected division by zero");
        return Err(Error::DivideByZero);
    }
    Ok(a / b)
}
