//! Validation utilities for the curve and field primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        log::trace!("{}: expected {} bytes, got {}", context, expected, actual);
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a constant-time check, reporting `details` as an encoding error
#[inline(always)]
pub fn encoding(ok: subtle::Choice, context: &'static str, details: &'static str) -> Result<()> {
    if !bool::from(ok) {
        return Err(Error::encoding(context, details));
    }
    Ok(())
}

/// Validate a constant-time check, reporting `details` as a point error
#[inline(always)]
pub fn point(ok: subtle::Choice, context: &'static str, details: &'static str) -> Result<()> {
    if !bool::from(ok) {
        return Err(Error::point(context, details));
    }
    Ok(())
}
