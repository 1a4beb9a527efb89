//! Validation utilities shared by the containers

use super::{Error, Result};

/// Validate a bit or byte position against the number of positions
#[inline(always)]
pub fn index(context: &'static str, index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(Error::IndexOutOfRange { context, index, len });
    }
    Ok(())
}

/// Validate a shift amount; `max` itself is accepted
#[inline(always)]
pub fn shift(context: &'static str, shift: usize, max: usize) -> Result<()> {
    if shift > max {
        return Err(Error::ShiftOutOfRange { context, shift, max });
    }
    Ok(())
}

/// Validate a maximum length or value
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::LengthError { context, max, actual });
    }
    Ok(())
}

/// Validate that two operands have the same size in bytes
#[inline(always)]
pub fn size(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::SizeMismatch {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a numeric base against the supported set
#[inline(always)]
pub fn base(context: &'static str, base: u32, supported: &[u32]) -> Result<()> {
    if !supported.contains(&base) {
        return Err(Error::format(
            context,
            format!("base {} is not supported (expected one of {:?})", base, supported),
        ));
    }
    Ok(())
}
