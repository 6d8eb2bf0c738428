//! Copying prompt results into caller storage.
//!
//! Prompts return their results by value; these helpers cover callers
//! that want the store-into-a-variable shape instead. They live outside
//! the prompt core: nothing in the controllers depends on them, and the
//! only failures are shape mismatches the type system cannot rule out.

use crate::error::{PromptError, Result};

/// Copy a single result into a caller-owned slot.
pub fn bind_value<T>(target: &mut T, value: T) {
    *target = value;
}

/// Bind a multi-select result that must contain exactly one value.
///
/// Fails with [`PromptError::InvalidBindTarget`] when zero or more than
/// one value was selected.
pub fn bind_first<T>(target: &mut T, mut values: Vec<T>) -> Result<()> {
    if values.len() != 1 {
        return Err(PromptError::InvalidBindTarget(format!(
            "expected exactly one selected value, got {}",
            values.len()
        )));
    }
    if let Some(value) = values.pop() {
        *target = value;
    }
    Ok(())
}

/// Bind a multi-select result into a fixed-length destination, in order.
///
/// Fails with [`PromptError::InvalidBindTarget`] when the destination
/// length differs from the number of selected values.
pub fn bind_slice<T>(target: &mut [T], values: Vec<T>) -> Result<()> {
    if target.len() != values.len() {
        return Err(PromptError::InvalidBindTarget(format!(
            "destination holds {} slots but {} values were selected",
            target.len(),
            values.len()
        )));
    }
    for (slot, value) in target.iter_mut().zip(values) {
        *slot = value;
    }
    Ok(())
}
