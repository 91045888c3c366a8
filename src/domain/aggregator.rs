//! Validation aggregation
//!
//! Runs an ordered list of independent validation steps and applies an
//! all/any combinator policy over the collected outcomes. Unlike a
//! short-circuiting chain, every step runs even after earlier failures;
//! only a non-validation fault aborts the run.

use crate::shared::error::{AppError, ValidationError};

/// A single nested validation step.
///
/// Steps own their captured inputs, so one step's failure cannot disturb
/// another step's execution context.
pub type ValidationStep<'a> = Box<dyn FnOnce() -> Result<(), AppError> + 'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CombinatorPolicy {
    /// Every step must pass
    All,
    /// At least one step must pass
    Any,
}

/// Run every step; fail with a composite if any step failed.
pub fn run_all(steps: Vec<ValidationStep<'_>>) -> Result<(), AppError> {
    execute(steps, CombinatorPolicy::All)
}

/// Run every step; fail with a composite only if every step failed.
///
/// An empty step list fails: zero collected errors is not strictly less
/// than zero steps.
pub fn run_any(steps: Vec<ValidationStep<'_>>) -> Result<(), AppError> {
    execute(steps, CombinatorPolicy::Any)
}

fn execute(steps: Vec<ValidationStep<'_>>, policy: CombinatorPolicy) -> Result<(), AppError> {
    let total = steps.len();
    let mut errors: Vec<ValidationError> = Vec::with_capacity(total);

    for step in steps {
        match step() {
            Ok(()) => {}
            Err(AppError::Validation(error)) => errors.push(error),
            // Anything outside the validation taxonomy aborts immediately
            // and propagates unchanged.
            Err(fault) => return Err(fault),
        }
    }

    let failed = match policy {
        CombinatorPolicy::All => !errors.is_empty(),
        CombinatorPolicy::Any => errors.len() >= total,
    };

    if failed {
        Err(AppError::Validation(ValidationError::multiple(errors)))
    } else {
        Ok(())
    }
}
