//! Use-cases: one named application operation each.
//!
//! Each function takes the repository explicitly and performs one unit of
//! work. Writes return a `Result`; reads return a
//! [`Subscription`](crate::repo::Subscription). Failures are logged here, so
//! callers only have to fold them into state.

pub mod checklist;
pub mod task;
pub mod tasklist;

use crate::error::ErrorKind;

fn logged<T>(operation: &'static str, result: Result<T, ErrorKind>) -> Result<T, ErrorKind> {
    match &result {
        Ok(_) => tracing::debug!(operation, "use-case completed"),
        Err(err) => tracing::warn!(operation, error = %err, "use-case failed"),
    }
    result
}
