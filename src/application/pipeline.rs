// src/application/pipeline.rs
//! Validate-then-run contract shared by every command and query.

use crate::application::error::ApplicationResult;
use crate::domain::outcome::{Outcome, OutcomeBase};
use async_trait::async_trait;

/// Handles requests of type `R` in two phases.
///
/// [`Handler::validate`] inspects the request without side effects. Only
/// when it succeeds does [`Handler::handle`] call [`Handler::run`]; otherwise
/// the validation errors are returned unchanged in the handler's output
/// shape. `Err` is reserved for failures of the ports used by `run`.
#[async_trait]
pub trait Handler<R>: Send + Sync
where
    R: Send + Sync + 'static,
{
    type Output: OutcomeBase + Send;

    fn validate(&self, request: &R) -> Outcome;

    async fn run(&self, request: R) -> ApplicationResult<Self::Output>;

    async fn handle(&self, request: R) -> ApplicationResult<Self::Output> {
        let validation = self.validate(&request);
        if !validation.is_successful() {
            tracing::debug!(
                request = std::any::type_name::<R>(),
                errors = ?validation.errors(),
                "request rejected by validation"
            );
            return Ok(<Self::Output as OutcomeBase>::failure(
                validation.into_errors(),
            ));
        }

        self.run(request).await
    }
}
