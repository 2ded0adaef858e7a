//! Waiting for a page snapshot to become ready.

use tokio_util::sync::CancellationToken;

use crate::config::RetryPolicy;
use crate::error_handling::PollError;

/// Calls `load` until it yields a value.
///
/// `load` returns `None` while the page is not ready (no visible tab panel).
/// Between attempts the task sleeps for `policy.delay`. Cancellation is
/// observed both before each attempt and during the sleep.
///
/// # Errors
///
/// - `PollError::Cancelled` if `cancel` fires first
/// - `PollError::AttemptsExhausted` once `policy.max_attempts` loads failed
pub async fn poll_until_ready<T, F>(
    mut load: F,
    policy: &RetryPolicy,
    cancel: &CancellationToken,
) -> Result<T, PollError>
where
    F: FnMut() -> Option<T>,
{
    let mut attempts: u32 = 0;
    loop {
        if cancel.is_cancelled() {
            return Err(PollError::Cancelled);
        }

        attempts += 1;
        if let Some(value) = load() {
            log::debug!("Page ready after {} attempt(s)", attempts);
            return Ok(value);
        }

        if policy.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(PollError::AttemptsExhausted { attempts });
        }

        log::info!(
            "Active section not found. Retrying in {:?}...",
            policy.delay
        );
        tokio::select! {
            _ = cancel.cancelled() => {
                return Err(PollError::Cancelled);
            }
            _ = tokio::time::sleep(policy.delay) => {}
        }
    }
}
