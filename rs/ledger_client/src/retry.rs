use crate::error::ClientError;
use crate::master::{JettonMaster, MasterState};
use slog::{debug, warn, Logger};
use std::time::Duration;


/// How often and how long to read the master state while waiting for a
/// submitted transaction to be applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of reads. At least one read is always made.
    pub max_attempts: u32,
    /// Pause before every read but the first.
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            interval: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// A policy that reads up to `max_attempts` times without pausing.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            interval: Duration::ZERO,
        }
    }
}

/// Reads the master state until `done` holds for it and returns that state.
///
/// Failed reads are logged and retried like reads that do not satisfy `done`
/// yet. Gives up with [`ClientError::NotConfirmed`] once the attempts of
/// `policy` are used up; `what` names the awaited change in that error.
pub async fn poll_until<M, F>(
    master: &M,
    policy: &RetryPolicy,
    log: &Logger,
    what: &str,
    mut done: F,
) -> Result<MasterState, ClientError>
where
    M: JettonMaster + ?Sized,
    F: FnMut(&MasterState) -> bool,
{
    let attempts = policy.max_attempts.max(1);
    let mut last_error = None;
    for attempt in 1..=attempts {
        if attempt > 1 {
            tokio::time::sleep(policy.interval).await;
        }
        match master.query().await {
            Ok(state) if done(&state) => {
                debug!(log, "Change is visible on the ledger"; "what" => what, "attempt" => attempt);
                return Ok(state);
            }
            Ok(_) => {
                debug!(log, "Change not visible yet"; "what" => what, "attempt" => attempt, "max_attempts" => attempts);
                last_error = None;
            }
            Err(err) => {
                warn!(log, "Reading the master state failed"; "what" => what, "attempt" => attempt, "error" => %err);
                last_error = Some(err);
            }
        }
    }
    Err(ClientError::NotConfirmed {
        what: what.to_string(),
        attempts,
        last_error,
    })
}
