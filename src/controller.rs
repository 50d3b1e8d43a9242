use crate::{
    error::ErrorInfo,
    generator::GenerateImages,
    models::{GenerationRequest, RequestOutcome},
};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use uuid::Uuid;

struct ControllerState {
    outcome: RequestOutcome,
    // Bumped on every trigger; completing tasks compare their ticket against
    // it and discard the result if a newer trigger has happened since.
    sequence: u64,
}

/// Owns the observable [`RequestOutcome`] for one view component and applies
/// outcomes in trigger order, not completion order. A slow, superseded
/// request can never overwrite a newer result.
pub struct GenerationController {
    executor: Arc<dyn GenerateImages>,
    state: Arc<Mutex<ControllerState>>,
}

impl GenerationController {
    pub fn new(executor: Arc<dyn GenerateImages>) -> Self {
        Self {
            executor,
            state: Arc::new(Mutex::new(ControllerState {
                outcome: RequestOutcome::Idle,
                sequence: 0,
            })),
        }
    }

    /// Snapshot of the current outcome.
    pub fn outcome(&self) -> RequestOutcome {
        self.state.lock().unwrap().outcome.clone()
    }

    /// Starts a new invocation: the state moves to Pending immediately and
    /// the executor call runs on the background task. Triggering while a
    /// previous invocation is still in flight supersedes it; the stale call
    /// is not cancelled, its outcome is simply dropped when it completes.
    pub fn trigger(&self, request: GenerationRequest) -> JoinHandle<()> {
        let ticket = {
            let mut state = self.state.lock().unwrap();
            state.sequence += 1;
            state.outcome = RequestOutcome::Pending;
            state.sequence
        };

        let request_id = Uuid::new_v4();
        log::info!("Starting generation request {}", request_id);

        let executor = Arc::clone(&self.executor);
        let shared = Arc::clone(&self.state);

        tokio::spawn(async move {
            let result = executor.generate(&request).await;

            let mut state = shared.lock().unwrap();
            if state.sequence != ticket {
                log::debug!(
                    "Discarding superseded outcome for request {}",
                    request_id
                );
                return;
            }

            state.outcome = match result {
                Ok(result) => {
                    log::info!(
                        "Generation request {} succeeded with {} image(s)",
                        request_id,
                        result.len()
                    );
                    RequestOutcome::Succeeded(result)
                }
                Err(error) => {
                    log::error!("Generation request {} failed: {}", request_id, error);
                    RequestOutcome::Failed(ErrorInfo::from(&error))
                }
            };
        })
    }
}
