/// Runs narrative requests on a background thread.
///
/// The frame loop never blocks on the service: `dispatch` returns a
/// `PendingNarrative` which the host polls once per frame. A second
/// dispatch does not cancel the first; each handle resolves on its own.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use crate::{engine_error, engine_info};
use super::error::NarrativeError;
use super::report::NarrativeReport;
use super::request::NarrativeRequest;
use super::service::NarrativeService;

pub type NarrativeOutcome = Result<NarrativeReport, NarrativeError>;

#[derive(Clone)]
pub struct NarrativeDispatcher {
    service: Arc<dyn NarrativeService>,
}

impl NarrativeDispatcher {
    pub fn new<S: NarrativeService + 'static>(service: S) -> Self {
        Self { service: Arc::new(service) }
    }

    pub fn dispatch(&self, request: NarrativeRequest) -> PendingNarrative {
        let (sender, receiver) = mpsc::channel();
        let service = Arc::clone(&self.service);

        engine_info!("binocular::Narrative",
            "Requesting analysis for IPD {} mm, focal length {} mm, distance {} m",
            request.ipd_mm, request.focal_length_mm, request.target_distance_m);

        let spawned = thread::Builder::new()
            .name("narrative-request".to_string())
            .spawn(move || {
                let outcome = service.analyze(&request);
                if let Err(e) = &outcome {
                    engine_error!("binocular::Narrative", "Analysis failed: {}", e);
                }
                // The host may have dropped the handle; nothing to report then
                let _ = sender.send(outcome);
            });

        let outcome = match spawned {
            Ok(_) => None,
            Err(e) => {
                engine_error!("binocular::Narrative", "Could not start request thread: {}", e);
                Some(Err(NarrativeError::Network(format!("could not start request thread: {}", e))))
            }
        };

        PendingNarrative { request, receiver, outcome }
    }
}

/// Handle to an in-flight narrative request.
pub struct PendingNarrative {
    request: NarrativeRequest,
    receiver: Receiver<NarrativeOutcome>,
    outcome: Option<NarrativeOutcome>,
}

impl PendingNarrative {
    pub fn request(&self) -> &NarrativeRequest {
        &self.request
    }

    /// Non-blocking poll. `None` while the request is still running.
    ///
    /// Once resolved, every later call returns the same outcome.
    pub fn try_result(&mut self) -> Option<NarrativeOutcome> {
        if self.outcome.is_none() {
            self.outcome = match self.receiver.try_recv() {
                Ok(outcome) => Some(outcome),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Err(NarrativeError::Network(
                    "request thread ended without a result".to_string(),
                ))),
            };
        }
        self.outcome.clone()
    }

    pub fn is_resolved(&mut self) -> bool {
        self.try_result().is_some()
    }

    /// Block until the request resolves.
    pub fn wait(mut self) -> NarrativeOutcome {
        if let Some(outcome) = self.outcome.take() {
            return outcome;
        }
        self.receiver.recv().unwrap_or_else(|_| {
            Err(NarrativeError::Network("request thread ended without a result".to_string()))
        })
    }
}
