//! Submission lifecycle state machine.
//!
//! A submission is a two-phase operation: [`SubmissionController::begin_submit`]
//! captures the payload by value and moves to `Sending`; exactly one
//! completion is fed back through [`SubmissionController::finish_submit`],
//! which moves back to `Idle` and clears the store on success. The async
//! [`SubmissionController::submit`] composes both phases around a single
//! transport call. There is no retry, no backoff, and no cancellation: a
//! failed attempt is terminal and must be re-triggered by the user.

use tracing::{debug, info, warn};

use crate::encode::{AreaRequest, encode};
use crate::models::GeoPoint;
use crate::store::MarkerStore;
use crate::transport::{AreaTransport, TransportError};

/// Whether a submission is currently in flight.
///
/// Owned exclusively by [`SubmissionController`]; doubles as the
/// mutual-exclusion flag for the single-event-loop concurrency model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
}

/// Result of one submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The service accepted the marker set; the store has been cleared.
    Success,
    /// The attempt failed; the store is untouched.
    Failure(TransportError),
    /// A submission was already in flight; nothing was sent.
    Busy,
}

/// Drives the submit lifecycle: `Idle → Sending → Idle`.
#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmissionState::Sending
    }

    /// Starts a submission: transitions to `Sending` and returns the encoded
    /// payload, captured by value so later store mutations cannot touch it.
    ///
    /// Returns `None` without side effects when a submission is already in
    /// flight. The gate normally stops a reentrant submit from getting this
    /// far; this is the controller's own defense.
    pub fn begin_submit(
        &mut self,
        points: &[GeoPoint],
    ) -> Option<AreaRequest> {
        if self.is_sending() {
            debug!("submit refused: a submission is already in flight");
            return None;
        }
        self.state = SubmissionState::Sending;
        let request = encode(points);
        info!(markers = request.len(), "submission started");
        Some(request)
    }

    /// Completes the in-flight submission with the transport's result.
    ///
    /// Always returns to `Idle`. On success the store is cleared; on failure
    /// it is left exactly as it was, so the user can retry manually.
    pub fn finish_submit(
        &mut self,
        markers: &mut MarkerStore,
        result: Result<(), TransportError>,
    ) -> SubmitOutcome {
        self.state = SubmissionState::Idle;
        match result {
            Ok(()) => {
                markers.clear();
                info!("submission accepted, marker list reset");
                SubmitOutcome::Success
            }
            Err(error) => {
                warn!(%error, "submission failed, marker list kept");
                SubmitOutcome::Failure(error)
            }
        }
    }

    /// Runs a full submission attempt against the given transport.
    ///
    /// Returns [`SubmitOutcome::Busy`] without calling the transport when a
    /// submission is already in flight.
    pub async fn submit(
        &mut self,
        markers: &mut MarkerStore,
        transport: &dyn AreaTransport,
    ) -> SubmitOutcome {
        let Some(request) = self.begin_submit(markers.snapshot()) else {
            return SubmitOutcome::Busy;
        };
        let result = transport.send_markers(&request).await;
        self.finish_submit(markers, result)
    }
}
