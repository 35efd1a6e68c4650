//! Interaction gate: pure predicates deciding which actions are currently
//! allowed given the marker count and submission state.
//!
//! These three functions are the single authority consulted before any
//! mutating action; no component bypasses them.

use crate::submit::SubmissionState;

/// Hard cap on the number of markers in a selection.
pub const MAX_MARKERS: usize = 4;

/// Minimum number of markers needed to describe an area.
pub const MIN_MARKERS: usize = 3;

/// Whether a new point-selection event may reach the store.
///
/// An in-flight submission does not block adding a marker: the in-flight
/// payload was captured by value when the submission started, so a point
/// added mid-flight cannot leak into it.
pub fn can_add_marker(
    marker_count: usize,
    _submission: SubmissionState,
) -> bool {
    marker_count < MAX_MARKERS
}

/// Whether a submit action may reach the controller.
pub fn can_submit(
    marker_count: usize,
    submission: SubmissionState,
) -> bool {
    marker_count >= MIN_MARKERS && submission == SubmissionState::Idle
}

/// Whether the marker list may be cleared.
pub fn can_clear(submission: SubmissionState) -> bool {
    submission == SubmissionState::Idle
}
