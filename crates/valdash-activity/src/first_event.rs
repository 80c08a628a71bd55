use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::classifier::ActivityPoint;

/// Number of successful proposals for which the first-proposal message
/// is still shown.
pub const FIRST_PROPOSAL_WINDOW: RangeInclusive<usize> = 1..=2;

/// Session-scoped one-shot for the first-proposal celebration.
///
/// Owned by the host controller and shared by handle. Clones observe the
/// same latch, so overlapping refreshes can claim it at most once.
#[derive(Debug, Clone)]
pub struct CelebrationLatch {
    armed: Arc<AtomicBool>,
}

impl CelebrationLatch {
    pub fn new() -> Self {
        CelebrationLatch {
            armed: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Claim the celebration. Returns true only for the first caller.
    pub fn take(&self) -> bool {
        self.armed.swap(false, Ordering::AcqRel)
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }
}

impl Default for CelebrationLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of the first-proposal check for one refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstProposalCheck {
    /// Play the celebration animation (once per session)
    pub should_celebrate: bool,
    /// Show the first-proposal message (every refresh until acknowledged)
    pub show_message: bool,
}

/// Detect a validator's first successful proposal.
///
/// Foreign validators never trigger the milestone. The persisted
/// acknowledgement is read by the caller and written by the host; this
/// function only consumes the session latch.
pub fn check_first(
    proposed: &[ActivityPoint],
    already_acknowledged: bool,
    foreign: bool,
    latch: &CelebrationLatch,
) -> FirstProposalCheck {
    if foreign {
        return FirstProposalCheck::default();
    }

    if already_acknowledged || !FIRST_PROPOSAL_WINDOW.contains(&proposed.len()) {
        return FirstProposalCheck::default();
    }

    FirstProposalCheck {
        should_celebrate: latch.take(),
        show_message: true,
    }
}
