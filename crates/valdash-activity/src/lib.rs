mod classifier;
mod first_event;
mod summary;

pub use classifier::{classify, ActivityBuckets, ActivityPoint};
pub use first_event::{check_first, CelebrationLatch, FirstProposalCheck, FIRST_PROPOSAL_WINDOW};
pub use summary::{summarize, ProposalSummary};

#[cfg(test)]
mod tests;
