//! Proposal settlement and vote weighting.
//!
//! Proposals resolve lazily: they stay Active on chain past the voting
//! deadline until `finalize_proposal` settles them via [`settle_if_ended`].

use crate::errors::NexusError;
use crate::state::{Proposal, ProposalStatus, VoteWeightPolicy};
use anchor_lang::prelude::*;

/// Final status for a proposal whose voting period has ended.
pub fn tally_outcome(votes_for: u64, votes_against: u64) -> ProposalStatus {
    if votes_for == 0 && votes_against == 0 {
        ProposalStatus::Expired
    } else if votes_for > votes_against {
        ProposalStatus::Passed
    } else {
        ProposalStatus::Rejected
    }
}

/// Settles an Active proposal in place once its deadline has passed.
/// Returns true if the status changed.
pub fn settle_if_ended(proposal: &mut Proposal, now: i64) -> bool {
    if proposal.status == ProposalStatus::Active && now >= proposal.end_time {
        proposal.status = tally_outcome(proposal.votes_for, proposal.votes_against);
        return true;
    }
    false
}

/// Weight a ballot carries under the configured policy.
///
/// Under `StakeWeighted`, a voter with zero stake has no voice and the vote
/// is rejected outright rather than silently counted as zero.
pub fn ballot_weight(policy: VoteWeightPolicy, staked_amount: u64) -> Result<u64> {
    match policy {
        VoteWeightPolicy::Flat => Ok(1),
        VoteWeightPolicy::StakeWeighted => {
            require!(staked_amount > 0, NexusError::InsufficientStake);
            Ok(staked_amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_proposal(votes_for: u64, votes_against: u64, end_time: i64) -> Proposal {
        Proposal {
            votes_for,
            votes_against,
            end_time,
            ..Proposal::default()
        }
    }

    #[test]
    fn test_majority_for_passes() {
        assert_eq!(tally_outcome(10, 3), ProposalStatus::Passed);
    }

    #[test]
    fn test_majority_against_rejects() {
        assert_eq!(tally_outcome(3, 10), ProposalStatus::Rejected);
    }

    #[test]
    fn test_tie_rejects() {
        assert_eq!(tally_outcome(5, 5), ProposalStatus::Rejected);
    }

    #[test]
    fn test_no_votes_expires() {
        assert_eq!(tally_outcome(0, 0), ProposalStatus::Expired);
    }

    #[test]
    fn test_settle_before_deadline_is_noop() {
        let mut proposal = active_proposal(4, 1, 1000);
        assert!(!settle_if_ended(&mut proposal, 999));
        assert_eq!(proposal.status, ProposalStatus::Active);
    }

    #[test]
    fn test_settle_at_deadline_applies_tally() {
        let mut proposal = active_proposal(4, 1, 1000);
        assert!(settle_if_ended(&mut proposal, 1000));
        assert_eq!(proposal.status, ProposalStatus::Passed);
    }

    #[test]
    fn test_settle_is_idempotent() {
        let mut proposal = active_proposal(0, 2, 1000);
        assert!(settle_if_ended(&mut proposal, 2000));
        assert_eq!(proposal.status, ProposalStatus::Rejected);
        assert!(!settle_if_ended(&mut proposal, 3000));
        assert_eq!(proposal.status, ProposalStatus::Rejected);
    }

    #[test]
    fn test_flat_weight_ignores_stake() {
        assert_eq!(ballot_weight(VoteWeightPolicy::Flat, 0).unwrap(), 1);
        assert_eq!(ballot_weight(VoteWeightPolicy::Flat, 1_000_000).unwrap(), 1);
    }

    #[test]
    fn test_stake_weight_equals_stake() {
        assert_eq!(
            ballot_weight(VoteWeightPolicy::StakeWeighted, 250).unwrap(),
            250
        );
    }

    #[test]
    fn test_stake_weight_rejects_zero_stake() {
        let err = ballot_weight(VoteWeightPolicy::StakeWeighted, 0).unwrap_err();
        assert_eq!(err, NexusError::InsufficientStake.into());
    }
}
