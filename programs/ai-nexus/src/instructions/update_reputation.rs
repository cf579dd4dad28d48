//! Authority-gated reputation adjustment

use crate::errors::NexusError;
use crate::events::ReputationUpdated;
use crate::state::{Agent, State};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateReputation<'info> {
    #[account(
        seeds = [b"state"],
        bump = state.bump,
        has_one = authority @ NexusError::Unauthorized
    )]
    pub state: Account<'info, State>,

    #[account(
        mut,
        seeds = [b"agent", agent.owner.as_ref()],
        bump = agent.bump
    )]
    pub agent: Account<'info, Agent>,

    pub authority: Signer<'info>,
}

/// Applies a signed delta to a score, rejecting wraparound in either
/// direction.
pub fn apply_delta(score: u64, delta: i64) -> Option<u64> {
    if delta >= 0 {
        score.checked_add(delta as u64)
    } else {
        score.checked_sub(delta.unsigned_abs())
    }
}

pub fn handler(ctx: Context<UpdateReputation>, agent_id: u64, delta: i64) -> Result<()> {
    let agent = &mut ctx.accounts.agent;
    require!(agent.id == agent_id, NexusError::AddressMismatch);

    let old_score = agent.reputation_score;
    agent.reputation_score =
        apply_delta(old_score, delta).ok_or(NexusError::ArithmeticOverflow)?;

    emit!(ReputationUpdated {
        agent_id,
        old_score,
        new_score: agent.reputation_score,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_delta_adds() {
        assert_eq!(apply_delta(100, 25), Some(125));
    }

    #[test]
    fn test_negative_delta_subtracts() {
        assert_eq!(apply_delta(100, -40), Some(60));
    }

    #[test]
    fn test_underflow_rejected() {
        assert_eq!(apply_delta(10, -11), None);
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(apply_delta(u64::MAX, 1), None);
    }

    #[test]
    fn test_i64_min_delta_does_not_panic() {
        assert_eq!(apply_delta(0, i64::MIN), None);
        assert_eq!(apply_delta(u64::MAX, i64::MIN), Some(u64::MAX - (1u64 << 63)));
    }
}
