//! Initialize governance configuration

use crate::errors::NexusError;
use crate::state::{Governance, VoteWeightPolicy};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeGovernance<'info> {
    #[account(
        init,
        payer = authority,
        space = Governance::SIZE,
        seeds = [b"governance"],
        bump
    )]
    pub governance: Account<'info, Governance>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// A voting-period cap must be positive and at most the protocol default.
pub fn validate_max_voting_period(max_voting_period: i64) -> Result<()> {
    require!(max_voting_period > 0, NexusError::InvalidVotingPeriod);
    require!(
        max_voting_period <= Governance::DEFAULT_MAX_VOTING_PERIOD,
        NexusError::InvalidVotingPeriod
    );
    Ok(())
}

pub fn handler(
    ctx: Context<InitializeGovernance>,
    min_stake_for_proposal: u64,
    max_voting_period: i64,
    stake_weighted_votes: bool,
) -> Result<()> {
    validate_max_voting_period(max_voting_period)?;

    let governance = &mut ctx.accounts.governance;
    governance.authority = ctx.accounts.authority.key();
    governance.proposal_count = 0;
    governance.min_stake_for_proposal = min_stake_for_proposal;
    governance.max_voting_period = max_voting_period;
    governance.vote_weight_policy = if stake_weighted_votes {
        VoteWeightPolicy::StakeWeighted
    } else {
        VoteWeightPolicy::Flat
    };
    governance.bump = ctx.bumps.governance;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_bounded_period_accepted() {
        assert!(validate_max_voting_period(1).is_ok());
        assert!(validate_max_voting_period(Governance::DEFAULT_MAX_VOTING_PERIOD).is_ok());
    }

    #[test]
    fn test_non_positive_period_rejected() {
        let err = validate_max_voting_period(0).unwrap_err();
        assert_eq!(err, NexusError::InvalidVotingPeriod.into());
        assert!(validate_max_voting_period(-60).is_err());
    }

    #[test]
    fn test_period_over_protocol_cap_rejected() {
        let err =
            validate_max_voting_period(Governance::DEFAULT_MAX_VOTING_PERIOD + 1).unwrap_err();
        assert_eq!(err, NexusError::InvalidVotingPeriod.into());
    }
}
