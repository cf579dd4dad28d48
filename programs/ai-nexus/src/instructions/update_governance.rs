//! Authority-gated update of governance parameters

use crate::errors::NexusError;
use crate::events::GovernanceUpdated;
use crate::state::Governance;
use anchor_lang::prelude::*;

use super::initialize_governance::validate_max_voting_period;

#[derive(Accounts)]
pub struct UpdateGovernance<'info> {
    #[account(
        mut,
        seeds = [b"governance"],
        bump = governance.bump,
        has_one = authority @ NexusError::Unauthorized
    )]
    pub governance: Account<'info, Governance>,

    pub authority: Signer<'info>,
}

/// Adjusts the stake floor and voting-period cap. The vote weight policy is
/// fixed at initialization: changing it mid-stream would re-weigh ballots
/// already cast on active proposals.
pub fn handler(
    ctx: Context<UpdateGovernance>,
    min_stake_for_proposal: u64,
    max_voting_period: i64,
) -> Result<()> {
    validate_max_voting_period(max_voting_period)?;

    let governance = &mut ctx.accounts.governance;
    governance.min_stake_for_proposal = min_stake_for_proposal;
    governance.max_voting_period = max_voting_period;

    emit!(GovernanceUpdated {
        min_stake_for_proposal,
        max_voting_period,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
