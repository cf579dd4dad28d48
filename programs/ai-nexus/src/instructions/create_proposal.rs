//! Create a governance proposal

use crate::errors::NexusError;
use crate::events::ProposalCreated;
use crate::state::{Governance, Proposal, ProposalStatus, StakeAccount, MAX_DESCRIPTION_LEN};
use anchor_lang::prelude::*;

use super::task_helpers::validate_text;

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    #[account(
        mut,
        seeds = [b"governance"],
        bump = governance.bump
    )]
    pub governance: Account<'info, Governance>,

    /// Proposal address is derived from the global proposal counter.
    #[account(
        init,
        payer = proposer,
        space = Proposal::SIZE,
        seeds = [b"proposal", governance.proposal_count.to_le_bytes().as_ref()],
        bump
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        seeds = [b"stake", proposer.key().as_ref()],
        bump = stake_account.bump
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(mut)]
    pub proposer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateProposal>,
    description: String,
    voting_period: i64,
) -> Result<()> {
    let governance = &ctx.accounts.governance;

    require!(
        ctx.accounts.stake_account.amount >= governance.min_stake_for_proposal,
        NexusError::InsufficientStake
    );
    require!(voting_period > 0, NexusError::InvalidVotingPeriod);
    require!(
        voting_period <= governance.max_voting_period,
        NexusError::InvalidVotingPeriod
    );
    require!(!description.is_empty(), NexusError::InvalidInput);
    validate_text(&description, MAX_DESCRIPTION_LEN)?;

    let clock = Clock::get()?;
    let governance = &mut ctx.accounts.governance;
    let proposal = &mut ctx.accounts.proposal;

    proposal.id = governance.proposal_count;
    proposal.proposer = ctx.accounts.proposer.key();
    proposal.description = description;
    proposal.votes_for = 0;
    proposal.votes_against = 0;
    proposal.start_time = clock.unix_timestamp;
    proposal.end_time = clock
        .unix_timestamp
        .checked_add(voting_period)
        .ok_or(NexusError::ArithmeticOverflow)?;
    proposal.status = ProposalStatus::Active;
    proposal.bump = ctx.bumps.proposal;

    governance.proposal_count = governance
        .proposal_count
        .checked_add(1)
        .ok_or(NexusError::ArithmeticOverflow)?;

    emit!(ProposalCreated {
        proposal_id: proposal.id,
        proposer: proposal.proposer,
        end_time: proposal.end_time,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
