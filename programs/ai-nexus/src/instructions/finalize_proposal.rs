//! Settle a proposal whose voting period has ended

use crate::errors::NexusError;
use crate::events::ProposalSettled;
use crate::state::{Proposal, ProposalStatus};
use anchor_lang::prelude::*;

use super::proposal_helpers::settle_if_ended;

#[derive(Accounts)]
pub struct FinalizeProposal<'info> {
    #[account(
        mut,
        seeds = [b"proposal", proposal.id.to_le_bytes().as_ref()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,

    /// Anyone may crank settlement once the deadline has passed.
    pub payer: Signer<'info>,
}

pub fn handler(ctx: Context<FinalizeProposal>) -> Result<()> {
    let proposal = &mut ctx.accounts.proposal;
    let clock = Clock::get()?;

    require!(
        proposal.status == ProposalStatus::Active,
        NexusError::ProposalNotActive
    );
    require!(
        clock.unix_timestamp >= proposal.end_time,
        NexusError::VotingNotEnded
    );

    settle_if_ended(proposal, clock.unix_timestamp);

    emit!(ProposalSettled {
        proposal_id: proposal.id,
        status: proposal.status as u8,
        votes_for: proposal.votes_for,
        votes_against: proposal.votes_against,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
