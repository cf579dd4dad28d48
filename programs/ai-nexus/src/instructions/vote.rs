//! Cast a ballot on an active proposal

use crate::errors::NexusError;
use crate::events::VoteCast;
use crate::state::{Governance, Proposal, ProposalStatus, StakeAccount, VoteRecord};
use anchor_lang::prelude::*;

use super::proposal_helpers::ballot_weight;

#[derive(Accounts)]
pub struct Vote<'info> {
    #[account(
        seeds = [b"governance"],
        bump = governance.bump
    )]
    pub governance: Account<'info, Governance>,

    #[account(
        mut,
        seeds = [b"proposal", proposal.id.to_le_bytes().as_ref()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,

    /// One record per (proposal, voter); `init_if_needed` plus the freshness
    /// check surfaces `AlreadyVoted` as a typed error.
    #[account(
        init_if_needed,
        payer = voter,
        space = VoteRecord::SIZE,
        seeds = [b"vote", proposal.key().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub vote_record: Account<'info, VoteRecord>,

    /// Voting is open to stakers only; the record must exist even under the
    /// flat weighting policy.
    #[account(
        seeds = [b"stake", voter.key().as_ref()],
        bump = stake_account.bump
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(mut)]
    pub voter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Vote>, support: bool) -> Result<()> {
    let proposal = &mut ctx.accounts.proposal;
    let clock = Clock::get()?;

    require!(
        proposal.status == ProposalStatus::Active,
        NexusError::ProposalNotActive
    );
    require!(
        clock.unix_timestamp < proposal.end_time,
        NexusError::VotingEnded
    );

    let weight = ballot_weight(
        ctx.accounts.governance.vote_weight_policy,
        ctx.accounts.stake_account.amount,
    )?;

    let proposal_key = proposal.key();
    claim_vote_record(
        &mut ctx.accounts.vote_record,
        proposal_key,
        ctx.accounts.voter.key(),
        support,
        weight,
        clock.unix_timestamp,
        ctx.bumps.vote_record,
    )?;

    if support {
        proposal.votes_for = proposal
            .votes_for
            .checked_add(weight)
            .ok_or(NexusError::ArithmeticOverflow)?;
    } else {
        proposal.votes_against = proposal
            .votes_against
            .checked_add(weight)
            .ok_or(NexusError::ArithmeticOverflow)?;
    }

    emit!(VoteCast {
        proposal_id: proposal.id,
        voter: ctx.accounts.voter.key(),
        support,
        weight,
        votes_for: proposal.votes_for,
        votes_against: proposal.votes_against,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Claims a freshly initialized vote record for `voter` and stores the
/// ballot.
///
/// A record whose voter is already set holds an earlier ballot for this
/// (proposal, voter) pair, so a repeat call fails with `AlreadyVoted` and
/// leaves the original ballot untouched.
pub fn claim_vote_record(
    record: &mut VoteRecord,
    proposal: Pubkey,
    voter: Pubkey,
    support: bool,
    weight: u64,
    now: i64,
    bump: u8,
) -> Result<()> {
    require!(record.voter == Pubkey::default(), NexusError::AlreadyVoted);

    record.proposal = proposal;
    record.voter = voter;
    record.support = support;
    record.weight = weight;
    record.voted_at = now;
    record.bump = bump;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_claim_fills_fresh_record() {
        let mut record = VoteRecord::default();
        let proposal = Pubkey::new_unique();
        let voter = Pubkey::new_unique();
        claim_vote_record(&mut record, proposal, voter, true, 5, NOW, 254).unwrap();
        assert_eq!(record.proposal, proposal);
        assert_eq!(record.voter, voter);
        assert!(record.support);
        assert_eq!(record.weight, 5);
        assert_eq!(record.voted_at, NOW);
    }

    #[test]
    fn test_second_ballot_rejected() {
        let mut record = VoteRecord::default();
        let proposal = Pubkey::new_unique();
        let voter = Pubkey::new_unique();
        claim_vote_record(&mut record, proposal, voter, true, 5, NOW, 254).unwrap();
        // flipping the ballot on a second call must fail
        let err =
            claim_vote_record(&mut record, proposal, voter, false, 5, NOW + 10, 254).unwrap_err();
        assert_eq!(err, NexusError::AlreadyVoted.into());
        assert!(record.support);
        assert_eq!(record.voted_at, NOW);
    }
}
