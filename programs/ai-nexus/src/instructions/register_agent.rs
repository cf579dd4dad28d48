//! Register a new agent, one per owner wallet

use crate::errors::NexusError;
use crate::events::AgentRegistered;
use crate::state::{
    Agent, Analytics, RateLimiter, State, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URI_LEN,
};
use anchor_lang::prelude::*;

use super::rate_limit_helpers::check_and_record;
use super::task_helpers::validate_text;

#[derive(Accounts)]
pub struct RegisterAgent<'info> {
    #[account(
        mut,
        seeds = [b"state"],
        bump = state.bump
    )]
    pub state: Account<'info, State>,

    /// The agent PDA is derived from the owner wallet, which is what makes
    /// registration unique per owner. `init_if_needed` plus the freshness
    /// check in the handler surfaces `AgentAlreadyRegistered` instead of a
    /// raw account-in-use failure.
    #[account(
        init_if_needed,
        payer = owner,
        space = Agent::SIZE,
        seeds = [b"agent", owner.key().as_ref()],
        bump
    )]
    pub agent: Account<'info, Agent>,

    #[account(
        init_if_needed,
        payer = owner,
        space = RateLimiter::SIZE,
        seeds = [b"rate_limiter", owner.key().as_ref()],
        bump
    )]
    pub rate_limiter: Account<'info, RateLimiter>,

    #[account(
        mut,
        seeds = [b"analytics"],
        bump = analytics.bump
    )]
    pub analytics: Account<'info, Analytics>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<RegisterAgent>,
    name: String,
    description: String,
    metadata_uri: String,
) -> Result<()> {
    let state = &ctx.accounts.state;
    require!(!state.is_paused, NexusError::ProtocolPaused);

    require!(!name.is_empty(), NexusError::InvalidInput);
    validate_text(&name, MAX_NAME_LEN)?;
    validate_text(&description, MAX_DESCRIPTION_LEN)?;
    validate_text(&metadata_uri, MAX_URI_LEN)?;

    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();

    // Throttle before the uniqueness check: a rapid duplicate registration
    // reports RateLimitExceeded, a later one AgentAlreadyRegistered.
    check_and_record(
        &mut ctx.accounts.rate_limiter,
        owner,
        ctx.bumps.rate_limiter,
        clock.unix_timestamp,
    )?;

    let state = &mut ctx.accounts.state;
    claim_agent_record(
        &mut ctx.accounts.agent,
        state.agent_count,
        owner,
        name.clone(),
        description,
        metadata_uri,
        clock.unix_timestamp,
        ctx.bumps.agent,
    )?;

    state.agent_count = state
        .agent_count
        .checked_add(1)
        .ok_or(NexusError::ArithmeticOverflow)?;

    let analytics = &mut ctx.accounts.analytics;
    analytics.total_agents_registered = analytics
        .total_agents_registered
        .checked_add(1)
        .ok_or(NexusError::ArithmeticOverflow)?;

    emit!(AgentRegistered {
        agent_id: ctx.accounts.agent.id,
        owner,
        name,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Claims a freshly initialized agent record for `owner` and fills it in.
///
/// An agent account whose owner is already set belongs to an earlier
/// registration, so a repeat call for the same PDA fails with
/// `AgentAlreadyRegistered` and leaves the record untouched.
#[allow(clippy::too_many_arguments)]
pub fn claim_agent_record(
    agent: &mut Agent,
    id: u64,
    owner: Pubkey,
    name: String,
    description: String,
    metadata_uri: String,
    now: i64,
    bump: u8,
) -> Result<()> {
    require!(
        agent.owner == Pubkey::default(),
        NexusError::AgentAlreadyRegistered
    );

    agent.id = id;
    agent.owner = owner;
    agent.name = name;
    agent.description = description;
    agent.metadata_uri = metadata_uri;
    agent.reputation_score = 0;
    agent.tasks_completed = 0;
    agent.is_active = true;
    agent.registered_at = now;
    agent.bump = bump;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn claim(agent: &mut Agent, id: u64, owner: Pubkey, name: &str) -> Result<()> {
        claim_agent_record(
            agent,
            id,
            owner,
            name.to_string(),
            "runs summarization jobs".to_string(),
            "https://example.com/agent.json".to_string(),
            NOW,
            254,
        )
    }

    #[test]
    fn test_claim_fills_fresh_record() {
        let mut agent = Agent::default();
        let owner = Pubkey::new_unique();
        claim(&mut agent, 3, owner, "summarizer").unwrap();
        assert_eq!(agent.id, 3);
        assert_eq!(agent.owner, owner);
        assert_eq!(agent.name, "summarizer");
        assert_eq!(agent.reputation_score, 0);
        assert!(agent.is_active);
        assert_eq!(agent.registered_at, NOW);
    }

    #[test]
    fn test_second_registration_rejected() {
        let mut agent = Agent::default();
        let owner = Pubkey::new_unique();
        claim(&mut agent, 0, owner, "first").unwrap();
        let err = claim(&mut agent, 1, owner, "second").unwrap_err();
        assert_eq!(err, NexusError::AgentAlreadyRegistered.into());
        // first registration stays intact
        assert_eq!(agent.id, 0);
        assert_eq!(agent.name, "first");
    }

    #[test]
    fn test_claimed_record_rejects_any_owner() {
        let mut agent = Agent::default();
        claim(&mut agent, 0, Pubkey::new_unique(), "first").unwrap();
        let original_owner = agent.owner;
        let err = claim(&mut agent, 1, Pubkey::new_unique(), "intruder").unwrap_err();
        assert_eq!(err, NexusError::AgentAlreadyRegistered.into());
        assert_eq!(agent.owner, original_owner);
    }
}
