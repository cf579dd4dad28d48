//! Owner-gated toggle for an agent's active flag

use crate::errors::NexusError;
use crate::events::AgentStatusChanged;
use crate::state::Agent;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetAgentActive<'info> {
    #[account(
        mut,
        seeds = [b"agent", owner.key().as_ref()],
        bump = agent.bump,
        has_one = owner @ NexusError::Unauthorized
    )]
    pub agent: Account<'info, Agent>,

    pub owner: Signer<'info>,
}

/// Inactive agents keep their record and reputation but cannot be assigned
/// new tasks until reactivated.
pub fn handler(ctx: Context<SetAgentActive>, is_active: bool) -> Result<()> {
    let agent = &mut ctx.accounts.agent;
    agent.is_active = is_active;

    emit!(AgentStatusChanged {
        agent_id: agent.id,
        is_active,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
