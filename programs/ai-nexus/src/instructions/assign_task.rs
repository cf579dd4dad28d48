//! Assign an open task to an active agent

use crate::errors::NexusError;
use crate::events::TaskAssigned;
use crate::state::{Agent, State, Task, TaskStatus};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct AssignTask<'info> {
    #[account(
        seeds = [b"state"],
        bump = state.bump
    )]
    pub state: Account<'info, State>,

    #[account(
        mut,
        seeds = [b"task", task.id.to_le_bytes().as_ref()],
        bump = task.bump
    )]
    pub task: Account<'info, Task>,

    #[account(
        seeds = [b"agent", agent.owner.as_ref()],
        bump = agent.bump
    )]
    pub agent: Account<'info, Agent>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<AssignTask>, agent_id: u64) -> Result<()> {
    let state = &ctx.accounts.state;
    require!(!state.is_paused, NexusError::ProtocolPaused);

    let task = &mut ctx.accounts.task;
    let agent = &ctx.accounts.agent;
    let clock = Clock::get()?;

    // Only the task creator or the program authority may assign.
    let signer = ctx.accounts.authority.key();
    require!(
        signer == task.creator || signer == state.authority,
        NexusError::Unauthorized
    );

    // The supplied agent account must be the one the caller named.
    require!(agent.id == agent_id, NexusError::AddressMismatch);
    require!(agent.is_active, NexusError::AgentNotActive);

    // Guards re-checked against current stored state: a racing assignment
    // that committed first leaves the task non-Open here.
    require!(
        task.status.can_transition_to(TaskStatus::Assigned),
        NexusError::InvalidTaskStatus
    );
    require!(
        clock.unix_timestamp < task.deadline,
        NexusError::TaskDeadlinePassed
    );

    task.status = TaskStatus::Assigned;
    task.agent_id = Some(agent_id);
    task.assigned_agent = Some(agent.key());

    emit!(TaskAssigned {
        task_id: task.id,
        agent_id,
        assigned_agent: agent.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
