//! Complete an assigned task and credit the agent

use crate::errors::NexusError;
use crate::events::TaskCompleted;
use crate::state::{Agent, Analytics, State, Task, TaskStatus, MAX_URI_LEN};
use anchor_lang::prelude::*;

use super::task_helpers::validate_text;

#[derive(Accounts)]
pub struct CompleteTask<'info> {
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

    /// Only the wallet that owns the assigned agent may complete.
    #[account(
        mut,
        seeds = [b"agent", agent.owner.as_ref()],
        bump = agent.bump,
        has_one = owner @ NexusError::Unauthorized
    )]
    pub agent: Account<'info, Agent>,

    #[account(
        mut,
        seeds = [b"analytics"],
        bump = analytics.bump
    )]
    pub analytics: Account<'info, Analytics>,

    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<CompleteTask>, result_uri: String) -> Result<()> {
    let state = &ctx.accounts.state;
    require!(!state.is_paused, NexusError::ProtocolPaused);

    require!(!result_uri.is_empty(), NexusError::InvalidInput);
    validate_text(&result_uri, MAX_URI_LEN)?;

    let task = &mut ctx.accounts.task;
    let agent = &mut ctx.accounts.agent;
    let clock = Clock::get()?;

    require!(
        task.status.can_transition_to(TaskStatus::Completed),
        NexusError::InvalidTaskStatus
    );
    // The supplied agent must be the one recorded at assignment.
    require!(
        task.assigned_agent == Some(agent.key()),
        NexusError::AddressMismatch
    );

    task.status = TaskStatus::Completed;
    task.result_uri = Some(result_uri.clone());

    agent.tasks_completed = agent
        .tasks_completed
        .checked_add(1)
        .ok_or(NexusError::ArithmeticOverflow)?;

    let analytics = &mut ctx.accounts.analytics;
    analytics.total_tasks_completed = analytics
        .total_tasks_completed
        .checked_add(1)
        .ok_or(NexusError::ArithmeticOverflow)?;

    emit!(TaskCompleted {
        task_id: task.id,
        agent_id: agent.id,
        result_uri,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
