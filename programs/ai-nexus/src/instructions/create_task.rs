//! Create a new task in the Open state

use crate::errors::NexusError;
use crate::events::TaskCreated;
use crate::state::{Analytics, RateLimiter, State, Task, TaskStatus, MAX_DESCRIPTION_LEN};
use anchor_lang::prelude::*;

use super::rate_limit_helpers::check_and_record;
use super::task_helpers::{validate_deadline, validate_text};

#[derive(Accounts)]
pub struct CreateTask<'info> {
    #[account(
        mut,
        seeds = [b"state"],
        bump = state.bump
    )]
    pub state: Account<'info, State>,

    /// Task address is derived from the global task counter, so the id a
    /// client observes before submitting is the id the task receives.
    #[account(
        init,
        payer = creator,
        space = Task::SIZE,
        seeds = [b"task", state.task_count.to_le_bytes().as_ref()],
        bump
    )]
    pub task: Account<'info, Task>,

    #[account(
        init_if_needed,
        payer = creator,
        space = RateLimiter::SIZE,
        seeds = [b"rate_limiter", creator.key().as_ref()],
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
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateTask>,
    description: String,
    reward: u64,
    deadline: i64,
) -> Result<()> {
    let state = &ctx.accounts.state;
    require!(!state.is_paused, NexusError::ProtocolPaused);

    require!(reward > 0, NexusError::InvalidReward);
    require!(!description.is_empty(), NexusError::InvalidInput);
    validate_text(&description, MAX_DESCRIPTION_LEN)?;

    let clock = Clock::get()?;
    validate_deadline(deadline, clock.unix_timestamp)?;

    let creator = ctx.accounts.creator.key();
    check_and_record(
        &mut ctx.accounts.rate_limiter,
        creator,
        ctx.bumps.rate_limiter,
        clock.unix_timestamp,
    )?;

    let state = &mut ctx.accounts.state;
    let task = &mut ctx.accounts.task;
    task.id = state.task_count;
    task.creator = creator;
    task.agent_id = None;
    task.assigned_agent = None;
    task.description = description;
    task.reward = reward;
    task.deadline = deadline;
    task.status = TaskStatus::Open;
    task.result_uri = None;
    task.created_at = clock.unix_timestamp;
    task.bump = ctx.bumps.task;

    state.task_count = state
        .task_count
        .checked_add(1)
        .ok_or(NexusError::ArithmeticOverflow)?;

    let analytics = &mut ctx.accounts.analytics;
    analytics.total_tasks_created = analytics
        .total_tasks_created
        .checked_add(1)
        .ok_or(NexusError::ArithmeticOverflow)?;

    emit!(TaskCreated {
        task_id: task.id,
        creator,
        reward,
        deadline,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
