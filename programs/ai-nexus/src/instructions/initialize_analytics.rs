//! Initialize the analytics singleton

use crate::state::{Analytics, SystemStatus};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeAnalytics<'info> {
    #[account(
        init,
        payer = authority,
        space = Analytics::SIZE,
        seeds = [b"analytics"],
        bump
    )]
    pub analytics: Account<'info, Analytics>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeAnalytics>) -> Result<()> {
    let clock = Clock::get()?;
    let analytics = &mut ctx.accounts.analytics;
    analytics.authority = ctx.accounts.authority.key();
    analytics.total_agents_registered = 0;
    analytics.total_tasks_created = 0;
    analytics.total_tasks_completed = 0;
    analytics.error_count = 0;
    analytics.errors_at_last_check = 0;
    analytics.last_error_at = 0;
    analytics.system_status = SystemStatus::Healthy;
    analytics.last_updated = clock.unix_timestamp;
    analytics.bump = ctx.bumps.analytics;
    Ok(())
}
