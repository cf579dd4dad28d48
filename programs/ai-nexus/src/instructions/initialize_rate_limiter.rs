//! Initialize a per-identity rate limiter

use crate::state::RateLimiter;
use anchor_lang::prelude::*;

use super::rate_limit_helpers::aligned_window_start;

#[derive(Accounts)]
pub struct InitializeRateLimiter<'info> {
    #[account(
        init,
        payer = owner,
        space = RateLimiter::SIZE,
        seeds = [b"rate_limiter", owner.key().as_ref()],
        bump
    )]
    pub rate_limiter: Account<'info, RateLimiter>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Explicit limiter creation. `register_agent` and `create_task` also create
/// the limiter on first use, so calling this up front is optional.
pub fn handler(ctx: Context<InitializeRateLimiter>) -> Result<()> {
    let clock = Clock::get()?;
    let limiter = &mut ctx.accounts.rate_limiter;
    limiter.owner = ctx.accounts.owner.key();
    limiter.last_action = 0;
    limiter.actions_in_window = 0;
    limiter.window_start = aligned_window_start(clock.unix_timestamp);
    limiter.bump = ctx.bumps.rate_limiter;
    Ok(())
}
