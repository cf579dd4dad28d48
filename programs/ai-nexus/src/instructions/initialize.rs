//! Initialize the global marketplace state

use crate::events::StateInitialized;
use crate::state::State;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = State::SIZE,
        seeds = [b"state"],
        bump
    )]
    pub state: Account<'info, State>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let state = &mut ctx.accounts.state;
    state.authority = ctx.accounts.authority.key();
    state.agent_count = 0;
    state.task_count = 0;
    state.is_paused = false;
    state.bump = ctx.bumps.state;

    emit!(StateInitialized {
        authority: state.authority,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
