//! Emergency pause for marketplace mutations

use crate::errors::NexusError;
use crate::events::PauseToggled;
use crate::state::State;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        mut,
        seeds = [b"state"],
        bump = state.bump,
        has_one = authority @ NexusError::Unauthorized
    )]
    pub state: Account<'info, State>,

    pub authority: Signer<'info>,
}

/// While paused, registration, task mutations, and staking are rejected
/// with `ProtocolPaused`. Governance stays live so a pause can be reviewed.
pub fn handler(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let state = &mut ctx.accounts.state;
    state.is_paused = paused;

    emit!(PauseToggled {
        is_paused: paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
