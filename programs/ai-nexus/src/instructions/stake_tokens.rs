//! Stake tokens into the governance vault

use crate::errors::NexusError;
use crate::events::TokensStaked;
use crate::state::{Governance, StakeAccount, State};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct StakeTokens<'info> {
    #[account(
        seeds = [b"state"],
        bump = state.bump
    )]
    pub state: Account<'info, State>,

    #[account(
        seeds = [b"governance"],
        bump = governance.bump
    )]
    pub governance: Account<'info, Governance>,

    #[account(
        init_if_needed,
        payer = staker,
        space = StakeAccount::SIZE,
        seeds = [b"stake", staker.key().as_ref()],
        bump
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(
        mut,
        constraint = staker_token_account.owner == staker.key() @ NexusError::Unauthorized
    )]
    pub staker_token_account: Account<'info, TokenAccount>,

    /// Escrow token account controlled by the governance PDA.
    #[account(
        mut,
        constraint = stake_vault.owner == governance.key() @ NexusError::AddressMismatch,
        constraint = stake_vault.mint == staker_token_account.mint @ NexusError::InvalidInput
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub staker: Signer<'info>,

    pub token_program: Program<'info, Token>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<StakeTokens>, amount: u64) -> Result<()> {
    let state = &ctx.accounts.state;
    require!(!state.is_paused, NexusError::ProtocolPaused);

    require!(amount > 0, NexusError::InvalidAmount);
    require!(
        ctx.accounts.staker_token_account.amount >= amount,
        NexusError::InsufficientBalance
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.staker_token_account.to_account_info(),
                to: ctx.accounts.stake_vault.to_account_info(),
                authority: ctx.accounts.staker.to_account_info(),
            },
        ),
        amount,
    )?;

    let clock = Clock::get()?;
    let stake = &mut ctx.accounts.stake_account;
    if stake.staker == Pubkey::default() {
        stake.staker = ctx.accounts.staker.key();
        stake.bump = ctx.bumps.stake_account;
    }
    stake.amount = stake
        .amount
        .checked_add(amount)
        .ok_or(NexusError::ArithmeticOverflow)?;
    stake.last_staked_at = clock.unix_timestamp;

    emit!(TokensStaked {
        staker: stake.staker,
        amount,
        total_staked: stake.amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
