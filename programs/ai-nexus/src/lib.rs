#![allow(unexpected_cfgs)]
//! AI Nexus Task Marketplace
//!
//! A decentralized task marketplace on Solana: wallets register as agents,
//! other wallets post tasks with a reward and deadline, agents are assigned
//! and credited on completion, and stakers govern marketplace parameters
//! through proposals. Every instruction is a single atomic state transition
//! over explicitly named accounts.

use anchor_lang::prelude::*;

declare_id!("4zDxXREBd1irbagc7gvuaxHdfeYamiudBtoe8XbXuY9q");

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

#[program]
pub mod ai_nexus {
    use super::*;

    /// Initialize the global marketplace state.
    /// Called once; the signing authority is fixed for the deployment's
    /// lifetime and gates reputation updates and the pause switch.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Create the caller's rate limiter ahead of time.
    /// Optional: `register_agent` and `create_task` create it on first use.
    pub fn initialize_rate_limiter(ctx: Context<InitializeRateLimiter>) -> Result<()> {
        instructions::initialize_rate_limiter::handler(ctx)
    }

    /// Initialize the analytics singleton that tracks marketplace counters
    /// and derived health.
    pub fn initialize_analytics(ctx: Context<InitializeAnalytics>) -> Result<()> {
        instructions::initialize_analytics::handler(ctx)
    }

    /// Initialize governance configuration.
    ///
    /// # Arguments
    /// * `min_stake_for_proposal` - Stake floor for creating proposals
    /// * `max_voting_period` - Upper bound on proposal voting periods (seconds)
    /// * `stake_weighted_votes` - Ballot weighting: stake-weighted or one-per-staker
    pub fn initialize_governance(
        ctx: Context<InitializeGovernance>,
        min_stake_for_proposal: u64,
        max_voting_period: i64,
        stake_weighted_votes: bool,
    ) -> Result<()> {
        instructions::initialize_governance::handler(
            ctx,
            min_stake_for_proposal,
            max_voting_period,
            stake_weighted_votes,
        )
    }

    /// Register the signing wallet as an agent.
    /// The agent account lives at a PDA derived from the owner wallet, so
    /// each wallet can register exactly once.
    ///
    /// # Arguments
    /// * `name` - Display name (max 64 chars, non-empty)
    /// * `description` - Agent description (max 256 chars)
    /// * `metadata_uri` - URI to extended metadata (max 128 chars)
    pub fn register_agent(
        ctx: Context<RegisterAgent>,
        name: String,
        description: String,
        metadata_uri: String,
    ) -> Result<()> {
        instructions::register_agent::handler(ctx, name, description, metadata_uri)
    }

    /// Create a task in the Open state.
    ///
    /// # Arguments
    /// * `description` - Task description (max 256 chars, non-empty)
    /// * `reward` - Reward in lamports, must be positive
    /// * `deadline` - Unix timestamp, must be in the future
    pub fn create_task(
        ctx: Context<CreateTask>,
        description: String,
        reward: u64,
        deadline: i64,
    ) -> Result<()> {
        instructions::create_task::handler(ctx, description, reward, deadline)
    }

    /// Assign an open task to an active agent.
    /// Callable by the task creator or the program authority, before the
    /// task deadline.
    pub fn assign_task(ctx: Context<AssignTask>, agent_id: u64) -> Result<()> {
        instructions::assign_task::handler(ctx, agent_id)
    }

    /// Complete an assigned task.
    /// Only the wallet owning the assigned agent may call; credits the
    /// agent's completion count and the analytics counters atomically.
    pub fn complete_task(ctx: Context<CompleteTask>, result_uri: String) -> Result<()> {
        instructions::complete_task::handler(ctx, result_uri)
    }

    /// Adjust an agent's reputation score (program authority only).
    /// The delta is signed; a change that would wrap the score is rejected.
    pub fn update_reputation(
        ctx: Context<UpdateReputation>,
        agent_id: u64,
        delta: i64,
    ) -> Result<()> {
        instructions::update_reputation::handler(ctx, agent_id, delta)
    }

    /// Toggle the caller's agent between active and inactive.
    pub fn set_agent_active(ctx: Context<SetAgentActive>, is_active: bool) -> Result<()> {
        instructions::set_agent_active::handler(ctx, is_active)
    }

    /// Stake tokens into the governance vault for proposal and voting
    /// rights.
    pub fn stake_tokens(ctx: Context<StakeTokens>, amount: u64) -> Result<()> {
        instructions::stake_tokens::handler(ctx, amount)
    }

    /// Adjust governance parameters (governance authority only). The vote
    /// weight policy is not adjustable after initialization.
    pub fn update_governance(
        ctx: Context<UpdateGovernance>,
        min_stake_for_proposal: u64,
        max_voting_period: i64,
    ) -> Result<()> {
        instructions::update_governance::handler(ctx, min_stake_for_proposal, max_voting_period)
    }

    /// Create a governance proposal. Requires the staker to meet the
    /// configured stake floor.
    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        description: String,
        voting_period: i64,
    ) -> Result<()> {
        instructions::create_proposal::handler(ctx, description, voting_period)
    }

    /// Cast a ballot on an active proposal. One vote per staker; weight
    /// follows the configured policy.
    pub fn vote(ctx: Context<Vote>, support: bool) -> Result<()> {
        instructions::vote::handler(ctx, support)
    }

    /// Settle a proposal whose voting period has ended.
    pub fn finalize_proposal(ctx: Context<FinalizeProposal>) -> Result<()> {
        instructions::finalize_proposal::handler(ctx)
    }

    /// Report an operational error against the analytics record
    /// (analytics authority only).
    pub fn record_error(ctx: Context<RecordError>) -> Result<()> {
        instructions::system_health::record_error_handler(ctx)
    }

    /// Recompute the derived Healthy/Degraded status from the rolling
    /// error rate. Permissionless.
    pub fn update_system_health(ctx: Context<UpdateSystemHealth>) -> Result<()> {
        instructions::system_health::update_health_handler(ctx)
    }

    /// Pause or resume marketplace mutations (program authority only).
    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::set_paused::handler(ctx, paused)
    }
}
