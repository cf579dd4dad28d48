//! Events emitted by the AI Nexus task marketplace.
//!
//! Clients subscribe to these for marketplace activity feeds and analytics
//! dashboards; every successful mutating instruction emits exactly one.

use anchor_lang::prelude::*;

/// Emitted when the global state is initialized
#[event]
pub struct StateInitialized {
    pub authority: Pubkey,
    pub timestamp: i64,
}

/// Emitted when a new agent registers
#[event]
pub struct AgentRegistered {
    pub agent_id: u64,
    pub owner: Pubkey,
    pub name: String,
    pub timestamp: i64,
}

/// Emitted when an agent's active flag changes
#[event]
pub struct AgentStatusChanged {
    pub agent_id: u64,
    pub is_active: bool,
    pub timestamp: i64,
}

/// Emitted when an agent's reputation is adjusted by the authority
#[event]
pub struct ReputationUpdated {
    pub agent_id: u64,
    pub old_score: u64,
    pub new_score: u64,
    pub timestamp: i64,
}

/// Emitted when a new task is created
#[event]
pub struct TaskCreated {
    pub task_id: u64,
    pub creator: Pubkey,
    pub reward: u64,
    pub deadline: i64,
    pub timestamp: i64,
}

/// Emitted when a task is assigned to an agent
#[event]
pub struct TaskAssigned {
    pub task_id: u64,
    pub agent_id: u64,
    pub assigned_agent: Pubkey,
    pub timestamp: i64,
}

/// Emitted when the assigned agent completes a task
#[event]
pub struct TaskCompleted {
    pub task_id: u64,
    pub agent_id: u64,
    pub result_uri: String,
    pub timestamp: i64,
}

/// Emitted when tokens are staked into the governance vault
#[event]
pub struct TokensStaked {
    pub staker: Pubkey,
    pub amount: u64,
    pub total_staked: u64,
    pub timestamp: i64,
}

/// Emitted when the governance authority adjusts parameters
#[event]
pub struct GovernanceUpdated {
    pub min_stake_for_proposal: u64,
    pub max_voting_period: i64,
    pub timestamp: i64,
}

/// Emitted when a governance proposal is created
#[event]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub proposer: Pubkey,
    pub end_time: i64,
    pub timestamp: i64,
}

/// Emitted when a ballot is cast on a proposal
#[event]
pub struct VoteCast {
    pub proposal_id: u64,
    pub voter: Pubkey,
    pub support: bool,
    pub weight: u64,
    pub votes_for: u64,
    pub votes_against: u64,
    pub timestamp: i64,
}

/// Emitted when a proposal leaves the Active state
#[event]
pub struct ProposalSettled {
    pub proposal_id: u64,
    /// Final ProposalStatus as u8 (1=Passed, 2=Rejected, 3=Expired)
    pub status: u8,
    pub votes_for: u64,
    pub votes_against: u64,
    pub timestamp: i64,
}

/// Emitted when a rate limit rejects an action.
/// Note: discarded with the failed transaction; visible in simulation logs.
#[event]
pub struct RateLimitHit {
    pub owner: Pubkey,
    pub actions_in_window: u32,
    pub cooldown_remaining: i64,
    pub timestamp: i64,
}

/// Emitted when the authority reports an operational error
#[event]
pub struct ErrorRecorded {
    pub error_count: u64,
    pub timestamp: i64,
}

/// Emitted when the derived health status is recomputed
#[event]
pub struct SystemHealthChecked {
    /// SystemStatus as u8 (0=Healthy, 1=Degraded)
    pub status: u8,
    pub errors_in_window: u64,
    pub timestamp: i64,
}

/// Emitted when the pause flag is toggled
#[event]
pub struct PauseToggled {
    pub is_paused: bool,
    pub timestamp: i64,
}
