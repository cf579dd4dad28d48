//! Account state structures for the AI Nexus task marketplace

use anchor_lang::prelude::*;

/// Maximum length of an agent name in bytes
pub const MAX_NAME_LEN: usize = 64;

/// Maximum length of agent/task/proposal descriptions in bytes
pub const MAX_DESCRIPTION_LEN: usize = 256;

/// Maximum length of metadata and result URIs in bytes
pub const MAX_URI_LEN: usize = 128;

/// Task lifecycle status
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default, InitSpace)]
#[repr(u8)]
pub enum TaskStatus {
    #[default]
    Open = 0,
    Assigned = 1,
    Completed = 2,
}

impl TaskStatus {
    /// Validates whether a status transition is allowed.
    ///
    /// Valid transitions:
    /// - Open → Assigned (when an agent is assigned)
    /// - Assigned → Completed (when the assigned agent submits a result)
    ///
    /// Completed is terminal. No transition skips a state or reverses.
    pub fn can_transition_to(&self, new_status: TaskStatus) -> bool {
        use TaskStatus::*;
        matches!((self, new_status), (Open, Assigned) | (Assigned, Completed))
    }
}

/// Governance proposal status
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default, InitSpace)]
#[repr(u8)]
pub enum ProposalStatus {
    /// Proposal is accepting votes
    #[default]
    Active = 0,
    /// Majority voted for
    Passed = 1,
    /// Majority voted against (or tie)
    Rejected = 2,
    /// Voting period ended with no votes cast
    Expired = 3,
}

/// How a voter's ballot is weighted when tallying proposals.
///
/// Chosen once at governance initialization. The original deployment left
/// the weighting scheme ambiguous, so it is an explicit policy here.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default, InitSpace)]
#[repr(u8)]
pub enum VoteWeightPolicy {
    /// One vote per staker regardless of stake size
    #[default]
    Flat = 0,
    /// Vote weight equals the voter's staked amount
    StakeWeighted = 1,
}

/// Derived marketplace health status
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default, InitSpace)]
#[repr(u8)]
pub enum SystemStatus {
    #[default]
    Healthy = 0,
    Degraded = 1,
}

/// Global marketplace state
/// PDA seeds: ["state"]
#[account]
#[derive(Default, InitSpace)]
pub struct State {
    /// Program authority, fixed at initialization
    pub authority: Pubkey,
    /// Total agents registered (monotonic)
    pub agent_count: u64,
    /// Total tasks created (monotonic)
    pub task_count: u64,
    /// Emergency pause flag for marketplace mutations
    pub is_paused: bool,
    /// Bump seed for PDA
    pub bump: u8,
}

impl State {
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        8 +  // agent_count
        8 +  // task_count
        1 +  // is_paused
        1; // bump
}

/// Registered agent account, one per owner wallet
/// PDA seeds: ["agent", owner]
#[account]
#[derive(Default, InitSpace)]
pub struct Agent {
    /// Sequential agent id, assigned from State.agent_count
    pub id: u64,
    /// Wallet holding signing authority over this agent
    pub owner: Pubkey,
    /// Display name (max 64 chars)
    #[max_len(64)]
    pub name: String,
    /// Agent description (max 256 chars)
    #[max_len(256)]
    pub description: String,
    /// Extended metadata URI (max 128 chars)
    #[max_len(128)]
    pub metadata_uri: String,
    /// Reputation score, adjusted only by the program authority
    pub reputation_score: u64,
    /// Total tasks completed by this agent
    pub tasks_completed: u64,
    /// Whether the agent can be assigned new tasks
    pub is_active: bool,
    /// Registration timestamp
    pub registered_at: i64,
    /// Bump seed
    pub bump: u8,
}

impl Agent {
    pub const SIZE: usize = 8 + // discriminator
        8 +  // id
        32 + // owner
        4 + 64 + // name (string)
        4 + 256 + // description (string)
        4 + 128 + // metadata_uri (string)
        8 +  // reputation_score
        8 +  // tasks_completed
        1 +  // is_active
        8 +  // registered_at
        1; // bump
}

/// Task account
/// PDA seeds: ["task", id (le bytes)]
#[account]
#[derive(Default, InitSpace)]
pub struct Task {
    /// Sequential task id, assigned from State.task_count
    pub id: u64,
    /// Task creator (paying party); immutable owner of the record
    pub creator: Pubkey,
    /// Id of the assigned agent, set on assignment
    pub agent_id: Option<u64>,
    /// Assigned agent PDA, set if and only if status is Assigned or Completed
    pub assigned_agent: Option<Pubkey>,
    /// Task description (max 256 chars)
    #[max_len(256)]
    pub description: String,
    /// Reward in lamports
    pub reward: u64,
    /// Deadline as unix timestamp; must be in the future at creation and assignment
    pub deadline: i64,
    /// Lifecycle status
    pub status: TaskStatus,
    /// Result URI, set if and only if status is Completed (max 128 chars)
    #[max_len(128)]
    pub result_uri: Option<String>,
    /// Creation timestamp
    pub created_at: i64,
    /// Bump seed
    pub bump: u8,
}

impl Task {
    pub const SIZE: usize = 8 + // discriminator
        8 +  // id
        32 + // creator
        9 +  // agent_id (Option<u64>)
        33 + // assigned_agent (Option<Pubkey>)
        4 + 256 + // description (string)
        8 +  // reward
        8 +  // deadline
        1 +  // status
        1 + 4 + 128 + // result_uri (Option<String>)
        8 +  // created_at
        1; // bump
}

/// Per-identity rate limiter gating write-amplifying calls
/// PDA seeds: ["rate_limiter", owner]
#[account]
#[derive(Default, InitSpace)]
pub struct RateLimiter {
    /// Identity being throttled
    pub owner: Pubkey,
    /// Timestamp of the last recorded action (0 = never)
    pub last_action: i64,
    /// Actions recorded in the current window
    pub actions_in_window: u32,
    /// Start of the current window (unix timestamp, rounded)
    pub window_start: i64,
    /// Bump seed
    pub bump: u8,
}

impl RateLimiter {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        8 +  // last_action
        4 +  // actions_in_window
        8 +  // window_start
        1; // bump
}

/// Marketplace-wide analytics counters and derived health
/// PDA seeds: ["analytics"]
#[account]
#[derive(Default, InitSpace)]
pub struct Analytics {
    /// Account that paid for and may report errors against this record
    pub authority: Pubkey,
    /// Total agents ever registered (additive, never decremented)
    pub total_agents_registered: u64,
    /// Total tasks ever created
    pub total_tasks_created: u64,
    /// Total tasks ever completed
    pub total_tasks_completed: u64,
    /// Total operational errors reported by the authority
    pub error_count: u64,
    /// Snapshot of error_count at the last health check
    pub errors_at_last_check: u64,
    /// Timestamp of the most recent reported error (0 = none)
    pub last_error_at: i64,
    /// Derived health, recomputed on each health check
    pub system_status: SystemStatus,
    /// Timestamp of the last health check
    pub last_updated: i64,
    /// Bump seed
    pub bump: u8,
}

impl Analytics {
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        8 +  // total_agents_registered
        8 +  // total_tasks_created
        8 +  // total_tasks_completed
        8 +  // error_count
        8 +  // errors_at_last_check
        8 +  // last_error_at
        1 +  // system_status
        8 +  // last_updated
        1; // bump
}

/// Governance configuration
/// PDA seeds: ["governance"]
#[account]
#[derive(Default, InitSpace)]
pub struct Governance {
    /// Governance authority, fixed at initialization; gates parameter
    /// updates
    pub authority: Pubkey,
    /// Total proposals created (monotonic)
    pub proposal_count: u64,
    /// Minimum staked amount required to create a proposal
    pub min_stake_for_proposal: u64,
    /// Upper bound on a proposal's voting period in seconds
    pub max_voting_period: i64,
    /// How ballots are weighted when tallying
    pub vote_weight_policy: VoteWeightPolicy,
    /// Bump seed
    pub bump: u8,
}

impl Governance {
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        8 +  // proposal_count
        8 +  // min_stake_for_proposal
        8 +  // max_voting_period
        1 +  // vote_weight_policy
        1; // bump

    /// Default cap on voting periods: 7 days
    pub const DEFAULT_MAX_VOTING_PERIOD: i64 = 7 * 24 * 60 * 60;
}

/// Staked token position for governance participation
/// PDA seeds: ["stake", staker]
#[account]
#[derive(Default, InitSpace)]
pub struct StakeAccount {
    /// Staking wallet
    pub staker: Pubkey,
    /// Total amount staked into the governance vault
    pub amount: u64,
    /// Timestamp of the most recent stake
    pub last_staked_at: i64,
    /// Bump seed
    pub bump: u8,
}

impl StakeAccount {
    pub const SIZE: usize = 8 + // discriminator
        32 + // staker
        8 +  // amount
        8 +  // last_staked_at
        1; // bump
}

/// Governance proposal
/// PDA seeds: ["proposal", id (le bytes)]
#[account]
#[derive(Default, InitSpace)]
pub struct Proposal {
    /// Sequential proposal id, assigned from Governance.proposal_count
    pub id: u64,
    /// Proposer wallet
    pub proposer: Pubkey,
    /// Proposal description (max 256 chars)
    #[max_len(256)]
    pub description: String,
    /// Weighted votes in favor
    pub votes_for: u64,
    /// Weighted votes against
    pub votes_against: u64,
    /// Creation timestamp
    pub start_time: i64,
    /// Voting deadline; settled lazily once passed
    pub end_time: i64,
    /// Current status
    pub status: ProposalStatus,
    /// Bump seed
    pub bump: u8,
}

impl Proposal {
    pub const SIZE: usize = 8 + // discriminator
        8 +  // id
        32 + // proposer
        4 + 256 + // description (string)
        8 +  // votes_for
        8 +  // votes_against
        8 +  // start_time
        8 +  // end_time
        1 +  // status
        1; // bump
}

/// Vote record, one per voter per proposal
/// PDA seeds: ["vote", proposal, voter]
#[account]
#[derive(Default, InitSpace)]
pub struct VoteRecord {
    /// Proposal being voted on
    pub proposal: Pubkey,
    /// Voting wallet
    pub voter: Pubkey,
    /// Ballot (true = for, false = against)
    pub support: bool,
    /// Weight applied to the tally
    pub weight: u64,
    /// Vote timestamp
    pub voted_at: i64,
    /// Bump seed
    pub bump: u8,
}

impl VoteRecord {
    pub const SIZE: usize = 8 + // discriminator
        32 + // proposal
        32 + // voter
        1 +  // support
        8 +  // weight
        8 +  // voted_at
        1; // bump
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: SIZE should equal INIT_SPACE (borsh serialized) + 8-byte discriminator.
    macro_rules! test_size_constant {
        ($struct:ty) => {
            assert_eq!(
                <$struct>::SIZE,
                <$struct as anchor_lang::Space>::INIT_SPACE + 8,
                concat!(stringify!($struct), "::SIZE mismatch with INIT_SPACE")
            );
        };
    }

    #[test]
    fn test_state_size() {
        test_size_constant!(State);
    }

    #[test]
    fn test_agent_size() {
        test_size_constant!(Agent);
    }

    #[test]
    fn test_task_size() {
        test_size_constant!(Task);
    }

    #[test]
    fn test_rate_limiter_size() {
        test_size_constant!(RateLimiter);
    }

    #[test]
    fn test_analytics_size() {
        test_size_constant!(Analytics);
    }

    #[test]
    fn test_governance_size() {
        test_size_constant!(Governance);
    }

    #[test]
    fn test_stake_account_size() {
        test_size_constant!(StakeAccount);
    }

    #[test]
    fn test_proposal_size() {
        test_size_constant!(Proposal);
    }

    #[test]
    fn test_vote_record_size() {
        test_size_constant!(VoteRecord);
    }

    #[test]
    fn test_open_task_can_only_become_assigned() {
        assert!(TaskStatus::Open.can_transition_to(TaskStatus::Assigned));
        assert!(!TaskStatus::Open.can_transition_to(TaskStatus::Completed));
        assert!(!TaskStatus::Open.can_transition_to(TaskStatus::Open));
    }

    #[test]
    fn test_assigned_task_can_only_become_completed() {
        assert!(TaskStatus::Assigned.can_transition_to(TaskStatus::Completed));
        assert!(!TaskStatus::Assigned.can_transition_to(TaskStatus::Open));
        assert!(!TaskStatus::Assigned.can_transition_to(TaskStatus::Assigned));
    }

    #[test]
    fn test_completed_task_is_terminal() {
        assert!(!TaskStatus::Completed.can_transition_to(TaskStatus::Open));
        assert!(!TaskStatus::Completed.can_transition_to(TaskStatus::Assigned));
        assert!(!TaskStatus::Completed.can_transition_to(TaskStatus::Completed));
    }

    #[test]
    fn test_default_statuses() {
        assert_eq!(TaskStatus::default(), TaskStatus::Open);
        assert_eq!(ProposalStatus::default(), ProposalStatus::Active);
        assert_eq!(SystemStatus::default(), SystemStatus::Healthy);
        assert_eq!(VoteWeightPolicy::default(), VoteWeightPolicy::Flat);
    }
}
