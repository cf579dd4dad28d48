//! Error codes for the AI Nexus task marketplace.
//!
//! The enumeration order is part of the external contract: callers match on
//! the numeric codes (6000 + variant index), so new variants are only ever
//! appended.

use anchor_lang::prelude::*;

#[error_code]
pub enum NexusError {
    // 6000
    #[msg("Signer is not authorized to perform this action")]
    Unauthorized,

    // 6001
    #[msg("Task is not in the required status for this transition")]
    InvalidTaskStatus,

    // 6002
    #[msg("Task deadline has passed")]
    TaskDeadlinePassed,

    // 6003
    #[msg("An agent is already registered for this owner")]
    AgentAlreadyRegistered,

    // 6004
    #[msg("Supplied account does not match the derived address")]
    AddressMismatch,

    // 6005
    #[msg("Deadline must be in the future")]
    InvalidDeadline,

    // 6006
    #[msg("Reward must be greater than zero")]
    InvalidReward,

    // 6007
    #[msg("Agent is not active")]
    AgentNotActive,

    // 6008
    #[msg("Rate limit exceeded for this identity")]
    RateLimitExceeded,

    // 6009
    #[msg("Staked amount is below the required minimum")]
    InsufficientStake,

    // 6010
    #[msg("Token balance is insufficient for this transfer")]
    InsufficientBalance,

    // 6011
    /// Never constructed by handlers: rent shortfalls surface as
    /// system-program errors. The variant holds its slot so later codes
    /// stay stable.
    #[msg("Insufficient funds to pay for account storage")]
    InsufficientFunds,

    // 6012
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    // 6013
    #[msg("String exceeds maximum allowed length")]
    StringTooLong,

    // 6014
    #[msg("Proposal is not active")]
    ProposalNotActive,

    // 6015
    #[msg("Voting period has ended")]
    VotingEnded,

    // 6016
    #[msg("Voting period has not ended")]
    VotingNotEnded,

    // 6017
    #[msg("Already voted on this proposal")]
    AlreadyVoted,

    // 6018
    #[msg("Voting period is out of bounds")]
    InvalidVotingPeriod,

    // 6019
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    // 6020
    #[msg("Marketplace is paused")]
    ProtocolPaused,

    // 6021
    #[msg("Invalid input parameter")]
    InvalidInput,
}
