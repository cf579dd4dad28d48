//! Instruction handlers for the AI Nexus task marketplace

pub mod constants;
pub mod proposal_helpers;
pub mod rate_limit_helpers;
pub mod task_helpers;

pub mod assign_task;
pub mod complete_task;
pub mod create_proposal;
pub mod create_task;
pub mod finalize_proposal;
pub mod initialize;
pub mod initialize_analytics;
pub mod initialize_governance;
pub mod initialize_rate_limiter;
pub mod register_agent;
pub mod set_agent_active;
pub mod set_paused;
pub mod stake_tokens;
pub mod system_health;
pub mod update_governance;
pub mod update_reputation;
pub mod vote;

#[allow(ambiguous_glob_reexports)]
pub use assign_task::*;
#[allow(ambiguous_glob_reexports)]
pub use complete_task::*;
#[allow(ambiguous_glob_reexports)]
pub use create_proposal::*;
#[allow(ambiguous_glob_reexports)]
pub use create_task::*;
#[allow(ambiguous_glob_reexports)]
pub use finalize_proposal::*;
#[allow(ambiguous_glob_reexports)]
pub use initialize::*;
#[allow(ambiguous_glob_reexports)]
pub use initialize_analytics::*;
#[allow(ambiguous_glob_reexports)]
pub use initialize_governance::*;
#[allow(ambiguous_glob_reexports)]
pub use initialize_rate_limiter::*;
#[allow(ambiguous_glob_reexports)]
pub use register_agent::*;
#[allow(ambiguous_glob_reexports)]
pub use set_agent_active::*;
#[allow(ambiguous_glob_reexports)]
pub use set_paused::*;
#[allow(ambiguous_glob_reexports)]
pub use stake_tokens::*;
#[allow(ambiguous_glob_reexports)]
pub use system_health::*;
#[allow(ambiguous_glob_reexports)]
pub use update_governance::*;
#[allow(ambiguous_glob_reexports)]
pub use update_reputation::*;
#[allow(ambiguous_glob_reexports)]
pub use vote::*;
