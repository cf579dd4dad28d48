//! Per-identity rate limiting shared by registration and task creation.
//!
//! Two mechanisms gate every throttled call: a minimum interval between
//! consecutive actions and a cap on actions per rolling window. A limiter
//! that has never recorded an action always passes.

use crate::errors::NexusError;
use crate::events::RateLimitHit;
use crate::state::RateLimiter;
use anchor_lang::prelude::*;

use super::constants::{MAX_ACTIONS_PER_WINDOW, MIN_ACTION_INTERVAL, RATE_LIMIT_WINDOW};

/// Outcome of evaluating a limiter against the current time.
#[derive(Debug, PartialEq, Eq)]
pub enum RateDecision {
    /// Action may proceed; `reset_window` indicates the window expired
    Allow { reset_window: bool },
    /// Action rejected; seconds until the cooldown lifts (0 if window-capped)
    Reject { cooldown_remaining: i64 },
}

/// Pure rate-limit evaluation. Timestamps use saturating subtraction so a
/// backwards clock never underflows.
pub fn evaluate(last_action: i64, actions_in_window: u32, window_start: i64, now: i64) -> RateDecision {
    if last_action > 0 {
        let elapsed = now.saturating_sub(last_action);
        if elapsed < MIN_ACTION_INTERVAL {
            return RateDecision::Reject {
                cooldown_remaining: MIN_ACTION_INTERVAL.saturating_sub(elapsed),
            };
        }
    }

    let window_expired = now.saturating_sub(window_start) >= RATE_LIMIT_WINDOW;
    if !window_expired && actions_in_window >= MAX_ACTIONS_PER_WINDOW {
        return RateDecision::Reject {
            cooldown_remaining: 0,
        };
    }

    RateDecision::Allow {
        reset_window: window_expired,
    }
}

/// Checks the limiter and, on success, records the action in place.
///
/// A freshly initialized limiter (owner unset) is claimed for `owner` here
/// so registration and the explicit `initialize_rate_limiter` path converge
/// on the same state.
pub fn check_and_record(
    limiter: &mut RateLimiter,
    owner: Pubkey,
    bump: u8,
    now: i64,
) -> Result<()> {
    if limiter.owner == Pubkey::default() {
        limiter.owner = owner;
        limiter.bump = bump;
        limiter.window_start = aligned_window_start(now);
    }
    require_keys_eq!(limiter.owner, owner, NexusError::AddressMismatch);

    match evaluate(
        limiter.last_action,
        limiter.actions_in_window,
        limiter.window_start,
        now,
    ) {
        RateDecision::Reject { cooldown_remaining } => {
            emit!(RateLimitHit {
                owner,
                actions_in_window: limiter.actions_in_window,
                cooldown_remaining,
                timestamp: now,
            });
            Err(NexusError::RateLimitExceeded.into())
        }
        RateDecision::Allow { reset_window } => {
            if reset_window {
                limiter.window_start = aligned_window_start(now);
                limiter.actions_in_window = 0;
            }
            limiter.actions_in_window = limiter
                .actions_in_window
                .checked_add(1)
                .ok_or(NexusError::ArithmeticOverflow)?;
            limiter.last_action = now;
            Ok(())
        }
    }
}

/// Round window start down to the window boundary to prevent drift.
pub fn aligned_window_start(now: i64) -> i64 {
    (now / RATE_LIMIT_WINDOW) * RATE_LIMIT_WINDOW
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_fresh_identity_always_passes() {
        assert_eq!(
            evaluate(0, 0, 0, NOW),
            RateDecision::Allow { reset_window: true }
        );
    }

    #[test]
    fn test_action_within_cooldown_rejected() {
        let decision = evaluate(NOW - 1, 1, aligned_window_start(NOW), NOW);
        assert_eq!(
            decision,
            RateDecision::Reject {
                cooldown_remaining: MIN_ACTION_INTERVAL - 1
            }
        );
    }

    #[test]
    fn test_action_after_cooldown_allowed() {
        let decision = evaluate(
            NOW - MIN_ACTION_INTERVAL,
            1,
            aligned_window_start(NOW),
            NOW,
        );
        assert_eq!(
            decision,
            RateDecision::Allow {
                reset_window: false
            }
        );
    }

    #[test]
    fn test_window_cap_rejected() {
        let decision = evaluate(
            NOW - MIN_ACTION_INTERVAL,
            MAX_ACTIONS_PER_WINDOW,
            aligned_window_start(NOW),
            NOW,
        );
        assert_eq!(
            decision,
            RateDecision::Reject {
                cooldown_remaining: 0
            }
        );
    }

    #[test]
    fn test_expired_window_resets_cap() {
        let old_window = aligned_window_start(NOW) - 2 * RATE_LIMIT_WINDOW;
        let decision = evaluate(
            NOW - MIN_ACTION_INTERVAL,
            MAX_ACTIONS_PER_WINDOW,
            old_window,
            NOW,
        );
        assert_eq!(decision, RateDecision::Allow { reset_window: true });
    }

    #[test]
    fn test_backwards_clock_does_not_underflow() {
        // last_action ahead of now: elapsed saturates to 0, still in cooldown
        let decision = evaluate(NOW + 100, 1, aligned_window_start(NOW), NOW);
        assert_eq!(
            decision,
            RateDecision::Reject {
                cooldown_remaining: MIN_ACTION_INTERVAL
            }
        );
    }

    #[test]
    fn test_check_and_record_claims_fresh_limiter() {
        let mut limiter = RateLimiter::default();
        let owner = Pubkey::new_unique();
        check_and_record(&mut limiter, owner, 254, NOW).unwrap();
        assert_eq!(limiter.owner, owner);
        assert_eq!(limiter.actions_in_window, 1);
        assert_eq!(limiter.last_action, NOW);
        assert_eq!(limiter.window_start, aligned_window_start(NOW));
    }

    #[test]
    fn test_check_and_record_back_to_back_rejected() {
        let mut limiter = RateLimiter::default();
        let owner = Pubkey::new_unique();
        check_and_record(&mut limiter, owner, 254, NOW).unwrap();
        let err = check_and_record(&mut limiter, owner, 254, NOW + 1).unwrap_err();
        assert_eq!(err, NexusError::RateLimitExceeded.into());
        // rejection must not consume window budget
        assert_eq!(limiter.actions_in_window, 1);
    }
}
