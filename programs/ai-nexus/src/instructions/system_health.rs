//! Operational error reporting and derived health status.
//!
//! The analytics authority reports errors observed off-chain (failed
//! submissions, infrastructure faults); anyone may then recompute the
//! derived Healthy/Degraded status from the rolling error rate.

use crate::errors::NexusError;
use crate::events::{ErrorRecorded, SystemHealthChecked};
use crate::state::{Analytics, SystemStatus};
use anchor_lang::prelude::*;

use super::constants::{DEGRADED_ERROR_THRESHOLD, HEALTH_WINDOW};

#[derive(Accounts)]
pub struct RecordError<'info> {
    #[account(
        mut,
        seeds = [b"analytics"],
        bump = analytics.bump,
        has_one = authority @ NexusError::Unauthorized
    )]
    pub analytics: Account<'info, Analytics>,

    pub authority: Signer<'info>,
}

pub fn record_error_handler(ctx: Context<RecordError>) -> Result<()> {
    let clock = Clock::get()?;
    let analytics = &mut ctx.accounts.analytics;

    analytics.error_count = analytics
        .error_count
        .checked_add(1)
        .ok_or(NexusError::ArithmeticOverflow)?;
    analytics.last_error_at = clock.unix_timestamp;

    emit!(ErrorRecorded {
        error_count: analytics.error_count,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateSystemHealth<'info> {
    #[account(
        mut,
        seeds = [b"analytics"],
        bump = analytics.bump
    )]
    pub analytics: Account<'info, Analytics>,

    /// Anyone may crank a health recomputation.
    pub payer: Signer<'info>,
}

/// Health derived from errors observed since the last check, normalized to
/// errors per [`HEALTH_WINDOW`]. A zero or backwards elapsed time compares
/// the raw count against the threshold.
pub fn derive_status(errors_since_last_check: u64, elapsed_secs: i64) -> SystemStatus {
    let rate = if elapsed_secs <= 0 {
        errors_since_last_check
    } else {
        let scaled = (errors_since_last_check as u128) * (HEALTH_WINDOW as u128)
            / (elapsed_secs as u128);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    };
    if rate > DEGRADED_ERROR_THRESHOLD {
        SystemStatus::Degraded
    } else {
        SystemStatus::Healthy
    }
}

pub fn update_health_handler(ctx: Context<UpdateSystemHealth>) -> Result<()> {
    let clock = Clock::get()?;
    let analytics = &mut ctx.accounts.analytics;

    let errors_in_window = analytics
        .error_count
        .saturating_sub(analytics.errors_at_last_check);
    let elapsed = clock.unix_timestamp.saturating_sub(analytics.last_updated);

    analytics.system_status = derive_status(errors_in_window, elapsed);
    analytics.errors_at_last_check = analytics.error_count;
    analytics.last_updated = clock.unix_timestamp;

    emit!(SystemHealthChecked {
        status: analytics.system_status as u8,
        errors_in_window,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_errors_is_healthy() {
        assert_eq!(derive_status(0, HEALTH_WINDOW), SystemStatus::Healthy);
    }

    #[test]
    fn test_rate_at_threshold_is_healthy() {
        assert_eq!(
            derive_status(DEGRADED_ERROR_THRESHOLD, HEALTH_WINDOW),
            SystemStatus::Healthy
        );
    }

    #[test]
    fn test_rate_above_threshold_is_degraded() {
        assert_eq!(
            derive_status(DEGRADED_ERROR_THRESHOLD + 1, HEALTH_WINDOW),
            SystemStatus::Degraded
        );
    }

    #[test]
    fn test_short_window_scales_rate_up() {
        // 6 errors in a tenth of the window is a rate of 60 per window
        assert_eq!(
            derive_status(6, HEALTH_WINDOW / 10),
            SystemStatus::Degraded
        );
    }

    #[test]
    fn test_long_window_scales_rate_down() {
        // threshold+1 errors spread over two windows stays healthy
        assert_eq!(
            derive_status(DEGRADED_ERROR_THRESHOLD + 1, 2 * HEALTH_WINDOW),
            SystemStatus::Healthy
        );
    }

    #[test]
    fn test_zero_elapsed_uses_raw_count() {
        assert_eq!(derive_status(5, 0), SystemStatus::Healthy);
        assert_eq!(
            derive_status(DEGRADED_ERROR_THRESHOLD + 1, 0),
            SystemStatus::Degraded
        );
    }
}
