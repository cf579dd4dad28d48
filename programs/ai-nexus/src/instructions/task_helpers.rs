//! Shared validation for task parameters and bounded text fields.

use crate::errors::NexusError;
use crate::utils::validation::is_clean_text;
use anchor_lang::prelude::*;

use super::constants::MAX_DEADLINE_SECONDS;

/// A deadline must be strictly in the future and within one year.
pub fn validate_deadline(deadline: i64, now: i64) -> Result<()> {
    require!(deadline > now, NexusError::InvalidDeadline);
    require!(
        deadline.saturating_sub(now) <= MAX_DEADLINE_SECONDS,
        NexusError::InvalidDeadline
    );
    Ok(())
}

/// Bounded, printable text field. Empty strings are allowed; callers that
/// require non-empty input check that separately.
pub fn validate_text(value: &str, max_len: usize) -> Result<()> {
    require!(value.len() <= max_len, NexusError::StringTooLong);
    require!(is_clean_text(value), NexusError::InvalidInput);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_future_deadline_accepted() {
        assert!(validate_deadline(NOW + 3600, NOW).is_ok());
    }

    #[test]
    fn test_past_deadline_rejected() {
        let err = validate_deadline(NOW - 1, NOW).unwrap_err();
        assert_eq!(err, NexusError::InvalidDeadline.into());
    }

    #[test]
    fn test_deadline_equal_to_now_rejected() {
        assert!(validate_deadline(NOW, NOW).is_err());
    }

    #[test]
    fn test_deadline_beyond_one_year_rejected() {
        let err = validate_deadline(NOW + MAX_DEADLINE_SECONDS + 1, NOW).unwrap_err();
        assert_eq!(err, NexusError::InvalidDeadline.into());
    }

    #[test]
    fn test_text_within_bound_accepted() {
        assert!(validate_text("summarize the dataset", 256).is_ok());
    }

    #[test]
    fn test_text_over_bound_rejected() {
        let long = "x".repeat(257);
        let err = validate_text(&long, 256).unwrap_err();
        assert_eq!(err, NexusError::StringTooLong.into());
    }

    #[test]
    fn test_text_with_control_chars_rejected() {
        let err = validate_text("bad\nvalue", 256).unwrap_err();
        assert_eq!(err, NexusError::InvalidInput.into());
    }
}
