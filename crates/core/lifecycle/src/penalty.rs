use iso8601_timestamp::{Duration, Timestamp};

use gather_result::Result;

use crate::PenaltyType;

/// Validate a penalty request against its target and duration
///
/// Administrators cannot be penalized. Suspensions require a duration,
/// warnings and bans must not carry one.
pub fn validate_penalty(
    target_privileged: bool,
    penalty_type: &PenaltyType,
    duration_days: Option<i64>,
) -> Result<()> {
    if target_privileged {
        return Err(create_error!(CannotPenalizeAdmin));
    }

    match penalty_type {
        PenaltyType::Suspension => {
            if duration_days.is_none() {
                return Err(create_error!(DurationRequired));
            }
        }
        PenaltyType::Warning | PenaltyType::Ban => {
            if duration_days.is_some() {
                return Err(create_error!(DurationNotAllowed));
            }
        }
    }

    Ok(())
}

/// When a suspension issued now lapses
pub fn suspension_expiry(now: Timestamp, duration_days: i64) -> Timestamp {
    now + Duration::days(duration_days)
}

/// Whether a ban has lapsed
///
/// Permanent bans carry no end date and never lapse.
pub fn ban_lapsed(until: Option<Timestamp>, now: Timestamp) -> bool {
    until.is_some_and(|until| now > until)
}
