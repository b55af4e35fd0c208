use time::{macros::format_description, OffsetDateTime, UtcOffset};
use uuid::Uuid;
use crate::error::GateError;
use crate::models::ProjectConfig;

/// Recorded as the voter address when no forwarded address is available.
pub const NO_IP: &str = "noIp";
pub const VOTED_COOKIE_PREFIX: &str = "voted";
pub const VOTED_COOKIE_VALUE: &str = "true";

/// Half-open window check: `start <= now < end`.
pub fn is_between(start: OffsetDateTime, end: OffsetDateTime, now: OffsetDateTime) -> bool {
    start <= now && now < end
}

pub fn check_voting_open(config: &ProjectConfig, now: OffsetDateTime) -> Result<(), GateError> {
    if !config.use_time {
        return match config.voting_enabled {
            true => Ok(()),
            false => Err(GateError::Locked),
        };
    }

    if is_between(config.voting_start_day_and_time, config.voting_end_day_and_time, now) {
        Ok(())
    } else {
        Err(outside_window(config.voting_start_day_and_time))
    }
}

fn outside_window(starts_at: OffsetDateTime) -> GateError {
    let starts_at = starts_at.to_offset(UtcOffset::UTC);
    let day = starts_at
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| starts_at.date().to_string());
    let time = starts_at
        .format(format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| starts_at.time().to_string());
    GateError::OutsideWindow { day, time }
}

/// Cookie marking that this browser already voted in a project's gender category.
pub fn voted_cookie_name(project_id: &Uuid, gender: &str) -> String {
    format!("{}{}{}", VOTED_COOKIE_PREFIX, project_id, gender)
}

/// First hop of an `X-Forwarded-For` value, or [`NO_IP`].
///
/// The hop is trimmed, and a blank first hop counts as missing rather than
/// being stored as whitespace.
pub fn first_forwarded_ip(header: Option<&str>) -> String {
    header
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(NO_IP)
        .to_string()
}
