use std::fmt;

/// Errors raised while configuring or driving a timeline.
///
/// Date parsing never produces one of these: an unreadable date is simply
/// absent data (see [`crate::date_format::normalize_date`]).
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TimelineError {
    /// A dash-convention name that is neither `ymd` nor `ydm`.
    UnknownDashConvention(String),
    /// A configuration document that could not be parsed.
    InvalidConfig(String),
    /// A user-supplied date (e.g. a window bound) that does not normalize.
    InvalidDate(String),
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineError::UnknownDashConvention(name) => {
                write!(f, "Unknown dash date convention: {}", name)
            }
            TimelineError::InvalidConfig(msg) => write!(f, "Invalid timeline config: {}", msg),
            TimelineError::InvalidDate(raw) => write!(f, "Date error: {}", raw),
        }
    }
}

impl std::error::Error for TimelineError {}
