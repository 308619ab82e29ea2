//! `Zone` — how an absolute instant is mapped onto a civil calendar date.

/// The time zone used to read the civil date of an absolute instant.
///
/// Lunar conversion works on whole civil days, so the same instant can fall
/// on different lunar dates depending on the zone it is observed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    /// The host's local time zone, including its daylight-saving rules.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
    /// A fixed offset east of UTC, in seconds (e.g. `8 * 3600` for CST).
    Fixed {
        /// Offset east of UTC in seconds; must lie strictly within ±24h.
        offset_seconds: i32,
    },
}

impl Zone {
    /// China Standard Time (UTC+8), the zone the traditional calendar is
    /// reckoned in.
    pub const CHINA_STANDARD_TIME: Zone = Zone::Fixed {
        offset_seconds: 8 * 3600,
    };
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Local => write!(f, "local"),
            Zone::Utc => write!(f, "UTC"),
            Zone::Fixed { offset_seconds } => {
                let sign = if *offset_seconds < 0 { '-' } else { '+' };
                let abs = offset_seconds.unsigned_abs();
                write!(f, "UTC{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Zone::Local.to_string(), "local");
        assert_eq!(Zone::Utc.to_string(), "UTC");
        assert_eq!(Zone::CHINA_STANDARD_TIME.to_string(), "UTC+08:00");
        assert_eq!(
            Zone::Fixed {
                offset_seconds: -(5 * 3600 + 30 * 60)
            }
            .to_string(),
            "UTC-05:30"
        );
    }
}
