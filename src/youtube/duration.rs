use regex::Regex;
use std::sync::LazyLock;

/// Display value for empty or unparseable durations.
pub const FALLBACK: &str = "0:00";

// Unanchored: the first `PT...` run in the input wins. ASCII digits only.
static ISO_DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PT(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?").unwrap());

/// Hours/minutes/seconds pulled out of a `PT#H#M#S` string. Not normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

pub fn parse_duration(iso: &str) -> Option<DurationParts> {
    if iso.is_empty() {
        return None;
    }

    let caps = ISO_DURATION_RE.captures(iso)?;
    let group = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    Some(DurationParts {
        hours: group(1)?,
        minutes: group(2)?,
        seconds: group(3)?,
    })
}

/// Format an ISO-8601 time duration (`PT8M20S`) as a clock string (`8:20`).
///
/// Hours are only shown when non-zero (`PT1H5M9S` becomes `1:05:09`).
/// Anything that does not parse yields [`FALLBACK`] instead of an error.
pub fn format_duration(iso: &str) -> String {
    match parse_duration(iso) {
        Some(parts) => parts.to_string(),
        None => FALLBACK.to_string(),
    }
}

impl std::fmt::Display for DurationParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hours == 0 {
            write!(f, "{}:{:02}", self.minutes, self.seconds)
        } else {
            write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        }
    }
}
