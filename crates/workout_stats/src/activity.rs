use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::WorkoutError;

/// The three supported activity kinds, keyed by the sensor package code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    /// Package code as sent by the sensor block.
    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Swimming => "SWM",
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
        }
    }

    /// Name shown in the rendered report.
    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::Swimming => "Swimming",
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional values a package of this kind must carry.
    pub fn arity(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| WorkoutError::UnknownActivity(s.to_string()))
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes() {
        assert_eq!("SWM".parse::<ActivityKind>().unwrap(), ActivityKind::Swimming);
        assert_eq!("RUN".parse::<ActivityKind>().unwrap(), ActivityKind::Running);
        assert_eq!(
            "WLK".parse::<ActivityKind>().unwrap(),
            ActivityKind::SportsWalking
        );
    }

    #[test]
    fn codes_are_case_sensitive() {
        let err = "run".parse::<ActivityKind>().unwrap_err();
        assert!(matches!(err, WorkoutError::UnknownActivity(code) if code == "run"));
    }

    #[test]
    fn display_uses_code_and_name_is_separate() {
        assert_eq!(ActivityKind::SportsWalking.to_string(), "WLK");
        assert_eq!(ActivityKind::SportsWalking.name(), "SportsWalking");
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&ActivityKind::Swimming).unwrap();
        assert_eq!(json, "\"SWM\"");
        let kind: ActivityKind = serde_json::from_str("\"WLK\"").unwrap();
        assert_eq!(kind, ActivityKind::SportsWalking);
    }
}
