//! Instinctive Drives: four drives scored 1-9 and their USE/NEUTRAL/AVOID bands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of the four Instinctive Drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drive {
    Verify,
    Authenticate,
    Complete,
    Improvise,
}

impl Drive {
    pub const ALL: [Drive; 4] = [
        Drive::Verify,
        Drive::Authenticate,
        Drive::Complete,
        Drive::Improvise,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Verify => "Verify",
            Self::Authenticate => "Authenticate",
            Self::Complete => "Complete",
            Self::Improvise => "Improvise",
        }
    }

    pub fn describe(&self, band: DriveBand) -> &'static str {
        use DriveBand::*;
        match (self, band) {
            (Self::Verify, Use) => "needs to research, test, and confirm before committing",
            (Self::Verify, Neutral) => "checks facts when it matters, without needing proof for everything",
            (Self::Verify, Avoid) => "trusts instinct and moves without exhaustive proof",
            (Self::Authenticate, Use) => "needs things to be real, tangible, and demonstrated",
            (Self::Authenticate, Neutral) => "values practicality without insisting on hands-on proof",
            (Self::Authenticate, Avoid) => "comfortable with concepts, models, and abstractions",
            (Self::Complete, Use) => "needs structure, order, and to finish what is started",
            (Self::Complete, Neutral) => "works with structure or without it as the job needs",
            (Self::Complete, Avoid) => "avoids rigid systems and gets bored with routine follow-through",
            (Self::Improvise, Use) => "thrives on urgency, variety, and thinking on the fly",
            (Self::Improvise, Neutral) => "can improvise when required but does not seek it out",
            (Self::Improvise, Avoid) => "prefers a plan and dislikes last-minute changes",
        }
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which way a drive score points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DriveBand {
    Use,
    Neutral,
    Avoid,
}

impl DriveBand {
    /// `>= 6` is USE, `<= 4` is AVOID, exactly 5 is NEUTRAL.
    pub fn classify(score: u8) -> Self {
        match score {
            0..=4 => Self::Avoid,
            5 => Self::Neutral,
            _ => Self::Use,
        }
    }
}

/// A single drive score, 1 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DriveScore(u8);

impl DriveScore {
    pub const NEUTRAL: Self = Self(5);

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=9).contains(&value) {
            return Err(ValidationError::out_of_range("drive_score", 1, 9, value as i32));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn band(&self) -> DriveBand {
        DriveBand::classify(self.0)
    }
}

impl Default for DriveScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<u8> for DriveScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DriveScore> for u8 {
    fn from(score: DriveScore) -> Self {
        score.0
    }
}

/// Scores for all four drives; every drive defaults to neutral (5).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveScores {
    pub verify: DriveScore,
    pub authenticate: DriveScore,
    pub complete: DriveScore,
    pub improvise: DriveScore,
}

impl DriveScores {
    pub fn new(verify: u8, authenticate: u8, complete: u8, improvise: u8) -> Result<Self, ValidationError> {
        Ok(Self {
            verify: DriveScore::new(verify)?,
            authenticate: DriveScore::new(authenticate)?,
            complete: DriveScore::new(complete)?,
            improvise: DriveScore::new(improvise)?,
        })
    }

    pub fn get(&self, drive: Drive) -> DriveScore {
        match drive {
            Drive::Verify => self.verify,
            Drive::Authenticate => self.authenticate,
            Drive::Complete => self.complete,
            Drive::Improvise => self.improvise,
        }
    }

    /// Engaged once any drive has moved off neutral.
    pub fn is_engaged(&self) -> bool {
        Drive::ALL.iter().any(|d| self.get(*d) != DriveScore::NEUTRAL)
    }

    /// Drive with the highest USE score, earliest drive on ties.
    pub fn strongest_use(&self) -> Option<Drive> {
        Drive::ALL
            .iter()
            .copied()
            .filter(|d| self.get(*d).band() == DriveBand::Use)
            .fold(None, |best: Option<Drive>, d| match best {
                Some(b) if self.get(b) >= self.get(d) => Some(b),
                _ => Some(d),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_bands_cover_every_score() {
        for score in 1..=9u8 {
            let band = DriveBand::classify(score);
            match score {
                1..=4 => assert_eq!(band, DriveBand::Avoid),
                5 => assert_eq!(band, DriveBand::Neutral),
                _ => assert_eq!(band, DriveBand::Use),
            }
        }
    }

    #[test]
    fn scores_outside_one_to_nine_are_rejected() {
        assert!(DriveScore::new(0).is_err());
        assert!(DriveScore::new(10).is_err());
        assert!(DriveScores::new(5, 5, 5, 11).is_err());
    }

    #[test]
    fn default_scores_are_not_engaged() {
        assert!(!DriveScores::default().is_engaged());
        let moved = DriveScores::new(5, 5, 6, 5).unwrap();
        assert!(moved.is_engaged());
    }

    #[test]
    fn strongest_use_picks_highest_then_earliest() {
        let scores = DriveScores::new(7, 3, 8, 8).unwrap();
        assert_eq!(scores.strongest_use(), Some(Drive::Complete));
        assert_eq!(DriveScores::default().strongest_use(), None);
    }

    #[test]
    fn partial_json_fills_neutral_defaults() {
        let scores: DriveScores = serde_json::from_str(r#"{"improvise": 9}"#).unwrap();
        assert_eq!(scores.improvise.value(), 9);
        assert_eq!(scores.verify, DriveScore::NEUTRAL);
        assert!(serde_json::from_str::<DriveScores>(r#"{"verify": 0}"#).is_err());
    }

    #[test]
    fn band_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&DriveBand::Use).unwrap(), "\"USE\"");
    }
}
