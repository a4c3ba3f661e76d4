//! MBTI quiz: 20 seven-point Likert questions, four per axis.
//!
//! Statements describe the right-hand pole unless `reverse` is set. Each
//! response is oriented so 1 means the left pole and 7 the right; an axis
//! average of 4 or less picks the left letter.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::QuizError;
use crate::domain::foundation::Percentage;
use crate::domain::frameworks::{Dichotomy, MbtiType};

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 7;
pub const LIKERT_NEUTRAL: f64 = 4.0;

/// The four letter axes plus the Identity (Assertive / Turbulent) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MbtiAxis {
    EnergyFocus,
    Perception,
    Judgment,
    Lifestyle,
    Identity,
}

impl MbtiAxis {
    pub const ALL: [MbtiAxis; 5] = [
        MbtiAxis::EnergyFocus,
        MbtiAxis::Perception,
        MbtiAxis::Judgment,
        MbtiAxis::Lifestyle,
        MbtiAxis::Identity,
    ];

    pub fn poles(&self) -> (char, char) {
        match self {
            Self::EnergyFocus => Dichotomy::EnergyFocus.poles(),
            Self::Perception => Dichotomy::Perception.poles(),
            Self::Judgment => Dichotomy::Judgment.poles(),
            Self::Lifestyle => Dichotomy::Lifestyle.poles(),
            Self::Identity => ('A', 'T'),
        }
    }
}

/// Assertive or Turbulent; not part of the four-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    A,
    T,
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::T => write!(f, "T"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MbtiQuestion {
    pub text: &'static str,
    pub axis: MbtiAxis,
    /// Statement describes the left pole.
    pub reverse: bool,
}

const fn q(text: &'static str, axis: MbtiAxis, reverse: bool) -> MbtiQuestion {
    MbtiQuestion {
        text,
        axis,
        reverse,
    }
}

use MbtiAxis::{EnergyFocus, Identity as IdentityAxis, Judgment, Lifestyle, Perception};

pub static MBTI_QUESTIONS: [MbtiQuestion; 20] = [
    q("I recharge by spending time alone.", EnergyFocus, false),
    q("I trust concrete facts more than hunches.", Perception, true),
    q("I weigh how a decision will make people feel.", Judgment, false),
    q("I like to keep plans open and flexible.", Lifestyle, false),
    q("I often worry about how things will turn out.", IdentityAxis, false),
    q("I get energized by a room full of people.", EnergyFocus, true),
    q("I enjoy thinking about what could be rather than what is.", Perception, false),
    q("I make decisions with objective logic.", Judgment, true),
    q("I like to finish one task before starting the next.", Lifestyle, true),
    q("I stay calm and confident under pressure.", IdentityAxis, true),
    q("I prefer to think before I speak.", EnergyFocus, false),
    q("I focus on details and practical realities.", Perception, true),
    q("Harmony matters more to me than being right.", Judgment, false),
    q("I work best in bursts close to a deadline.", Lifestyle, false),
    q("I am sensitive to criticism and second-guess myself.", IdentityAxis, false),
    q("I start conversations with strangers easily.", EnergyFocus, true),
    q("I am drawn to patterns, theories, and big ideas.", Perception, false),
    q("I value fairness and consistency over exceptions.", Judgment, true),
    q("I feel uneasy until decisions are settled.", Lifestyle, true),
    q("I rarely dwell on mistakes once they are made.", IdentityAxis, true),
];

/// Result for one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisResult {
    pub axis: MbtiAxis,
    pub letter: char,
    pub average: f64,
    pub confidence: Percentage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MbtiQuizResult {
    #[serde(rename = "type")]
    pub mbti: MbtiType,
    pub identity: Identity,
    /// Type plus identity, e.g. `ENTJ-A`.
    pub code: String,
    pub axes: Vec<AxisResult>,
}

/// `50 + |avg - 4| / 3 * 50`, rounded.
pub fn confidence(average: f64) -> Percentage {
    let distance = (average - LIKERT_NEUTRAL).abs() / (LIKERT_NEUTRAL - LIKERT_MIN as f64);
    Percentage::new((50.0 + distance * 50.0).round().clamp(0.0, 100.0) as u8)
}

fn orient(question: &MbtiQuestion, response: u8) -> u8 {
    if question.reverse {
        LIKERT_MAX + LIKERT_MIN - response
    } else {
        response
    }
}

fn score_axis(axis: MbtiAxis, responses: &[u8]) -> AxisResult {
    let oriented: Vec<u8> = MBTI_QUESTIONS
        .iter()
        .zip(responses)
        .filter(|(q, _)| q.axis == axis)
        .map(|(q, r)| orient(q, *r))
        .collect();
    let average = if oriented.is_empty() {
        LIKERT_NEUTRAL
    } else {
        oriented.iter().map(|r| *r as f64).sum::<f64>() / oriented.len() as f64
    };
    let (left, right) = axis.poles();
    AxisResult {
        axis,
        letter: if average <= LIKERT_NEUTRAL { left } else { right },
        average,
        confidence: confidence(average),
    }
}

/// Scores 20 responses (1-7) in bank order.
pub fn score_mbti(responses: &[u8]) -> Result<MbtiQuizResult, QuizError> {
    QuizError::check_count(responses.len(), MBTI_QUESTIONS.len())?;
    if let Some(bad) = responses
        .iter()
        .position(|r| !(LIKERT_MIN..=LIKERT_MAX).contains(r))
    {
        return Err(QuizError::invalid_answer(bad, "response must be 1-7"));
    }

    let axes: Vec<AxisResult> = MbtiAxis::ALL
        .iter()
        .map(|a| score_axis(*a, responses))
        .collect();
    let letters = [axes[0].letter, axes[1].letter, axes[2].letter, axes[3].letter];
    let mbti = MbtiType::from_letters(letters)
        .ok_or_else(|| QuizError::invalid_answer(0, "responses did not produce a type"))?;
    let identity = if axes[4].letter == 'A' {
        Identity::A
    } else {
        Identity::T
    };

    Ok(MbtiQuizResult {
        code: format!("{}-{}", mbti, identity),
        mbti,
        identity,
        axes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Responses that push every axis fully toward `letters` (five letters incl. identity).
    fn responses_for(letters: &str) -> Vec<u8> {
        let wanted: Vec<char> = letters.chars().collect();
        MBTI_QUESTIONS
            .iter()
            .map(|q| {
                let idx = MbtiAxis::ALL.iter().position(|a| *a == q.axis).unwrap();
                let left = q.axis.poles().0 == wanted[idx];
                // oriented 1 for left, 7 for right; undo orientation for reversed
                let oriented = if left { LIKERT_MIN } else { LIKERT_MAX };
                orient(q, oriented)
            })
            .collect()
    }

    #[test]
    fn each_axis_has_four_questions() {
        for axis in MbtiAxis::ALL {
            assert_eq!(MBTI_QUESTIONS.iter().filter(|q| q.axis == axis).count(), 4);
        }
    }

    #[test]
    fn extreme_answers_give_full_confidence() {
        let result = score_mbti(&responses_for("ENTJA")).unwrap();
        assert_eq!(result.mbti, MbtiType::Entj);
        assert_eq!(result.identity, Identity::A);
        assert_eq!(result.code, "ENTJ-A");
        assert!(result.axes.iter().all(|a| a.confidence.value() == 100));
    }

    #[test]
    fn opposite_extremes() {
        let result = score_mbti(&responses_for("ISFPT")).unwrap();
        assert_eq!(result.code, "ISFP-T");
    }

    #[test]
    fn all_neutral_picks_left_letters_at_fifty_percent() {
        let result = score_mbti(&[4; 20]).unwrap();
        assert_eq!(result.code, "ESTJ-A");
        assert!(result.axes.iter().all(|a| a.confidence == Percentage::HALF));
    }

    #[test]
    fn confidence_formula() {
        assert_eq!(confidence(4.0).value(), 50);
        assert_eq!(confidence(7.0).value(), 100);
        assert_eq!(confidence(1.0).value(), 100);
        assert_eq!(confidence(5.5).value(), 75);
        // 50 + 0.25/3*50 = 54.17
        assert_eq!(confidence(4.25).value(), 54);
    }

    #[test]
    fn rejects_out_of_range_and_short_input() {
        let mut responses = vec![4; 20];
        responses[7] = 8;
        assert!(matches!(
            score_mbti(&responses),
            Err(QuizError::InvalidAnswer { question: 7, .. })
        ));
        assert!(matches!(
            score_mbti(&[4; 19]),
            Err(QuizError::Incomplete { .. })
        ));
    }
}
