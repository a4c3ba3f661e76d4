//! DISC quiz: 16 forced-choice questions, four style-coded words each.
//!
//! For every question the taker picks the word most like them (+2 to its
//! style) and the word least like them (-1). Raw totals are min-max
//! normalized to 0-100 and mapped onto a position on the DISC circle.

use serde::{Deserialize, Serialize};

use super::error::QuizError;
use crate::domain::frameworks::{BlendCode, DiscStyle};

pub const MOST_POINTS: i32 = 2;
pub const LEAST_POINTS: i32 = -1;
/// Lead of at least this many points yields a pure style.
pub const PURE_GAP: u8 = 30;
/// Lead below this many points yields an equal blend.
pub const EQUAL_GAP: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscWord {
    pub word: &'static str,
    pub style: DiscStyle,
}

const fn w(word: &'static str, style: DiscStyle) -> DiscWord {
    DiscWord { word, style }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscQuestion {
    pub words: [DiscWord; 4],
}

use DiscStyle::{C, D, I, S};

pub static DISC_QUESTIONS: [DiscQuestion; 16] = [
    DiscQuestion { words: [w("Decisive", D), w("Enthusiastic", I), w("Patient", S), w("Precise", C)] },
    DiscQuestion { words: [w("Sociable", I), w("Direct", D), w("Careful", C), w("Loyal", S)] },
    DiscQuestion { words: [w("Calm", S), w("Analytical", C), w("Bold", D), w("Persuasive", I)] },
    DiscQuestion { words: [w("Systematic", C), w("Supportive", S), w("Inspiring", I), w("Competitive", D)] },
    DiscQuestion { words: [w("Assertive", D), w("Talkative", I), w("Consistent", S), w("Thorough", C)] },
    DiscQuestion { words: [w("Optimistic", I), w("Demanding", D), w("Reserved", C), w("Agreeable", S)] },
    DiscQuestion { words: [w("Dependable", S), w("Logical", C), w("Daring", D), w("Charming", I)] },
    DiscQuestion { words: [w("Accurate", C), w("Gentle", S), w("Playful", I), w("Forceful", D)] },
    DiscQuestion { words: [w("Results-driven", D), w("Outgoing", I), w("Steady", S), w("Disciplined", C)] },
    DiscQuestion { words: [w("Expressive", I), w("Independent", D), w("Cautious", C), w("Cooperative", S)] },
    DiscQuestion { words: [w("Easygoing", S), w("Diplomatic", C), w("Determined", D), w("Lively", I)] },
    DiscQuestion { words: [w("Orderly", C), w("Considerate", S), w("Spontaneous", I), w("Pioneering", D)] },
    DiscQuestion { words: [w("Strong-willed", D), w("Popular", I), w("Good listener", S), w("Detail-oriented", C)] },
    DiscQuestion { words: [w("Trusting", I), w("Adventurous", D), w("Factual", C), w("Even-tempered", S)] },
    DiscQuestion { words: [w("Predictable", S), w("Perfectionist", C), w("Commanding", D), w("Animated", I)] },
    DiscQuestion { words: [w("Restrained", C), w("Accommodating", S), w("Convincing", I), w("Self-reliant", D)] },
];

/// Indexes into a question's four words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscAnswer {
    pub most: usize,
    pub least: usize,
}

/// Normalized 0-100 scores per style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscScores {
    pub d: u8,
    pub i: u8,
    pub s: u8,
    pub c: u8,
}

impl DiscScores {
    pub fn from_array(scores: [u8; 4]) -> Self {
        Self {
            d: scores[0],
            i: scores[1],
            s: scores[2],
            c: scores[3],
        }
    }

    pub fn get(&self, style: DiscStyle) -> u8 {
        match style {
            DiscStyle::D => self.d,
            DiscStyle::I => self.i,
            DiscStyle::S => self.s,
            DiscStyle::C => self.c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscQuizResult {
    pub code: BlendCode,
    pub raw: [i32; 4],
    pub scores: DiscScores,
}

/// Sums +2 for each "most" and -1 for each "least", indexed D, I, S, C.
pub fn raw_totals(answers: &[DiscAnswer]) -> Result<[i32; 4], QuizError> {
    let mut totals = [0i32; 4];
    for (q, (answer, question)) in answers.iter().zip(DISC_QUESTIONS.iter()).enumerate() {
        if answer.most > 3 || answer.least > 3 {
            return Err(QuizError::invalid_answer(q, "word index must be 0-3"));
        }
        if answer.most == answer.least {
            return Err(QuizError::invalid_answer(
                q,
                "most and least must be different words",
            ));
        }
        totals[question.words[answer.most].style.index()] += MOST_POINTS;
        totals[question.words[answer.least].style.index()] += LEAST_POINTS;
    }
    Ok(totals)
}

/// Min-max normalizes raw totals to 0-100; all-equal totals become 50 each.
pub fn normalize(raw: [i32; 4]) -> [u8; 4] {
    let min = raw.iter().copied().min().unwrap_or(0);
    let max = raw.iter().copied().max().unwrap_or(0);
    if max == min {
        return [50; 4];
    }
    let span = (max - min) as f64;
    raw.map(|r| (((r - min) as f64 / span) * 100.0).round() as u8)
}

/// Maps normalized scores (indexed D, I, S, C) to a blend code.
///
/// Ties in rank go to the earlier style on the circle. Pairs that are not
/// neighbours on the circle have no blend, so they fall back to the pure
/// primary style.
pub fn map_to_blend_code(scores: [u8; 4]) -> BlendCode {
    let mut ranked = DiscStyle::ALL;
    // stable: equal scores keep circle order
    ranked.sort_by(|a, b| scores[b.index()].cmp(&scores[a.index()]));
    let (primary, secondary) = (ranked[0], ranked[1]);
    let gap = scores[primary.index()] - scores[secondary.index()];

    let code = if gap >= PURE_GAP {
        BlendCode::pure(primary)
    } else if gap < EQUAL_GAP {
        BlendCode::equal(primary, secondary)
    } else {
        BlendCode::lean(primary, secondary)
    };

    if code.is_registered() {
        code
    } else {
        BlendCode::pure(primary)
    }
}

/// Scores a full set of 16 answers in bank order.
pub fn score_disc(answers: &[DiscAnswer]) -> Result<DiscQuizResult, QuizError> {
    QuizError::check_count(answers.len(), DISC_QUESTIONS.len())?;
    let raw = raw_totals(answers)?;
    let normalized = normalize(raw);
    Ok(DiscQuizResult {
        code: map_to_blend_code(normalized),
        raw,
        scores: DiscScores::from_array(normalized),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers_for(most: DiscStyle, least: DiscStyle) -> Vec<DiscAnswer> {
        DISC_QUESTIONS
            .iter()
            .map(|q| DiscAnswer {
                most: q.words.iter().position(|w| w.style == most).unwrap(),
                least: q.words.iter().position(|w| w.style == least).unwrap(),
            })
            .collect()
    }

    #[test]
    fn every_question_covers_all_four_styles() {
        for q in DISC_QUESTIONS.iter() {
            for style in DiscStyle::ALL {
                assert_eq!(q.words.iter().filter(|w| w.style == style).count(), 1);
            }
        }
    }

    #[test]
    fn consistent_d_answers_give_pure_d() {
        let result = score_disc(&answers_for(DiscStyle::D, DiscStyle::S)).unwrap();
        assert_eq!(result.raw, [32, 0, -16, 0]);
        assert_eq!(result.scores.d, 100);
        assert_eq!(result.scores.s, 0);
        assert_eq!(result.code.code(), "D");
    }

    #[test]
    fn normalize_handles_equal_totals() {
        assert_eq!(normalize([4, 4, 4, 4]), [50, 50, 50, 50]);
        assert_eq!(normalize([10, 0, 5, -10]), [100, 50, 75, 0]);
    }

    #[test]
    fn gap_thresholds() {
        // gap 30 → pure
        assert_eq!(map_to_blend_code([100, 70, 0, 0]).code(), "D");
        // gap 29 → lean
        assert_eq!(map_to_blend_code([100, 71, 0, 0]).code(), "Di");
        // gap 15 → lean
        assert_eq!(map_to_blend_code([0, 100, 85, 0]).code(), "Is");
        // gap 14 → equal
        assert_eq!(map_to_blend_code([0, 100, 86, 0]).code(), "IS");
        // equal blend across the D/C boundary is written CD
        assert_eq!(map_to_blend_code([100, 0, 0, 95]).code(), "CD");
    }

    #[test]
    fn opposite_pairs_fall_back_to_pure() {
        assert_eq!(map_to_blend_code([100, 0, 95, 0]).code(), "D");
        assert_eq!(map_to_blend_code([0, 80, 0, 60]).code(), "I");
    }

    #[test]
    fn all_equal_scores_break_ties_by_circle_order() {
        // D and I tie for the top, gap 0 → equal blend DI
        assert_eq!(map_to_blend_code([50, 50, 50, 50]).code(), "DI");
    }

    #[test]
    fn rejects_bad_answers() {
        let mut answers = answers_for(DiscStyle::I, DiscStyle::C);
        answers[3] = DiscAnswer { most: 1, least: 1 };
        assert!(matches!(
            score_disc(&answers),
            Err(QuizError::InvalidAnswer { question: 3, .. })
        ));
        answers[3] = DiscAnswer { most: 4, least: 0 };
        assert!(score_disc(&answers).is_err());
        assert!(matches!(
            score_disc(&answers[..10]),
            Err(QuizError::Incomplete { answered: 10, total: 16 })
        ));
    }

    #[test]
    fn replaying_answers_is_idempotent() {
        let answers = answers_for(DiscStyle::S, DiscStyle::D);
        assert_eq!(score_disc(&answers), score_disc(&answers));
    }
}
