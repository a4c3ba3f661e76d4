//! Enneagram quiz: 36 A/B questions, one for each unordered pair of types.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::error::QuizError;
use crate::domain::frameworks::{EnneagramProfile, EnneagramType};

/// Eight first-person statements per type, indexed by type number - 1.
static STATEMENTS: [[&str; 8]; 9] = [
    [
        "I notice what is wrong and feel responsible for fixing it.",
        "I hold myself to high standards.",
        "I believe there is a right way to do things.",
        "I get irritated when people cut corners.",
        "I work hard to keep my emotions under control.",
        "I am my own harshest critic.",
        "I value fairness and integrity above convenience.",
        "I prefer order and clear rules.",
    ],
    [
        "I naturally sense what others need.",
        "I find it hard to say no when someone asks for help.",
        "Being appreciated matters a lot to me.",
        "I invest heavily in my relationships.",
        "I often put other people's needs before my own.",
        "I like being the person others turn to.",
        "I show love by doing things for people.",
        "I feel hurt when my help goes unnoticed.",
    ],
    [
        "I am driven to succeed and be recognized.",
        "I adapt my image to what a situation calls for.",
        "I set goals and go after them efficiently.",
        "I hate wasting time on things that do not move me forward.",
        "Being seen as competent is important to me.",
        "I am energized by achievement.",
        "I can push my feelings aside to get the job done.",
        "I like to be the best at what I do.",
    ],
    [
        "I feel things more deeply than most people.",
        "I want my life and work to be authentic and meaningful.",
        "I often feel different from those around me.",
        "I am drawn to beauty, art, and self-expression.",
        "I would rather be real than be liked.",
        "I sometimes long for what is missing.",
        "Ordinary routine can feel stifling to me.",
        "My moods strongly colour my day.",
    ],
    [
        "I need time alone to recharge and think.",
        "I want to understand how things work before I act.",
        "I guard my time and energy carefully.",
        "I prefer observing to participating.",
        "I collect knowledge for its own sake.",
        "I can feel drained by too many demands.",
        "I keep my feelings private.",
        "I trust my own analysis over popular opinion.",
    ],
    [
        "I anticipate what could go wrong.",
        "Loyalty and trust are very important to me.",
        "I look for security and reliable support.",
        "I question authority until it earns my trust.",
        "I prepare for worst-case scenarios.",
        "I feel anxious when things are uncertain.",
        "I am committed to the groups I belong to.",
        "I often seek reassurance before deciding.",
    ],
    [
        "I love new experiences and possibilities.",
        "I keep my options open.",
        "I get bored quickly with routine.",
        "I naturally look on the bright side.",
        "I have more ideas than time to pursue them.",
        "I avoid dwelling on painful feelings.",
        "I like to keep things fun and upbeat.",
        "I dislike being limited or tied down.",
    ],
    [
        "I take charge when no one else will.",
        "I say what I think, directly.",
        "I protect people I care about.",
        "I dislike showing vulnerability.",
        "I push back hard when I feel controlled.",
        "I respect strength and straight talk.",
        "I go all in on what I commit to.",
        "I am comfortable with confrontation.",
    ],
    [
        "I go with the flow to keep the peace.",
        "I can see every side of an argument.",
        "I avoid conflict whenever possible.",
        "I am easygoing and hard to upset.",
        "I sometimes lose track of my own priorities.",
        "I value harmony in my surroundings.",
        "I put off decisions I would rather not make.",
        "People find me calming to be around.",
    ],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnneagramStatement {
    #[serde(rename = "type")]
    pub type_number: u8,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnneagramQuestion {
    pub a: EnneagramStatement,
    pub b: EnneagramStatement,
}

/// Which statement the taker chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    A,
    B,
}

/// Pairs ordered by distance 1..=8, then by lower type. Each type appears in
/// exactly eight questions and uses its statements in order. Odd questions
/// put the higher type on side A.
pub static ENNEAGRAM_QUESTIONS: Lazy<Vec<EnneagramQuestion>> = Lazy::new(|| {
    let mut used = [0usize; 9];
    let mut next = |n: u8| {
        let idx = (n - 1) as usize;
        let text = STATEMENTS[idx][used[idx] % 8];
        used[idx] += 1;
        EnneagramStatement {
            type_number: n,
            text,
        }
    };
    let mut questions = Vec::with_capacity(36);
    for distance in 1..=8u8 {
        for low in 1..=(9 - distance) {
            let (lo, hi) = (next(low), next(low + distance));
            let question = if questions.len() % 2 == 0 {
                EnneagramQuestion { a: lo, b: hi }
            } else {
                EnneagramQuestion { a: hi, b: lo }
            };
            questions.push(question);
        }
    }
    questions
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnneagramQuizResult {
    pub profile: EnneagramProfile,
    /// Points per type, index 0 is type 1.
    pub tallies: [u8; 9],
}

pub fn tally(answers: &[Choice]) -> [u8; 9] {
    let mut tallies = [0u8; 9];
    for (choice, question) in answers.iter().zip(ENNEAGRAM_QUESTIONS.iter()) {
        let chosen = match choice {
            Choice::A => question.a,
            Choice::B => question.b,
        };
        tallies[(chosen.type_number - 1) as usize] += 1;
    }
    tallies
}

/// Highest tally wins; ties go to the lower type number.
fn primary_type(tallies: &[u8; 9]) -> usize {
    let mut best = 0;
    for (i, t) in tallies.iter().enumerate() {
        if *t > tallies[best] {
            best = i;
        }
    }
    best
}

/// Higher-scoring adjacent type; ties go to the first-listed wing (n - 1).
fn wing_for(core: EnneagramType, tallies: &[u8; 9]) -> EnneagramType {
    let [first, second] = core.wings();
    let score = |t: EnneagramType| tallies[(t.number() - 1) as usize];
    if score(second) > score(first) {
        second
    } else {
        first
    }
}

/// Scores a full set of 36 answers in bank order.
pub fn score_enneagram(answers: &[Choice]) -> Result<EnneagramQuizResult, QuizError> {
    QuizError::check_count(answers.len(), ENNEAGRAM_QUESTIONS.len())?;
    let tallies = tally(answers);
    let core = EnneagramType::new(primary_type(&tallies) as u8 + 1)
        .map_err(|e| QuizError::invalid_answer(0, e.to_string()))?;
    let profile = EnneagramProfile::new(core, Some(wing_for(core, &tallies)))
        .map_err(|e| QuizError::invalid_answer(0, e.to_string()))?;
    Ok(EnneagramQuizResult { profile, tallies })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the statement of `favourite`, otherwise side A.
    fn answers_favouring(favourite: &[u8]) -> Vec<Choice> {
        ENNEAGRAM_QUESTIONS
            .iter()
            .map(|q| {
                let rank = |n: u8| favourite.iter().position(|f| *f == n).unwrap_or(usize::MAX);
                if rank(q.b.type_number) < rank(q.a.type_number) {
                    Choice::B
                } else {
                    Choice::A
                }
            })
            .collect()
    }

    #[test]
    fn bank_has_one_question_per_pair() {
        assert_eq!(ENNEAGRAM_QUESTIONS.len(), 36);
        let mut seen = std::collections::HashSet::new();
        for q in ENNEAGRAM_QUESTIONS.iter() {
            let pair = (
                q.a.type_number.min(q.b.type_number),
                q.a.type_number.max(q.b.type_number),
            );
            assert_ne!(pair.0, pair.1);
            assert!(seen.insert(pair));
        }
    }

    #[test]
    fn each_type_uses_eight_distinct_statements() {
        for n in 1..=9u8 {
            let mut texts: Vec<&str> = ENNEAGRAM_QUESTIONS
                .iter()
                .flat_map(|q| [q.a, q.b])
                .filter(|s| s.type_number == n)
                .map(|s| s.text)
                .collect();
            assert_eq!(texts.len(), 8);
            texts.sort();
            texts.dedup();
            assert_eq!(texts.len(), 8);
        }
    }

    #[test]
    fn favourite_type_wins_with_preferred_wing() {
        let result = score_enneagram(&answers_favouring(&[8, 7])).unwrap();
        assert_eq!(result.tallies[7], 8);
        assert_eq!(result.profile.to_string(), "8w7");
    }

    #[test]
    fn primary_ties_go_to_lower_type() {
        let mut tallies = [0u8; 9];
        tallies[2] = 5;
        tallies[6] = 5;
        assert_eq!(primary_type(&tallies), 2);
    }

    #[test]
    fn wing_ties_go_to_first_listed_wing() {
        let mut tallies = [0u8; 9];
        tallies[0] = 6;
        tallies[1] = 3;
        tallies[8] = 3;
        let one = EnneagramType::new(1).unwrap();
        assert_eq!(wing_for(one, &tallies).number(), 9);
        tallies[1] = 4;
        assert_eq!(wing_for(one, &tallies).number(), 2);
    }

    #[test]
    fn incomplete_answers_error() {
        assert!(matches!(
            score_enneagram(&[Choice::A; 10]),
            Err(QuizError::Incomplete { answered: 10, total: 36 })
        ));
    }
}
