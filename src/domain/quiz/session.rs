//! Answer navigation shared by all quizzes.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::error::QuizError;

/// Tracks presentation order, recorded answers, and the current position.
///
/// Answers are stored by question index in the bank, so moving back and
/// forward never loses what was recorded. Only `retake` clears them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession<A> {
    order: Vec<usize>,
    answers: Vec<Option<A>>,
    cursor: usize,
}

impl<A: Clone> QuizSession<A> {
    /// Presents questions in bank order.
    pub fn new(total: usize) -> Self {
        Self {
            order: (0..total).collect(),
            answers: vec![None; total],
            cursor: 0,
        }
    }

    /// Presents questions in an order shuffled once from `seed`.
    pub fn shuffled(total: usize, seed: u64) -> Self {
        let mut session = Self::new(total);
        let mut rng = StdRng::seed_from_u64(seed);
        session.order.shuffle(&mut rng);
        session
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// Position in presentation order (0-based).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Bank index of the question being shown, or `None` once finished.
    pub fn current_question(&self) -> Option<usize> {
        self.order.get(self.cursor).copied()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.order.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Recorded answer for a bank question.
    pub fn answer_for(&self, question: usize) -> Option<&A> {
        self.answers.get(question).and_then(|a| a.as_ref())
    }

    /// Records an answer for the current question and advances.
    pub fn answer(&mut self, answer: A) -> Result<(), QuizError> {
        let question = self.current_question().ok_or(QuizError::Finished)?;
        self.answers[question] = Some(answer);
        self.cursor += 1;
        Ok(())
    }

    /// Steps back one question, keeping every recorded answer.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Steps forward over a question that already has an answer.
    pub fn forward(&mut self) -> bool {
        match self.current_question() {
            Some(q) if self.answers[q].is_some() => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    /// Clears all answers and returns to the first question.
    pub fn retake(&mut self) {
        self.answers.iter_mut().for_each(|a| *a = None);
        self.cursor = 0;
    }

    /// Answers in bank order; fails if any question is unanswered.
    pub fn completed_answers(&self) -> Result<Vec<A>, QuizError> {
        let answered = self.answered_count();
        QuizError::check_count(answered, self.total())?;
        Ok(self.answers.iter().flatten().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_then_forward_keeps_answers() {
        let mut s = QuizSession::new(3);
        s.answer('a').unwrap();
        s.answer('b').unwrap();
        assert!(s.back());
        assert!(s.back());
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.answer_for(0), Some(&'a'));
        assert_eq!(s.answer_for(1), Some(&'b'));
        assert!(s.forward());
        assert!(s.forward());
        // question 2 has no answer yet
        assert!(!s.forward());
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn re_answering_overwrites() {
        let mut s = QuizSession::new(2);
        s.answer(1).unwrap();
        s.back();
        s.answer(5).unwrap();
        assert_eq!(s.answer_for(0), Some(&5));
        assert_eq!(s.answered_count(), 1);
    }

    #[test]
    fn retake_clears_everything() {
        let mut s = QuizSession::new(2);
        s.answer(1).unwrap();
        s.answer(2).unwrap();
        assert!(s.is_finished());
        s.retake();
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.answered_count(), 0);
        assert!(!s.back());
    }

    #[test]
    fn answering_past_the_end_fails() {
        let mut s = QuizSession::new(1);
        s.answer(1).unwrap();
        assert_eq!(s.answer(2), Err(QuizError::Finished));
    }

    #[test]
    fn incomplete_answers_are_rejected() {
        let mut s = QuizSession::new(3);
        s.answer(1).unwrap();
        assert_eq!(
            s.completed_answers(),
            Err(QuizError::Incomplete {
                answered: 1,
                total: 3
            })
        );
    }

    #[test]
    fn shuffle_is_seeded_and_complete() {
        let a: QuizSession<u8> = QuizSession::shuffled(16, 42);
        let b: QuizSession<u8> = QuizSession::shuffled(16, 42);
        assert_eq!(a.order(), b.order());
        let mut sorted = a.order().to_vec();
        sorted.sort();
        assert_eq!(sorted, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn answers_are_stored_in_bank_order_when_shuffled() {
        let mut s = QuizSession::shuffled(4, 7);
        let order = s.order().to_vec();
        for q in &order {
            s.answer(*q).unwrap();
        }
        assert_eq!(s.completed_answers().unwrap(), vec![0, 1, 2, 3]);
    }
}
