//! Flag quiz: pick the flag of the named country out of three.

use estimator_model::{EstimatorError, QuizAnswer, Result, Verdict};
use rand::seq::SliceRandom;
use rand::{Rng, RngExt};
use tracing::debug;

/// Countries the quiz draws from.
pub const COUNTRIES: [&str; 11] = [
    "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Russia", "Spain",
    "UK", "US",
];

/// Number of flags shown per question.
pub const CHOICES_PER_QUESTION: usize = 3;

#[derive(Debug, Clone)]
pub struct FlagQuiz {
    countries: Vec<&'static str>,
    correct_answer: usize,
    score: u32,
    asked: u32,
}

impl FlagQuiz {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut quiz = Self {
            countries: COUNTRIES.to_vec(),
            correct_answer: 0,
            score: 0,
            asked: 0,
        };
        quiz.ask_question(rng);
        quiz
    }

    /// Shuffle the pool and pick a new correct answer among the shown flags.
    pub fn ask_question<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.countries.shuffle(rng);
        self.correct_answer = rng.random_range(0..CHOICES_PER_QUESTION);
    }

    /// The flags currently on screen.
    pub fn choices(&self) -> &[&'static str] {
        &self.countries[..CHOICES_PER_QUESTION]
    }

    /// The country whose flag must be picked.
    pub fn target(&self) -> &'static str {
        self.countries[self.correct_answer]
    }

    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn asked(&self) -> u32 {
        self.asked
    }

    /// Check the flag at `index` against the target.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidChoice`] if `index` is not one of the
    /// shown flags. The score is left untouched in that case.
    pub fn answer(&mut self, index: usize) -> Result<QuizAnswer> {
        if index >= CHOICES_PER_QUESTION {
            return Err(EstimatorError::InvalidChoice {
                index,
                max: CHOICES_PER_QUESTION,
            });
        }
        let verdict = if index == self.correct_answer {
            self.score += 1;
            Verdict::Correct
        } else {
            Verdict::Wrong
        };
        self.asked += 1;
        debug!(country = self.target(), index, %verdict, "flag answered");
        Ok(QuizAnswer {
            target: self.target().to_string(),
            chosen: self.countries[index].to_string(),
            verdict,
            score: self.score,
            asked: self.asked,
        })
    }
}
