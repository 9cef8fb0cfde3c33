//! Tests for the training games driven by a seeded RNG.

use estimator_core::games::{CHOICES_PER_QUESTION, FlagQuiz, Round, TrainingSession};
use estimator_core::is_player_winner;
use estimator_model::{DEFAULT_SESSION_ROUNDS, Move};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn every_move_has_exactly_one_winner() {
    for app in Move::ALL {
        let winners: Vec<Move> = Move::ALL
            .into_iter()
            .filter(|player| is_player_winner(app, *player))
            .collect();
        assert_eq!(winners, vec![app.winning_reply()]);
    }
}

#[test]
fn following_every_prompt_scores_full_marks() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = TrainingSession::new(&mut rng);
    assert_eq!(session.rounds(), DEFAULT_SESSION_ROUNDS);
    while !session.is_finished() {
        let round: Round = session.current();
        let reply = Move::ALL
            .into_iter()
            .find(|candidate| round.score(*candidate) == 1)
            .unwrap();
        let outcome = session.play(reply, &mut rng).unwrap();
        assert!(outcome.followed_prompt());
    }
    assert_eq!(session.score(), DEFAULT_SESSION_ROUNDS as i32);
}

#[test]
fn same_seed_replays_same_session() {
    let play = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = TrainingSession::with_rounds(5, &mut rng);
        (0..5)
            .map(|_| session.play(Move::Paper, &mut rng).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(play(11), play(11));
}

#[test]
fn quiz_counts_score() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut quiz = FlagQuiz::new(&mut rng);
    for _ in 0..4 {
        quiz.answer(quiz.correct_answer()).unwrap();
        quiz.ask_question(&mut rng);
    }
    let wrong = (quiz.correct_answer() + 1) % CHOICES_PER_QUESTION;
    quiz.answer(wrong).unwrap();
    assert_eq!(quiz.score(), 4);
    assert_eq!(quiz.asked(), 5);
}
