//! End-to-end analysis over word list files

use best_wordle_words::commands::{
    AnalysisConfig, Corpora, best_first_and_second_words, best_first_words, score_word,
};
use best_wordle_words::error::{AnalysisError, CorpusError};
use best_wordle_words::scoring::{MAX_PAIR_SCORE, ScoredWord, score_pair};
use best_wordle_words::wordlists::MalformedPolicy;
use std::fs;
use tempfile::TempDir;

fn write_corpora(answers: &str, guesses: &str) -> (TempDir, AnalysisConfig) {
    let dir = TempDir::new().unwrap();
    let answers_path = dir.path().join("answers.txt");
    let guesses_path = dir.path().join("guesses.txt");
    fs::write(&answers_path, answers).unwrap();
    fs::write(&guesses_path, guesses).unwrap();

    let config = AnalysisConfig {
        answers_path,
        guesses_path,
        malformed: MalformedPolicy::Skip,
        show_progress: false,
    };
    (dir, config)
}

fn texts(words: &[ScoredWord]) -> Vec<(&str, u32)> {
    words.iter().map(|s| (s.word().text(), s.score())).collect()
}

#[test]
fn happy_hairy_first_and_second_words() {
    let (_dir, config) = write_corpora("happy\nhairy\n", "");
    let corpora = Corpora::load(&config).unwrap();

    let first = best_first_words(&corpora);
    assert_eq!(texts(&first.best), vec![("hairy", 24), ("happy", 24)]);

    let second = best_first_and_second_words(&corpora, config.show_progress);
    let summary: Vec<_> = second
        .tiers
        .iter()
        .map(|tier| (tier.first.word().text(), texts(&tier.second)))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("hairy", vec![("happy", 6)]),
            ("happy", vec![("hairy", 6)]),
        ]
    );
}

#[test]
fn guesses_file_extends_the_candidate_pool() {
    let (_dir, config) = write_corpora("crane\ngrace\ntrace\n", "react\ncrate\ngrace\n");
    let corpora = Corpora::load(&config).unwrap();

    let report = best_first_words(&corpora);
    assert_eq!(report.answers_count, 3);
    assert_eq!(report.guesses_count, 3);
    // grace appears in both files and is scored once
    assert_eq!(report.pool_size, 5);

    let best = &report.best[0];
    let expected: u32 = corpora
        .answers()
        .iter()
        .map(|answer| score_pair(best.word(), answer))
        .sum();
    assert_eq!(best.score(), expected);
}

#[test]
fn top_score_never_exceeds_perfect_sum() {
    let (_dir, config) = write_corpora("crane\nslate\nirate\ngeese\nababa\n", "aabbb\neerie\n");
    let corpora = Corpora::load(&config).unwrap();

    let report = best_first_words(&corpora);
    let ceiling = MAX_PAIR_SCORE * corpora.answers().len() as u32;
    assert!(report.best.iter().all(|s| s.score() <= ceiling));
}

#[test]
fn empty_answers_are_rejected_before_scoring() {
    let (_dir, config) = write_corpora("\n\n", "crane\n");
    assert!(matches!(
        Corpora::load(&config),
        Err(AnalysisError::EmptyCorpus { .. })
    ));
}

#[test]
fn missing_answers_file_is_reported() {
    let (dir, mut config) = write_corpora("happy\n", "");
    config.answers_path = dir.path().join("absent.txt");

    match Corpora::load(&config) {
        Err(AnalysisError::Corpus(CorpusError::Unavailable { path, .. })) => {
            assert!(path.ends_with("absent.txt"));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected an error"),
    }
}

#[test]
fn strict_policy_rejects_malformed_words() {
    let (_dir, mut config) = write_corpora("happy\nhap\n", "");
    config.malformed = MalformedPolicy::Reject;
    assert!(matches!(
        Corpora::load(&config),
        Err(AnalysisError::Corpus(CorpusError::MalformedWord { .. }))
    ));

    config.malformed = MalformedPolicy::Skip;
    let corpora = Corpora::load(&config).unwrap();
    assert_eq!(corpora.answers().len(), 1);
}

#[test]
fn score_command_agrees_with_first_word_ranking() {
    let (_dir, config) = write_corpora("happy\nhairy\n", "ghost\n");
    let corpora = Corpora::load(&config).unwrap();

    let report = score_word("hairy", &corpora).unwrap();
    assert_eq!(report.score, 24);
    assert_eq!(report.rank, 1);
    assert_eq!(report.answers_count, 2);
}
