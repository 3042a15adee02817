use super::common::*;
use crate::diagnostic::answers::AnswerSet;
use crate::diagnostic::domain::{Dimension, QuestionId};
use crate::diagnostic::error::DiagnosticError;
use crate::diagnostic::maturity::{level_of, MaturityLevel};
use crate::diagnostic::scoring::aggregate;

#[test]
fn minimum_answers_score_zero_and_initial() {
    let summary = aggregate(&minimum_answers()).expect("complete answers aggregate");

    assert_eq!(summary.overall_score, 0);
    assert_eq!(level_of(summary.overall_score), MaturityLevel::Initial);
    for entry in &summary.dimension_scores {
        assert_eq!(entry.score, 0, "{}", entry.dimension);
        assert_eq!(level_of(entry.score), MaturityLevel::Initial);
    }
}

#[test]
fn maximum_answers_score_one_hundred_and_advanced() {
    let summary = aggregate(&maximum_answers()).expect("complete answers aggregate");

    assert_eq!(summary.overall_score, 100);
    assert_eq!(level_of(summary.overall_score), MaturityLevel::Advanced);
    for entry in &summary.dimension_scores {
        assert_eq!(entry.score, 100, "{}", entry.dimension);
        assert_eq!(level_of(entry.score), MaturityLevel::Advanced);
    }
}

#[test]
fn dimension_scores_follow_questionnaire_order() {
    let summary = aggregate(&maximum_answers()).expect("complete answers aggregate");
    let order: Vec<_> = summary
        .dimension_scores
        .iter()
        .map(|entry| entry.dimension)
        .collect();
    assert_eq!(order, Dimension::ALL.to_vec());
}

#[test]
fn governance_half_step_rounds_up_to_initial_38() {
    let answers = quarter_step_governance_answers();
    assert_eq!(answers.validate_against(&catalog()), Ok(()));

    let summary = aggregate(&answers).expect("complete answers aggregate");
    let governance = summary
        .score_for(Dimension::GovernanceQuality)
        .expect("governance scored");

    assert_eq!(governance, 38);
    assert_eq!(level_of(governance), MaturityLevel::Initial);
}

#[test]
fn overall_is_mean_of_rounded_dimension_scores() {
    let answers = two_stage_rounding_answers();
    let summary = aggregate(&answers).expect("complete answers aggregate");

    let scores: Vec<u8> = summary
        .dimension_scores
        .iter()
        .map(|entry| entry.score)
        .collect();
    assert_eq!(scores, vec![38, 73, 88, 27, 52]);

    let grand_total: u32 = answers.iter().map(|(_, points)| u32::from(points)).sum();
    let grand_mean = (f64::from(grand_total) / 20.0).round() as u8;
    assert_eq!(grand_mean, 55);
    assert_eq!(summary.overall_score, 56);
}

#[test]
fn insertion_order_does_not_matter() {
    let forward = two_stage_rounding_answers();
    let pairs: Vec<_> = forward.iter().collect();

    let reversed: AnswerSet = pairs.iter().rev().copied().collect();

    // Overwritten answers: only the last write per question counts.
    let mut rewritten = AnswerSet::new();
    for (id, _) in &pairs {
        rewritten.answer(*id, 100);
    }
    for (id, points) in pairs.iter().rev() {
        rewritten.answer(*id, *points);
    }

    let expected = aggregate(&forward).expect("aggregate");
    assert_eq!(aggregate(&reversed).expect("aggregate"), expected);
    assert_eq!(aggregate(&rewritten).expect("aggregate"), expected);
}

#[test]
fn missing_roi_question_fails_instead_of_averaging_three() {
    let mut answers = maximum_answers();
    answers.remove(QuestionId(17));

    let error = aggregate(&answers).expect_err("question 17 missing");
    assert_eq!(
        error,
        DiagnosticError::IncompleteAnswerSet {
            dimension: Dimension::DataRoi,
            missing: vec![QuestionId(17)],
        }
    );
    assert!(error.to_string().contains("ROI on Data"));
}

#[test]
fn incomplete_error_lists_every_missing_question_of_the_dimension() {
    let mut answers = minimum_answers();
    answers.remove(QuestionId(6));
    answers.remove(QuestionId(8));

    match aggregate(&answers) {
        Err(DiagnosticError::IncompleteAnswerSet { dimension, missing }) => {
            assert_eq!(dimension, Dimension::SourceIntegration);
            assert_eq!(missing, vec![QuestionId(6), QuestionId(8)]);
        }
        other => panic!("expected incomplete answer set, got {other:?}"),
    }
}

#[test]
fn empty_answer_set_is_incomplete_not_zero() {
    match aggregate(&AnswerSet::new()) {
        Err(DiagnosticError::IncompleteAnswerSet { dimension, missing }) => {
            assert_eq!(dimension, Dimension::GovernanceQuality);
            assert_eq!(missing.len(), 4);
        }
        other => panic!("expected incomplete answer set, got {other:?}"),
    }
}

#[test]
fn unknown_question_ids_are_rejected() {
    let answers = maximum_answers().with(QuestionId(21), 50);
    assert_eq!(
        aggregate(&answers),
        Err(DiagnosticError::InvalidQuestionId { id: QuestionId(21) })
    );
}

#[test]
fn seventy_nine_stays_intermediate() {
    // 100 + 66 + 50 + 100 = 316, mean 79.
    let answers = maximum_answers()
        .with(QuestionId(5), 100)
        .with(QuestionId(6), 66)
        .with(QuestionId(7), 50)
        .with(QuestionId(8), 100);
    assert_eq!(answers.validate_against(&catalog()), Ok(()));

    let summary = aggregate(&answers).expect("aggregate");
    let integration = summary
        .score_for(Dimension::SourceIntegration)
        .expect("source integration scored");

    assert_eq!(integration, 79);
    assert_eq!(level_of(integration), MaturityLevel::Intermediate);
    assert_eq!(level_of(80), MaturityLevel::Advanced);
}
