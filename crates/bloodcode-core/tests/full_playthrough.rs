//! Integration tests driving complete playthroughs of the built-in
//! casebook through the session controller.
//!
//! Exercises: case selection → pattern identification → timeline
//! reconstruction → deduction → completion, including the mistake
//! paths and their recovery actions.

use bloodcode_core::GameSession;
use bloodcode_logic::case::CrimeCase;
use bloodcode_logic::phase::Phase;
use bloodcode_logic::timeline::SequenceVerdict;

// ── Helpers ────────────────────────────────────────────────────────────

fn identify_all_points(session: &mut GameSession, case: &CrimeCase) {
    for point in &case.analysis_points {
        session.click_point(point.id);
        session.choose_pattern(point.pattern);
    }
}

fn reveal_in_order(session: &mut GameSession, case: &CrimeCase) {
    for id in 1..=case.timeline_arrows.len() as u32 {
        session.click_arrow(id);
    }
}

fn answer_all_correct(session: &mut GameSession, case: &CrimeCase) {
    for q in &case.deduction_questions {
        session.choose_answer(q.correct);
    }
}

// ── Perfect runs ───────────────────────────────────────────────────────

#[test]
fn perfect_run_every_builtin_case() {
    let reference = GameSession::with_builtin_cases();
    let case_ids: Vec<String> = reference.cases().iter().map(|c| c.id.clone()).collect();

    for case_id in case_ids {
        let mut session = GameSession::with_builtin_cases();
        assert!(session.select_case(&case_id));
        let case = session.current_case().unwrap().clone();

        identify_all_points(&mut session, &case);
        assert!(session.snapshot().can_advance, "{}: pattern gate", case_id);
        session.advance_phase();
        assert_eq!(session.phase(), Phase::Timeline);

        reveal_in_order(&mut session, &case);
        assert_eq!(session.snapshot().verdict, SequenceVerdict::Correct);
        session.advance_phase();
        assert_eq!(session.phase(), Phase::Deduction);

        answer_all_correct(&mut session, &case);
        assert!(session.snapshot().in_review);
        session.advance_phase();
        assert_eq!(session.phase(), Phase::Complete);

        let snap = session.snapshot();
        assert_eq!(snap.final_rank.as_deref(), Some("Void Walker"), "{}", case_id);
        assert_eq!(snap.mistakes.total(), 0, "{}", case_id);
    }
}

// ── Mistake paths ──────────────────────────────────────────────────────

#[test]
fn wrong_then_right_pattern_identification() {
    // Point 1 of the suburban case is impact spatter; try a wrong tag
    // first, confirm it stays disabled, then identify correctly.
    use bloodcode_logic::patterns::PatternKind;

    let mut session = GameSession::with_builtin_cases();
    session.select_case("suburban-shooting");

    session.click_point(1);
    session.choose_pattern(PatternKind::CastOff);
    let snap = session.snapshot();
    assert_eq!(snap.mistakes.pattern, 1);
    let p1 = snap.points.iter().find(|p| p.id == 1).unwrap();
    assert!(!p1.analyzed);
    assert!(p1.disabled_tags.contains(&"cast-off".to_string()));

    session.click_point(1);
    session.choose_pattern(PatternKind::ImpactSpatter);
    let snap = session.snapshot();
    let p1 = snap.points.iter().find(|p| p.id == 1).unwrap();
    assert!(p1.analyzed);
    assert_eq!(p1.label.as_deref(), Some("Impact Spatter"));
    // A disabled tag stays disabled for the rest of the case.
    assert!(p1.disabled_tags.contains(&"cast-off".to_string()));
}

#[test]
fn inverted_timeline_then_reset() {
    // Bedroom case has 7 arrows; click 2 first.
    let mut session = GameSession::with_builtin_cases();
    session.select_case("bedroom-assault");
    let case = session.current_case().unwrap().clone();
    identify_all_points(&mut session, &case);
    session.advance_phase();

    for id in [2, 1, 3, 4, 5, 6, 7] {
        session.click_arrow(id);
    }
    let snap = session.snapshot();
    assert_eq!(snap.verdict, SequenceVerdict::Incorrect { first_mismatch: 0 });
    assert_eq!(snap.mistakes.timeline, 1);

    // Mismatch at position 0: reset truncates to an empty order.
    session.reset_timeline();
    let snap = session.snapshot();
    assert_eq!(snap.verdict, SequenceVerdict::Unknown);
    assert!(snap.revealed_order.is_empty());

    reveal_in_order(&mut session, &case);
    assert_eq!(session.snapshot().verdict, SequenceVerdict::Correct);
    assert_eq!(session.snapshot().mistakes.timeline, 1);
}

#[test]
fn partial_prefix_survives_reset() {
    let mut session = GameSession::with_builtin_cases();
    session.select_case("office-incident");
    let case = session.current_case().unwrap().clone();
    identify_all_points(&mut session, &case);
    session.advance_phase();

    // Correct through 4, then swap 5 and 6.
    for id in [1, 2, 3, 4, 6, 5, 7] {
        session.click_arrow(id);
    }
    assert_eq!(
        session.snapshot().verdict,
        SequenceVerdict::Incorrect { first_mismatch: 4 }
    );
    session.reset_timeline();
    assert_eq!(session.snapshot().revealed_order, vec![1, 2, 3, 4]);

    for id in [5, 6, 7] {
        session.click_arrow(id);
    }
    assert_eq!(session.snapshot().verdict, SequenceVerdict::Correct);
}

#[test]
fn rank_ladder_from_deduction_correctness() {
    // Builtin cases all have 3 questions; wrong-answer counts 3..0
    // walk the whole rank table.
    let expectations = [
        (0, "Void Walker"),
        (1, "Blood Whisperer"),
        (2, "Clinical Analyst"),
        (3, "Trace Architect"),
    ];
    for (wrong_count, expected_rank) in expectations {
        let mut session = GameSession::with_builtin_cases();
        session.select_case("suburban-shooting");
        let case = session.current_case().unwrap().clone();
        identify_all_points(&mut session, &case);
        session.advance_phase();
        reveal_in_order(&mut session, &case);
        session.advance_phase();

        for (i, q) in case.deduction_questions.iter().enumerate() {
            let option = if i < wrong_count {
                (q.correct + 1) % q.options.len()
            } else {
                q.correct
            };
            session.choose_answer(option);
        }
        session.advance_phase();

        let snap = session.snapshot();
        assert_eq!(snap.final_rank.as_deref(), Some(expected_rank));
        assert_eq!(snap.mistakes.deduction, wrong_count as u32);
    }
}

// ── Abort and restart ──────────────────────────────────────────────────

#[test]
fn abort_mid_case_and_start_another() {
    let mut session = GameSession::with_builtin_cases();
    session.select_case("suburban-shooting");
    let case = session.current_case().unwrap().clone();
    identify_all_points(&mut session, &case);
    session.advance_phase();
    session.click_arrow(1);

    session.return_to_menu();
    assert_eq!(session.phase(), Phase::Menu);

    session.select_case("office-incident");
    let snap = session.snapshot();
    assert_eq!(snap.phase, Phase::Pattern);
    assert_eq!(snap.analyzed_count, 0);
    assert!(snap.revealed_order.is_empty());
    assert_eq!(snap.mistakes.total(), 0);
}

#[test]
fn complete_then_restart_same_case() {
    let mut session = GameSession::with_builtin_cases();
    session.select_case("suburban-shooting");
    let case = session.current_case().unwrap().clone();
    identify_all_points(&mut session, &case);
    session.advance_phase();
    reveal_in_order(&mut session, &case);
    session.advance_phase();
    answer_all_correct(&mut session, &case);
    session.advance_phase();
    assert_eq!(session.phase(), Phase::Complete);

    session.return_to_menu();
    session.select_case("suburban-shooting");
    let snap = session.snapshot();
    assert_eq!(snap.phase, Phase::Pattern);
    assert!(snap.final_rank.is_none());
}
