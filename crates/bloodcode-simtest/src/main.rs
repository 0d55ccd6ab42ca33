//! Blood Code Headless Validation Harness
//!
//! Drives the session controller through complete playthroughs without
//! any UI - no rendering, no input devices, everything in-process.
//!
//! Usage:
//!   cargo run -p bloodcode-simtest
//!   cargo run -p bloodcode-simtest -- --verbose

use bloodcode_core::content::parse_case_pack;
use bloodcode_core::GameSession;
use bloodcode_logic::case::{validate_case, CrimeCase};
use bloodcode_logic::casebook;
use bloodcode_logic::patterns::PatternKind;
use bloodcode_logic::phase::Phase;
use bloodcode_logic::scoring::{rank_for, RANKS};
use bloodcode_logic::timeline::{check_sequence, SequenceVerdict, TimelineBoard};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Blood Code Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Casebook structural validation
    results.extend(validate_casebook(verbose));

    // 2. JSON round trip through the case-pack loader
    results.extend(validate_case_pack_round_trip(verbose));

    // 3. Pattern-phase identification sweep
    results.extend(validate_pattern_phase(verbose));

    // 4. Timeline verdicts over randomized orderings
    results.extend(validate_timeline_orderings(verbose));

    // 5. Rank table
    results.extend(validate_rank_table(verbose));

    // 6. Full scripted playthrough per case
    results.extend(validate_full_playthroughs(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Casebook ─────────────────────────────────────────────────────────

fn validate_casebook(verbose: bool) -> Vec<TestResult> {
    println!("--- Casebook ---");
    let mut results = Vec::new();
    let cases = casebook::builtin_cases();

    results.push(TestResult {
        name: "casebook_not_empty".into(),
        passed: cases.len() >= 3,
        detail: format!("{} cases loaded", cases.len()),
    });

    for case in &cases {
        let errors = validate_case(case);
        results.push(TestResult {
            name: format!("case_{}_valid", case.id),
            passed: errors.is_empty(),
            detail: if errors.is_empty() {
                format!(
                    "{} points, {} arrows, {} questions",
                    case.analysis_points.len(),
                    case.timeline_arrows.len(),
                    case.deduction_questions.len()
                )
            } else {
                format!("{:?}", errors)
            },
        });
    }

    // Every pattern kind used by a case must be one of the eight.
    let all_tags: Vec<&str> = PatternKind::ALL.iter().map(|k| k.tag()).collect();
    let used: std::collections::HashSet<&str> = cases
        .iter()
        .flat_map(|c| c.analysis_points.iter().map(|p| p.pattern.tag()))
        .collect();
    results.push(TestResult {
        name: "patterns_in_taxonomy".into(),
        passed: used.iter().all(|t| all_tags.contains(t)),
        detail: format!("{} of {} pattern kinds used", used.len(), all_tags.len()),
    });

    if verbose {
        for case in &cases {
            println!(
                "    {:20} [{}] {}",
                case.id,
                case.difficulty.label(),
                case.location
            );
        }
    }

    results
}

// ── 2. Case-pack round trip ─────────────────────────────────────────────

fn validate_case_pack_round_trip(_verbose: bool) -> Vec<TestResult> {
    println!("--- Case Pack Loader ---");
    let mut results = Vec::new();

    let cases = casebook::builtin_cases();
    let json = match serde_json::to_string(&cases) {
        Ok(j) => j,
        Err(e) => {
            results.push(TestResult {
                name: "casebook_serializes".into(),
                passed: false,
                detail: format!("serialize error: {}", e),
            });
            return results;
        }
    };
    results.push(TestResult {
        name: "casebook_serializes".into(),
        passed: true,
        detail: format!("{} bytes of JSON", json.len()),
    });

    match parse_case_pack(&json) {
        Ok(parsed) => {
            let same_ids = parsed.len() == cases.len()
                && parsed.iter().zip(&cases).all(|(a, b)| a.id == b.id);
            results.push(TestResult {
                name: "case_pack_round_trip".into(),
                passed: same_ids,
                detail: format!("{} cases re-parsed", parsed.len()),
            });
        }
        Err(e) => results.push(TestResult {
            name: "case_pack_round_trip".into(),
            passed: false,
            detail: format!("{}", e),
        }),
    }

    results
}

// ── 3. Pattern phase ────────────────────────────────────────────────────

fn validate_pattern_phase(_verbose: bool) -> Vec<TestResult> {
    println!("--- Pattern Identification ---");
    let mut results = Vec::new();

    for case in casebook::builtin_cases() {
        let mut session = GameSession::with_builtin_cases();
        session.select_case(&case.id);

        // Try every wrong kind on the first point before the right one.
        let first = &case.analysis_points[0];
        let mut wrong_tries = 0;
        for kind in PatternKind::ALL {
            if kind == first.pattern {
                continue;
            }
            session.click_point(first.id);
            session.choose_pattern(kind);
            wrong_tries += 1;
        }
        let snap = session.snapshot();
        let point = snap.points.iter().find(|p| p.id == first.id).unwrap();
        results.push(TestResult {
            name: format!("{}_wrong_kinds_disable", case.id),
            passed: snap.mistakes.pattern == wrong_tries
                && point.disabled_tags.len() == wrong_tries as usize
                && !point.analyzed,
            detail: format!(
                "{} wrong tries, {} disabled",
                wrong_tries,
                point.disabled_tags.len()
            ),
        });

        // Now identify everything correctly.
        for point in &case.analysis_points {
            session.click_point(point.id);
            session.choose_pattern(point.pattern);
        }
        let snap = session.snapshot();
        results.push(TestResult {
            name: format!("{}_pattern_gate_opens", case.id),
            passed: snap.analyzed_count == case.analysis_points.len() && snap.can_advance,
            detail: format!("{}/{} analyzed", snap.analyzed_count, snap.point_count),
        });
    }

    results
}

// ── 4. Timeline orderings ───────────────────────────────────────────────

fn validate_timeline_orderings(verbose: bool) -> Vec<TestResult> {
    println!("--- Timeline Orderings ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(7);

    // In-order reveal across the builtin arrow counts.
    for n in [6usize, 7] {
        let mut board = TimelineBoard::new(n);
        for id in 1..=n as u32 {
            board.toggle(id);
        }
        results.push(TestResult {
            name: format!("in_order_{}_arrows", n),
            passed: board.verdict() == SequenceVerdict::Correct && board.failed_attempts() == 0,
            detail: "ascending reveal is correct with no failed attempts".into(),
        });
    }

    // 100 random shuffles: every non-ascending order must be judged
    // incorrect at the earliest divergence, and the prefix-reset must
    // leave exactly the matching prefix.
    let n = 7usize;
    let mut checked = 0;
    let mut all_ok = true;
    for _ in 0..100 {
        let mut order: Vec<u32> = (1..=n as u32).collect();
        order.shuffle(&mut rng);
        if order.iter().enumerate().all(|(i, &id)| id == i as u32 + 1) {
            continue; // identity permutation, nothing to check
        }
        checked += 1;

        let expected_mismatch = order
            .iter()
            .enumerate()
            .position(|(i, &id)| id != i as u32 + 1)
            .unwrap();

        let mut board = TimelineBoard::new(n);
        for &id in &order {
            board.toggle(id);
        }
        let verdict_ok = board.verdict()
            == SequenceVerdict::Incorrect {
                first_mismatch: expected_mismatch,
            }
            && board.failed_attempts() == 1;

        board.reset_to_mismatch();
        let prefix_ok = board.order() == &order[..expected_mismatch]
            && board.verdict() == SequenceVerdict::Unknown;

        if !(verdict_ok && prefix_ok) {
            all_ok = false;
            if verbose {
                println!("    FAILED order {:?}", order);
            }
        }
    }
    results.push(TestResult {
        name: "random_orderings_sweep".into(),
        passed: all_ok && checked > 0,
        detail: format!("{} shuffled orderings validated", checked),
    });

    // Pure checker agrees with itself on boundary shapes.
    results.push(TestResult {
        name: "sequence_checker_boundaries".into(),
        passed: check_sequence(&[]) == SequenceVerdict::Correct
            && check_sequence(&[1]) == SequenceVerdict::Correct
            && check_sequence(&[2]) == SequenceVerdict::Incorrect { first_mismatch: 0 },
        detail: "empty, singleton, and off-by-one orders".into(),
    });

    results
}

// ── 5. Rank table ───────────────────────────────────────────────────────

fn validate_rank_table(_verbose: bool) -> Vec<TestResult> {
    println!("--- Rank Table ---");
    let mut results = Vec::new();

    let expected = [
        (0, "Trace Architect"),
        (1, "Clinical Analyst"),
        (2, "Blood Whisperer"),
        (3, "Void Walker"),
        (4, "Void Walker"),
        (10, "Void Walker"),
    ];
    let all_match = expected.iter().all(|&(n, rank)| rank_for(n) == rank);
    results.push(TestResult {
        name: "rank_mapping".into(),
        passed: all_match,
        detail: format!("{} labels, clamped beyond {}", RANKS.len(), RANKS.len() - 1),
    });

    results
}

// ── 6. Full playthroughs ────────────────────────────────────────────────

fn validate_full_playthroughs(verbose: bool) -> Vec<TestResult> {
    println!("--- Full Playthroughs ---");
    let mut results = Vec::new();

    for case in casebook::builtin_cases() {
        let outcome = scripted_playthrough(&case);
        results.push(TestResult {
            name: format!("playthrough_{}", case.id),
            passed: outcome.completed && outcome.rank == "Void Walker" && outcome.mistakes == 0,
            detail: format!(
                "rank {:?}, {} mistakes",
                outcome.rank, outcome.mistakes
            ),
        });
        if verbose {
            println!(
                "    {:20} rank={} mistakes={}",
                case.id, outcome.rank, outcome.mistakes
            );
        }
    }

    results
}

struct PlaythroughOutcome {
    completed: bool,
    rank: String,
    mistakes: u32,
}

/// Play a case to completion with no mistakes.
fn scripted_playthrough(case: &CrimeCase) -> PlaythroughOutcome {
    let mut session = GameSession::with_builtin_cases();
    session.select_case(&case.id);

    for point in &case.analysis_points {
        session.click_point(point.id);
        session.choose_pattern(point.pattern);
    }
    session.advance_phase();

    for id in 1..=case.timeline_arrows.len() as u32 {
        session.click_arrow(id);
    }
    session.advance_phase();

    for q in &case.deduction_questions {
        session.choose_answer(q.correct);
    }
    session.advance_phase();

    let snap = session.snapshot();
    PlaythroughOutcome {
        completed: snap.phase == Phase::Complete,
        rank: snap.final_rank.unwrap_or_default(),
        mistakes: snap.mistakes.total(),
    }
}
