//! Built-in crime-scene casebook.
//!
//! Three cases spanning the difficulty tiers. The tables here are the
//! canonical content; JSON case packs loaded at runtime extend them.
//! Every built-in case must pass [`crate::case::validate_case`] — the
//! tests below keep that honest.

use crate::case::{
    AnalysisPoint, CrimeCase, DeductionQuestion, Difficulty, TimelineArrow,
};
use crate::patterns::PatternKind;

/// All built-in cases, in menu order.
pub fn builtin_cases() -> Vec<CrimeCase> {
    vec![suburban_shooting(), bedroom_assault(), office_incident()]
}

/// Find a case by id in a slice of cases.
pub fn find_case<'a>(cases: &'a [CrimeCase], case_id: &str) -> Option<&'a CrimeCase> {
    cases.iter().find(|c| c.id == case_id)
}

fn point(id: u32, x: f32, y: f32, pattern: PatternKind, description: &str) -> AnalysisPoint {
    AnalysisPoint {
        id,
        x,
        y,
        pattern,
        description: description.to_string(),
    }
}

fn arrow(id: u32, x: f32, y: f32, event: &str, direction: &str) -> TimelineArrow {
    TimelineArrow {
        id,
        x,
        y,
        event: event.to_string(),
        direction: direction.to_string(),
    }
}

fn question(text: &str, options: &[&str], correct: usize, explanation: &str) -> DeductionQuestion {
    DeductionQuestion {
        question: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct,
        explanation: explanation.to_string(),
    }
}

fn suburban_shooting() -> CrimeCase {
    CrimeCase {
        id: "suburban-shooting".into(),
        title: "The Suburban Shooting".into(),
        description: "A home invasion turned deadly. Analyze the blood patterns to reconstruct \
                      the sequence of events from the initial entry to the final moments."
            .into(),
        difficulty: Difficulty::Beginner,
        location: "Suburban Home".into(),
        available: true,
        image: "/suburban-scene.png".into(),
        analysis_points: vec![
            point(1, 78.0, 22.0, PatternKind::ImpactSpatter, "Fine droplets near the entrance"),
            point(2, 68.0, 58.0, PatternKind::PassiveDrops, "Small pools of blood on the floor by the door"),
            point(3, 35.0, 65.0, PatternKind::DripTrail, "Linear path of drops leading into the house"),
            point(4, 45.0, 80.0, PatternKind::PassiveDrops, "Large pool of blood where victim collapsed"),
            point(5, 70.0, 75.0, PatternKind::ImpactSpatter, "Scattered tiny droplets around the victim's head"),
        ],
        timeline_arrows: vec![
            arrow(1, 20.0, 75.0, "Killer positioned inside, awaiting victim's entry", "↓"),
            arrow(2, 70.0, 30.0, "Victim opens door, shot in stomach", "←"),
            arrow(3, 30.0, 60.0, "Victim stumbles further into the house", "↙"),
            arrow(4, 45.0, 75.0, "Victim collapses to the floor", "↓"),
            arrow(5, 60.0, 65.0, "Killer delivers fatal headshot", "↓"),
            arrow(6, 50.0, 45.0, "Killer flees the scene", "↗"),
        ],
        deduction_questions: vec![
            question(
                "What was the initial injury location?",
                &["Head", "Chest", "Stomach", "Leg"],
                2,
                "The initial blood patterns (impact spatter and passive drops) at the entry \
                 point, followed by a drip trail, indicate a wound that caused bleeding while \
                 the victim was still mobile, consistent with a stomach injury.",
            ),
            question(
                "What does the drip trail indicate about the victim?",
                &["Victim was dragged", "Victim moved after injury", "Victim was stationary"],
                1,
                "A drip trail is formed by drops of blood falling from a moving object or \
                 person, indicating the victim was mobile after sustaining the initial injury.",
            ),
            question(
                "What caused the final blood spatter around the victim's head?",
                &["Blunt force trauma", "Stabbing", "Second gunshot"],
                2,
                "The presence of additional impact spatter around the head, after the victim \
                 had already fallen, suggests a second, distinct forceful event, consistent \
                 with a fatal headshot.",
            ),
        ],
    }
}

fn bedroom_assault() -> CrimeCase {
    CrimeCase {
        id: "bedroom-assault".into(),
        title: "The Bedroom Assault".into(),
        description: "A violent confrontation in a residential bedroom. Multiple blood patterns \
                      suggest a complex sequence of events."
            .into(),
        difficulty: Difficulty::Intermediate,
        location: "Residential Bedroom".into(),
        available: true,
        image: "/crime-scene.png".into(),
        analysis_points: vec![
            point(1, 25.0, 60.0, PatternKind::DripTrail, "Trail of drops leading from door"),
            point(2, 70.0, 40.0, PatternKind::ArterialSpray, "Arcing pattern on wall"),
            point(3, 60.0, 80.0, PatternKind::Void, "Clean area within blood pool"),
            point(4, 15.0, 45.0, PatternKind::Swipe, "Smear pattern on door frame"),
        ],
        timeline_arrows: vec![
            arrow(1, 20.0, 50.0, "Victim enters the room through the door", "→"),
            arrow(2, 35.0, 55.0, "Initial confrontation occurs near the entrance", "↗"),
            arrow(3, 70.0, 35.0, "Victim is struck, causing arterial bleeding", "↑"),
            arrow(4, 50.0, 65.0, "Victim moves toward the bed while bleeding", "→"),
            arrow(5, 60.0, 75.0, "Final impact occurs on the floor", "↓"),
            arrow(6, 25.0, 70.0, "Perpetrator attempts to clean evidence", "↻"),
            arrow(7, 15.0, 40.0, "Perpetrator exits, leaving additional traces", "←"),
        ],
        deduction_questions: vec![
            question(
                "What type of weapon was likely used?",
                &["Blunt object", "Sharp blade", "Projectile weapon"],
                0,
                "Impact spatter and arterial spray patterns indicate blunt force trauma to a \
                 major vessel.",
            ),
            question(
                "Was the victim upright or grounded when the major injury occurred?",
                &["Upright and mobile", "Already on the ground", "Seated position"],
                0,
                "Arterial spray height and angle indicate the victim was standing when the \
                 major artery was severed.",
            ),
            question(
                "Is there evidence of scene tampering?",
                &["No tampering evident", "Minor cleanup attempt", "Extensive staging"],
                1,
                "Wipe patterns and void areas suggest someone attempted to clean or manipulate \
                 the blood evidence.",
            ),
        ],
    }
}

fn office_incident() -> CrimeCase {
    CrimeCase {
        id: "office-incident".into(),
        title: "The Office Incident".into(),
        description: "A workplace stabbing in a corporate office. The victim was attacked while \
                      working late, leaving behind critical forensic evidence."
            .into(),
        difficulty: Difficulty::Expert,
        location: "Corporate Office".into(),
        available: true,
        image: "/office-scene.png".into(),
        analysis_points: vec![
            point(1, 65.0, 25.0, PatternKind::ImpactSpatter, "Fine droplets on wall above desk"),
            point(2, 45.0, 35.0, PatternKind::CastOff, "Linear pattern on chair back"),
            point(3, 55.0, 75.0, PatternKind::PassiveDrops, "Large blood pool near body outline"),
            point(4, 70.0, 80.0, PatternKind::Wipe, "Disturbed blood pattern on floor"),
        ],
        timeline_arrows: vec![
            arrow(1, 30.0, 20.0, "Victim working late at desk, unaware of approaching threat", "→"),
            arrow(2, 40.0, 30.0, "Attacker approaches from behind with knife", "↘"),
            arrow(3, 50.0, 35.0, "Initial stabbing occurs while victim is seated", "↓"),
            arrow(4, 45.0, 50.0, "Victim attempts to stand and defend, creating cast-off patterns", "↗"),
            arrow(5, 55.0, 65.0, "Victim collapses to floor, bleeding heavily", "↓"),
            arrow(6, 70.0, 75.0, "Attacker attempts to clean weapon/hands on floor", "↻"),
            arrow(7, 85.0, 40.0, "Attacker flees through office door", "→"),
        ],
        deduction_questions: vec![
            question(
                "What type of weapon was used in this attack?",
                &["Blunt instrument", "Sharp-edged blade", "Projectile weapon"],
                1,
                "The linear cast-off patterns and concentrated blood pool indicate a sharp \
                 blade weapon, consistent with a knife attack.",
            ),
            question(
                "Was the victim aware of the attacker's approach?",
                &["Fully aware and prepared", "Partially aware but surprised", "Completely unaware"],
                2,
                "The attack pattern from behind while seated, with minimal defensive wounds, \
                 suggests the victim was caught off-guard.",
            ),
            question(
                "What does the blood evidence suggest about the attack sequence?",
                &["Single fatal blow", "Multiple stab wounds with struggle", "Prolonged torture"],
                1,
                "Cast-off patterns and impact spatter indicate multiple strikes during a brief \
                 but violent struggle before the victim collapsed.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::validate_case;

    #[test]
    fn builtin_cases_validate_clean() {
        for case in builtin_cases() {
            let errors = validate_case(&case);
            assert!(errors.is_empty(), "case {} has errors: {:?}", case.id, errors);
        }
    }

    #[test]
    fn builtin_case_count_and_order() {
        let cases = builtin_cases();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].id, "suburban-shooting");
        assert_eq!(cases[1].id, "bedroom-assault");
        assert_eq!(cases[2].id, "office-incident");
    }

    #[test]
    fn difficulty_spread() {
        let cases = builtin_cases();
        assert_eq!(cases[0].difficulty, Difficulty::Beginner);
        assert_eq!(cases[1].difficulty, Difficulty::Intermediate);
        assert_eq!(cases[2].difficulty, Difficulty::Expert);
    }

    #[test]
    fn all_builtin_cases_available() {
        assert!(builtin_cases().iter().all(|c| c.available));
    }

    #[test]
    fn find_case_by_id() {
        let cases = builtin_cases();
        assert!(find_case(&cases, "bedroom-assault").is_some());
        assert!(find_case(&cases, "warehouse-fire").is_none());
    }

    #[test]
    fn positions_are_percentages() {
        for case in builtin_cases() {
            for p in &case.analysis_points {
                assert!((0.0..=100.0).contains(&p.x) && (0.0..=100.0).contains(&p.y));
            }
            for a in &case.timeline_arrows {
                assert!((0.0..=100.0).contains(&a.x) && (0.0..=100.0).contains(&a.y));
            }
        }
    }
}
