//! Calculator integration tests
//!
//! These run raw form input through validation, the damage pipeline and
//! rendering, the way a presentation layer would.

use mathhammer::calculator::{Calculator, Evaluation};
use mathhammer::combat::{compute_outcome, evaluate, required_wound_roll};
use mathhammer::core::config::CalculatorConfig;
use mathhammer::core::error::MathhammerError;
use mathhammer::dice::{
    expected_successes, probability_at_least, probability_less_than, RerollPolicy,
};
use mathhammer::profiles::catalog::parse_catalog_toml;
use mathhammer::profiles::{AttackProfile, DefenderCatalog, DefenderProfile};
use mathhammer::report;
use mathhammer::validation::{validate, RawAttackInput, ValidationFailure, INCOMPLETE_PROMPT};

fn reference_input() -> RawAttackInput {
    RawAttackInput::new()
        .attacks("10")
        .to_hit("3")
        .strength("8")
        .ap("1")
        .damage("2")
        .reroll_hit("none")
        .reroll_wound("none")
}

/// The reference volley: 10 shots, 3+, S8 AP1 D2 into Space Marines.
///
/// Hits 6.67, wounds on 2s for 5.56, saves on 4s leaves 2.78, and the
/// excess damage is lost against single-wound models.
#[test]
fn test_reference_volley_against_meq() {
    let calc = Calculator::default();
    let evaluation = calc
        .evaluate(&reference_input().enemies(["MEQ"]))
        .expect("MEQ is in the default catalog");

    assert_eq!(
        calc.render(&evaluation),
        "Average damage caused to MEQ: 2.78 wounds caused which kills 2.78 models."
    );
}

/// The form's target selection is required even when every number is valid.
#[test]
fn test_missing_target_selection_prompts() {
    let calc = Calculator::default();
    let input = reference_input();

    assert_eq!(validate(&input), Some(ValidationFailure::Incomplete));
    let evaluation = calc.evaluate(&input).expect("no fault");
    assert_eq!(evaluation, Evaluation::Incomplete);
    assert_eq!(calc.render(&evaluation), INCOMPLETE_PROMPT);
}

#[test]
fn test_strength_zero_and_one() {
    let zero = validate(&reference_input().strength("0").enemies(["MEQ"]));
    assert_eq!(
        zero.map(|f| f.to_string()).as_deref(),
        Some("Strength must be a whole number greater than zero.")
    );

    let one = validate(&reference_input().strength("1").enemies(["MEQ"]));
    assert_eq!(one, None);
}

#[test]
fn test_results_follow_selection_order() {
    let calc = Calculator::default();
    let order = ["Knight", "Ork", "TEQ", "GEQ", "Tank", "MEQ"];
    let Evaluation::Results(results) = calc
        .evaluate(&reference_input().enemies(order))
        .expect("all defaults known")
    else {
        panic!("expected results");
    };

    let names: Vec<_> = results.iter().map(|r| r.defender_name.as_str()).collect();
    assert_eq!(names, order);
}

#[test]
fn test_wound_table_reference_points() {
    assert_eq!(required_wound_roll(8, 4), 2);
    assert_eq!(required_wound_roll(8, 8), 4);
    assert_eq!(required_wound_roll(3, 4), 5);
    assert_eq!(required_wound_roll(1, 4), 6);
    // S9 vs T6 is a 1.5 ratio, so it wounds on 3s rather than 2s
    assert_eq!(required_wound_roll(9, 6), 3);
}

/// A save of 0 would give a negative save chance and negative damage, so
/// such a defender can never be built.
#[test]
fn test_out_of_range_defender_cannot_be_built() {
    let err = DefenderProfile::new("Bad", "", 4, 0, 7, 1.0).unwrap_err();
    assert!(matches!(err, MathhammerError::InvalidDefender { .. }));

    let json = r#"{"name": "Bad", "toughness": 4, "armor_save": 0, "wounds_per_model": 1.0}"#;
    assert!(serde_json::from_str::<DefenderProfile>(json).is_err());
}

#[test]
fn test_probabilities_are_complementary() {
    for target in 2..=6 {
        let sum = probability_at_least(target) + probability_less_than(target);
        assert!((sum - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_auto_hit_ignores_policy() {
    for policy in [RerollPolicy::None, RerollPolicy::Ones, RerollPolicy::All] {
        assert_eq!(expected_successes(1, 13.0, policy), 13.0);
    }
}

/// Full rerolls square the miss chance: a 4+ roll succeeds 3 times in 4.
#[test]
fn test_reroll_all_fixture() {
    assert!((expected_successes(4, 4.0, RerollPolicy::All) - 3.0).abs() < 1e-12);
}

/// Against a Knight the 5++ invulnerable save caps what high AP achieves.
#[test]
fn test_knight_invulnerable_save() {
    let catalog = DefenderCatalog::with_defaults();
    let knight = catalog.get("Knight").expect("knight present");

    let ap3 = AttackProfile::new(1.0, 2, 16, 3, 6.0, RerollPolicy::None, RerollPolicy::None)
        .expect("valid profile");
    let ap5 = AttackProfile::new(1.0, 2, 16, 5, 6.0, RerollPolicy::None, RerollPolicy::None)
        .expect("valid profile");

    assert_eq!(compute_outcome(&ap3, knight), compute_outcome(&ap5, knight));
}

#[test]
fn test_custom_catalog_from_toml() {
    let catalog = parse_catalog_toml(
        r#"
        [[defender]]
        name = "Custodes"
        description = "Custodian Guard"
        toughness = 6
        armor_save = 2
        invulnerable_save = 4
        wounds_per_model = 3.0
        "#,
    )
    .expect("valid catalog");

    let calc = Calculator::new(catalog, CalculatorConfig::default());
    let evaluation = calc
        .evaluate(&reference_input().enemies(["Custodes"]))
        .expect("custodes known");
    let Evaluation::Results(results) = &evaluation else {
        panic!("expected results");
    };
    // 6.67 hits, S8 vs T6 wounds on 3s, the 3+ after AP1 beats the 4++
    let expected = 20.0 / 3.0 * (4.0 / 6.0) * (2.0 / 6.0) * 2.0;
    assert!((results[0].expected_wounds - expected).abs() < 1e-9);

    // Defaults are not merged into a custom catalog
    assert!(matches!(
        calc.evaluate(&reference_input().enemies(["MEQ"])),
        Err(MathhammerError::UnknownDefender(_))
    ));
}

#[test]
fn test_batch_evaluator_with_ad_hoc_catalog() {
    let catalog = DefenderCatalog::from_profiles([
        DefenderProfile::new("Grot", "Gretchin", 2, 7, 7, 1.0).expect("valid profile"),
        DefenderProfile::new("Nob", "Ork Nob", 5, 4, 7, 2.0).expect("valid profile"),
    ])
    .expect("valid profiles");
    let attack = AttackProfile::new(3.0, 4, 4, 0, 1.0, RerollPolicy::None, RerollPolicy::None)
        .expect("valid profile");

    let results = evaluate(&attack, &["Nob", "Grot"], &catalog).expect("known names");
    assert_eq!(results[0].defender_name, "Nob");
    assert_eq!(results[1].defender_name, "Grot");
    // Grot: 1.5 hits, wounds on 2s, no save
    assert!((results[1].expected_wounds - 1.25).abs() < 1e-12);
}

#[test]
fn test_json_input_round_trip_through_report() {
    let input = RawAttackInput::from_json(
        r#"{"attacks": 10, "tohit": 3, "strength": 8, "ap": 1, "damage": 2,
            "enemies": ["MEQ"]}"#,
    )
    .expect("valid json");
    let calc = Calculator::default();
    let evaluation = calc.evaluate(&input).expect("no fault");
    let json = report::to_json(&evaluation, 2).expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["results"][0]["expected_models_lost"], 2.78);
}
