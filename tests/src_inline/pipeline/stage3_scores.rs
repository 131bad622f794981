use super::*;
use crate::input::builtin_roster;

fn entity(name: &str, values: &[f64]) -> Entity {
    Entity::new(name, values.to_vec())
}

#[test]
fn test_identical_entities_score_one() {
    let profile = ScoringProfile::default_v1();
    let a = entity("a", &[2.0, 7.0, 1.0]);
    let b = entity("b", &[2.0, 7.0, 1.0]);
    assert_eq!(pairwise_score(&a, &b, &profile).unwrap(), 1.0);
    assert_eq!(aggregate_score(&a, std::slice::from_ref(&b)).unwrap(), 1.0);
}

#[test]
fn test_pairwise_uses_fixed_normalizer() {
    let profile = ScoringProfile::default_v1();
    let a = entity("a", &[0.0, 0.0]);
    let b = entity("b", &[3.0, 4.0]);
    assert!((pairwise_score(&a, &b, &profile).unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn test_pairwise_goes_negative_beyond_max_distance() {
    let profile = ScoringProfile::default_v1();
    let a = entity("a", &[0.0, 0.0]);
    let b = entity("b", &[12.0, 16.0]);
    assert!((pairwise_score(&a, &b, &profile).unwrap() + 1.0).abs() < 1e-12);
}

#[test]
fn test_aggregate_is_team_relative() {
    let a = entity("a", &[0.0]);
    let team = vec![entity("near", &[1.0]), entity("far", &[4.0])];
    assert!((aggregate_score(&a, &team).unwrap() - 0.75).abs() < 1e-12);

    // matching one member exactly gives the top score
    let team = vec![entity("same", &[0.0]), entity("far", &[4.0])];
    assert_eq!(aggregate_score(&a, &team).unwrap(), 1.0);

    // every member equally distant gives zero
    let team = vec![entity("l", &[-2.0]), entity("r", &[2.0])];
    assert_eq!(aggregate_score(&a, &team).unwrap(), 0.0);
}

#[test]
fn test_aggregate_rejects_empty_team() {
    let a = entity("a", &[0.0]);
    assert_eq!(aggregate_score(&a, &[]).unwrap_err(), ScoreError::EmptyTeam);
}

#[test]
fn test_scores_stay_in_unit_range() {
    let profile = ScoringProfile::default_v1();
    let roster = builtin_roster().unwrap();
    for applicant in roster.applicants() {
        let agg = aggregate_score(applicant, roster.team()).unwrap();
        assert!((0.0..=1.0).contains(&agg));
        for member in roster.team() {
            let d = distance(&applicant.values, &member.values).unwrap();
            if d <= profile.max_pairwise_distance {
                let s = pairwise_score(applicant, member, &profile).unwrap();
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }
}

#[test]
fn test_john_aggregate_matches_hand_computation() {
    let roster = builtin_roster().unwrap();
    let john = &roster.applicants()[0];
    let raw = aggregate_score(john, roster.team()).unwrap();
    let expected = 1.0 - 10f64.sqrt() / 75f64.sqrt();
    assert!((raw - expected).abs() < 1e-12);
    assert!((raw - 0.635).abs() < 1e-3);
}

#[test]
fn test_score_applicants_on_sample_roster() {
    let profile = ScoringProfile::default_v1();
    let roster = builtin_roster().unwrap();
    let scored = score_applicants(roster.team(), roster.applicants(), &profile).unwrap();
    let pairs: Vec<(&str, f64)> = scored.iter().map(|r| (r.name.as_str(), r.score)).collect();
    assert_eq!(pairs, vec![("John", 0.63), ("Jane", 0.39), ("Joe", 0.06)]);
}

#[test]
fn test_score_matrix_on_sample_roster() {
    let profile = ScoringProfile::default_v1();
    let roster = builtin_roster().unwrap();
    let matrix = build_score_matrix(roster.team(), roster.applicants(), &profile).unwrap();
    assert_eq!(matrix.rows, vec!["John", "Jane", "Joe"]);
    assert_eq!(matrix.columns, vec!["Eddie", "Will", "Mike"]);
    assert_eq!(
        matrix.values,
        vec![
            vec![0.68, 0.28, 0.13],
            vec![0.38, 0.51, 0.19],
            vec![0.0, 0.06, 0.03],
        ]
    );
    assert_eq!(matrix.get("John", "Eddie"), Some(0.68));
    assert_eq!(matrix.get("Nobody", "Eddie"), None);
}

#[test]
fn test_joe_eddie_rounds_to_positive_zero() {
    let profile = ScoringProfile::default_v1();
    let roster = builtin_roster().unwrap();
    let joe = &roster.applicants()[2];
    let eddie = &roster.team()[0];
    let raw = pairwise_score(joe, eddie, &profile).unwrap();
    assert!(raw < 0.0);
    let rounded = round_to(raw, profile.decimals);
    assert_eq!(rounded, 0.0);
    assert!(rounded.is_sign_positive());
}

#[test]
fn test_empty_applicants_give_empty_outputs() {
    let profile = ScoringProfile::default_v1();
    let team = vec![entity("m", &[1.0])];
    assert!(score_applicants(&team, &[], &profile).unwrap().is_empty());
    let matrix = build_score_matrix(&team, &[], &profile).unwrap();
    assert!(matrix.is_empty());
    assert_eq!(matrix.columns, vec!["m"]);
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(0.634_85, 2), 0.63);
    assert_eq!(round_to(0.683_77, 2), 0.68);
    assert_eq!(round_to(-0.056, 2), -0.06);
    assert_eq!(round_to(1.0, 2), 1.0);
}

#[test]
fn test_round_to_exact_ties_go_to_even() {
    assert_eq!(round_to(0.125, 2), 0.12);
    assert_eq!(round_to(0.625, 2), 0.62);
    assert_eq!(round_to(0.375, 2), 0.38);
    assert_eq!(round_to(-0.125, 2), -0.12);
}

#[test]
fn test_round_to_uses_exact_binary_value() {
    // decimal literals that only look like ties
    assert_eq!(round_to(0.005, 2), 0.01);
    assert_eq!(round_to(0.015, 2), 0.01);
    assert_eq!(round_to(0.635, 2), 0.64);
    assert_eq!(round_to(0.285, 2), 0.28);
    assert_eq!(round_to(2.675, 2), 2.67);
}

#[test]
fn test_tied_scores_round_to_even() {
    let profile = ScoringProfile::default_v1();
    let team = vec![entity("near", &[7.0, 0.0]), entity("far", &[8.0, 0.0])];
    let applicants = vec![entity("a", &[0.0, 0.0])];
    let scored = score_applicants(&team, &applicants, &profile).unwrap();
    // 1 - 7/8 = 0.125 exactly
    assert_eq!(scored[0].score, 0.12);

    let team = vec![entity("m", &[3.75, 0.0])];
    let matrix = build_score_matrix(&team, &applicants, &profile).unwrap();
    // 1 - 3.75/10 = 0.625 exactly
    assert_eq!(matrix.values, vec![vec![0.62]]);
}

#[test]
fn test_huge_attribute_values_keep_scores_finite() {
    let profile = ScoringProfile::default_v1();
    let team = vec![entity("m1", &[1e200]), entity("m2", &[2e200])];
    let applicants = vec![entity("a", &[-1e200])];
    let scored = score_applicants(&team, &applicants, &profile).unwrap();
    assert!(scored[0].score.is_finite());
    assert_eq!(scored[0].score, 0.33);

    let json = crate::report::json::render_scored_applicants_json(&scored).unwrap();
    assert!(!json.contains("null"));
}

#[test]
fn test_unrepresentable_distance_fails_scoring() {
    let profile = ScoringProfile::default_v1();
    let team = vec![entity("m", &[1.7e308])];
    let applicants = vec![entity("a", &[-1.7e308])];
    assert_eq!(
        score_applicants(&team, &applicants, &profile).unwrap_err(),
        ScoreError::NonFiniteDistance
    );
    assert_eq!(
        build_score_matrix(&team, &applicants, &profile).unwrap_err(),
        ScoreError::NonFiniteDistance
    );
}
