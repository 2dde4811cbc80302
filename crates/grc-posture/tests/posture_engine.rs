//! Engine integration tests and property suite

use grc_posture::*;
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .try_init();
}

#[test]
fn full_posture_flow() {
    init_tracing();
    let engine = PostureEngine::new();

    engine.controls.load(vec![
        Control::new("AC-1", "Access Control", "iam", ControlStatus::Verified),
        Control::new("AC-2", "Access Control", "iam", ControlStatus::Verified),
        Control::new("AC-3", "Access Control", "mfa", ControlStatus::NotApplicable),
        Control::new("NW-1", "Network", "fw", ControlStatus::NotStarted),
    ]);

    engine
        .risks
        .add(Risk::new("Credential stuffing", RiskCategory::Security, 5, 4).unwrap());

    let finding = Finding::new("public s3 bucket", FindingSeverity::Critical, "aws");
    engine.findings.add(finding.clone());
    engine.raise_risk_from_finding(&finding).unwrap();

    let policy_id = engine.policies.add(Policy::new("AUP", 10));
    engine.policies.update(policy_id, |p| {
        p.status = PolicyStatus::Approved;
        p.acknowledged_count = 8;
    });

    let checks = vec![
        WeightedCheck::new("mfa", true, 40.0),
        WeightedCheck::new("encryption", false, 30.0),
        WeightedCheck::new("logging", true, 30.0),
    ];
    let summary = engine.executive_summary(&checks).unwrap();

    // 2 verified of 3 eligible
    assert_eq!(summary.compliance.score, 67);
    assert_eq!(summary.compliance.counts.not_applicable, 1);

    // Domains ordered lexicographically
    let names: Vec<_> = summary.domains.iter().map(|d| d.domain.as_str()).collect();
    assert_eq!(names, vec!["Access Control", "Network"]);
    assert_eq!(summary.domains[0].score, 100);
    assert_eq!(summary.domains[1].score, 0);

    // 5x4 manual risk is Critical; synthesized 3x5 is High
    assert_eq!(summary.risks.total, 2);
    assert_eq!(summary.risks.critical, 1);
    assert_eq!(summary.risks.high, 1);

    assert_eq!(summary.findings.critical, 1);
    assert_eq!(summary.findings.unresolved, 1);

    assert_eq!(summary.adoption.adoption_percent, 80);

    assert_eq!(summary.posture.score, 70.0);
    assert_eq!(summary.posture.grade, "B");
}

#[test]
fn aggregation_is_idempotent() {
    let controls = vec![
        Control::new("c1", "A", "x", ControlStatus::Verified),
        Control::new("c2", "B", "x", ControlStatus::InProgress),
        Control::new("c3", "", "x", ControlStatus::NotApplicable),
    ];
    assert_eq!(aggregate(&controls, None), aggregate(&controls, None));
    assert_eq!(aggregate_by_domain(&controls), aggregate_by_domain(&controls));
}

#[test]
fn risk_table_worked_example() {
    let score = risk_score(5, 4).unwrap();
    assert_eq!(score, 20);
    assert_eq!(risk_severity(score), "Critical");
}

fn grade_rank(grade: &str) -> u8 {
    match grade {
        "A" => 4,
        "B" => 3,
        "C" => 2,
        "D" => 1,
        _ => 0,
    }
}

fn arb_status() -> impl Strategy<Value = ControlStatus> {
    prop_oneof![
        Just(ControlStatus::Verified),
        Just(ControlStatus::InProgress),
        Just(ControlStatus::NotStarted),
        Just(ControlStatus::NotApplicable),
    ]
}

proptest! {
    #[test]
    fn risk_score_is_product_and_symmetric(l in 1u8..=5, i in 1u8..=5) {
        let score = risk_score(l, i).unwrap();
        prop_assert_eq!(score, l * i);
        prop_assert_eq!(score, risk_score(i, l).unwrap());
        prop_assert!((1..=25).contains(&score));
    }

    #[test]
    fn risk_score_rejects_out_of_range(l in 6u8..=255, i in 1u8..=5) {
        prop_assert!(risk_score(l, i).is_err());
        prop_assert!(risk_score(i, 0).is_err());
    }

    #[test]
    fn grade_classification_is_total_and_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let ga = classify(a, GRADE_BANDS);
        let gb = classify(b, GRADE_BANDS);
        prop_assert!(["A", "B", "C", "D", "F"].contains(&ga));
        if a >= b {
            prop_assert!(grade_rank(ga) >= grade_rank(gb));
        }
    }

    #[test]
    fn partition_counts_sum_to_input_length(statuses in prop::collection::vec(arb_status(), 0..64)) {
        let controls: Vec<Control> = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| Control::new(&format!("c{i}"), "A", "x", *s))
            .collect();
        let summary = aggregate(&controls, None);
        prop_assert_eq!(summary.counts.total(), controls.len());
        prop_assert!(summary.score <= 100);
    }

    #[test]
    fn domain_groups_partition_the_input(
        domains in prop::collection::vec("[a-c]{1}", 0..32),
    ) {
        let controls: Vec<Control> = domains
            .iter()
            .enumerate()
            .map(|(i, d)| Control::new(&format!("c{i}"), d, "x", ControlStatus::Verified))
            .collect();
        let groups = aggregate_by_domain(&controls);

        let grouped_total: usize = groups.iter().map(|g| g.counts.total()).sum();
        prop_assert_eq!(grouped_total, controls.len());

        let keys: Vec<_> = groups.iter().map(|g| g.domain.clone()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn posture_score_sums_passing_points(
        checks in prop::collection::vec((any::<bool>(), 0.0f64..50.0), 0..16),
    ) {
        let checks: Vec<WeightedCheck> = checks
            .into_iter()
            .enumerate()
            .map(|(i, (passed, points))| WeightedCheck::new(&format!("chk{i}"), passed, points))
            .collect();
        let expected: f64 = checks.iter().filter(|c| c.passed).map(|c| c.points).sum();
        let result = posture_score(&checks).unwrap();
        prop_assert_eq!(result.score, expected);
    }
}
