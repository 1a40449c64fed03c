//! Integration tests for the row builder: assembly order, sequence
//! assignment, gating, propagation, and batch validation.

use bom_tools::{
    builder::{BomSpec, GroupRows, GroupSpec, RandomGroup},
    BomBuilder, BomError, Column, PartRow, RandomRowGenerator, ValidationIssue,
};

fn manual_row(part_no: &str, quantity: f64, source: &str) -> PartRow {
    PartRow {
        part_no: Some(part_no.to_string()),
        description: Some(format!("{part_no} Desc")),
        quantity: Some(quantity),
        source: Some(source.to_string()),
        um: Some("EA".to_string()),
        ..PartRow::default()
    }
}

fn parent_row(part_no: &str) -> PartRow {
    PartRow {
        part_no: Some(part_no.to_string()),
        description: Some("Top assembly".to_string()),
        quantity: Some(1.0),
        source: Some("M".to_string()),
        ..PartRow::default()
    }
}

fn seeded_builder() -> BomBuilder {
    BomBuilder::with_generator(RandomRowGenerator::seeded(1234))
}

#[test]
fn full_tree_ordering_and_linkage() {
    let spec = BomSpec {
        parent: parent_row("TOP"),
        level1: GroupRows::Manual(vec![
            manual_row("C1", 2.0, "M"),
            manual_row("C2", 1.0, "P"),
        ]),
        level2: vec![GroupSpec {
            parent: "C1".to_string(),
            rows: GroupRows::Manual(vec![
                manual_row("S1", 4.0, "F"),
                manual_row("S2", 1.0, "J"),
            ]),
        }],
        level3: vec![GroupSpec {
            parent: "S1".to_string(),
            rows: GroupRows::Manual(vec![manual_row("T1", 3.0, "P")]),
        }],
        ..BomSpec::default()
    };

    let outcome = seeded_builder().build(&spec).expect("build succeeds");
    assert!(outcome.issues.is_empty(), "{:?}", outcome.issues);

    let part_nos: Vec<&str> = outcome
        .rows
        .iter()
        .map(|r| r.part_no.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(part_nos, vec!["TOP", "C1", "C2", "S1", "S2", "T1"]);

    // Top-level row: Level 0, Sequence 0, Parent = its own part number
    let top = &outcome.rows[0];
    assert_eq!(top.level, Some(0));
    assert_eq!(top.sequence, Some(0));
    assert_eq!(top.parent.as_deref(), Some("TOP"));

    // Children carry their group parent and level
    assert_eq!(outcome.rows[1].parent.as_deref(), Some("TOP"));
    assert_eq!(outcome.rows[1].level, Some(1));
    assert_eq!(outcome.rows[3].parent.as_deref(), Some("C1"));
    assert_eq!(outcome.rows[3].level, Some(2));
    assert_eq!(outcome.rows[5].parent.as_deref(), Some("S1"));
    assert_eq!(outcome.rows[5].level, Some(3));
}

#[test]
fn sequence_numbers_restart_per_level_as_increment_multiples() {
    let spec = BomSpec {
        parent: parent_row("TOP"),
        level1: GroupRows::Manual(vec![
            manual_row("C1", 1.0, "M"),
            manual_row("C2", 1.0, "P"),
            manual_row("C3", 1.0, "P"),
        ]),
        level2: vec![GroupSpec {
            parent: "C1".to_string(),
            rows: GroupRows::Manual(vec![
                manual_row("S1", 1.0, "J"),
                manual_row("S2", 1.0, "J"),
            ]),
        }],
        sequence_increment: 10,
        ..BomSpec::default()
    };

    let outcome = seeded_builder().build(&spec).expect("build succeeds");
    let sequences_at = |level: u8| -> Vec<i64> {
        outcome
            .rows
            .iter()
            .filter(|r| r.level == Some(level))
            .filter_map(|r| r.sequence)
            .collect()
    };
    assert_eq!(sequences_at(1), vec![10, 20, 30]);
    assert_eq!(sequences_at(2), vec![10, 20]);
}

#[test]
fn sequence_reassignment_overwrites_provisional_values() {
    let mut row = manual_row("C1", 1.0, "P");
    row.sequence = Some(9999);
    let spec = BomSpec {
        parent: parent_row("TOP"),
        level1: GroupRows::Manual(vec![row]),
        ..BomSpec::default()
    };

    let outcome = seeded_builder().build(&spec).expect("build succeeds");
    assert_eq!(outcome.rows[1].sequence, Some(100));
}

#[test]
fn invalid_sequence_increment_is_rejected() {
    let spec = BomSpec {
        parent: parent_row("TOP"),
        level1: GroupRows::Manual(vec![manual_row("C1", 1.0, "P")]),
        sequence_increment: 7,
        ..BomSpec::default()
    };

    let err = seeded_builder().build(&spec).expect_err("must fail");
    assert!(matches!(err, BomError::InvalidIncrement(7)));
}

#[test]
fn missing_parent_part_number_is_rejected() {
    let spec = BomSpec {
        parent: PartRow {
            part_no: Some("   ".to_string()),
            ..PartRow::default()
        },
        ..BomSpec::default()
    };

    let err = seeded_builder().build(&spec).expect_err("must fail");
    assert!(matches!(err, BomError::ParentPartRequired));
}

#[test]
fn self_parent_rows_get_parent_cleared_not_rejected() {
    // A Level 1 row whose part number equals the top-level part: its Parent
    // is rewritten to the empty string, while the top-level row keeps its
    // own part number as Parent.
    let spec = BomSpec {
        parent: parent_row("TOP"),
        level1: GroupRows::Manual(vec![manual_row("TOP", 1.0, "P")]),
        ..BomSpec::default()
    };

    let outcome = seeded_builder().build(&spec).expect("build succeeds");
    assert!(outcome.issues.is_empty(), "{:?}", outcome.issues);
    assert_eq!(outcome.rows[0].parent.as_deref(), Some("TOP"));
    assert_eq!(outcome.rows[1].parent.as_deref(), Some(""));
}

#[test]
fn level2_is_blocked_without_a_manufactured_level1_parent() {
    let spec = BomSpec {
        parent: parent_row("TOP"),
        level1: GroupRows::Manual(vec![
            manual_row("C1", 1.0, "P"),
            manual_row("C2", 1.0, "J"),
        ]),
        level2: vec![GroupSpec {
            parent: "C1".to_string(),
            rows: GroupRows::Manual(vec![manual_row("S1", 1.0, "P")]),
        }],
        ..BomSpec::default()
    };

    let err = seeded_builder().build(&spec).expect_err("must be blocked");
    assert!(matches!(err, BomError::GatingBlocked { level: 2 }));
}

#[test]
fn level3_is_blocked_without_a_manufactured_level2_parent() {
    let spec = BomSpec {
        parent: parent_row("TOP"),
        level1: GroupRows::Manual(vec![manual_row("C1", 1.0, "M")]),
        level2: vec![GroupSpec {
            parent: "C1".to_string(),
            rows: GroupRows::Manual(vec![manual_row("S1", 1.0, "P")]),
        }],
        level3: vec![GroupSpec {
            parent: "S1".to_string(),
            rows: GroupRows::Manual(vec![manual_row("T1", 1.0, "P")]),
        }],
        ..BomSpec::default()
    };

    let err = seeded_builder().build(&spec).expect_err("must be blocked");
    assert!(matches!(err, BomError::GatingBlocked { level: 3 }));
}

#[test]
fn group_parent_must_be_manufactured() {
    let spec = BomSpec {
        parent: parent_row("TOP"),
        level1: GroupRows::Manual(vec![
            manual_row("C1", 1.0, "M"),
            manual_row("C2", 1.0, "P"),
        ]),
        level2: vec![GroupSpec {
            parent: "C2".to_string(),
            rows: GroupRows::Manual(vec![manual_row("S1", 1.0, "P")]),
        }],
        ..BomSpec::default()
    };

    let err = seeded_builder().build(&spec).expect_err("must fail");
    match err {
        BomError::IneligibleParent { level, parent } => {
            assert_eq!(level, 2);
            assert_eq!(parent, "C2");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validation_collects_every_issue_across_rows() {
    let mut no_quantity = manual_row("C2", 1.0, "P");
    no_quantity.quantity = None;
    let mut bad_phantom = manual_row("C3", 1.0, "P");
    bad_phantom.category = Some("P".to_string());

    let spec = BomSpec {
        parent: parent_row("TOP"),
        level1: GroupRows::Manual(vec![manual_row("C1", 1.0, "M"), no_quantity, bad_phantom]),
        ..BomSpec::default()
    };

    let outcome = seeded_builder().build(&spec).expect("build succeeds");
    assert_eq!(outcome.issues.len(), 2, "{:?}", outcome.issues);
    assert!(matches!(
        &outcome.issues[0],
        ValidationIssue::MissingFields { part_no, fields }
            if part_no == "C2" && fields == &vec![Column::Quantity]
    ));
    assert!(matches!(
        &outcome.issues[1],
        ValidationIssue::CategoryRule { part_no, .. } if part_no == "C3"
    ));
    // Rows are still returned for inspection
    assert_eq!(outcome.rows.len(), 4);
}

#[test]
fn revision_and_location_propagate_over_manual_and_random_rows() {
    let mut child = manual_row("C1", 1.0, "M");
    child.revision = Some("R09".to_string());
    child.location = Some("FL".to_string());

    let mut parent = parent_row("TOP");
    parent.revision = Some("R01".to_string());
    parent.location = Some("WH".to_string());

    let spec = BomSpec {
        parent,
        level1: GroupRows::Manual(vec![child]),
        level2: vec![GroupSpec {
            parent: "C1".to_string(),
            rows: GroupRows::Random(RandomGroup {
                count: 2,
                fields: Default::default(),
                manufactured_count: 0,
                long_part_numbers: false,
            }),
        }],
        propagate_revision: true,
        propagate_location: true,
        ..BomSpec::default()
    };

    let outcome = seeded_builder().build(&spec).expect("build succeeds");
    for row in &outcome.rows[1..] {
        assert_eq!(row.revision.as_deref(), Some("R01"), "{:?}", row.part_no);
        assert_eq!(row.location.as_deref(), Some("WH"), "{:?}", row.part_no);
    }
}

#[test]
fn random_groups_fill_structural_columns_and_defaults() {
    let spec = BomSpec {
        parent: parent_row("TOP"),
        level1: GroupRows::Random(RandomGroup {
            count: 4,
            fields: [Column::PartNo, Column::Description]
                .into_iter()
                .collect(),
            manufactured_count: 2,
            long_part_numbers: false,
        }),
        ..BomSpec::default()
    };

    let outcome = seeded_builder().build(&spec).expect("build succeeds");
    assert!(outcome.issues.is_empty(), "{:?}", outcome.issues);

    let level1: Vec<&PartRow> = outcome
        .rows
        .iter()
        .filter(|r| r.level == Some(1))
        .collect();
    assert_eq!(level1.len(), 4);
    for (idx, row) in level1.iter().enumerate() {
        assert!(row.part_no.is_some());
        assert!(row.quantity.is_some());
        assert_eq!(row.parent.as_deref(), Some("TOP"));
        assert_eq!(row.um.as_deref(), Some("EA"));
        assert_eq!(row.category.as_deref(), Some(""));
        if idx < 2 {
            assert_eq!(row.source.as_deref(), Some("F"));
            assert_eq!(row.productline.as_deref(), Some("CP"));
        } else {
            assert_eq!(row.source.as_deref(), Some("J"));
            assert_eq!(row.productline.as_deref(), Some("CM"));
        }
    }
}

#[test]
fn per_parent_fanout_generates_under_every_manufactured_parent() {
    let spec = BomSpec {
        parent: parent_row("TOP"),
        level1: GroupRows::Manual(vec![
            manual_row("C1", 1.0, "M"),
            manual_row("C2", 1.0, "P"),
            manual_row("C3", 1.0, "F"),
        ]),
        per_parent_level2: Some(RandomGroup {
            count: 2,
            fields: Default::default(),
            manufactured_count: 0,
            long_part_numbers: false,
        }),
        ..BomSpec::default()
    };

    let outcome = seeded_builder().build(&spec).expect("build succeeds");
    let level2_parents: Vec<&str> = outcome
        .rows
        .iter()
        .filter(|r| r.level == Some(2))
        .map(|r| r.parent.as_deref().unwrap_or(""))
        .collect();
    // Two rows under each Manufactured Level 1 part, none under C2
    assert_eq!(level2_parents, vec!["C1", "C1", "C3", "C3"]);
}
