//! Scorer behavior across whole documents

use crate::common::fixtures::{contract, days_ago, reference_now};
use caalm_search::core::search::{explain, score, Adjustment, SearchField};
use caalm_search::core::types::Document;

const TABLE: [(SearchField, f64); 9] = [
    (SearchField::Name, 15.0),
    (SearchField::ContractNumber, 12.0),
    (SearchField::Vendor, 10.0),
    (SearchField::Department, 8.0),
    (SearchField::ContractType, 8.0),
    (SearchField::Description, 6.0),
    (SearchField::AssignedManagers, 5.0),
    (SearchField::Compliance, 4.0),
    (SearchField::Priority, 3.0),
];

/// Straightforward re-statement of the scoring rules, used to check
/// the library against an independent computation.
fn reference_raw(doc: &Document, query: &str, recent: bool, stale: bool) -> f64 {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return 0.0;
    }
    let words: Vec<&str> = q.split_whitespace().collect();

    let mut total = 0.0;
    for (field, weight) in TABLE {
        let Some(value) = doc.field(field) else {
            continue;
        };
        let value = value.to_lowercase();
        if value == q {
            total += weight * 2.0;
        } else if value.starts_with(&q) {
            total += weight * 1.5;
        } else if value.contains(&q) {
            total += weight;
        } else if words.len() > 1 {
            let field_words: Vec<&str> = value.split_whitespace().collect();
            let matched = words
                .iter()
                .filter(|w| field_words.iter().any(|fw| fw.contains(*w)))
                .count();
            if matched > 0 {
                total += weight * (matched as f64 / words.len() as f64);
            }
        }
    }

    if recent {
        total *= 1.2;
    }
    if matches!(doc.priority.as_deref(), Some("High" | "Critical")) {
        total *= 1.1;
    }
    if matches!(doc.status.as_deref(), Some("active" | "Active")) {
        total *= 1.05;
    }
    if stale {
        total *= 0.9;
    }
    total
}

fn round2(raw: f64) -> f64 {
    (raw * 100.0).round() / 100.0
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.011,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_blank_queries_score_zero() {
    let doc = contract("Acme Support");
    for query in ["", "   ", "\t\n"] {
        assert_eq!(score(&doc, query, reference_now()), 0.0);
    }
}

#[test]
fn test_exact_name_match() {
    let doc = contract("acme support");
    assert_eq!(score(&doc, "acme support", reference_now()), 30.0);
}

#[test]
fn test_prefix_beats_substring() {
    let doc = Document {
        vendor: Some("acme corp".to_string()),
        ..Document::default()
    };
    assert_eq!(score(&doc, "acme", reference_now()), 15.0);
}

#[test]
fn test_word_overlap_partial_credit() {
    let doc = Document {
        description: Some("annual software license".to_string()),
        ..Document::default()
    };
    assert_eq!(score(&doc, "software hardware", reference_now()), 3.0);
}

#[test]
fn test_recency_and_staleness_ratio() {
    let now = reference_now();
    let mut recent = contract("Acme Support");
    recent.created_at = Some(days_ago(5));
    let mut stale = contract("Acme Support");
    stale.created_at = Some(days_ago(400));
    let mut neutral = contract("Acme Support");
    neutral.created_at = Some(days_ago(100));

    let base = score(&neutral, "acme", now);
    let recent_score = score(&recent, "acme", now);
    let stale_score = score(&stale, "acme", now);

    assert_eq!(base, 22.5);
    assert_close(recent_score, base * 1.2);
    assert_close(stale_score, base * 0.9);
    assert!((recent_score / stale_score - 1.2 / 0.9).abs() < 0.01);
}

#[test]
fn test_boundary_days_are_not_adjusted() {
    let now = reference_now();
    let mut on_recent_edge = contract("Acme Support");
    on_recent_edge.created_at = Some(days_ago(30));
    let mut on_stale_edge = contract("Acme Support");
    on_stale_edge.created_at = Some(days_ago(365));

    assert_eq!(score(&on_recent_edge, "acme", now), 22.5);
    assert_eq!(score(&on_stale_edge, "acme", now), 22.5);
}

#[test]
fn test_invalid_timestamp_has_no_adjustment() {
    let now = reference_now();
    for created in ["", "not a date", "2024-13-45"] {
        let mut doc = contract("Acme Support");
        doc.created_at = Some(created.to_string());
        assert_eq!(score(&doc, "acme", now), 22.5, "created_at = {created:?}");
    }
}

#[test]
fn test_score_matches_reference_computation() {
    let now = reference_now();
    let cases: Vec<(Document, &str, bool, bool)> = vec![
        (contract("acme support"), "acme support", false, false),
        (
            Document {
                contract_name: Some("Acme Support".to_string()),
                vendor: Some("Acme Corp".to_string()),
                priority: Some("High".to_string()),
                status: Some("active".to_string()),
                created_at: Some(days_ago(3)),
                ..Document::default()
            },
            "acme",
            true,
            false,
        ),
        (
            Document {
                description: Some("Annual software license renewal".to_string()),
                assigned_managers: Some("Jane Doe, John Roe".to_string()),
                compliance: Some("SOC2 pending".to_string()),
                created_at: Some(days_ago(500)),
                ..Document::default()
            },
            "software doe soc2 audit",
            false,
            true,
        ),
        (
            Document {
                name: Some("msa-final.pdf".to_string()),
                department: Some("Legal".to_string()),
                priority: Some("Critical".to_string()),
                status: Some("Active".to_string()),
                created_at: Some(days_ago(900)),
                ..Document::default()
            },
            "legal",
            false,
            true,
        ),
        (
            Document {
                contract_number: Some("C-2024-001".to_string()),
                contract_type: Some("Service Agreement".to_string()),
                priority: Some("high".to_string()),
                created_at: Some(days_ago(1)),
                ..Document::default()
            },
            "c-2024",
            true,
            false,
        ),
        (
            Document {
                vendor: Some("Initech".to_string()),
                description: Some("consulting hours".to_string()),
                ..Document::default()
            },
            "quarterly consulting hours",
            false,
            false,
        ),
        (
            Document {
                contract_name: Some("Globex Facilities".to_string()),
                ..Document::default()
            },
            "umbrella",
            false,
            false,
        ),
    ];

    for (doc, query, recent, stale) in &cases {
        let raw = reference_raw(doc, query, *recent, *stale);
        let actual = score(doc, query, now);

        assert_eq!(actual, round2(raw), "query {query:?} on {doc:?}");
        assert!((explain(doc, query, now).raw - raw).abs() < 1e-9);
    }
}

#[test]
fn test_scores_are_never_negative() {
    let now = reference_now();
    let doc = Document {
        contract_name: Some("Acme".to_string()),
        description: Some("old archived contract".to_string()),
        status: Some("inactive".to_string()),
        created_at: Some(days_ago(2000)),
        ..Document::default()
    };

    for query in ["acme", "archived", "zzz", "old contract", "a"] {
        let breakdown = explain(&doc, query, now);
        assert!(breakdown.score >= 0.0);
        assert!(breakdown.fields.iter().all(|f| f.contribution >= 0.0));
    }
}

#[test]
fn test_removing_a_field_never_raises_its_contribution() {
    let now = reference_now();
    let full = Document {
        contract_name: Some("Acme Support".to_string()),
        vendor: Some("Acme Corp".to_string()),
        description: Some("acme services".to_string()),
        ..Document::default()
    };

    let mut without_vendor = full.clone();
    without_vendor.vendor = None;

    let vendor_in = |doc: &Document| {
        explain(doc, "acme", now)
            .fields
            .iter()
            .find(|f| f.field == SearchField::Vendor)
            .map_or(0.0, |f| f.contribution)
    };

    assert_eq!(vendor_in(&full), 15.0);
    assert_eq!(vendor_in(&without_vendor), 0.0);
    assert!(score(&without_vendor, "acme", now) <= score(&full, "acme", now));
}

#[test]
fn test_explain_lists_adjustments_in_order() {
    let doc = Document {
        contract_name: Some("Acme Support".to_string()),
        priority: Some("Critical".to_string()),
        status: Some("active".to_string()),
        created_at: Some(days_ago(2)),
        ..Document::default()
    };

    let breakdown = explain(&doc, "acme", reference_now());
    assert_eq!(
        breakdown.adjustments,
        vec![
            Adjustment::Recency,
            Adjustment::HighPriority,
            Adjustment::Active
        ]
    );
    assert_eq!(breakdown.base, 22.5);
}
