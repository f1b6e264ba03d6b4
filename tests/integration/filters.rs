//! Exact-match filters composed with ranked search.

use super::common::{dataset, engine, ids, reference_date};
use agrofondos::filters::{parse_date_arg, parse_status_arg};
use agrofondos::{RecordFilter, RecordStatus};

fn filtered(query: &str, filter: &RecordFilter) -> Vec<u64> {
    ids(&filter.apply(engine().search_and_rank(query, dataset())))
}

#[test]
fn test_region_filter_includes_nationwide_calls() {
    let filter = RecordFilter {
        region: Some("Región de Ñuble".to_string()),
        ..RecordFilter::default()
    };
    assert_eq!(filtered("", &filter), vec![1, 3, 5, 6, 8, 9, 11]);
}

#[test]
fn test_region_filter_exact_region() {
    let filter = RecordFilter {
        region: Some("region de coquimbo".to_string()),
        ..RecordFilter::default()
    };
    assert_eq!(filtered("", &filter), vec![1, 2, 3, 5, 6, 7, 8, 9, 11]);
}

#[test]
fn test_institution_filter_keeps_rank_order() {
    let filter = RecordFilter {
        institution: Some("INDAP".to_string()),
        ..RecordFilter::default()
    };
    let ranked = filtered("riego", &filter);
    assert_eq!(&ranked[..3], &[2, 6, 7]);
}

#[test]
fn test_status_filter() {
    let today = reference_date();
    let status = |s: RecordStatus| RecordFilter {
        status: Some(s),
        today: Some(today),
        ..RecordFilter::default()
    };
    assert_eq!(filtered("", &status(RecordStatus::ClosingSoon)), vec![1, 7]);
    assert_eq!(filtered("", &status(RecordStatus::Closed)), vec![4]);
    assert_eq!(filtered("", &status(RecordStatus::Unknown)), vec![12]);
}

#[test]
fn test_closing_range() {
    let filter = RecordFilter {
        closing_from: Some(parse_date_arg("2025-02-01").unwrap()),
        closing_to: Some(parse_date_arg("2025-03-31").unwrap()),
        ..RecordFilter::default()
    };
    assert_eq!(filtered("", &filter), vec![1, 2, 5, 11]);
}

#[test]
fn test_filters_combine_with_and() {
    let filter = RecordFilter {
        category: Some("riego".to_string()),
        beneficiary: Some("Pequeño productor".to_string()),
        status: parse_status_arg("open"),
        today: Some(reference_date()),
        ..RecordFilter::default()
    };
    assert_eq!(filtered("", &filter), vec![2]);
}

#[test]
fn test_filter_never_reorders() {
    let filter = RecordFilter {
        institution: Some("indap".to_string()),
        ..RecordFilter::default()
    };
    let ranked = engine().search_and_rank("de", dataset());
    let kept = filter.apply(ranked.clone());
    let expected: Vec<u64> = ranked
        .iter()
        .filter(|r| r.institution == "INDAP")
        .map(|r| r.id)
        .collect();
    assert_eq!(ids(&kept), expected);
}
