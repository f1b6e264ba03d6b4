//! Ranking invariants.

use super::strategies::{query_strategy, records_strategy};
use agrofondos::testing::reference_date;
use agrofondos::{score_record, search_and_rank, search_hits, SynonymDictionary};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_blank_query_is_pass_through(records in records_strategy(), spaces in " {0,4}") {
        let dict = SynonymDictionary::builtin();
        prop_assert_eq!(search_and_rank(&spaces, &records, &dict, reference_date()), records);
    }

    #[test]
    fn prop_blank_query_scores_zero(records in records_strategy(), spaces in " {0,4}") {
        let dict = SynonymDictionary::builtin();
        for record in &records {
            prop_assert_eq!(score_record(&spaces, record, &dict, reference_date()), 0);
        }
    }

    #[test]
    fn prop_strict_ranking_order(records in records_strategy(), query in query_strategy()) {
        prop_assume!(!query.trim().is_empty());
        let dict = SynonymDictionary::builtin();
        let hits = search_hits(&query, &records, &dict, reference_date());

        // ids equal input positions, so ties must be in ascending id order
        for pair in hits.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.score > b.score || (a.score == b.score && a.record.id < b.record.id),
                "{:?} before {:?}",
                (a.record.id, a.score),
                (b.record.id, b.score)
            );
        }
    }

    #[test]
    fn prop_hit_scores_are_record_scores(records in records_strategy(), query in query_strategy()) {
        let dict = SynonymDictionary::builtin();
        let today = reference_date();
        for hit in search_hits(&query, &records, &dict, today) {
            prop_assert_eq!(hit.score, score_record(&query, hit.record, &dict, today));
        }
    }

    #[test]
    fn prop_input_not_modified(records in records_strategy(), query in query_strategy()) {
        let before = records.clone();
        let _ = search_and_rank(&query, &records, &SynonymDictionary::builtin(), reference_date());
        prop_assert_eq!(records, before);
    }
}
