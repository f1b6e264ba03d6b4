//! Match predicate invariants.

use super::strategies::{document_strategy, records_strategy, spanish_text_strategy};
use agrofondos::search::utils::searchable_document;
use agrofondos::testing::reference_date;
use agrofondos::{normalize, search_and_rank, smart_search, SynonymDictionary};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_blank_query_matches_everything(doc in spanish_text_strategy(), spaces in " {0,5}") {
        let dict = SynonymDictionary::builtin();
        prop_assert!(smart_search(&spaces, &doc, &dict));
    }

    #[test]
    fn prop_document_words_match_their_document(
        doc in document_strategy(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
    ) {
        let words: Vec<&str> = doc.split_whitespace().collect();
        let query: Vec<&str> = picks.iter().map(|i| *i.get(&words)).collect();
        let query = query.join(" ");
        prop_assert!(smart_search(&query, &doc, &SynonymDictionary::builtin()));
        prop_assert!(smart_search(&query, &doc, &SynonymDictionary::new()));
    }

    #[test]
    fn prop_accents_do_not_change_matching(
        query in spanish_text_strategy(),
        doc in spanish_text_strategy(),
    ) {
        let dict = SynonymDictionary::builtin();
        prop_assert_eq!(
            smart_search(&query, &doc, &dict),
            smart_search(&normalize(&query), &normalize(&doc), &dict)
        );
    }

    #[test]
    fn prop_results_match_and_come_from_input(
        records in records_strategy(),
        query in super::strategies::query_strategy(),
    ) {
        let dict = SynonymDictionary::builtin();
        let ranked = search_and_rank(&query, &records, &dict, reference_date());
        prop_assert!(ranked.len() <= records.len());
        for record in &ranked {
            prop_assert!(records.contains(record));
            prop_assert!(smart_search(&query, &searchable_document(record), &dict));
        }
    }

    #[test]
    fn prop_every_matching_record_is_returned(
        records in records_strategy(),
        query in super::strategies::query_strategy(),
    ) {
        let dict = SynonymDictionary::builtin();
        let ranked = search_and_rank(&query, &records, &dict, reference_date());
        let expected = records
            .iter()
            .filter(|r| smart_search(&query, &searchable_document(r), &dict))
            .count();
        prop_assert_eq!(ranked.len(), expected);
    }
}
