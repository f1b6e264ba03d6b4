// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match predicate: does a document support every word of a query?
//!
//! Each query word is expanded through the synonym dictionary. The word is
//! supported if any expanded form is a substring of the normalized document,
//! or failing that, if any single document word is fuzzy-similar to any
//! expanded form. Every word must be supported (AND); there is no OR across
//! the query.

use super::utils::query_words;
use crate::fuzzy::is_similar;
use crate::synonyms::SynonymDictionary;
use crate::utils::normalize;

/// Does `document` match `query`?
///
/// An empty or whitespace-only query matches everything.
pub fn smart_search(query: &str, document: &str, dictionary: &SynonymDictionary) -> bool {
    let words = query_words(query);
    if words.is_empty() {
        return true;
    }

    let document = normalize(document);
    let document_words: Vec<&str> = document.split_whitespace().collect();

    words
        .iter()
        .all(|word| word_matches(word, &document, &document_words, dictionary))
}

fn word_matches(
    word: &str,
    document: &str,
    document_words: &[&str],
    dictionary: &SynonymDictionary,
) -> bool {
    let forms = dictionary.expand(word);

    // Substring pass first: it is cheap and covers the common case.
    if forms.iter().any(|form| document.contains(form.as_str())) {
        return true;
    }

    document_words
        .iter()
        .any(|doc_word| forms.iter().any(|form| is_similar(doc_word, form)))
}
