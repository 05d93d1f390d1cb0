//! Integration tests for star alignment
mod common;

use common::{documents, strip_gaps};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use synopsis::alignment::{select_pivot, CandidatePolicy, PairwiseAligner, Scoring, StarAligner};
use synopsis::{star_align, Document, SynopsisError};

#[test]
fn test_pivot_is_first_of_longest() {
    let docs = documents(&[("a", "abc"), ("b", "abcde"), ("c", "edcba"), ("d", "ab")]);
    assert_eq!(select_pivot(&docs), Some(1));

    let result = StarAligner::default().run(&docs).unwrap();
    assert_eq!(result.pivot_index, 1);
    assert_eq!(result.pivot().id, "b");
}

#[test]
fn test_two_documents_round_trip() {
    let rows = star_align(&documents(&[("x", "My cat"), ("y", "Mypcat")])).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "x");
    assert_eq!(rows[1].id, "y");
    assert_eq!(rows[0].len(), rows[1].len());
    assert_eq!(strip_gaps(&rows[0].aligned, '@'), "My cat");
    assert_eq!(strip_gaps(&rows[1].aligned, '@'), "Mypcat");
}

#[test]
fn test_empty_document_is_all_gaps() {
    let rows = star_align(&documents(&[("a", ""), ("b", "hi")])).unwrap();
    assert_eq!(rows[0].aligned, "@@");
    assert_eq!(rows[1].aligned, "hi");
}

#[test]
fn test_all_empty_documents() {
    let rows = star_align(&documents(&[("a", ""), ("b", "")])).unwrap();
    assert!(rows.iter().all(|row| row.aligned.is_empty()));
}

#[test]
fn test_single_document_rejected() {
    assert!(matches!(
        star_align(&documents(&[("only", "text")])),
        Err(SynopsisError::InvalidInput(_))
    ));
    assert!(matches!(star_align(&[]), Err(SynopsisError::InvalidInput(_))));
}

#[test]
fn test_gap_symbol_names_offending_document() {
    let err = star_align(&documents(&[("clean", "abc"), ("dirty.txt", "a@b")])).unwrap_err();
    match err {
        SynopsisError::InvalidInput(msg) => assert!(msg.contains("dirty.txt")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_insertions_from_several_documents_share_columns() {
    let docs = documents(&[
        ("pivot", "abcdef"),
        ("one", "abXcd"),
        ("two", "abYYcd"),
    ]);
    let aligner = StarAligner::new(
        PairwiseAligner::new(Scoring::default().with_mismatch_score(-10.0)),
    );
    let rows = aligner.align(&docs).unwrap();

    // the widest insertion after "ab" sets the block width for every row
    assert_eq!(rows[0].aligned, "ab@@cdef");
    assert_eq!(rows[1].aligned, "abX@cd@@");
    assert_eq!(rows[2].aligned, "abYYcd@@");
}

#[test]
fn test_custom_gap_char() {
    let aligner = StarAligner::new(PairwiseAligner::default().with_gap_char('~'));
    let rows = aligner
        .align(&documents(&[("a", "mail@host"), ("b", "mail host")]))
        .unwrap();
    assert_eq!(strip_gaps(&rows[0].aligned, '~'), "mail@host");
    assert_eq!(strip_gaps(&rows[1].aligned, '~'), "mail host");
    assert_eq!(rows[0].len(), rows[1].len());
}

#[test]
fn test_strict_rejection_names_document() {
    // "x  yy" is the pivot; aligning "x z y" must open a gap between its
    // two spaces, which splits the pivot into three tokens
    let docs = documents(&[("pivot.txt", "x  yy"), ("noisy.txt", "x z y")]);
    let strict = StarAligner::new(PairwiseAligner::default().with_policy(CandidatePolicy::Strict));

    match strict.align(&docs) {
        Err(SynopsisError::CandidateRejected(msg)) => assert!(msg.contains("'noisy.txt'")),
        other => panic!("unexpected result: {other:?}"),
    }

    let rows = StarAligner::default().align(&docs).unwrap();
    assert_eq!(rows[0].len(), rows[1].len());
    assert_eq!(strip_gaps(&rows[0].aligned, '@'), "x  yy");
    assert_eq!(strip_gaps(&rows[1].aligned, '@'), "x z y");
}

fn corpus() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec("[a-c ]{0,10}", 2..6).prop_map(|contents| {
        contents
            .into_iter()
            .enumerate()
            .map(|(i, content)| Document::new(format!("doc{}", i), content))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_rows_share_one_length(docs in corpus()) {
        let rows = star_align(&docs).unwrap();
        let width = rows[0].len();
        prop_assert!(rows.iter().all(|row| row.len() == width));
    }

    #[test]
    fn prop_rows_round_trip_in_input_order(docs in corpus()) {
        let rows = StarAligner::default().with_parallel(false).align(&docs).unwrap();
        prop_assert_eq!(rows.len(), docs.len());
        for (row, doc) in rows.iter().zip(&docs) {
            prop_assert_eq!(&row.id, &doc.id);
            prop_assert_eq!(strip_gaps(&row.aligned, '@'), doc.content.clone());
        }
    }

    #[test]
    fn prop_pivot_is_first_longest_document(docs in corpus()) {
        let result = StarAligner::default().run(&docs).unwrap();
        let pivot_len = docs[result.pivot_index].len();
        prop_assert!(docs.iter().all(|doc| doc.len() <= pivot_len));
        prop_assert!(docs[..result.pivot_index].iter().all(|doc| doc.len() < pivot_len));
    }
}
