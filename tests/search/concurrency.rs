//! One matcher, many threads.

use std::sync::Arc;
use std::thread;

use crate::common::{corpus_of, indexed, run, sample_corpus, word};

#[test]
fn test_concurrent_queries_agree() {
    let m = Arc::new(indexed(&sample_corpus()));
    let expected = run(&m, "abe");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let m = Arc::clone(&m);
            thread::spawn(move || {
                (0..50)
                    .map(|_| m.match_text("abe").expect("indexed"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for results in handle.join().expect("thread panicked") {
            assert_eq!(results, expected);
        }
    }
}

#[test]
fn test_queries_see_whole_index_during_reindex() {
    let old = corpus_of("name", &["apple pie", "apple tart"]);
    let new = corpus_of("name", &["banana split", "banana bread", "banana cake"]);
    let m = Arc::new(indexed(&old));

    let reader = {
        let m = Arc::clone(&m);
        thread::spawn(move || {
            for _ in 0..200 {
                let apples = m.match_text("apple").expect("indexed").len();
                let bananas = m.match_text("banana").expect("indexed").len();
                // each answer comes from one complete index
                assert!(apples == 0 || apples == 2, "partial index: {apples}");
                assert!(bananas == 0 || bananas == 3, "partial index: {bananas}");
            }
        })
    };

    for i in 0..20 {
        m.index(if i % 2 == 0 { &new } else { &old });
    }
    reader.join().expect("reader panicked");
}

#[test]
fn test_config_changes_visible_to_other_threads() {
    let m = Arc::new(indexed(&sample_corpus()));
    let before = run(&m, "abe").relevancy(0).unwrap();

    {
        let m = Arc::clone(&m);
        thread::spawn(move || m.set_weight(word("name"), 2.0))
            .join()
            .expect("writer panicked");
    }

    let after = run(&m, "abe").relevancy(0).unwrap();
    assert!((after - 2.0 * before).abs() < 1e-12);
    assert_eq!(m.index_weights().weight(&word("name")), 2.0);
}
