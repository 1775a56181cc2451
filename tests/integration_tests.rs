use rand::Rng;
use std::collections::HashSet;
use std::io::{Cursor, Write};
use tracing_subscriber::EnvFilter;
use wordhoard::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_words<R: Rng>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(1..12);
            (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect()
}

#[test]
fn test_basic_sort_strings() {
    let mut input = vec![
        "banana".to_string(),
        "apple".to_string(),
        "cherry".to_string(),
        "date".to_string(),
    ];

    partition_sort(&mut input).unwrap();
    assert_eq!(input, vec!["apple", "banana", "cherry", "date"]);
}

#[test]
fn test_sorted_listing_is_permutation_of_listing() {
    let mut rng = rand::rng();
    let store = WordStore::from_lines(random_words(&mut rng, 2_000));

    let sorted = store.to_sorted_vec();
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let mut expected = store.to_vec();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn test_sorted_listing_is_idempotent() {
    let store = WordStore::embedded();
    let first = store.to_sorted_vec();
    let second = store.to_sorted_vec();
    assert_eq!(first, second);
    assert_eq!(first.len(), store.len());
}

#[test]
fn test_filter_round_trip() {
    let mut rng = rand::rng();
    let store = WordStore::from_lines(random_words(&mut rng, 1_000));

    for max in [1, 3, 5, 11, 50] {
        let filtered = store.filter_by_size(max).unwrap();
        let limit = max as usize;

        assert!(filtered.iter().all(|w| w.chars().count() <= limit));

        let unique: HashSet<&String> = filtered.iter().collect();
        assert_eq!(unique.len(), filtered.len(), "duplicate in filter output");

        let expected = store
            .iter()
            .filter(|w| w.chars().count() <= limit)
            .count();
        assert_eq!(filtered.len(), expected);
    }
}

#[test]
fn test_filter_keeps_iteration_order() {
    let store = WordStore::from_lines(["ab", "abcdef", "c", "xyz", "longerword"]);
    let expected: Vec<&str> = store.iter().filter(|w| w.len() <= 3).collect();
    assert_eq!(store.filter_by_size(3).unwrap(), expected);
}

#[test]
fn test_filter_invalid_argument_message() {
    init_tracing();
    let store = WordStore::from_lines(["a"]);
    let err = store.filter_by_size(-1).unwrap_err();
    assert!(err.to_string().contains("-1"), "got: {err}");
}

#[test]
fn test_random_word_on_small_store() {
    let store = WordStore::from_lines(["a", "bb", "ccc"]);
    for _ in 0..100 {
        let word = store.random_word().unwrap();
        assert!(matches!(word, "a" | "bb" | "ccc"));
    }
}

#[test]
fn test_random_word_on_empty_store() {
    let store: WordStore = Vec::<String>::new().into_iter().collect();
    assert_eq!(store.random_word(), None);
}

#[test]
fn test_duplicate_insertion() {
    let store = WordStore::from_lines(["cat", "Cat", "CAT", "dog"]);
    assert_eq!(store.len(), 2);

    let words: HashSet<&str> = store.iter().collect();
    assert_eq!(words, HashSet::from(["cat", "dog"]));
}

#[test]
fn test_from_reader() {
    let input = Cursor::new("Hello\n  World\r\n\nhello\n");
    let store = WordStore::from_reader(input).unwrap();
    assert_eq!(store.to_sorted_vec(), vec!["hello", "world"]);
}

#[test]
fn test_from_file() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Zebra").unwrap();
    writeln!(file, "apple").unwrap();
    writeln!(file, "APPLE").unwrap();
    file.flush().unwrap();

    let store = WordStore::from_file(file.path()).unwrap();
    assert_eq!(store.to_sorted_vec(), vec!["apple", "zebra"]);
}

#[test]
fn test_from_missing_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    let err = WordStore::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::NotFound(ref p) if *p == path));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_from_directory_is_unreadable() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let err = WordStore::from_file(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Unreadable { ref path, .. } if path == dir.path()));
}

#[test]
fn test_display() {
    let store = WordStore::from_lines(["Solo"]);
    assert_eq!(format!("{store}"), "[solo]");

    let empty = WordStore::from_lines(Vec::<&str>::new());
    assert_eq!(format!("{empty}"), "[]");
}

#[test]
fn test_concurrent_reads() {
    let store = WordStore::embedded();
    let expected = store.to_sorted_vec();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(store.to_sorted_vec(), expected);
                assert!(store.contains("hello"));
                assert!(store.random_word().is_some());
            });
        }
    });
}

#[test]
fn test_fuzz_random_sort() {
    let mut rng = rand::rng();

    for _ in 0..1_000 {
        let count = rng.random_range(1..40);
        let mut input: Vec<Vec<u8>> = (0..count)
            .map(|_| {
                let len = rng.random_range(0..6);
                (0..len).map(|_| rng.random_range(0..4u8)).collect()
            })
            .collect();

        let mut expected = input.clone();
        expected.sort();

        partition_sort(&mut input).unwrap();
        assert_eq!(input, expected);
    }
}

#[test]
fn test_fuzz_edge_cases() {
    // 1. All empty
    let mut input = vec![String::new(); 50];
    let expected = input.clone();
    partition_sort(&mut input).unwrap();
    assert_eq!(input, expected);

    // 2. All same
    let mut input = vec!["a".to_string(); 50];
    let expected = input.clone();
    partition_sort(&mut input).unwrap();
    assert_eq!(input, expected);

    // 3. Reversed
    let mut input: Vec<String> = (0..50).map(|i| format!("{i:03}")).rev().collect();
    let mut expected = input.clone();
    expected.sort();
    partition_sort(&mut input).unwrap();
    assert_eq!(input, expected);

    // 4. Sorted
    let mut input: Vec<String> = (0..50).map(|i| format!("{i:03}")).collect();
    let expected = input.clone();
    partition_sort(&mut input).unwrap();
    assert_eq!(input, expected);
}

#[test]
fn test_ordinal_not_collated() {
    // Uppercase sorts before lowercase and accented letters after ASCII.
    let mut input = vec!["b", "é", "B", "a", "A"];
    partition_sort(&mut input).unwrap();
    assert_eq!(input, vec!["A", "B", "a", "b", "é"]);
}

#[test]
fn test_empty() {
    let mut input: Vec<String> = vec![];
    assert!(matches!(partition_sort(&mut input), Err(Error::EmptyInput)));
}
