use std::path::Path;

use super::*;

fn filter(suffixes: &[&str]) -> SuffixFilter {
    SuffixFilter::new(suffixes.iter().map(ToString::to_string).collect())
}

#[test]
fn filter_empty_suffixes_accepts_all() {
    let filter = filter(&[]);

    assert!(filter.should_include(Path::new("test-data.veeti")));
    assert!(filter.should_include(Path::new("src/main.rs")));
    assert!(filter.should_include(Path::new("Makefile")));
    assert!(filter.should_include(Path::new(".gitignore")));
}

#[test]
fn filter_matches_any_listed_suffix() {
    let filter = filter(&[".moi", ".veeti"]);

    assert!(filter.should_include(Path::new("test-data.veeti")));
    assert!(filter.should_include(Path::new("dir/other.moi")));
}

#[test]
fn filter_rejects_unlisted_suffix() {
    let filter = filter(&[".moi", ".iteev"]);

    assert!(!filter.should_include(Path::new("test-data.veeti")));
}

#[test]
fn filter_is_case_sensitive() {
    let filter = filter(&[".txt"]);

    assert!(filter.should_include(Path::new("notes.txt")));
    assert!(!filter.should_include(Path::new("NOTES.TXT")));
}

#[test]
fn filter_matches_literal_trailing_characters() {
    let filter = filter(&["txt"]);

    assert!(filter.should_include(Path::new("a.txt")));
    assert!(filter.should_include(Path::new("footxt")));
}

#[test]
fn filter_with_dot_does_not_match_undotted_name() {
    let filter = filter(&[".txt"]);

    assert!(!filter.should_include(Path::new("footxt")));
    assert!(!filter.should_include(Path::new("foo_txt")));
}

#[test]
fn filter_is_not_extension_aware() {
    let filter = filter(&[".tar.gz", "-lock.json"]);

    assert!(filter.should_include(Path::new("release.tar.gz")));
    assert!(filter.should_include(Path::new("package-lock.json")));
    assert!(!filter.should_include(Path::new("package.json")));
}

#[test]
fn filter_matches_against_whole_path() {
    let filter = filter(&["test-dir/test-file-2.txt"]);

    assert!(filter.should_include(Path::new("test-data/test-dir/test-file-2.txt")));
    assert!(!filter.should_include(Path::new("test-data/test-file-2.txt")));
}

#[test]
fn filter_does_not_treat_suffix_as_glob() {
    let filter = filter(&["*.rs"]);

    assert!(!filter.should_include(Path::new("main.rs")));
    assert!(filter.should_include(Path::new("weird*.rs")));
}

#[test]
fn filter_matches_iff_some_suffix_is_trailing() {
    let suffixes = [".rs", ".go", "file"];
    let filter = filter(&suffixes);
    let paths = [
        "a.rs", "a.rs.bak", "b.go", "go", "Makefile", "file.txt", "x/.rs", "rs",
    ];

    for path in paths {
        let expected = suffixes.iter().any(|s| path.ends_with(s));
        assert_eq!(
            filter.should_include(Path::new(path)),
            expected,
            "path {path}"
        );
    }
}
