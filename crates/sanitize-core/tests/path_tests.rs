/// Path normalization tests for sanitize-core.
use sanitize_core::normalize_path;

#[test]
fn normalizes_mixed_separators_and_whitespace() {
    assert_eq!(normalize_path("  /a//b\\c\\\\d/  ", true), "a/b/c/d/");
}

#[test]
fn without_trailing_slash() {
    assert_eq!(normalize_path("a/b", false), "a/b");
    assert_eq!(normalize_path("/a/b/", false), "a/b");
}

#[test]
fn appends_single_trailing_slash() {
    assert_eq!(normalize_path("a/b", true), "a/b/");
    assert_eq!(normalize_path("a/b///", true), "a/b/");
}

#[test]
fn whitespace_anywhere_is_removed() {
    assert_eq!(normalize_path("my docs/\tfile name.txt\n", false), "mydocs/filename.txt");
    assert_eq!(normalize_path("a\u{0B}b\u{0C}c\rd", false), "abcd");
}

#[test]
fn empty_and_degenerate_inputs() {
    assert_eq!(normalize_path("", true), "/");
    assert_eq!(normalize_path("", false), "");
    assert_eq!(normalize_path("   ", true), "/");
    assert_eq!(normalize_path("////", false), "");
    assert_eq!(normalize_path(" / / ", true), "/");
}

#[test]
fn single_pass_leaves_residual_separators() {
    assert_eq!(normalize_path("a////b", false), "a//b");
    assert_eq!(normalize_path("a\\\\/b", false), "a//b");
    assert_eq!(normalize_path("a\\\\\\b", true), "a//b/");
}

#[test]
fn backslashes_are_not_trimmed() {
    // Only forward slashes are trimmed; edge backslashes become separators.
    assert_eq!(normalize_path("\\a\\", false), "/a/");
    assert_eq!(normalize_path("a\\", true), "a//");
}

#[test]
fn windows_style_path() {
    assert_eq!(
        normalize_path("C:\\Users\\Public\\Documents", true),
        "C:/Users/Public/Documents/"
    );
}

#[test]
fn dot_segments_are_kept() {
    assert_eq!(normalize_path("/a/./b/../c/", false), "a/./b/../c");
}
