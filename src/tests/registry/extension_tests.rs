use crate::registry::extension_of;

#[test]
fn extension_is_lowercased_with_leading_dot() {
    assert_eq!(extension_of("Data.CSV").as_deref(), Some(".csv"));
    assert_eq!(extension_of("a.b.tsv").as_deref(), Some(".tsv"));
}

#[test]
fn url_query_and_fragment_are_ignored() {
    assert_eq!(
        extension_of("https://example.com/export.csv?token=a.b").as_deref(),
        Some(".csv")
    );
    assert_eq!(
        extension_of("file:///srv/notes.txt#L10").as_deref(),
        Some(".txt")
    );
}

#[test]
fn local_paths_keep_question_marks_and_hashes() {
    assert_eq!(extension_of("report #1.csv").as_deref(), Some(".csv"));
    assert_eq!(extension_of("what?.tsv").as_deref(), Some(".tsv"));
    assert_eq!(extension_of("/tmp/a#b/c?d.TXT").as_deref(), Some(".txt"));
}

#[test]
fn only_the_last_path_segment_counts() {
    assert_eq!(extension_of("dir.csv/file"), None);
    assert_eq!(extension_of(r"C:\data.v2\table.tab").as_deref(), Some(".tab"));
    assert_eq!(extension_of("https://example.com/"), None);
}

#[test]
fn dotfiles_and_trailing_dots_have_no_extension() {
    assert_eq!(extension_of(".csv"), None);
    assert_eq!(extension_of("file."), None);
    assert_eq!(extension_of(""), None);
}
