//! Engine scenarios covering every combining rule and alias family.
//!
//! Each case feeds a raw token sequence through [`OptionMerger`] and checks
//! the rendered list in one or both styles.

use jopts::{OptionMerger, Style};
use rstest::rstest;

const PS: &str = jopts::PATH_SEPARATOR;

fn merged(tokens: &[&str], style: Style) -> Vec<String> {
    let mut merger = OptionMerger::new(style);
    merger.add_all(tokens);
    merger.to_list()
}

#[test]
fn class_path_occurrences_join_as_path() {
    assert_eq!(
        merged(&["-classpath", "a", "-classpath", "b"], Style::Legacy),
        vec!["-classpath".to_owned(), format!("a{PS}b")]
    );
}

#[test]
fn source_path_occurrences_join_as_path() {
    assert_eq!(
        merged(&["-sourcepath", "a", "-sourcepath", "b"], Style::Legacy),
        vec!["-sourcepath".to_owned(), format!("a{PS}b")]
    );
}

#[test]
fn path_join_never_deduplicates() {
    assert_eq!(
        merged(&["-classpath", "a", "-classpath", "a"], Style::Legacy),
        vec!["-classpath".to_owned(), format!("a{PS}a")]
    );
}

#[test]
fn add_modules_union_first_seen_order() {
    assert_eq!(
        merged(&["-addmods", "m1,m2", "-addmods", "m2,m3"], Style::Legacy),
        ["-addmods", "m1,m2,m3"]
    );
}

#[test]
fn limit_modules_union_first_seen_order() {
    assert_eq!(
        merged(&["-limitmods", "m2,m1", "-limitmods", "m3,m2"], Style::Legacy),
        ["-limitmods", "m2,m1,m3"]
    );
}

#[test]
fn patch_same_module_joins_paths() {
    assert_eq!(
        merged(&["-Xpatch:a=p1/a", "-Xpatch:a=p2/a"], Style::Legacy),
        [format!("-Xpatch:a=p1/a{PS}p2/a")]
    );
}

#[test]
fn patch_different_modules_stay_separate() {
    assert_eq!(
        merged(&["-Xpatch:a=p1/a", "-Xpatch:b=p2/b"], Style::Legacy),
        ["-Xpatch:a=p1/a", "-Xpatch:b=p2/b"]
    );
}

#[test]
fn add_exports_unions_per_key() {
    assert_eq!(
        merged(
            &[
                "-XaddExports:m1/p1=ALL-UNNAMED",
                "-XaddExports:m2/p2=ALL-UNNAMED",
                "-XaddExports:m1/p1=m11",
            ],
            Style::Legacy,
        ),
        [
            "-XaddExports:m1/p1=ALL-UNNAMED,m11",
            "-XaddExports:m2/p2=ALL-UNNAMED",
        ]
    );
}

#[test]
fn keyed_family_renders_modern_per_key() {
    assert_eq!(
        merged(
            &["-XaddExports:m1/p1=A", "-XaddExports:m1/p1=B"],
            Style::Modern,
        ),
        ["--add-exports", "m1/p1=A,B"]
    );
}

#[test]
fn interleaved_families_keep_first_seen_order() {
    let opts = [
        "-classpath",
        "cp1",
        "-sourcepath",
        "sp1",
        "-Xpatch:xp1=xp1",
        "-XaddExports:m1/p1=ALL-UNNAMED",
        "-classpath",
        "cp2",
        "-sourcepath",
        "sp2",
        "-Xpatch:xp2=xp2",
        "-XaddExports:m2/p2=ALL-UNNAMED",
        "-classpath",
        "cp3",
        "-sourcepath",
        "sp3",
        "-Xpatch:xp3=xp3",
        "-XaddExports:m3/p3=ALL-UNNAMED",
        "-addmods",
        "m1,m2,m3",
        "-limitmods",
        "m1,m2,m3",
        "-Xpatch:xp1=xp1a",
        "-Xpatch:xp2=xp2a",
        "-Xpatch:xp3=xp3a",
        "-XaddExports:m1/p1=m11",
        "-XaddExports:m2/p2=m22",
        "-XaddExports:m3/p3=m33",
        "-addmods",
        "m2,m3,m4",
        "-limitmods",
        "m2,m3,m4",
    ];
    let expect = vec![
        "-classpath".to_owned(),
        format!("cp1{PS}cp2{PS}cp3"),
        "-sourcepath".to_owned(),
        format!("sp1{PS}sp2{PS}sp3"),
        format!("-Xpatch:xp1=xp1{PS}xp1a"),
        "-XaddExports:m1/p1=ALL-UNNAMED,m11".to_owned(),
        format!("-Xpatch:xp2=xp2{PS}xp2a"),
        "-XaddExports:m2/p2=ALL-UNNAMED,m22".to_owned(),
        format!("-Xpatch:xp3=xp3{PS}xp3a"),
        "-XaddExports:m3/p3=ALL-UNNAMED,m33".to_owned(),
        "-addmods".to_owned(),
        "m1,m2,m3,m4".to_owned(),
        "-limitmods".to_owned(),
        "m1,m2,m3,m4".to_owned(),
    ];
    assert_eq!(merged(&opts, Style::Legacy), expect);
}

#[rstest]
#[case::class_path(
    &["-cp", "a", "-classpath", "b", "--class-path", "c", "--class-path=d"],
    vec!["-classpath".to_owned(), format!("a{PS}b{PS}c{PS}d")],
    vec!["--class-path".to_owned(), format!("a{PS}b{PS}c{PS}d")],
)]
#[case::source_path(
    &["-sourcepath", "a", "--source-path", "b", "--source-path=c"],
    vec!["-sourcepath".to_owned(), format!("a{PS}b{PS}c")],
    vec!["--source-path".to_owned(), format!("a{PS}b{PS}c")],
)]
#[case::add_modules(
    &["-addmods", "a", "--add-modules", "b", "--add-modules=c"],
    vec!["-addmods".to_owned(), "a,b,c".to_owned()],
    vec!["--add-modules".to_owned(), "a,b,c".to_owned()],
)]
#[case::limit_modules(
    &["-limitmods", "a", "--limit-modules", "b", "--limit-modules=c"],
    vec!["-limitmods".to_owned(), "a,b,c".to_owned()],
    vec!["--limit-modules".to_owned(), "a,b,c".to_owned()],
)]
#[case::add_exports(
    &[
        "-XaddExports:m1/p1=a", "--add-exports", "m1/p1=b", "--add-exports=m1/p1=c",
        "-XaddExports:m2/p2=d", "--add-exports", "m2/p2=e", "--add-exports=m2/p2=f",
    ],
    vec!["-XaddExports:m1/p1=a,b,c".to_owned(), "-XaddExports:m2/p2=d,e,f".to_owned()],
    vec![
        "--add-exports".to_owned(), "m1/p1=a,b,c".to_owned(),
        "--add-exports".to_owned(), "m2/p2=d,e,f".to_owned(),
    ],
)]
#[case::add_reads(
    &[
        "-XaddReads:m1=a", "--add-reads", "m1=b", "--add-reads=m1=c",
        "-XaddReads:m2=d", "--add-reads", "m2=e", "--add-reads=m2=f",
    ],
    vec!["-XaddReads:m1=a,b,c".to_owned(), "-XaddReads:m2=d,e,f".to_owned()],
    vec![
        "--add-reads".to_owned(), "m1=a,b,c".to_owned(),
        "--add-reads".to_owned(), "m2=d,e,f".to_owned(),
    ],
)]
#[case::patch_module(
    &[
        "-Xpatch:m1=a", "--patch-module", "m1=b", "--patch-module=m1=c",
        "-Xpatch:m2=d", "--patch-module", "m2=e", "--patch-module=m2=f",
    ],
    vec![format!("-Xpatch:m1=a{PS}b{PS}c"), format!("-Xpatch:m2=d{PS}e{PS}f")],
    vec![
        "--patch-module".to_owned(), format!("m1=a{PS}b{PS}c"),
        "--patch-module".to_owned(), format!("m2=d{PS}e{PS}f"),
    ],
)]
fn alias_variants_merge_identically(
    #[case] opts: &[&str],
    #[case] expect_legacy: Vec<String>,
    #[case] expect_modern: Vec<String>,
) {
    assert_eq!(merged(opts, Style::Legacy), expect_legacy);
    assert_eq!(merged(opts, Style::Modern), expect_modern);
}

#[test]
fn ingestion_may_span_multiple_calls() {
    let mut merger = OptionMerger::new(Style::Legacy);
    merger.add_all(["-addmods", "m1,m2"]);
    merger.add_all(["-addmods", "m2,m3"]);
    assert_eq!(merger.to_list(), ["-addmods", "m1,m2,m3"]);
}

#[test]
fn unrecognised_tokens_survive_in_position() {
    assert_eq!(
        merged(
            &["-ea", "-classpath", "a", "-Dprop=1", "-classpath", "b"],
            Style::Legacy,
        ),
        vec![
            "-ea".to_owned(),
            "-classpath".to_owned(),
            format!("a{PS}b"),
            "-Dprop=1".to_owned(),
        ]
    );
}
