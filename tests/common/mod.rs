//! Utility helpers shared across integration tests.
#![allow(dead_code)]

/// Join string literals into newline-terminated text.
///
/// Generated Markdown ends every line with `\n`, so expected output is
/// easiest to write as a list of lines.
#[allow(unused_macros)]
macro_rules! md_text {
    ($($line:expr),* $(,)?) => {
        [$($line),*].iter().map(|l| format!("{l}\n")).collect::<String>()
    };
}

/// Assert that every line of generated Markdown has the same number of
/// cells.
pub fn assert_rectangular(markdown: &str) {
    let widths: Vec<usize> = markdown
        .lines()
        .map(|l| tablepaste::split_cells(l).len())
        .collect();
    assert!(!widths.is_empty(), "no lines in output");
    assert!(
        widths.iter().all(|w| *w == widths[0]),
        "ragged output: {widths:?}"
    );
}
