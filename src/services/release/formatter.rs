//! Markdown commit message to Slack `mrkdwn` conversion.
//!
//! Each line runs through a fixed, ordered pipeline of pure steps. Steps only
//! see one line at a time, so their order is the whole contract.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold regex is valid"));

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\[([^\]]+)\]\((https?://[^)\s]+)\)\)").expect("link regex is valid")
});

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"### (.+)").expect("header regex is valid"));

static DIFF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"# \[.+\]\((https://[\w.,/\-)]+)").expect("diff regex is valid")
});

static RELEASE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"release: [0-9]\.[0-9]\.[0-9] \[skip ci\]").expect("release line regex is valid")
});

/// A single line rewrite
pub type LineStep = fn(&str) -> String;

/// The rewrite pipeline, applied left to right to every line.
pub const PIPELINE: [(&str, LineStep); 5] = [
    ("bold", emphasize_bold),
    ("link", rewrite_links),
    ("header", promote_header),
    ("diff", collapse_diff_link),
    ("release_line", suppress_release_line),
];

/// `**text**` becomes `*text*`; only the first occurrence is rewritten.
pub fn emphasize_bold(line: &str) -> String {
    BOLD.replacen(line, 1, "*$1*").into_owned()
}

/// `([label](url))` becomes `<url|label>`.
pub fn rewrite_links(line: &str) -> String {
    LINK.replace_all(line, "<$2|$1>").into_owned()
}

/// `### text` becomes `*text*` padded by blank lines, wherever it starts.
pub fn promote_header(line: &str) -> String {
    HEADER.replace(line, "\n*$1*\n").into_owned()
}

/// A generated `# [1.2.0](https://.../compare/...)` line is replaced wholesale.
pub fn collapse_diff_link(line: &str) -> String {
    match DIFF.captures(line) {
        Some(captures) => {
            let link = captures[1].replace(['(', ')'], "");
            format!("<{}|Diff with previous version>", link)
        }
        None => line.to_string(),
    }
}

/// A `release: 1.2.3 [skip ci]` line repeats the header block, so it is blanked.
///
/// The version must follow `release: ` directly; `chore(release): ...` is kept.
pub fn suppress_release_line(line: &str) -> String {
    if RELEASE_LINE.is_match(line) {
        String::new()
    } else {
        line.to_string()
    }
}

/// Run one line through every step of [`PIPELINE`].
pub fn format_line(line: &str) -> String {
    PIPELINE
        .iter()
        .fold(line.to_string(), |current, (_, step)| step(&current))
}

/// Transform every line of a commit message.
///
/// Empty input lines are dropped before the pipeline runs, and lines the
/// pipeline blanks out are dropped after it.
pub fn format_lines(message: &str) -> Vec<String> {
    message
        .lines()
        .filter(|line| !line.is_empty())
        .map(format_line)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Convert a commit message into the text of the release notes section.
pub fn format_message(message: &str) -> String {
    format_lines(message).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SEMANTIC_RELEASE_MESSAGE: &str = "\
chore(release): 1.4.0 [skip ci]

# [1.4.0](https://gitlab.example.com/group/app/compare/v1.3.2...v1.4.0) (2021-03-02)


### Bug Fixes

* **api:** handle empty payloads ([3f2a1bc](https://gitlab.example.com/group/app/commit/3f2a1bc))

### Features

* **ui:** dark mode ([9c0d4e1](https://gitlab.example.com/group/app/commit/9c0d4e1))
";

    #[test]
    fn test_bold() {
        assert_eq!(emphasize_bold("hello **world** end"), "hello *world* end");
    }

    #[test]
    fn test_bold_rewrites_first_occurrence_only() {
        assert_eq!(emphasize_bold("**a** and **b**"), "*a* and **b**");
    }

    #[test]
    fn test_bold_without_closing_pair() {
        assert_eq!(emphasize_bold("**dangling"), "**dangling");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            rewrite_links("fix thing ([abc1234](https://git.example.com/c/abc1234))"),
            "fix thing <https://git.example.com/c/abc1234|abc1234>"
        );
    }

    #[test]
    fn test_plain_markdown_link_is_untouched() {
        let line = "see [docs](https://example.com)";
        assert_eq!(rewrite_links(line), line);
    }

    #[test]
    fn test_header() {
        assert_eq!(promote_header("### Features"), "\n*Features*\n");
    }

    #[test]
    fn test_header_needs_three_hashes() {
        assert_eq!(promote_header("## Features"), "## Features");
    }

    #[test]
    fn test_header_matches_inside_line() {
        assert_eq!(promote_header("#### Notes"), "#\n*Notes*\n");
        assert_eq!(promote_header("see ### Features"), "see \n*Features*\n");
    }

    #[test]
    fn test_diff_link() {
        assert_eq!(
            collapse_diff_link(
                "## [1.2.1](https://git.example.com/app/compare/v1.2.0...v1.2.1) (2021-01-01)"
            ),
            "<https://git.example.com/app/compare/v1.2.0...v1.2.1|Diff with previous version>"
        );
    }

    #[test]
    fn test_diff_link_requires_https() {
        let line = "# [1.2.1](http://git.example.com/app/compare/v1.2.0...v1.2.1)";
        assert_eq!(collapse_diff_link(line), line);
    }

    #[test]
    fn test_duplicate_release_line() {
        assert_eq!(suppress_release_line("release: 1.2.3 [skip ci]"), "");
        assert_eq!(suppress_release_line("ci release: 1.2.3 [skip ci]"), "");
        assert_eq!(suppress_release_line("release: 1.2.3"), "release: 1.2.3");
    }

    #[test]
    fn test_semantic_release_title_line_is_kept() {
        let line = "chore(release): 1.2.3 [skip ci]";
        assert_eq!(suppress_release_line(line), line);
    }

    #[test]
    fn test_pipeline_order() {
        let names: Vec<_> = PIPELINE.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["bold", "link", "header", "diff", "release_line"]);
    }

    #[test]
    fn test_format_line_combines_steps() {
        assert_eq!(
            format_line("* **api:** handle ([3f2a1bc](https://git.example.com/c/3f2a1bc))"),
            "* *api:* handle <https://git.example.com/c/3f2a1bc|3f2a1bc>"
        );
    }

    #[test]
    fn test_header_is_surrounded_by_blank_lines() {
        let formatted = format_message("### Features\n* one");
        assert_eq!(formatted, "\n*Features*\n\n* one");
        let lines: Vec<_> = formatted.split('\n').collect();
        assert_eq!(lines, ["", "*Features*", "", "* one"]);
    }

    #[test]
    fn test_blanked_lines_are_dropped() {
        assert_eq!(
            format_lines("release: 1.2.3 [skip ci]\n\n**Fix** bug"),
            vec!["*Fix* bug".to_string()]
        );
    }

    #[test]
    fn test_full_semantic_release_message() {
        let expected = "\
chore(release): 1.4.0 [skip ci]
<https://gitlab.example.com/group/app/compare/v1.3.2...v1.4.0|Diff with previous version>

*Bug Fixes*

* *api:* handle empty payloads <https://gitlab.example.com/group/app/commit/3f2a1bc|3f2a1bc>

*Features*

* *ui:* dark mode <https://gitlab.example.com/group/app/commit/9c0d4e1|9c0d4e1>";

        assert_eq!(format_message(SEMANTIC_RELEASE_MESSAGE), expected);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(format_message(""), "");
        assert_eq!(format_message("\n\n"), "");
    }

    proptest! {
        #[test]
        fn prop_formatting_is_deterministic(message in "[a-z*#()\\[\\] :/.\n]{0,80}") {
            prop_assert_eq!(format_message(&message), format_message(&message));
        }

        #[test]
        fn prop_plain_lines_pass_through(lines in proptest::collection::vec("[a-z][a-z ,.]{0,30}", 0..8)) {
            let message = lines.join("\n");
            prop_assert_eq!(format_message(&message), message);
        }
    }
}
