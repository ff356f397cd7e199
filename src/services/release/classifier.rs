//! Release detection on commit titles.

use std::sync::LazyLock;

use regex::Regex;

/// The word `release` followed, anywhere later in the title, by a colon.
static RELEASE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"release.*:").expect("release marker regex is valid"));

/// Loose version pattern: one digit per component and any separator.
///
/// Multi-digit components do not match as a whole (`v1.23.4` yields nothing,
/// `v1.2.34` yields `v1.2.3`); deployments rely on the short form.
static VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?[0-9].[0-9].[0-9]").expect("version regex is valid"));

/// What a commit title says about a release
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseCommitData {
    pub is_release: bool,
    /// First version-looking token of the title, empty when there is none
    pub version: String,
}

/// Classify a commit title. Never fails; unmatched patterns give defaults.
pub fn classify(title: &str) -> ReleaseCommitData {
    ReleaseCommitData {
        is_release: RELEASE_MARKER.is_match(title),
        version: VERSION
            .find(title)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_semantic_release_title() {
        let data = classify("chore(release): 1.4.2 [skip ci]");
        assert!(data.is_release);
        assert_eq!(data.version, "1.4.2");
    }

    #[test]
    fn test_plain_release_title_with_v_prefix() {
        let data = classify("release: v1.2.3");
        assert!(data.is_release);
        assert_eq!(data.version, "v1.2.3");
    }

    #[test]
    fn test_version_followed_by_text() {
        assert_eq!(classify("release: 9.9.9 stuff").version, "9.9.9");
    }

    #[test]
    fn test_release_with_path_before_colon() {
        let data = classify("release/foo: cut branch");
        assert!(data.is_release);
        assert_eq!(data.version, "");
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(!classify("Release: v1.0.0").is_release);
        assert!(!classify("RELEASE: v1.0.0").is_release);
    }

    #[test]
    fn test_release_without_colon() {
        assert!(!classify("prepare release v1.0.0").is_release);
    }

    #[test]
    fn test_colon_before_release_word() {
        assert!(!classify("fix: release notes typo").is_release);
    }

    #[test]
    fn test_version_found_even_without_release() {
        let data = classify("fix: bump to 2.0.1");
        assert!(!data.is_release);
        assert_eq!(data.version, "2.0.1");
    }

    #[test]
    fn test_multi_digit_components_are_not_parsed() {
        assert_eq!(classify("release: v1.23.4").version, "");
        assert_eq!(classify("release: v1.10.0").version, "");
        assert_eq!(classify("release: v1.2.34").version, "v1.2.3");
    }

    #[test]
    fn test_separator_can_be_any_character() {
        assert_eq!(classify("release: 1-2-3").version, "1-2-3");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(classify(""), ReleaseCommitData::default());
    }

    proptest! {
        #[test]
        fn prop_release_marker_detected(
            prefix in "[a-z ()/]{0,12}",
            middle in "[a-z0-9 ./-]{0,12}",
            suffix in "[a-z0-9 .]{0,20}",
        ) {
            let title = format!("{prefix}release{middle}:{suffix}");
            prop_assert!(classify(&title).is_release);
        }

        #[test]
        fn prop_no_marker_without_release_word(title in "[a-qs-z0-9 :()]{0,40}") {
            // alphabet excludes `r`, so the word cannot appear
            prop_assert!(!classify(&title).is_release);
        }

        #[test]
        fn prop_single_digit_versions_round_trip(
            major in 0u8..10, minor in 0u8..10, patch in 0u8..10, v in proptest::bool::ANY,
        ) {
            let version = format!("{}{major}.{minor}.{patch}", if v { "v" } else { "" });
            let data = classify(&format!("chore(release): {version} [skip ci]"));
            prop_assert!(data.is_release);
            prop_assert_eq!(data.version, version);
        }
    }
}
