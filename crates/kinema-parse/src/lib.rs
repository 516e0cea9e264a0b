//! Movie filename parsing.
//!
//! Recognizes the library naming convention
//! `Title (Year)[.Quality][ {Edition-Tag}].mkv` and extracts the title
//! and release year. Anything that does not match the full convention
//! is rejected — downstream code degrades to a generic presence rather
//! than guessing.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Title and year extracted from a movie filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieFile {
    /// The title substring, verbatim (no trimming or case folding).
    pub title: String,
    /// Four-digit release year, kept as a string for API queries.
    pub year: String,
}

/// Anchored to the whole filename. The quality segment between the year
/// and the container is optional, as is a trailing `{Edition-...}` tag.
fn pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.+) \((\d{4})\)(?:\.\w+)?(?:\s*\{[^}]*\})?\.mkv$")
            .expect("movie filename pattern is valid")
    })
}

/// Parse a filename into its title and year.
///
/// Returns `None` for anything outside the convention: missing year,
/// wrong container, malformed parentheses. The title may itself contain
/// parentheses; the year group binds to the last `(dddd)` before the
/// extension tail.
pub fn parse(filename: &str) -> Option<MovieFile> {
    let caps = pattern().captures(filename)?;
    let parsed = MovieFile {
        title: caps.get(1)?.as_str().to_string(),
        year: caps.get(2)?.as_str().to_string(),
    };
    tracing::debug!(title = %parsed.title, year = %parsed.year, "Parsed movie filename");
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(filename: &str) -> MovieFile {
        parse(filename).unwrap_or_else(|| panic!("expected {filename:?} to parse"))
    }

    #[test]
    fn test_title_year_with_quality_segment() {
        let m = parsed("Inception (2010).1080p.mkv");
        assert_eq!(m.title, "Inception");
        assert_eq!(m.year, "2010");
    }

    #[test]
    fn test_title_year_bare_container() {
        let m = parsed("Parasite (2019).mkv");
        assert_eq!(m.title, "Parasite");
        assert_eq!(m.year, "2019");
    }

    #[test]
    fn test_edition_tag_ignored() {
        let m = parsed("Blade Runner (1982).2160p {Edition-Final Cut}.mkv");
        assert_eq!(m.title, "Blade Runner");
        assert_eq!(m.year, "1982");
    }

    #[test]
    fn test_title_containing_parentheses() {
        let m = parsed("Birdman (or The Unexpected Virtue of Ignorance) (2014).mkv");
        assert_eq!(m.title, "Birdman (or The Unexpected Virtue of Ignorance)");
        assert_eq!(m.year, "2014");
    }

    #[test]
    fn test_title_is_not_trimmed_or_rewritten() {
        let m = parsed("Mother! (2017).mkv");
        assert_eq!(m.title, "Mother!");
    }

    #[test]
    fn test_no_year_rejected() {
        assert_eq!(parse("Unknown File.mkv"), None);
    }

    #[test]
    fn test_year_not_four_digits_rejected() {
        assert_eq!(parse("Metropolis (27).mkv"), None);
        assert_eq!(parse("Metropolis (19277).mkv"), None);
    }

    #[test]
    fn test_wrong_container_rejected() {
        assert_eq!(parse("Inception (2010).1080p.mp4"), None);
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        // Whole-string anchoring: nothing may follow the container.
        assert_eq!(parse("Inception (2010).1080p.mkv.part"), None);
    }

    #[test]
    fn test_year_must_sit_in_parentheses() {
        assert_eq!(parse("Inception 2010.mkv"), None);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(parse(""), None);
    }
}
