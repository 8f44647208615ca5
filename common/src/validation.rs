//! Client-side input validation
//!
//! Runs before any request is fired so malformed form input never reaches
//! the network. Character classes match what the backend validators accept;
//! anything stricter would reject legitimate stored tags.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// Literal token that searches for the erroneous whitespace tag.
pub const SPACE_TOKEN: &str = "-SPACE-";

lazy_static! {
    // alphanumerics (unicode), whitespace and - _ ' ! : , .  plus / as the
    // multi-term separator in search strings
    static ref SEARCH_RE: Regex = Regex::new(r"^[\w\s\-'!:,./]*$").unwrap();
    static ref TAG_RE: Regex = Regex::new(r"^[\w\s\-'!:,.]*$").unwrap();
}

/// Validate a search term.
///
/// Returns the trimmed term. The `-SPACE-` token is always accepted.
/// Terms are split on `/` server-side, so the separator is allowed here.
pub fn validate_search(term: &str) -> Result<String> {
    let trimmed = term.trim();
    if trimmed == SPACE_TOKEN {
        return Ok(trimmed.to_string());
    }
    if !SEARCH_RE.is_match(trimmed) {
        return Err(Error::Validation(
            "Search contains invalid characters".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate a tag list for an update request.
///
/// Empty tags are dropped (the whitespace tag is a server-side defect, never
/// something the client writes). Returns the cleaned list.
pub fn validate_tags(tags: &[String]) -> Result<Vec<String>> {
    let mut cleaned = Vec::with_capacity(tags.len());
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !TAG_RE.is_match(trimmed) {
            return Err(Error::Validation(format!(
                "Tag contains invalid characters: {}",
                trimmed
            )));
        }
        cleaned.push(trimmed.to_string());
    }
    Ok(cleaned)
}

/// Parse free-typed tag input from the add-tags field.
///
/// The field accepts several tags separated by commas, so this path splits
/// before validating. Tags that already exist (e.g. picked from the
/// suggestion dropdown) may legally contain commas and must NOT go through
/// here; pass them to [`validate_tags`] as a one-element slice instead.
pub fn parse_tag_input(raw: &str) -> Result<Vec<String>> {
    let parts: Vec<String> = raw.split(',').map(str::to_string).collect();
    validate_tags(&parts)
}

/// Validate a rotation request. Only quarter turns are supported.
pub fn validate_rotation_degrees(degrees: i32) -> Result<i32> {
    match degrees {
        90 | 180 | 270 => Ok(degrees),
        _ => Err(Error::Validation(format!(
            "Invalid rotation: {} degrees",
            degrees
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Search terms
    // =============================================

    #[test]
    fn test_validate_search_plain() {
        assert_eq!(validate_search("holiday 1974").unwrap(), "holiday 1974");
    }

    #[test]
    fn test_validate_search_trims() {
        assert_eq!(validate_search("  moon  ").unwrap(), "moon");
    }

    #[test]
    fn test_validate_search_multi_term() {
        // "/" separates terms, all matched conjunctively server-side
        assert!(validate_search("DATE: 1974/PLACE: The Moon").is_ok());
    }

    #[test]
    fn test_validate_search_space_token() {
        assert_eq!(validate_search(SPACE_TOKEN).unwrap(), "-SPACE-");
    }

    #[test]
    fn test_validate_search_rejects_angle_brackets() {
        assert!(validate_search("<script>").is_err());
    }

    #[test]
    fn test_validate_search_rejects_percent() {
        assert!(validate_search("100%").is_err());
    }

    #[test]
    fn test_validate_search_empty_ok() {
        assert_eq!(validate_search("").unwrap(), "");
    }

    // =============================================
    // Tag lists
    // =============================================

    #[test]
    fn test_validate_tags_drops_empty() {
        let tags = vec!["moon".to_string(), "  ".to_string(), String::new()];
        assert_eq!(validate_tags(&tags).unwrap(), vec!["moon"]);
    }

    #[test]
    fn test_validate_tags_trims() {
        let tags = vec![" DATE: 1974 ".to_string()];
        assert_eq!(validate_tags(&tags).unwrap(), vec!["DATE: 1974"]);
    }

    #[test]
    fn test_validate_tags_rejects_separator() {
        // "/" is a search separator, not a legal tag character
        let tags = vec!["a/b".to_string()];
        assert!(validate_tags(&tags).is_err());
    }

    #[test]
    fn test_validate_tags_rejects_quotes() {
        let tags = vec!["\"quoted\"".to_string()];
        assert!(validate_tags(&tags).is_err());
    }

    #[test]
    fn test_validate_tags_keeps_comma_inside_tag() {
        // commas are legal tag characters, so a stored tag like this must
        // survive as a single tag when re-submitted from a suggestion pick
        let tags = vec!["DATE: 1974, summer".to_string()];
        assert_eq!(validate_tags(&tags).unwrap(), vec!["DATE: 1974, summer"]);
    }

    #[test]
    fn test_parse_tag_input_splits_on_commas() {
        let parsed = parse_tag_input("moon, apollo 11 ,  ").unwrap();
        assert_eq!(parsed, vec!["moon", "apollo 11"]);
    }

    #[test]
    fn test_parse_tag_input_rejects_bad_chars() {
        assert!(parse_tag_input("moon, a/b").is_err());
    }

    // =============================================
    // Rotation
    // =============================================

    #[test]
    fn test_validate_rotation_quarter_turns() {
        assert_eq!(validate_rotation_degrees(90).unwrap(), 90);
        assert_eq!(validate_rotation_degrees(180).unwrap(), 180);
        assert_eq!(validate_rotation_degrees(270).unwrap(), 270);
    }

    #[test]
    fn test_validate_rotation_rejects_others() {
        assert!(validate_rotation_degrees(0).is_err());
        assert!(validate_rotation_degrees(45).is_err());
        assert!(validate_rotation_degrees(-90).is_err());
        assert!(validate_rotation_degrees(360).is_err());
    }
}
