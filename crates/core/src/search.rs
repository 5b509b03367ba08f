//! Free-text search helpers shared by the listing and lookup endpoints.

/// Default number of results for lookup searches (books, readers, orders).
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum number of results for lookup searches.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Reader lookups need at least this many characters.
pub const MIN_READER_SEARCH_LENGTH: usize = 2;

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Trim a search term, returning `None` when nothing is left.
pub fn normalize_term(term: Option<&str>) -> Option<&str> {
    term.map(str::trim).filter(|t| !t.is_empty())
}

/// Build a `%term%` pattern for `ILIKE ... ESCAPE '\'`.
///
/// `%`, `_` and `\` in the user input are escaped so they match literally.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Validate a reader lookup query.
pub fn validate_reader_query(query: &str) -> Result<(), String> {
    if query.trim().chars().count() < MIN_READER_SEARCH_LENGTH {
        return Err(format!(
            "Search query must be at least {MIN_READER_SEARCH_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_bounds() {
        assert_eq!(clamp_limit(None, 20, 100), 20);
        assert_eq!(clamp_limit(Some(0), 20, 100), 1);
        assert_eq!(clamp_limit(Some(1000), 20, 100), 100);
    }

    #[test]
    fn normalize_drops_blank_terms() {
        assert_eq!(normalize_term(None), None);
        assert_eq!(normalize_term(Some("   ")), None);
        assert_eq!(normalize_term(Some("  Dupont ")), Some("Dupont"));
    }

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("dupont"), "%dupont%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn reader_query_needs_two_characters() {
        assert!(validate_reader_query("D").is_err());
        assert!(validate_reader_query(" D ").is_err());
        assert!(validate_reader_query("Du").is_ok());
        assert!(validate_reader_query("Éa").is_ok());
    }
}
