//! Query tokenizer
//!
//! Splits the free-text search box into interval tokens and keeps the ones shaped
//! like a ratio (`3/2`, `81/64`, `7`).

/// Split raw input on runs of whitespace and/or commas, dropping empty fragments.
///
/// ```
/// use scalefind::tokenize;
///
/// assert_eq!(tokenize(" 1/1, 3/2,,5/4\t7 "), vec!["1/1", "3/2", "5/4", "7"]);
/// assert!(tokenize(" , ").is_empty());
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim each token and keep only those made entirely of ASCII digits and `/`.
///
/// Anything else is dropped silently. An empty result means there is nothing to
/// search for.
///
/// ```
/// use scalefind::clean_tokens;
///
/// assert_eq!(clean_tokens(&[" 3/2 ", "abc", "7", "5/4a", ""]), vec!["3/2", "7"]);
/// ```
pub fn clean_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| is_ratio_token(t))
        .map(str::to_string)
        .collect()
}

fn is_ratio_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '/')
}
