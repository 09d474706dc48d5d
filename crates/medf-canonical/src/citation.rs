use regex::Regex;
use serde::{Deserialize, Serialize};

/// Citation grammar: the literal token `MEDF:`, optional whitespace, a
/// document-id token of one or more characters from `[A-Za-z0-9_-]`,
/// optionally followed immediately by `#` and a block-id token from the
/// same class. The document-id token greedily consumes all legal
/// characters, so no partial-match ambiguity arises at the `#` boundary.
pub const CITATION_PATTERN: &str = r"MEDF:\s*([A-Za-z0-9_-]+)(?:#([A-Za-z0-9_-]+))?";

/// A structured in-text reference to another document or block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Target document id token.
    pub document_id: String,
    /// Optional target block id token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    /// The exact matched substring, as it appeared in the text.
    pub full: String,
}

/// Extracts all citations from a block's text, in left-to-right order of
/// appearance.
///
/// Text with no citations yields an empty vector, not an error.
pub fn extract_citations(text: &str) -> Vec<Citation> {
    let re = Regex::new(CITATION_PATTERN).expect("invalid regex");
    re.captures_iter(text)
        .map(|caps| Citation {
            document_id: caps[1].to_string(),
            block_id: caps.get(2).map(|m| m.as_str().to_string()),
            full: caps[0].to_string(),
        })
        .collect()
}

/// Derives a valid id slug from a human-readable title.
///
/// Lowercases the input, collapses every maximal run of characters outside
/// `[a-z0-9]` into a single `-`, and strips leading/trailing `-`. Empty
/// input yields empty output; pathological input never errors.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let re = Regex::new(r"[^a-z0-9]+").expect("invalid regex");
    let collapsed = re.replace_all(&lowered, "-");
    collapsed.trim_matches('-').to_string()
}
