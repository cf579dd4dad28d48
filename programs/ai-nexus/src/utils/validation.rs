//! Input validation utilities for the AI Nexus task marketplace

/// Returns true if the string is safe to persist on-chain: printable ASCII
/// only (plus space), no control characters.
///
/// Rust's String already guarantees UTF-8; this additionally rejects bytes
/// that would corrupt log output or smuggle escape sequences into clients
/// rendering names, descriptions, and URIs.
pub fn is_clean_text(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_graphic() || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_urls() {
        assert!(is_clean_text("https://example.com/result.json"));
        assert!(is_clean_text("ipfs://QmHash123"));
        assert!(is_clean_text("ar://arweave-hash"));
    }

    #[test]
    fn test_accepts_names_with_spaces() {
        assert!(is_clean_text("summarizer agent v2"));
        assert!(is_clean_text(""));
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(!is_clean_text("result\x00uri"));
        assert!(!is_clean_text("line\nbreak"));
        assert!(!is_clean_text("tab\there"));
        assert!(!is_clean_text("\x1b[31mansi\x1b[0m"));
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(!is_clean_text("café"));
        assert!(!is_clean_text("任务"));
    }
}
