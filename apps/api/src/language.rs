//! Language table — maps frontend language codes to the display names
//! passed into generation prompts.

/// Language codes the frontend can select.
#[allow(dead_code)]
pub const SUPPORTED_CODES: &[&str] = &["en", "te", "kn", "ml", "ta", "hi"];

/// Resolves a language code to the display name used in prompts.
/// Unrecognized codes fall back to English rather than failing the call.
pub fn display_name(code: &str) -> &'static str {
    match code {
        "en" => "English",
        "te" => "Telugu",
        "kn" => "Kannada",
        "ml" => "Malayalam",
        "ta" => "Tamil",
        "hi" => "Hindi",
        _ => "English",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_code_resolves() {
        for code in SUPPORTED_CODES {
            assert_ne!(display_name(code), "", "code {code} must resolve");
        }
        assert_eq!(display_name("te"), "Telugu");
        assert_eq!(display_name("hi"), "Hindi");
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(display_name("xx"), "English");
        assert_eq!(display_name(""), "English");
        assert_eq!(display_name("EN"), "English");
    }
}
