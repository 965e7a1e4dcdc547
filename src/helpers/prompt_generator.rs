use crate::enums::analysis_kind::AnalysisKind;
use crate::prompts::comprehensive_prompt::COMPREHENSIVE_PROMPT_TEMPLATE;
use crate::prompts::debug_prompt::DEBUG_PROMPT_TEMPLATE;
use crate::prompts::review_prompt::REVIEW_PROMPT_TEMPLATE;

/// Cuts `code` to at most `limit` characters, marking the cut with `suffix`.
pub fn truncate_code(code: &str, limit: usize, suffix: &str) -> String {
    match code.char_indices().nth(limit) {
        Some((byte_index, _)) => format!("{}{}", &code[..byte_index], suffix),
        None => code.to_string(),
    }
}

pub fn generate_prompt(kind: AnalysisKind, code: &str, language: &str, error: Option<&str>) -> String {
    let template = match kind {
        AnalysisKind::Review => REVIEW_PROMPT_TEMPLATE,
        AnalysisKind::Debug => DEBUG_PROMPT_TEMPLATE,
        AnalysisKind::Comprehensive => COMPREHENSIVE_PROMPT_TEMPLATE,
    };

    let error = match (kind, error) {
        (_, Some(error)) => error,
        (AnalysisKind::Comprehensive, None) => "No specific error reported",
        (_, None) => "",
    };

    substitute(template, &[("language", language), ("error", error), ("code", code)])
}

/// Replaces `{key}` placeholders in one left-to-right pass. Substituted text is
/// never rescanned, and braces that do not form a known placeholder are kept.
fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let placeholder = values.iter().find_map(|(key, value)| {
            tail.strip_prefix(key)?.strip_prefix('}').map(|after| (*value, after))
        });

        match placeholder {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_code_is_untouched() {
        assert_eq!(truncate_code("print(1)", 2000, "..."), "print(1)");
    }

    #[test]
    fn long_code_is_cut_at_limit() {
        let code = "a".repeat(2500);
        let truncated = truncate_code(&code, 2000, "... [truncated]");
        assert_eq!(truncated.len(), 2000 + "... [truncated]".len());
        assert!(truncated.ends_with("... [truncated]"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let code = "é".repeat(10);
        assert_eq!(truncate_code(&code, 3, "~"), "ééé~");
    }

    #[test]
    fn exact_limit_is_not_truncated() {
        assert_eq!(truncate_code("abcd", 4, "~"), "abcd");
    }

    #[test]
    fn debug_prompt_contains_error_and_code() {
        let prompt = generate_prompt(AnalysisKind::Debug, "x = 1/0", "python", Some("ZeroDivisionError"));
        assert!(prompt.contains("Quick debug for python"));
        assert!(prompt.contains("Error: ZeroDivisionError"));
        assert!(prompt.contains("x = 1/0"));
    }

    #[test]
    fn comprehensive_prompt_defaults_error_context() {
        let prompt = generate_prompt(AnalysisKind::Comprehensive, "fn main() {}", "rust", None);
        assert!(prompt.contains("Error context: No specific error reported"));
    }

    #[test]
    fn placeholders_in_error_text_survive() {
        let prompt = generate_prompt(AnalysisKind::Debug, "SECRET_CODE_BODY", "python", Some("panic at {code}"));
        assert!(prompt.contains("Error: panic at {code}"));
        assert_eq!(prompt.matches("SECRET_CODE_BODY").count(), 1);
    }

    #[test]
    fn placeholders_in_language_survive() {
        let prompt = generate_prompt(AnalysisKind::Review, "x = 1", "{error}", None);
        assert!(prompt.contains("{error}"));
    }

    #[test]
    fn json_braces_in_templates_are_kept() {
        assert_eq!(
            substitute(r#"{"a": {code}} {unknown} {"#, &[("code", "1")]),
            r#"{"a": 1} {unknown} {"#
        );
    }

    #[test]
    fn placeholders_in_user_code_survive() {
        let prompt = generate_prompt(AnalysisKind::Review, "s = '{language}'", "python", None);
        assert!(prompt.contains("s = '{language}'"));
    }
}
