use crate::enums::parsed_analysis::ParsedAnalysis;
use crate::structs::analysis_result::AnalysisResult;

/// Reparses stored analysis text.
///
/// Only a JSON object whose known fields have the expected types decodes;
/// anything else, including empty text, prose, truncated JSON and
/// non-object JSON, comes back as `Raw` with the text untouched.
pub fn parse_analysis(text: &str) -> ParsedAnalysis {
    match decode(text) {
        Some(result) => ParsedAnalysis::Decoded(result),
        None => ParsedAnalysis::Raw(text.to_string()),
    }
}

fn decode(text: &str) -> Option<AnalysisResult> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_with_known_fields_decodes() {
        let parsed = parse_analysis(r#"{"overall_rating":7.5,"summary":"Decent","issues":["off-by-one"],"suggestions":[]}"#);
        match parsed {
            ParsedAnalysis::Decoded(result) => {
                assert_eq!(result.overall_rating, Some(7.5));
                assert_eq!(result.summary.as_deref(), Some("Decent"));
                assert_eq!(result.issues, Some(vec!["off-by-one".to_string()]));
                assert_eq!(result.suggestions, Some(vec![]));
                assert_eq!(result.security_notes, None);
            }
            other => panic!("expected decoded result, got {:?}", other),
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        assert!(parse_analysis(r#"{"summary":"ok","model":"gemini"}"#).is_decoded());
    }

    #[test]
    fn empty_object_decodes_to_nothing() {
        assert_eq!(parse_analysis("{}"), ParsedAnalysis::Decoded(AnalysisResult::default()));
    }

    #[test]
    fn failures_keep_text_verbatim() {
        for text in ["", "   ", "The code looks fine.", r#"{"summary": "cut of"#, "[]", "null", "7.5", "```json\n{}\n```"] {
            assert_eq!(parse_analysis(text), ParsedAnalysis::Raw(text.to_string()), "input {:?}", text);
        }
    }

    #[test]
    fn wrongly_typed_field_falls_back() {
        let text = r#"{"overall_rating":"high","summary":"x"}"#;
        assert_eq!(parse_analysis(text), ParsedAnalysis::Raw(text.to_string()));
    }

    #[test]
    fn comprehensive_schema_is_shown_raw() {
        let text = r#"{"summary":{"overall_score":8},"code_review":{"overall_rating":8}}"#;
        assert!(!parse_analysis(text).is_decoded());
    }
}
