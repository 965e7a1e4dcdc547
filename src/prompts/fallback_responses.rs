use serde_json::json;

/// Stored in place of a model answer when the review call fails.
pub fn review_fallback(language: &str) -> String {
    json!({
        "overall_rating": 6,
        "summary": format!("AI analysis is temporarily unavailable. Basic {} structure appears functional; a manual review is recommended.", language),
        "issues": ["Unable to perform detailed analysis - manual review needed"],
        "suggestions": [
            format!("Follow {} coding standards", language),
            "Add proper error handling"
        ],
        "security_notes": ["Manual security review recommended", "Validate all inputs"],
        "performance_tips": ["Profile code for performance issues"]
    })
    .to_string()
}

pub fn debug_fallback() -> String {
    json!({
        "issue_explanation": "Unable to analyze due to timeout",
        "fixed_code": "Manual debugging required",
        "fix_explanation": "Please check syntax and logic manually",
        "prevention_tips": ["Use IDE debugging tools", "Add print statements for debugging"]
    })
    .to_string()
}

pub fn comprehensive_fallback(language: &str) -> String {
    json!({
        "error_detection": {
            "has_errors": false,
            "error_summary": "Unable to perform detailed error analysis due to timeout",
            "detailed_errors": [],
            "error_categories": {
                "syntax_errors": ["Manual syntax check recommended"],
                "logic_errors": ["Manual logic review needed"],
                "runtime_errors": ["Test code execution thoroughly"],
                "semantic_errors": ["Verify code behavior matches intent"]
            }
        },
        "debug_analysis": {
            "overall_code_health": "unknown",
            "debugging_priority": ["Manual debugging recommended"],
            "fixed_code": "Original code - manual debugging required",
            "explanation_of_fixes": "AI analysis timed out - manual review needed",
            "testing_suggestions": ["Test all code paths", "Use debugger tools", "Add logging statements"]
        },
        "code_review": {
            "overall_rating": 6,
            "code_quality": {"rating": 6, "assessment": format!("Basic {} structure appears functional", language)},
            "readability": {"rating": 6, "assessment": "Code structure seems readable"},
            "maintainability": {"rating": 6, "assessment": "Standard maintainability practices recommended"}
        },
        "security_analysis": {
            "vulnerabilities": ["Manual security review recommended"],
            "recommendations": ["Follow security best practices", "Validate all inputs"]
        },
        "performance_analysis": {
            "bottlenecks": ["Profile code for performance issues"],
            "optimizations": ["Consider algorithmic improvements"],
            "time_complexity": {"overall": "Analysis not available", "breakdown": []},
            "space_complexity": {"overall": "Analysis not available", "breakdown": []},
            "complexity_analysis": {
                "best_case": "Manual analysis required",
                "average_case": "Manual analysis required",
                "worst_case": "Manual analysis required",
                "scalability_notes": "Test with different input sizes"
            }
        },
        "improvement_suggestions": {
            "best_practices": [format!("Follow {} coding standards", language), "Add proper error handling"],
            "refactoring": ["Consider code organization improvements"],
            "modern_features": [format!("Use modern {} features where appropriate", language)]
        },
        "summary": {
            "error_status": "unknown",
            "main_issues": ["Analysis timeout - manual review needed"],
            "strengths": ["Code structure exists"],
            "priority_fixes": ["Manual code review recommended"],
            "overall_score": 6
        }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::analysis_result::AnalysisResult;

    #[test]
    fn review_fallback_decodes_as_analysis_result() {
        let result: AnalysisResult = serde_json::from_str(&review_fallback("rust")).unwrap();
        assert_eq!(result.overall_rating, Some(6.0));
        assert!(result.summary.unwrap().contains("rust"));
    }

    #[test]
    fn debug_fallback_has_all_debug_fields() {
        let result: AnalysisResult = serde_json::from_str(&debug_fallback()).unwrap();
        assert!(result.issue_explanation.is_some());
        assert!(result.fixed_code.is_some());
        assert!(result.fix_explanation.is_some());
        assert_eq!(result.prevention_tips.map(|t| t.len()), Some(2));
    }

    #[test]
    fn language_with_quotes_still_yields_valid_json() {
        let text = comprehensive_fallback("c\"++");
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["summary"]["overall_score"], 6);
    }
}
