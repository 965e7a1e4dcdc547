pub const COMPREHENSIVE_PROMPT_TEMPLATE: &str = r#"Perform comprehensive analysis of this {language} code with detailed error detection:

```{language}
{code}
```

Error context: {error}

IMPORTANT: Focus heavily on debugging and error detection first. Provide detailed JSON analysis:

{
    "error_detection": {
        "has_errors": true/false,
        "error_summary": "Brief description of main errors found",
        "detailed_errors": [
            {
                "error_type": "syntax/logic/runtime/semantic",
                "line_number": "Specific line number (e.g., 5)",
                "line_content": "Exact content of the problematic line",
                "error_description": "What exactly is wrong",
                "error_severity": "critical/high/medium/low",
                "why_it_happens": "Explanation of why this error occurs",
                "how_to_fix": "Step-by-step solution",
                "corrected_line": "Fixed version of the specific line"
            }
        ],
        "error_categories": {
            "syntax_errors": ["Specific syntax problems with line numbers"],
            "logic_errors": ["Logical issues that cause wrong behavior"],
            "runtime_errors": ["Issues that would cause crashes"],
            "semantic_errors": ["Code that compiles but doesn't do what intended"]
        }
    },
    "debug_analysis": {
        "overall_code_health": "healthy/has_issues/critical_issues",
        "debugging_priority": ["Most critical issues to fix first"],
        "fixed_code": "Complete corrected version of the code",
        "explanation_of_fixes": "Detailed explanation of all changes made",
        "testing_suggestions": ["How to test the fixed code"]
    },
    "code_review": {
        "overall_rating": 8,
        "code_quality": {"rating": 7, "assessment": "Assessment after considering errors"},
        "readability": {"rating": 8, "assessment": "Readability assessment"},
        "maintainability": {"rating": 7, "assessment": "Maintainability assessment"}
    },
    "security_analysis": {
        "vulnerabilities": ["Security issues found"],
        "recommendations": ["Security improvements"]
    },
    "performance_analysis": {
        "bottlenecks": ["Performance issues with line numbers"],
        "optimizations": ["Performance improvements"],
        "time_complexity": {"overall": "O(n), O(n^2), etc.", "breakdown": []},
        "space_complexity": {"overall": "O(1), O(n), etc.", "breakdown": []},
        "complexity_analysis": {
            "best_case": "Best case complexity",
            "average_case": "Average case complexity",
            "worst_case": "Worst case complexity",
            "scalability_notes": "How code scales with input size"
        }
    },
    "improvement_suggestions": {
        "best_practices": ["Best practice recommendations"],
        "refactoring": ["Refactoring suggestions"],
        "modern_features": ["Modern language features to use"]
    },
    "summary": {
        "error_status": "error-free/has-errors/critical-errors",
        "main_issues": ["Top 3 most important issues"],
        "strengths": ["Code strengths"],
        "priority_fixes": ["Most important fixes in order"],
        "overall_score": 8
    }
}"#;
