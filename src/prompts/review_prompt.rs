pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Review this {language} code and answer with JSON only, no markdown fences:

```{language}
{code}
```

{
    "overall_rating": <number from 0 to 10, halves allowed>,
    "summary": "Two or three sentence assessment",
    "issues": ["Concrete problems, with line numbers where possible"],
    "suggestions": ["Improvements ordered by impact"],
    "security_notes": ["Security concerns, empty if none"],
    "performance_tips": ["Performance improvements, empty if none"]
}"#;
