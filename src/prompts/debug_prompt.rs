pub const DEBUG_PROMPT_TEMPLATE: &str = r#"Quick debug for {language}:

```{language}
{code}
```

Error: {error}

JSON (be brief):
{
    "issue_explanation": "Brief issue description",
    "fixed_code": "Key fixes only",
    "fix_explanation": "Short explanation",
    "prevention_tips": ["Top 2 tips"]
}"#;
