use askama::Template;
use crate::enums::parsed_analysis::ParsedAnalysis;
use crate::enums::render_mode::RenderMode;
use crate::services::result_parser::parse_analysis;
use crate::services::star_renderer::{format_rating, generate_star_text, star_classes};
use crate::structs::analysis_result::AnalysisResult;

const SUMMARY_PLACEHOLDER: &str = "No summary provided.";
const EMPTY_RESULT_PLACEHOLDER: &str = "No analysis details available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Issues,
    Suggestions,
    SecurityNotes,
    PerformanceTips,
    IssueExplanation,
    FixedCode,
    FixExplanation,
    PreventionTips,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Issues => "Issues",
            Self::Suggestions => "Suggestions",
            Self::SecurityNotes => "Security Notes",
            Self::PerformanceTips => "Performance Tips",
            Self::IssueExplanation => "Issue Explanation",
            Self::FixedCode => "Fixed Code",
            Self::FixExplanation => "Fix Explanation",
            Self::PreventionTips => "Prevention Tips",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            Self::Summary => "summary-section",
            Self::Issues => "issues-section",
            Self::Suggestions => "suggestions-section",
            Self::SecurityNotes => "security-section",
            Self::PerformanceTips => "performance-section",
            Self::IssueExplanation => "explanation-section",
            Self::FixedCode => "fixed-code-section",
            Self::FixExplanation => "fix-explanation-section",
            Self::PreventionTips => "prevention-section",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Summary { rating: Option<f64>, text: String },
    Paragraph(String),
    List(Vec<String>),
    Code(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub body: SectionBody,
}

fn non_empty_text(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

fn non_empty_list(value: &Option<Vec<String>>) -> Option<Vec<String>> {
    value.as_ref().filter(|items| !items.is_empty()).cloned()
}

/// Sections for the present, non-empty fields of `result`, in display order.
pub fn sections(result: &AnalysisResult, mode: RenderMode) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut push = |kind: SectionKind, body: Option<SectionBody>| {
        if let Some(body) = body {
            sections.push(Section { kind, body });
        }
    };

    match mode {
        RenderMode::Review => {
            let rating = result.overall_rating.filter(|r| r.is_finite()).map(|r| r.clamp(0.0, 10.0));
            let summary = non_empty_text(&result.summary);
            let summary_body = match (rating, summary) {
                (None, None) => None,
                (rating, text) => Some(SectionBody::Summary {
                    rating,
                    text: text.unwrap_or_else(|| SUMMARY_PLACEHOLDER.to_string()),
                }),
            };
            push(SectionKind::Summary, summary_body);
            push(SectionKind::Issues, non_empty_list(&result.issues).map(SectionBody::List));
            push(SectionKind::Suggestions, non_empty_list(&result.suggestions).map(SectionBody::List));
            push(SectionKind::SecurityNotes, non_empty_list(&result.security_notes).map(SectionBody::List));
            push(SectionKind::PerformanceTips, non_empty_list(&result.performance_tips).map(SectionBody::List));
        }
        RenderMode::Debug => {
            push(SectionKind::IssueExplanation, non_empty_text(&result.issue_explanation).map(SectionBody::Paragraph));
            push(SectionKind::FixedCode, non_empty_text(&result.fixed_code).map(SectionBody::Code));
            push(SectionKind::FixExplanation, non_empty_text(&result.fix_explanation).map(SectionBody::Paragraph));
            push(SectionKind::PreventionTips, non_empty_list(&result.prevention_tips).map(SectionBody::List));
        }
    }

    sections
}

/// One section flattened for the HTML fragment template.
struct SectionView<'a> {
    class: &'static str,
    title: &'static str,
    stars: Vec<&'static str>,
    rating_label: String,
    paragraph: Option<&'a str>,
    items: &'a [String],
    code: Option<&'a str>,
}

impl<'a> SectionView<'a> {
    fn new(section: &'a Section) -> Self {
        let mut view = Self {
            class: section.kind.css_class(),
            title: section.kind.title(),
            stars: Vec::new(),
            rating_label: String::new(),
            paragraph: None,
            items: &[],
            code: None,
        };

        match &section.body {
            SectionBody::Summary { rating, text } => {
                if let Some(rating) = rating {
                    view.stars = star_classes(*rating);
                    view.rating_label = format_rating(*rating);
                }
                view.paragraph = Some(text.as_str());
            }
            SectionBody::Paragraph(text) => view.paragraph = Some(text.as_str()),
            SectionBody::List(items) => view.items = items.as_slice(),
            SectionBody::Code(code) => view.code = Some(code.as_str()),
        }
        view
    }
}

#[derive(Template)]
#[template(path = "fragments/analysis_result.html")]
struct AnalysisResultTemplate<'a> {
    raw: Option<&'a str>,
    sections: Vec<SectionView<'a>>,
    placeholder: &'static str,
    language: &'a str,
}

/// Renders stored analysis text as an HTML fragment.
///
/// Code blocks carry `data-highlight` so the page can run a single
/// highlighting pass after inserting the fragment.
pub fn render_html(text: &str, mode: RenderMode, language: Option<&str>) -> String {
    render_parsed_html(&parse_analysis(text), mode, language)
}

pub fn render_parsed_html(parsed: &ParsedAnalysis, mode: RenderMode, language: Option<&str>) -> String {
    let decoded_sections = match parsed {
        ParsedAnalysis::Decoded(result) => sections(result, mode),
        ParsedAnalysis::Raw(_) => Vec::new(),
    };

    let template = AnalysisResultTemplate {
        raw: match parsed {
            ParsedAnalysis::Raw(text) => Some(text.as_str()),
            ParsedAnalysis::Decoded(_) => None,
        },
        sections: decoded_sections.iter().map(SectionView::new).collect(),
        placeholder: EMPTY_RESULT_PLACEHOLDER,
        language: language.unwrap_or("plaintext"),
    };

    template.render().unwrap_or_else(|e| {
        log::error!("❌ Failed to render analysis: {}", e);
        String::new()
    })
}

/// Renders stored analysis text for a terminal.
pub fn render_text(parsed: &ParsedAnalysis, mode: RenderMode, width: usize) -> String {
    match parsed {
        ParsedAnalysis::Raw(text) => text.clone(),
        ParsedAnalysis::Decoded(result) => {
            let sections = sections(result, mode);
            if sections.is_empty() {
                return EMPTY_RESULT_PLACEHOLDER.to_string();
            }

            let rule = "━".repeat(width.clamp(20, 80));
            let mut out = String::new();
            for section in &sections {
                out.push_str(&format!("{}\n{}\n", section.kind.title(), rule));
                match &section.body {
                    SectionBody::Summary { rating, text } => {
                        if let Some(rating) = rating {
                            out.push_str(&format!("  {} {}/10\n", generate_star_text(*rating), format_rating(*rating)));
                        }
                        out.push_str(&format!("  {}\n", text));
                    }
                    SectionBody::Paragraph(text) => out.push_str(&format!("  {}\n", text)),
                    SectionBody::List(items) => {
                        for item in items {
                            out.push_str(&format!("  • {}\n", item));
                        }
                    }
                    SectionBody::Code(code) => {
                        for line in code.lines() {
                            out.push_str(&format!("    {}\n", line));
                        }
                    }
                }
                out.push('\n');
            }
            out.trim_end().to_string()
        }
    }
}
