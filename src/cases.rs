use crate::theme::Theme;
use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentStyle {
    pub glyph: &'static str,
    pub label: &'static str,
    pub color: Color32,
    pub fill: Color32,
}

impl Sentiment {
    pub fn style(self, theme: &Theme) -> SentimentStyle {
        match self {
            Self::Positive => SentimentStyle {
                glyph: "👍",
                label: "Favorable Judgment",
                color: theme.success,
                fill: theme.success_tint,
            },
            Self::Negative => SentimentStyle {
                glyph: "👎",
                label: "Unfavorable Judgment",
                color: theme.danger,
                fill: theme.danger_tint,
            },
            Self::Neutral => SentimentStyle {
                glyph: "📄",
                label: "Neutral Judgment",
                color: theme.text_muted,
                fill: theme.surface_muted,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub id: u32,
    pub title: &'static str,
    pub court: &'static str,
    pub year: u16,
    pub confidence: u8,
    pub summary: &'static str,
    pub citations: &'static [&'static str],
    pub sentiment: Sentiment,
}

static SIMILAR_CASES: [CaseRecord; 5] = [
    CaseRecord {
        id: 1,
        title: "Smith v. Johnson Corp",
        court: "Supreme Court",
        year: 2022,
        confidence: 94,
        summary: "Landmark case regarding contractual obligations in commercial disputes with specific emphasis on force majeure clauses.",
        citations: &[
            "Section 23(A) of the Contract Act as applied in commercial settings",
            "Precedent established in Wilson v. State (2019) regarding liability limitations",
        ],
        sentiment: Sentiment::Positive,
    },
    CaseRecord {
        id: 2,
        title: "Doe v. Acme Industries",
        court: "Court of Appeals",
        year: 2021,
        confidence: 89,
        summary: "Case involving breach of contract and damages assessment in corporate litigation.",
        citations: &[
            "Standard for calculating compensatory damages under Section 45(B)",
            "Reference to Miller v. Tech Corp (2018) on mitigation of damages",
        ],
        sentiment: Sentiment::Neutral,
    },
    CaseRecord {
        id: 3,
        title: "State v. Williams LLC",
        court: "High Court",
        year: 2023,
        confidence: 85,
        summary: "Recent decision on corporate governance and fiduciary responsibilities in shareholder disputes.",
        citations: &[
            "Corporate governance standards per Section 12 of Business Corporation Act",
            "Fiduciary duty principles established in Brown v. Capital Partners (2020)",
        ],
        sentiment: Sentiment::Negative,
    },
    CaseRecord {
        id: 4,
        title: "Martinez v. Global Tech",
        court: "District Court",
        year: 2020,
        confidence: 82,
        summary: "Intellectual property dispute involving trade secrets and non-compete agreements.",
        citations: &[
            "Trade secret protection under the Uniform Trade Secrets Act",
            "Reasonableness standard for non-compete clauses from Anderson v. Software Inc (2017)",
        ],
        sentiment: Sentiment::Positive,
    },
    CaseRecord {
        id: 5,
        title: "Thompson v. Investment Partners",
        court: "Court of Appeals",
        year: 2019,
        confidence: 78,
        summary: "Securities litigation case addressing disclosure requirements and investor protection.",
        citations: &[
            "Disclosure obligations under Section 10(b) of the Securities Exchange Act",
            "Standard of materiality from Reynolds v. Financial Corp (2016)",
        ],
        sentiment: Sentiment::Neutral,
    },
];

/// The fixed result set shown for every analyzed document.
pub fn similar_cases() -> &'static [CaseRecord] {
    &SIMILAR_CASES
}

pub fn find_case(id: u32) -> Option<&'static CaseRecord> {
    SIMILAR_CASES.iter().find(|case| case.id == id)
}

/// Mean confidence rounded half up, as a whole percentage.
pub fn average_confidence(cases: &[CaseRecord]) -> Option<u8> {
    if cases.is_empty() {
        return None;
    }
    let total: u32 = cases.iter().map(|case| u32::from(case.confidence)).sum();
    let count = cases.len() as u32;
    let rounded = (2 * total + count) / (2 * count);
    u8::try_from(rounded).ok()
}
