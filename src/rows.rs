use std::fmt;

/// Fixed sentinel written when a page has no title element.
pub const MISSING_TITLE: &str = "title not found";

/// Outcome of resolving a single URL's title.
///
/// Failures are carried as data, not errors: one input row always yields
/// exactly one output row, so a bad URL can never abort the batch. The
/// outcome is rendered to its display string only at the output boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleOutcome {
    /// The page had a title element; the trimmed text content.
    Found(String),
    /// The page parsed fine but had no title element.
    Missing,
    /// DNS failure, connection refused, timeout, or a non-2xx status.
    NetworkError(String),
    /// Anything else that went wrong while resolving.
    UnexpectedError(String),
}

impl fmt::Display for TitleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleOutcome::Found(title) => f.write_str(title),
            TitleOutcome::Missing => f.write_str(MISSING_TITLE),
            TitleOutcome::NetworkError(detail) => write!(f, "error: {}", detail),
            TitleOutcome::UnexpectedError(detail) => write!(f, "unexpected error: {}", detail),
        }
    }
}

/// One (URL, outcome) pair, the unit of processing and output.
#[derive(Debug, Clone)]
pub struct Row {
    pub url: String,
    pub outcome: TitleOutcome,
}

impl Row {
    pub fn new(url: String, outcome: TitleOutcome) -> Self {
        Self { url, outcome }
    }
}
