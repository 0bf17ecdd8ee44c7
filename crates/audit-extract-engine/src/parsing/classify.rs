use regex::Regex;
use std::sync::OnceLock;

/// Ambient parse state the classifier reads but never writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    /// Whether the body anchor line has been seen.
    pub started: bool,
    /// Whether the scan is currently inside a table block.
    pub in_table: bool,
}

/// Classification of a single paragraph line.
///
/// Produced by [`LineClassifier::classify`] in strict priority order;
/// first match wins, so each line maps to exactly one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Line before the body anchor; discarded.
    Preamble,
    /// The body anchor line marking the start of the audit body.
    BodyStart,
    /// Table caption line; opens table-skip mode and is itself discarded.
    TableCaption,
    /// Non-blank line inside a table block; discarded.
    TableRow,
    /// Blank line inside a table block; closes table-skip mode.
    TableEnd,
    /// Level-1 heading carrying the project-area title.
    Heading1(String),
    /// Level-2 heading carrying the risk-category title.
    Heading2(String),
    /// Level-3 heading carrying the finding title.
    Heading3(String),
    /// Heading-shaped line with no extractable title; discarded.
    Skipped,
    /// Blank line outside a table block; no effect.
    Blank,
    /// Plain content line, dispatched to the active bucket.
    Content(String),
}

/// Classifies individual report lines against the loose outline
/// convention of the source documents.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies one trimmed line. Pure function of the line text and
    /// the ambient [`Context`].
    pub fn classify(&self, line: &str, ctx: Context) -> LineKind {
        // Nothing before the body anchor is classified at all.
        if !ctx.started {
            return if body_anchor_re().is_match(line) {
                LineKind::BodyStart
            } else {
                LineKind::Preamble
            };
        }

        // Table-skip mode ends only on an exact blank line.
        if ctx.in_table {
            return if line.is_empty() {
                LineKind::TableEnd
            } else {
                LineKind::TableRow
            };
        }

        if line.starts_with('表') {
            return LineKind::TableCaption;
        }

        // Heading checks run level 1 before 2 before 3; a malformed line
        // that loosely satisfies more than one shape resolves to the
        // earliest match.
        if let Some(marker) = area_heading_re().find(line) {
            return LineKind::Heading1(line[marker.end()..].trim().to_string());
        }

        if category_heading_re().is_match(line) {
            return match category_title(line) {
                Some(title) => LineKind::Heading2(title),
                None => LineKind::Skipped,
            };
        }

        if let Some(caps) = finding_heading_re().captures(line) {
            return LineKind::Heading3(caps[2].trim().to_string());
        }

        if line.is_empty() {
            return LineKind::Blank;
        }

        LineKind::Content(line.to_string())
    }
}

/// Extracts the category title following the `<int>.<int>` numeral,
/// trimmed of surrounding spaces, dots and underscores.
fn category_title(line: &str) -> Option<String> {
    let caps = category_title_re().captures(line)?;
    Some(caps[3].trim_matches([' ', '.', '_']).to_string())
}

fn body_anchor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^三[、.]\s*审计正文").expect("invalid body anchor regex"))
}

fn area_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^（[一二三四五六七八九十]+）").expect("invalid area heading regex")
    })
}

fn category_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^（.*?）\s*\d+\.\d+").expect("invalid category heading regex"))
}

fn category_title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"（.*?）\s*(\d+\.\d+)(\.?)\s*([^_]+)").expect("invalid category title regex")
    })
}

fn finding_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+\.\d+\.\d+)\s*(.*)").expect("invalid finding heading regex"))
}
