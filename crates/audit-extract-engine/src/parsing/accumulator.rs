use regex::Regex;
use std::sync::OnceLock;

use super::classify::{Context, LineKind};
use crate::models::{FindingRecord, ManagementReply};

/// Marker substring that switches the active section to the risk bucket.
const RISK_MARKER: &str = "相关风险";
/// Marker substring that switches the active section to the suggestion bucket.
const SUGGESTION_MARKER: &str = "改进建议";
/// Marker substring that switches the active section to the reply buckets.
const REPLY_MARKER: &str = "公司管理层回复";

/// The finding-scoped free-text bucket currently receiving content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Section {
    /// No finding heading seen yet; content is dropped.
    #[default]
    Unset,
    Background,
    Risk,
    Suggestion,
    Reply,
}

/// The management-reply sub-field currently receiving content.
///
/// `Unset` routes content to the `other` bucket explicitly rather than
/// via a fallback default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ReplyField {
    #[default]
    Unset,
    Confirm,
    Plan,
    Responsible,
    CompletionTime,
}

/// Accumulates the finding under construction, one classified line per
/// transition.
///
/// [`push`](Self::push) applies a transition and returns the completed
/// record whenever a heading closes the open finding; [`finish`](Self::finish)
/// performs the unconditional end-of-stream flush. Area and category
/// titles survive flushes; everything else is finding-scoped.
#[derive(Debug, Default)]
pub struct RecordAccumulator {
    started: bool,
    in_table: bool,
    area: String,
    category: String,
    finding: String,
    section: Section,
    reply_field: ReplyField,
    background: Vec<String>,
    risk: Vec<String>,
    suggestion: Vec<String>,
    confirm: Vec<String>,
    plan: Vec<String>,
    responsible: Vec<String>,
    completion_time: Vec<String>,
    other: Vec<String>,
}

impl RecordAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ambient flags the classifier needs for the next line.
    pub fn context(&self) -> Context {
        Context {
            started: self.started,
            in_table: self.in_table,
        }
    }

    /// Applies one classified line, returning a record when the
    /// transition flushed one.
    pub fn push(&mut self, kind: LineKind) -> Option<FindingRecord> {
        match kind {
            LineKind::BodyStart => {
                self.started = true;
                None
            }
            LineKind::TableCaption => {
                self.in_table = true;
                None
            }
            LineKind::TableEnd => {
                self.in_table = false;
                None
            }
            LineKind::Preamble | LineKind::TableRow | LineKind::Skipped | LineKind::Blank => None,
            LineKind::Heading1(title) => {
                let flushed = self.flush();
                self.area = title;
                flushed
            }
            LineKind::Heading2(title) => {
                let flushed = self.flush();
                self.category = title;
                flushed
            }
            LineKind::Heading3(title) => {
                let flushed = self.flush();
                self.finding = title;
                self.section = Section::Background;
                flushed
            }
            LineKind::Content(text) => {
                self.dispatch_content(text);
                None
            }
        }
    }

    /// End-of-stream flush. A no-op on an accumulator with no open finding.
    pub fn finish(mut self) -> Option<FindingRecord> {
        self.flush()
    }

    fn dispatch_content(&mut self, text: String) {
        if self.section == Section::Reply {
            if let Some(field) = reply_label(&text) {
                self.reply_field = field;
                return;
            }
            let bucket = match self.reply_field {
                ReplyField::Unset => &mut self.other,
                ReplyField::Confirm => &mut self.confirm,
                ReplyField::Plan => &mut self.plan,
                ReplyField::Responsible => &mut self.responsible,
                ReplyField::CompletionTime => &mut self.completion_time,
            };
            bucket.push(text);
            return;
        }

        // Marker lines re-seat the active section and are themselves
        // discarded.
        if text.contains(RISK_MARKER) {
            self.section = Section::Risk;
            return;
        }
        if text.contains(SUGGESTION_MARKER) {
            self.section = Section::Suggestion;
            return;
        }
        if text.contains(REPLY_MARKER) {
            self.section = Section::Reply;
            return;
        }

        match self.section {
            Section::Background => self.background.push(text),
            Section::Risk => self.risk.push(text),
            Section::Suggestion => self.suggestion.push(text),
            // Content with no active section is dropped.
            Section::Unset | Section::Reply => {}
        }
    }

    /// Emits the open finding, if any, resetting the buckets and the
    /// reply field in the same step. Area, category and the active
    /// section survive; a finding heading re-seats the section when the
    /// next record opens.
    fn flush(&mut self) -> Option<FindingRecord> {
        if self.finding.is_empty() {
            return None;
        }

        let record = FindingRecord {
            area: self.area.clone(),
            category: self.category.clone(),
            finding: std::mem::take(&mut self.finding),
            background: join_bucket(std::mem::take(&mut self.background)),
            risk: join_bucket(std::mem::take(&mut self.risk)),
            suggestion: join_bucket(std::mem::take(&mut self.suggestion)),
            reply: ManagementReply {
                confirm: join_bucket(std::mem::take(&mut self.confirm)),
                plan: join_bucket(std::mem::take(&mut self.plan)),
                responsible: join_bucket(std::mem::take(&mut self.responsible)),
                completion_time: join_bucket(std::mem::take(&mut self.completion_time)),
                other: join_bucket(std::mem::take(&mut self.other)),
            },
        };

        self.reply_field = ReplyField::Unset;

        Some(record)
    }
}

/// Joins a bucket's lines with newlines and trims the joined text once.
fn join_bucket(lines: Vec<String>) -> String {
    lines.join("\n").trim().to_string()
}

/// Matches the four fixed reply sub-field labels, in their numeric order.
fn reply_label(text: &str) -> Option<ReplyField> {
    if confirm_label_re().is_match(text) {
        Some(ReplyField::Confirm)
    } else if plan_label_re().is_match(text) {
        Some(ReplyField::Plan)
    } else if responsible_label_re().is_match(text) {
        Some(ReplyField::Responsible)
    } else if completion_label_re().is_match(text) {
        Some(ReplyField::CompletionTime)
    } else {
        None
    }
}

fn confirm_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^1\.\s*确认意见").expect("invalid confirm label regex"))
}

fn plan_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^2\.\s*改进计划").expect("invalid plan label regex"))
}

fn responsible_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^3\.\s*整改部门及负责人").expect("invalid responsible label regex"))
}

fn completion_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^4\.\s*整改完成时间").expect("invalid completion label regex"))
}
