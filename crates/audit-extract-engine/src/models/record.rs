/// One extracted audit finding, finalized at flush time.
///
/// `area` and `category` are carried forward from the enclosing outline
/// headings; `finding` is always non-empty for a record that was emitted.
/// All free-text fields are newline-joined, trimmed strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FindingRecord {
    /// Project-area title (level-1 heading).
    pub area: String,
    /// Risk-category title (level-2 heading).
    pub category: String,
    /// Finding title (level-3 heading).
    pub finding: String,
    /// Free text collected between the finding heading and the risk marker.
    pub background: String,
    /// Risk description text.
    pub risk: String,
    /// Improvement recommendation text.
    pub suggestion: String,
    /// Management response, split by its labeled sub-fields.
    pub reply: ManagementReply,
}

/// The labeled parts of a management response.
///
/// Response text seen before any sub-field label lands in `other`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManagementReply {
    /// Confirmation opinion (label `1. 确认意见`).
    pub confirm: String,
    /// Improvement plan (label `2. 改进计划`).
    pub plan: String,
    /// Responsible department and owner (label `3. 整改部门及负责人`).
    pub responsible: String,
    /// Completion date (label `4. 整改完成时间`).
    pub completion_time: String,
    /// Unlabeled response text.
    pub other: String,
}
