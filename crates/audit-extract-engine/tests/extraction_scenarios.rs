use audit_extract_engine::extract_findings;
use pretty_assertions::assert_eq;

fn fixture_lines(name: &str) -> Vec<String> {
    let content = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    content.lines().map(|line| line.to_string()).collect()
}

#[test]
fn full_report_yields_one_record_per_finding() {
    let records = extract_findings(fixture_lines("sample_report"));

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].finding, "OA系统审批流程缺失");
    assert_eq!(records[1].finding, "立项材料归档不全");
    assert_eq!(records[2].finding, "供应商黑名单未及时更新");
}

#[test]
fn preamble_sections_before_the_anchor_are_ignored() {
    let records = extract_findings(fixture_lines("sample_report"));

    // Nothing from the overview or scope sections leaks into any record.
    for record in &records {
        assert!(!record.background.contains("审计概述"));
        assert!(!record.background.contains("2025年1月"));
    }
}

#[test]
fn outline_titles_are_scoped_per_finding() {
    let records = extract_findings(fixture_lines("sample_report"));

    assert_eq!(records[0].area, "项目管理");
    assert_eq!(records[0].category, "需求至立项管理");
    assert_eq!(records[1].area, "项目管理");
    assert_eq!(records[1].category, "需求至立项管理");
    assert_eq!(records[2].area, "采购管理");
    assert_eq!(records[2].category, "供应商准入管理");
}

#[test]
fn labeled_reply_fields_are_separated() {
    let records = extract_findings(fixture_lines("sample_report"));

    let reply = &records[0].reply;
    assert_eq!(reply.confirm, "情况属实，确认该问题。");
    assert_eq!(reply.plan, "2026年一季度完成OA流程改造。");
    assert_eq!(reply.responsible, "信息技术部 李工");
    assert_eq!(reply.completion_time, "2026年3月31日");
    assert_eq!(reply.other, "");
}

#[test]
fn unlabeled_reply_text_lands_in_other() {
    let records = extract_findings(fixture_lines("sample_report"));

    let reply = &records[1].reply;
    assert_eq!(reply.other, "整改安排另行发文。");
    assert_eq!(reply.confirm, "");
}

#[test]
fn table_rows_are_excluded_from_the_finding_text() {
    let records = extract_findings(fixture_lines("sample_report"));

    let second = &records[1];
    assert!(!second.background.contains("项目A"));
    assert!(!second.background.contains("项目B"));
    assert_eq!(second.background, "抽样的十个项目中四个缺少可研报告。");
}

#[test]
fn risk_and_suggestion_sections_are_collected() {
    let records = extract_findings(fixture_lines("sample_report"));

    assert_eq!(records[2].risk, "已淘汰供应商可能再次中标。");
    assert_eq!(records[2].suggestion, "每半年复核一次供应商黑名单。");
}
