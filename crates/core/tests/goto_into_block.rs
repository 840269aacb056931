use gotolint_core::analysis::Analyzer;
use gotolint_core::model::{Finding, Severity};

fn findings_for(source: &str) -> Vec<Finding> {
    let analyzer = Analyzer::new().unwrap();
    analyzer.analyze_source(None, source).unwrap()
}

#[test]
fn no_labels_means_no_findings() {
    let source = "int main(void) { int x = 0; return x; }";
    assert!(findings_for(source).is_empty());
}

#[test]
fn goto_without_any_label_is_accepted() {
    // Undefined target: conservatively not a violation.
    let source = "void f(void) { goto FOO; }";
    assert!(findings_for(source).is_empty());
}

#[test]
fn same_block_jump_is_legal() {
    let source = "void f(void) { FOO: ; goto FOO; }";
    assert!(findings_for(source).is_empty());
}

#[test]
fn jump_into_nested_block_is_flagged() {
    let source = "void f(void) { { FOO: ; } goto FOO; }";
    let findings = findings_for(source);
    assert_eq!(findings.len(), 1);

    let finding = &findings[0];
    assert_eq!(finding.rule, "goto-into-block");
    assert_eq!(finding.severity, Severity::Warning);
    assert_eq!(finding.description, "Do not enter a block via a goto.");
    // Anchored at the goto statement, not the label.
    assert_eq!(finding.range.start_line, 0);
    assert_eq!(finding.range.start_col, source.find("goto").unwrap());
}

#[test]
fn outward_target_from_nested_block_is_legal() {
    let source = "void f(void) { FOO: ; { goto FOO; } }";
    assert!(findings_for(source).is_empty());
}

#[test]
fn undefined_target_with_other_labels_present() {
    let source = "void f(void) { FOO: ; goto BAR; }";
    assert!(findings_for(source).is_empty());
}

#[test]
fn label_in_another_function_is_flagged() {
    let source = "void x(void) { FOO: ; } void y(void) { goto FOO; }";
    let findings = findings_for(source);
    assert_eq!(findings.len(), 1);
    // The anchor sits inside y, after x's definition.
    assert!(findings[0].range.start_col > source.find("void y").unwrap());
}

#[test]
fn duplicate_label_names_accept_the_in_scope_definition() {
    let source = "void x(void) { FOO: ; } void y(void) { FOO: ; goto FOO; }";
    assert!(findings_for(source).is_empty());
}

#[test]
fn label_lookup_is_case_sensitive() {
    // `FOO:` shares the goto's block, but the target is `foo`, which only
    // exists inside the nested block.
    let source = "void f(void) { FOO: ; { foo: ; } goto foo; }";
    assert_eq!(findings_for(source).len(), 1);
}

#[test]
fn loop_bodies_are_blocks() {
    let source = "void f(void) { while (1) { FOO: ; } goto FOO; }";
    assert_eq!(findings_for(source).len(), 1);
}

#[test]
fn comments_between_tokens_are_ignored() {
    let source = "void f(void) { FOO: ; goto /* target */ FOO; }";
    assert!(findings_for(source).is_empty());

    let nested = "void f(void) { { FOO: ; } goto /* target */ FOO; }";
    assert_eq!(findings_for(nested).len(), 1);
}

#[test]
fn multiple_violations_are_all_reported() {
    let source = "void f(void) { { FOO: ; } goto FOO; goto FOO; }";
    let findings = findings_for(source);
    assert_eq!(findings.len(), 2);
    assert!(findings[0].range.start_col < findings[1].range.start_col);
}

#[test]
fn analysis_is_idempotent() {
    let analyzer = Analyzer::new().unwrap();
    let source = "void f(void) { { FOO: ; } goto FOO; goto FOO; }";
    let first = analyzer.analyze_source(None, source).unwrap();
    let second = analyzer.analyze_source(None, source).unwrap();
    assert_eq!(first, second);
}
