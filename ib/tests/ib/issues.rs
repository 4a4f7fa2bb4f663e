use expect_test::expect;
use ib::{IssuesLoader, Routing, Settings, CREATE_EXTERNAL_ISSUES_KEY};
use ib_core::{DiagnosticSeverity, IssueRecord, MapSettings, RuleType, Severity};

use crate::{cx, diagnostic, related, COMMON, MODULE};

#[test]
fn bound_issue() {
    let cx = cx();
    let loader = IssuesLoader::new(&cx);
    let diag = diagnostic(((5, 2), (5, 10)), DiagnosticSeverity::Warning, "LineLength");
    loader.create_issue(cx.file(MODULE), &diag);

    let issues = cx.issues();
    assert_eq!(issues.len(), 1);
    let IssueRecord::Rule(issue) = &issues[0] else { panic!("expected a rule issue") };
    assert_eq!(issue.rule_key.to_string(), "bsl-language-server:LineLength");
    assert_eq!(issue.primary.range().to_string(), "6:2..6:10");
    assert_eq!(issue.primary.get_message(), Some("LineLength message"));
    assert!(issue.secondary.is_empty());
}

#[test]
fn external_issue() {
    let cx = cx();
    let loader = IssuesLoader::new(&cx);
    let diag = diagnostic(((5, 2), (5, 10)), DiagnosticSeverity::Warning, "UnknownRule");
    loader.create_issue(cx.file(MODULE), &diag);

    let issues = cx.issues();
    let IssueRecord::External(issue) = &issues[0] else { panic!("expected an external issue") };
    assert_eq!(issue.engine_id, "bsl-language-server");
    assert_eq!(issue.rule_id, "UnknownRule");
    assert_eq!(issue.severity, Severity::Major);
    assert_eq!(issue.rule_type, RuleType::CodeSmell);
}

#[test]
fn start_line_past_end_of_file() {
    let cx = cx();
    let loader = IssuesLoader::new(&cx);
    let diag = diagnostic(((999999, 0), (999999, 5)), DiagnosticSeverity::Error, "LineLength");
    loader.create_issue(cx.file(MODULE), &diag);

    let issues = cx.issues();
    let range = issues[0].primary().range();
    assert!(range.is_within_lines(50));
    cx.assert_issues(expect![[r#"
        rule bsl-language-server:LineLength at /project/src/Module.bsl 50:0..50:26 "LineLength message"
    "#]]);
}

#[test]
fn related_locations() {
    let cx = cx();
    let loader = IssuesLoader::new(&cx);
    let diag = diagnostic(((5, 2), (5, 10)), DiagnosticSeverity::Hint, "1001")
        .with_source("acc")
        .with_related(related(MODULE, ((0, 4), (0, 12)), "first use"))
        .with_related(related(COMMON, ((2, 0), (2, 6)), "declaration"))
        .with_related(related("/project/src/Missing.bsl", ((0, 0), (0, 1)), "gone"))
        .with_related(related(COMMON, ((40, 0), (40, 1)), "stale"));
    loader.create_issue(cx.file(MODULE), &diag);

    cx.assert_issues(expect![[r#"
        rule acc-rules:1001 at /project/src/Module.bsl 6:2..6:10 "1001 message"
          related /project/src/Module.bsl 1:4..1:12 "first use"
          related /project/src/CommonModule.bsl 3:0..3:6 "declaration"
          related /project/src/CommonModule.bsl 5:0..5:9 "stale"
    "#]]);
}

#[test]
fn unresolvable_related_file_keeps_issue() {
    let cx = cx();
    let loader = IssuesLoader::new(&cx);
    let diag = diagnostic(((1, 0), (1, 4)), DiagnosticSeverity::Information, "UnknownRule")
        .with_related(related("/elsewhere/Module.bsl", ((1, 0), (1, 4)), "elsewhere"));
    loader.create_issue(cx.file(MODULE), &diag);

    let issues = cx.issues();
    assert_eq!(issues.len(), 1);
    assert!(issues[0].secondary().is_empty());
    assert_eq!(issues[0].primary().range().to_string(), "2:0..2:4");
}

#[test]
fn secondary_engine_opt_out() {
    let mut cx = cx();
    cx.set(CREATE_EXTERNAL_ISSUES_KEY, false);
    let loader = IssuesLoader::new(&cx);
    let file = cx.file(MODULE);

    let unknown =
        diagnostic(((0, 0), (0, 1)), DiagnosticSeverity::Error, "2002").with_source("acc");
    assert_eq!(loader.create_issue(file, &unknown), Routing::Discarded);
    // the primary engine is unaffected by the flag
    let primary = diagnostic(((0, 0), (0, 1)), DiagnosticSeverity::Error, "2002");
    assert!(matches!(loader.create_issue(file, &primary), Routing::External { .. }));

    cx.assert_issues(expect![[r#"
        external bsl-language-server:2002 CRITICAL BUG at /project/src/Module.bsl 1:0..1:1 "2002 message"
    "#]]);
}

#[test]
fn settings_from_json() {
    let json = format!(r#"{{ "{CREATE_EXTERNAL_ISSUES_KEY}": false }}"#);
    let settings = MapSettings::from_json(&json).unwrap();
    assert_eq!(Settings::from_config(&settings), Settings { create_external_issues: false });
    assert_eq!(Settings::from_config(&MapSettings::new()), Settings::default());
    assert!(Settings::default().create_external_issues);
}
