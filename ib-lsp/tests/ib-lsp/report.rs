use expect_test::expect;
use ib_lsp::report;

#[test]
fn parse_array() {
    let json = r#"[
        {
            "uri": "file:///src/Module.bsl",
            "diagnostics": [
                {
                    "range": { "start": { "line": 5, "character": 2 }, "end": { "line": 5, "character": 10 } },
                    "severity": 2,
                    "code": "Typo",
                    "source": "bsl-language-server",
                    "message": "typo in identifier"
                },
                {
                    "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 4 } },
                    "severity": 1,
                    "code": 1001,
                    "source": "acc",
                    "message": "standard violation",
                    "relatedInformation": [
                        {
                            "location": {
                                "uri": "file:///src/CommonModule.bsl",
                                "range": { "start": { "line": 2, "character": 0 }, "end": { "line": 2, "character": 4 } }
                            },
                            "message": "declared here"
                        }
                    ]
                }
            ]
        },
        { "uri": "untitled:Untitled-1", "diagnostics": [] },
        { "uri": "file:///src/Empty.bsl", "diagnostics": [] }
    ]"#;

    let reports = report::parse(json).unwrap();
    let rendered = reports
        .iter()
        .map(|report| {
            let mut out = format!("{}\n", report.path.display());
            for diag in &report.diagnostics {
                out.push_str(&format!(
                    "  {} {:?} {} {:?} related={}\n",
                    diag.severity,
                    diag.rule_id(),
                    diag.range,
                    diag.source,
                    diag.related_information.len()
                ));
            }
            out
        })
        .collect::<String>();

    expect![[r#"
        /src/Module.bsl
          warning "Typo" start(5, 2), end(5, 10) Some("bsl-language-server") related=0
          error "1001" start(0, 0), end(0, 4) Some("acc") related=1
        /src/Empty.bsl
    "#]]
    .assert_eq(&rendered);
}

#[test]
fn parse_single() {
    let json = r#"{ "uri": "file:///src/Module.bsl", "diagnostics": [], "version": 3 }"#;
    let reports = report::parse(json).unwrap();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].diagnostics.is_empty());
}

#[test]
fn parse_invalid() {
    let err = report::parse(r#"{ "diagnostics": [] }"#).unwrap_err();
    assert_eq!(err.to_string(), "expected publishDiagnostics params or an array of them");
    assert!(report::parse("not json").is_err());
}

#[test]
fn read() {
    let project = ib_test::TempProject::new();
    let path = project.write(
        "report.json",
        r#"{ "uri": "file:///src/Module.bsl", "diagnostics": [
            { "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 0, "character": 1 } }, "message": "m" }
        ] }"#,
    );
    let reports = report::read(&path).unwrap();
    assert_eq!(reports[0].diagnostics.len(), 1);

    let err = report::read(project.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().starts_with("failed to read diagnostics report"));
}
