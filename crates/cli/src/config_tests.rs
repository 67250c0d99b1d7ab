#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_parse_minimal_suite() {
    let config: SuiteConfig = toml::from_str(
        r#"
        [[cases]]
        name = "greeting"
        script = "hello.py"
        "#,
    )
    .unwrap();

    assert_eq!(config.name, "");
    assert_eq!(config.cases.len(), 1);
    let case = &config.cases[0];
    assert_eq!(case.name, "greeting");
    assert_eq!(case.script, "hello.py");
    assert!(case.args.is_empty());
    assert!(case.stdin.is_none());
    assert!(case.expect.is_empty());
    assert_eq!(case.exit, ExitExpect::Zero);
    assert!(case.timeout_secs.is_none());
}

#[test]
fn test_parse_full_case() {
    let config: SuiteConfig = toml::from_str(
        r#"
        name = "smoke"
        interpreter = "python3.12"
        timeout_secs = 5

        [[cases]]
        name = "mean"
        script = "lists.py"
        args = ["mean", "1", "2"]
        stdin = "unused\n"
        timeout_secs = 2
        exit = { type = "zero" }
        expect = [
            { type = "float", value = 1.5 },
            { type = "contains", text = "1", case_insensitive = true },
        ]
        "#,
    )
    .unwrap();

    assert_eq!(config.name, "smoke");
    assert_eq!(config.interpreter.as_deref(), Some("python3.12"));
    assert_eq!(config.timeout_secs, Some(5));

    let case = &config.cases[0];
    assert_eq!(case.args, vec!["mean", "1", "2"]);
    assert_eq!(case.stdin.as_deref(), Some("unused\n"));
    assert_eq!(case.timeout_secs, Some(2));
    assert_eq!(case.expect.len(), 2);
}

#[test]
fn test_float_tolerance_defaults() {
    let config: SuiteConfig = toml::from_str(
        r#"
        [[cases]]
        name = "mean"
        script = "lists.py"
        expect = [{ type = "float", value = 3.5 }]
        "#,
    )
    .unwrap();

    match &config.cases[0].expect[0] {
        ExpectSpec::Float { value, tolerance } => {
            assert!((value - 3.5).abs() < f64::EPSILON);
            assert!((tolerance - DEFAULT_FLOAT_TOLERANCE).abs() < f64::EPSILON);
        }
        other => panic!("unexpected spec: {:?}", other),
    }
}

#[test]
fn test_exit_expect_variants() {
    let config: SuiteConfig = toml::from_str(
        r#"
        [[cases]]
        name = "usage"
        script = "lists.py"
        exit = { type = "non_zero" }

        [[cases]]
        name = "specific"
        script = "lists.py"
        exit = { type = "code", code = 3 }
        "#,
    )
    .unwrap();

    assert_eq!(config.cases[0].exit, ExitExpect::NonZero);
    assert_eq!(config.cases[1].exit, ExitExpect::Code { code: 3 });
}

#[test]
fn test_unknown_fields_are_rejected() {
    let err = toml::from_str::<SuiteConfig>(
        r#"
        [[cases]]
        name = "greeting"
        script = "hello.py"
        shell = "bash"
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("shell"), "error was: {}", err);
}

#[test]
fn test_json_suite_parses_too() {
    let config: SuiteConfig = serde_json::from_str(
        r#"{
            "name": "json-suite",
            "cases": [
                {
                    "name": "greeting",
                    "script": "hello.py",
                    "expect": [{ "type": "exact", "text": "Hello, World!" }]
                }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(config.name, "json-suite");
    assert!(matches!(
        config.cases[0].expect[0],
        ExpectSpec::Exact { .. }
    ));
}

#[test]
fn test_case_builders() {
    let case = CaseSpec::new("lists/times", "lists.py")
        .with_args(["times", "1", "2", "3"])
        .with_stdin("ignored\n")
        .expecting(ExpectSpec::Exact {
            text: "3 6 9".to_string(),
        })
        .with_exit(ExitExpect::Zero);

    assert_eq!(case.name, "lists/times");
    assert_eq!(case.args.len(), 4);
    assert_eq!(case.stdin.as_deref(), Some("ignored\n"));
    assert_eq!(case.expect.len(), 1);
    assert_eq!(case.exit, ExitExpect::Zero);
}

#[test]
fn test_config_round_trips_through_toml() {
    let case = CaseSpec::new("greeting", "hello.py").expecting(ExpectSpec::Exact {
        text: "Hello, World!".to_string(),
    });
    let config = SuiteConfig {
        name: "round-trip".to_string(),
        interpreter: None,
        timeout_secs: None,
        cases: vec![case],
    };

    let text = toml::to_string(&config).unwrap();
    let back: SuiteConfig = toml::from_str(&text).unwrap();
    assert_eq!(back.name, "round-trip");
    assert_eq!(back.cases.len(), 1);
    assert_eq!(back.cases[0].script, "hello.py");
}
