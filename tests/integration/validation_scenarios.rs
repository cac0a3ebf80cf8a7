//! End-to-end validation scenarios over single front-matter mappings

use crate::integration::test_utils::{
    hint, minimal_records, yaml, EVALUATION, KNOWLEDGE, LINT_TOOL, PERSONA, REVIEWER, RULE,
};
use agentdef::schema::{
    check_uniqueness, validate, FieldErrorKind, FileKindHint, PriorityTier, Record, RecordKind,
    Validator,
};
use serde_yaml::{Number, Value};

#[test]
fn lint_tool_is_valid_without_findings() {
    let validation = Validator::new().validate(&yaml(LINT_TOOL), FileKindHint::Unknown);
    assert!(validation.errors().is_empty());
    assert!(validation.warnings.is_empty());

    let Some(Record::Tool(tool)) = validation.record() else {
        panic!("expected a tool record");
    };
    assert_eq!(tool.name, "lint");
    let path = tool.arg("path").unwrap();
    assert!(path.required);
    assert_eq!(path.description, "target");
}

#[test]
fn architect_persona_reports_handle_and_temperature() {
    let source = "name: architect\nhandle: architect\ndescription: \"...\"\nmodel: gemini-3-pro-high\ntemperature: 1.5\ncolor: \"#fff\"\nicon: x\ntools: []\ncontext_globs: []\n";
    let errors = validate(&yaml(source), hint(RecordKind::Persona)).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].path, "handle");
    assert_eq!(errors[0].kind, FieldErrorKind::PatternViolation);
    assert_eq!(errors[1].path, "temperature");
    assert_eq!(errors[1].kind, FieldErrorKind::RangeViolation);
}

#[test]
fn single_persona_violation_yields_exactly_one_error() {
    let source = PERSONA.replace("temperature: 0.2", "temperature: -0.1");
    let errors = validate(&yaml(&source), hint(RecordKind::Persona)).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, FieldErrorKind::RangeViolation);

    let source = PERSONA.replace("\"@architect\"", "\"@\"");
    let errors = validate(&yaml(&source), hint(RecordKind::Persona)).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, FieldErrorKind::PatternViolation);
}

#[test]
fn minimal_records_round_trip_with_defaults() {
    for (kind, source) in minimal_records() {
        let raw = yaml(source);
        let record = validate(&raw, hint(kind))
            .unwrap_or_else(|errors| panic!("{} should validate: {:?}", kind, errors));
        assert_eq!(record.kind(), kind);

        let mut expected = raw.fields().clone();
        if kind == RecordKind::Rule {
            expected.insert(Value::from("priority"), Value::from(1));
        }
        assert_eq!(record.to_mapping().unwrap(), expected, "round trip of {}", kind);
    }
}

#[test]
fn whole_numbers_are_not_widened_to_floats() {
    let raw = yaml(EVALUATION);
    let record = validate(&raw, hint(RecordKind::Evaluation)).unwrap();
    let mapping = record.to_mapping().unwrap();
    assert_eq!(mapping.get("pass_threshold"), Some(&Value::from(90)));
    assert_eq!(mapping.get("pass_threshold"), raw.get("pass_threshold"));

    let Record::Persona(reviewer) = validate(&yaml(REVIEWER), hint(RecordKind::Persona)).unwrap()
    else {
        panic!("expected a persona");
    };
    assert!(reviewer.temperature.is_i64());
    assert_eq!(reviewer.temperature_value(), 1.0);
}

#[test]
fn fractional_priority_is_numeric() {
    let source = format!("{}priority: 51.5\n", RULE);
    let Record::Rule(rule) = validate(&yaml(&source), FileKindHint::Unknown).unwrap() else {
        panic!("expected a rule");
    };
    assert_eq!(rule.priority, Number::from(51.5));
    assert_eq!(rule.tier(), PriorityTier::CriticalSafety);
}

#[test]
fn rule_priority_defaults_to_one() {
    let Record::Rule(rule) = validate(&yaml(RULE), FileKindHint::Unknown).unwrap() else {
        panic!("expected a rule");
    };
    assert_eq!(rule.priority, Number::from(1));
    assert_eq!(rule.priority_value(), 1.0);
    assert!(rule.is_global());
}

#[test]
fn undeclared_placeholder_is_dangling() {
    let source = "type: tool\nname: deploy\ndescription: Deploys\ncommand: \"deploy {{args.missing}}\"\nruntime: system\nconfirmation: always\nargs: {}\n";
    let errors = validate(&yaml(source), FileKindHint::Unknown).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, FieldErrorKind::DanglingPlaceholder);
    assert!(errors[0].reason.contains("missing"));
}

#[test]
fn validation_is_idempotent() {
    for (kind, source) in minimal_records() {
        let raw = yaml(source);
        let first = Validator::new().validate(&raw, hint(kind));
        let second = Validator::new().validate(&raw, hint(kind));
        assert_eq!(first, second);
    }
}

#[test]
fn duplicate_tool_names_flag_second_occurrence() {
    let run_tests = LINT_TOOL.replace("name: lint", "name: run_tests");
    let first = validate(&yaml(&run_tests), FileKindHint::Unknown).unwrap();
    let second = validate(&yaml(&run_tests), FileKindHint::Unknown).unwrap();

    let duplicates = check_uniqueness(&[first, second]);
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].0, 1);
    assert_eq!(duplicates[0].1.kind, FieldErrorKind::DuplicateIdentifier);
}

#[test]
fn untyped_document_without_location_is_rejected() {
    let errors = validate(&yaml(KNOWLEDGE), FileKindHint::Unknown).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "type");
    assert_eq!(errors[0].kind, FieldErrorKind::MissingField);
}

#[test]
fn every_error_is_collected_in_one_pass() {
    let source = "type: tool\nname: Bad Name\ncommand: 42\nruntime: jvm\nconfirmation: sometimes\nargs: []\n";
    let errors = validate(&yaml(source), FileKindHint::Unknown).unwrap_err();
    let kinds: Vec<(&str, FieldErrorKind)> =
        errors.iter().map(|e| (e.path.as_str(), e.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            ("name", FieldErrorKind::PatternViolation),
            ("description", FieldErrorKind::MissingField),
            ("command", FieldErrorKind::TypeMismatch),
            ("runtime", FieldErrorKind::EnumViolation),
            ("confirmation", FieldErrorKind::EnumViolation),
            ("args", FieldErrorKind::TypeMismatch),
        ]
    );
}
