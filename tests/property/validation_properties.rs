//! Property-based tests for validation invariants

use agentdef::schema::{
    validate, FieldErrorKind, FileKindHint, FrontMatter, KeyOrder, Record, RecordKind, Validator,
};
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

fn persona_mapping(handle: &str, temperature: f64) -> FrontMatter {
    let mut fields = Mapping::new();
    fields.insert("name".into(), "Prop".into());
    fields.insert("handle".into(), handle.into());
    fields.insert("description".into(), "Generated persona".into());
    fields.insert("model".into(), "gemini-3-flash".into());
    fields.insert("temperature".into(), Value::from(temperature));
    fields.insert("color".into(), "#000".into());
    fields.insert("icon".into(), "bot".into());
    fields.insert("tools".into(), Value::Sequence(Vec::new()));
    fields.insert("context_globs".into(), Value::Sequence(Vec::new()));
    FrontMatter::new(fields, KeyOrder::Preserved)
}

fn tool_mapping(command: &str, declared: &[String]) -> FrontMatter {
    let mut args = Mapping::new();
    for name in declared {
        let mut spec = Mapping::new();
        spec.insert("type".into(), "string".into());
        spec.insert("description".into(), "generated".into());
        args.insert(name.as_str().into(), Value::Mapping(spec));
    }
    let mut fields = Mapping::new();
    fields.insert("type".into(), "tool".into());
    fields.insert("name".into(), "generated_tool".into());
    fields.insert("description".into(), "Generated tool".into());
    fields.insert("command".into(), command.into());
    fields.insert("runtime".into(), "system".into());
    fields.insert("confirmation".into(), "never".into());
    fields.insert("args".into(), Value::Mapping(args));
    FrontMatter::new(fields, KeyOrder::Preserved)
}

/// Valid personas always have temperature in [0, 1] and an `@` handle
#[test]
fn test_persona_temperature_and_handle_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(-2.0f64..3.0, "@?[a-z]{0,8}"),
            |(temperature, handle)| {
                let raw = persona_mapping(&handle, temperature);
                let result = validate(&raw, FileKindHint::Kind(RecordKind::Persona));

                let temperature_ok = (0.0..=1.0).contains(&temperature);
                let handle_ok = handle.len() > 1 && handle.starts_with('@');

                match result {
                    Ok(Record::Persona(persona)) => {
                        prop_assert!(temperature_ok && handle_ok);
                        prop_assert!((0.0..=1.0).contains(&persona.temperature_value()));
                        prop_assert!(persona.handle.starts_with('@') && persona.handle.len() > 1);
                    }
                    Ok(other) => prop_assert!(false, "unexpected record {:?}", other.kind()),
                    Err(errors) => {
                        let expected = usize::from(!temperature_ok) + usize::from(!handle_ok);
                        prop_assert_eq!(errors.len(), expected);
                        for error in &errors {
                            match error.path.as_str() {
                                "temperature" => {
                                    prop_assert_eq!(error.kind, FieldErrorKind::RangeViolation)
                                }
                                "handle" => {
                                    prop_assert_eq!(error.kind, FieldErrorKind::PatternViolation)
                                }
                                other => prop_assert!(false, "unexpected path {}", other),
                            }
                        }
                    }
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Every referenced arg must be declared; undeclared ones are dangling
#[test]
fn test_placeholder_resolution_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                proptest::collection::vec("[a-z]{1,6}", 0..4),
                proptest::collection::vec("[a-z]{1,6}", 0..4),
            ),
            |(declared, referenced)| {
                let command = referenced
                    .iter()
                    .map(|name| format!("{{{{args.{}}}}}", name))
                    .collect::<Vec<_>>()
                    .join(" ");
                let command = format!("run {}", command);
                let raw = tool_mapping(&command, &declared);

                let mut distinct_missing: Vec<&String> = Vec::new();
                for name in referenced.iter().filter(|r| !declared.contains(r)) {
                    if !distinct_missing.contains(&name) {
                        distinct_missing.push(name);
                    }
                }

                match validate(&raw, FileKindHint::Unknown) {
                    Ok(_) => prop_assert!(distinct_missing.is_empty()),
                    Err(errors) => {
                        prop_assert!(errors
                            .iter()
                            .all(|e| e.kind == FieldErrorKind::DanglingPlaceholder));
                        prop_assert_eq!(errors.len(), distinct_missing.len());
                    }
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Validating the same mapping twice gives the same result
#[test]
fn test_validation_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<f64>(), "[@/a-z]{0,6}"), |(temperature, handle)| {
            let raw = persona_mapping(&handle, temperature);
            let validator = Validator::new();
            let first = validator.validate(&raw, FileKindHint::Kind(RecordKind::Persona));
            let second = validator.validate(&raw, FileKindHint::Kind(RecordKind::Persona));
            prop_assert_eq!(first.errors(), second.errors());
            prop_assert_eq!(first.warnings, second.warnings);
            Ok(())
        })
        .unwrap();
}
