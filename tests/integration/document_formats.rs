//! Front-matter formats and validation profiles

use crate::integration::test_utils::{hint, yaml, yaml_document, EVALUATION, LINT_TOOL};
use agentdef::document::{parse_document, FrontMatterFormat};
use agentdef::schema::{
    FieldErrorKind, FileKindHint, KeyOrder, RecordKind, ValidationProfile, Validator,
};

#[test]
fn toml_front_matter_flags_type_order_as_unverifiable() {
    let text = "+++\ntype = \"rule\"\nname = \"no-secrets\"\nseverity = \"mandatory\"\ndescription = \"Never commit secrets\"\n+++\nBody\n";
    let document = parse_document(text).unwrap();
    assert_eq!(document.format, FrontMatterFormat::Toml);
    assert_eq!(document.front_matter.key_order(), KeyOrder::Unknown);

    let validation = Validator::new().validate(&document.front_matter, FileKindHint::Unknown);
    assert!(validation.is_valid());
    assert_eq!(validation.warnings.len(), 1);
    assert_eq!(validation.warnings[0].path, "type");
    assert!(validation.warnings[0].reason.contains("not verified"));
}

#[test]
fn toml_tool_with_nested_args_validates() {
    let text = "+++\ntype = \"tool\"\nname = \"lint\"\ndescription = \"Lints code\"\ncommand = \"eslint {{args.path}}\"\nruntime = \"node\"\nconfirmation = \"never\"\n\n[args.path]\ntype = \"string\"\ndescription = \"target\"\n+++\n";
    let document = parse_document(text).unwrap();
    let validation = Validator::new().validate(&document.front_matter, FileKindHint::Unknown);
    assert!(validation.is_valid(), "{:?}", validation.errors());
}

#[test]
fn yaml_type_after_other_keys_warns() {
    let text = yaml_document("name: lint\ntype: tool\ndescription: d\ncommand: eslint\nruntime: node\nconfirmation: never\nargs: {}\n");
    let document = parse_document(&text).unwrap();
    let validation = Validator::new().validate(&document.front_matter, FileKindHint::Unknown);
    assert!(validation.is_valid());
    assert_eq!(validation.warnings.len(), 1);
    assert!(validation.warnings[0].reason.contains("first key"));
}

#[test]
fn yaml_type_first_has_no_warning() {
    let document = parse_document(&yaml_document(LINT_TOOL)).unwrap();
    let validation = Validator::new().validate(&document.front_matter, FileKindHint::Unknown);
    assert!(validation.warnings.is_empty());
    assert_eq!(document.body, "\nBody text.\n");
}

#[test]
fn strict_profile_rejects_low_pass_threshold() {
    let source = EVALUATION.replace("pass_threshold: 90", "pass_threshold: 80");
    let standard = Validator::new().validate(&yaml(&source), hint(RecordKind::Evaluation));
    assert!(standard.is_valid());

    let strict = Validator::new()
        .with_profile(ValidationProfile::Strict)
        .validate(&yaml(&source), hint(RecordKind::Evaluation));
    assert_eq!(strict.errors().len(), 1);
    assert_eq!(strict.errors()[0].kind, FieldErrorKind::RangeViolation);

    let passing = Validator::new()
        .with_profile(ValidationProfile::Strict)
        .validate(&yaml(EVALUATION), hint(RecordKind::Evaluation));
    assert!(passing.is_valid());
}

#[test]
fn json_front_matter_is_order_unknown() {
    let value = serde_json::json!({
        "type": "rule",
        "name": "no-secrets",
        "severity": "guideline",
        "description": "d",
    });
    let raw = agentdef::schema::FrontMatter::from_json(value).unwrap();
    let validation = Validator::new().validate(&raw, FileKindHint::Unknown);
    assert!(validation.is_valid());
    assert_eq!(validation.warnings.len(), 1);
}
