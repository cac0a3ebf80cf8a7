//! Schema selection and per-kind validation.

use super::errors::{FieldError, FieldErrorKind, FieldWarning};
use super::fields::{
    expect_string, is_handle, is_slug, is_snake_case, require_pattern, FieldReader, Findings,
};
use super::front_matter::{value_kind, FrontMatter, KeyOrder};
use super::kind::{FileKindHint, RecordKind};
use super::records::{
    meets_strict_threshold, Access, ArgSpec, Evaluation, InputSpec, Knowledge, Persona, Record,
    Rule, Tool, Workflow, DEFAULT_RULE_PRIORITY, STRICT_PASS_THRESHOLD,
};
use super::template::referenced_args;
use super::vocab::{
    ArgType, ChunkStrategy, Confirmation, InputType, JudgeModel, Model, RefreshSchedule, Runtime,
    Severity, Visibility, Vocabulary, WorkflowMode,
};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Number, Value};

const PERSONA_FIELDS: &[&str] = &[
    "name",
    "handle",
    "description",
    "model",
    "temperature",
    "color",
    "icon",
    "tools",
    "context_globs",
];
const RULE_FIELDS: &[&str] = &[
    "type",
    "name",
    "globs",
    "priority",
    "trigger",
    "severity",
    "description",
];
const TOOL_FIELDS: &[&str] = &[
    "type",
    "name",
    "description",
    "command",
    "runtime",
    "confirmation",
    "args",
];
const ARG_FIELDS: &[&str] = &["type", "description", "required"];
const WORKFLOW_FIELDS: &[&str] = &[
    "type",
    "name",
    "slug",
    "description",
    "mode",
    "context",
    "on_finish",
    "inputs",
];
const INPUT_FIELDS: &[&str] = &["name", "type", "description", "default", "required"];
const KNOWLEDGE_FIELDS: &[&str] = &["name", "sources", "refresh_schedule", "strategy", "access"];
const EVALUATION_FIELDS: &[&str] = &[
    "name",
    "target_agent",
    "judge_model",
    "pass_threshold",
    "scenarios",
    "rubric",
];

/// Default soft limit on persona display names.
pub const DEFAULT_MAX_DISPLAY_NAME_LEN: usize = 25;

/// Validation strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationProfile {
    #[default]
    Standard,
    /// Evaluations must require a pass threshold of at least 90
    Strict,
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    /// Schema that was applied; `None` when the kind could not be determined
    pub kind: Option<RecordKind>,
    pub result: Result<Record, Vec<FieldError>>,
    pub warnings: Vec<FieldWarning>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    pub fn record(&self) -> Option<&Record> {
        self.result.as_ref().ok()
    }

    pub fn errors(&self) -> &[FieldError] {
        match &self.result {
            Ok(_) => &[],
            Err(errors) => errors,
        }
    }

    pub fn into_result(self) -> Result<Record, Vec<FieldError>> {
        self.result
    }
}

/// Stateless schema validator; safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    profile: ValidationProfile,
    max_display_name_len: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            profile: ValidationProfile::Standard,
            max_display_name_len: DEFAULT_MAX_DISPLAY_NAME_LEN,
        }
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: ValidationProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_max_display_name_len(mut self, len: usize) -> Self {
        self.max_display_name_len = len;
        self
    }

    pub fn profile(&self) -> ValidationProfile {
        self.profile
    }

    /// Validate one front-matter mapping against the schema its `type` field
    /// or location hint selects. Collects every violation in one pass.
    pub fn validate(&self, raw: &FrontMatter, hint: FileKindHint) -> Validation {
        let mut findings = Findings::default();
        let kind = select_kind(raw, hint, &mut findings);

        let record = kind.and_then(|kind| {
            let fields = FieldReader::root(raw.fields());
            match kind {
                RecordKind::Persona => self.persona(&fields, &mut findings).map(Record::Persona),
                RecordKind::Rule => rule(&fields, &mut findings).map(Record::Rule),
                RecordKind::Tool => tool(&fields, &mut findings).map(Record::Tool),
                RecordKind::Workflow => workflow(&fields, &mut findings).map(Record::Workflow),
                RecordKind::Knowledge => knowledge(&fields, &mut findings).map(Record::Knowledge),
                RecordKind::Evaluation => {
                    self.evaluation(&fields, &mut findings).map(Record::Evaluation)
                }
            }
        });

        let result = match record {
            Some(record) if findings.errors.is_empty() => Ok(record),
            _ => Err(findings.errors),
        };

        Validation {
            kind,
            result,
            warnings: findings.warnings,
        }
    }

    fn persona(&self, f: &FieldReader<'_>, findings: &mut Findings) -> Option<Persona> {
        let name = f.string("name", findings);
        let handle = f.string("handle", findings).and_then(|h| {
            require_pattern(&f.path("handle"), h, is_handle, "'@' followed by a name", findings)
        });
        let description = f.string("description", findings);
        let model = f.vocab::<Model>("model", findings);
        let temperature = f.number_in("temperature", 0.0, 1.0, findings);
        let color = f.string("color", findings);
        let icon = f.string("icon", findings);
        let tools = f.string_list("tools", findings);
        let context_globs = f.string_list("context_globs", findings);

        if let Some(name) = &name {
            let len = name.chars().count();
            if len > self.max_display_name_len {
                findings.warn(
                    f.path("name"),
                    format!(
                        "display name is {} characters; keep it within {}",
                        len, self.max_display_name_len
                    ),
                );
            }
        }

        Some(Persona {
            name: name?,
            handle: handle?,
            description: description?,
            model: model?,
            temperature: temperature?,
            color: color?,
            icon: icon?,
            tools: tools?,
            context_globs: context_globs?,
            extra: f.extra(PERSONA_FIELDS),
        })
    }

    fn evaluation(&self, f: &FieldReader<'_>, findings: &mut Findings) -> Option<Evaluation> {
        let name = f.string("name", findings);
        let target_agent = f.string("target_agent", findings).and_then(|h| {
            require_pattern(
                &f.path("target_agent"),
                h,
                is_handle,
                "an agent handle ('@' followed by a name)",
                findings,
            )
        });
        let judge_model = f.vocab::<JudgeModel>("judge_model", findings);
        let pass_threshold = f
            .number_in("pass_threshold", 0.0, 100.0, findings)
            .and_then(|threshold| {
                let strict = self.profile == ValidationProfile::Strict;
                if strict && !threshold.as_f64().is_some_and(meets_strict_threshold) {
                    findings.error(FieldError::new(
                        f.path("pass_threshold"),
                        FieldErrorKind::RangeViolation,
                        format!(
                            "strict profile requires at least {}, got {}",
                            STRICT_PASS_THRESHOLD, threshold
                        ),
                    ));
                    None
                } else {
                    Some(threshold)
                }
            });
        let scenarios = f.string_list("scenarios", findings);
        let rubric = f.string_list("rubric", findings);

        Some(Evaluation {
            name: name?,
            target_agent: target_agent?,
            judge_model: judge_model?,
            pass_threshold: pass_threshold?,
            scenarios: scenarios?,
            rubric: rubric?,
            extra: f.extra(EVALUATION_FIELDS),
        })
    }
}

/// Validate with default options.
pub fn validate(raw: &FrontMatter, hint: FileKindHint) -> Result<Record, Vec<FieldError>> {
    Validator::default().validate(raw, hint).into_result()
}

/// Pick the schema: explicit `type` first, location hint otherwise.
fn select_kind(
    raw: &FrontMatter,
    hint: FileKindHint,
    findings: &mut Findings,
) -> Option<RecordKind> {
    let tag = match raw.get("type") {
        None => return kind_from_hint(hint, findings),
        Some(Value::String(tag)) => tag,
        Some(other) => {
            findings.error(FieldError::type_mismatch("type", "string", value_kind(other)));
            return None;
        }
    };

    let Some(kind) = RecordKind::from_type_tag(tag) else {
        findings.error(FieldError::enum_violation(
            "type",
            tag,
            &["rule", "tool", "workflow"],
        ));
        return None;
    };

    match raw.key_order() {
        KeyOrder::Preserved => {
            if let Some(first) = raw.first_key().filter(|first| *first != "type") {
                findings.warn(
                    "type",
                    format!("`type` should be the first key (found `{}` first)", first),
                );
            }
        }
        KeyOrder::Unknown => findings.warn(
            "type",
            "source format does not preserve key order; `type`-first rule not verified",
        ),
    }

    if let Some(located) = hint.kind().filter(|located| *located != kind) {
        findings.warn(
            "type",
            format!(
                "`type: {}` does not match the document location ({}/)",
                tag,
                located.dir_name()
            ),
        );
    }

    Some(kind)
}

fn kind_from_hint(hint: FileKindHint, findings: &mut Findings) -> Option<RecordKind> {
    match hint.kind() {
        Some(kind) => match kind.type_tag() {
            None => Some(kind),
            Some(tag) => {
                findings.error(FieldError::new(
                    "type",
                    FieldErrorKind::MissingField,
                    format!(
                        "documents under {}/ must declare `type: {}`",
                        kind.dir_name(),
                        tag
                    ),
                ));
                None
            }
        },
        None => {
            findings.error(FieldError::new(
                "type",
                FieldErrorKind::MissingField,
                "no `type` field and no location hint; cannot determine the record kind",
            ));
            None
        }
    }
}

fn rule(f: &FieldReader<'_>, findings: &mut Findings) -> Option<Rule> {
    let name = f.string("name", findings);
    let globs = f.optional_string_list("globs", findings);
    let priority = f.number_or("priority", Number::from(DEFAULT_RULE_PRIORITY), findings);
    let trigger = f.optional_string_list("trigger", findings);
    let severity = f.vocab::<Severity>("severity", findings);
    let description = f.string("description", findings);

    Some(Rule {
        name: name?,
        globs: globs?,
        priority: priority?,
        trigger: trigger?,
        severity: severity?,
        description: description?,
        extra: f.extra(RULE_FIELDS),
    })
}

fn tool(f: &FieldReader<'_>, findings: &mut Findings) -> Option<Tool> {
    let name = f.string("name", findings).and_then(|name| {
        require_pattern(&f.path("name"), name, is_snake_case, "snake_case", findings)
    });
    let description = f.string("description", findings);
    let command = f.string("command", findings);
    let runtime = f.vocab::<Runtime>("runtime", findings);
    let confirmation = f.vocab::<Confirmation>("confirmation", findings);
    let args_mapping = f.mapping("args", findings);
    let args = args_mapping.and_then(|mapping| arg_specs(f, mapping, findings));

    // Cross-check against declared names even when some specs are malformed.
    if let (Some(command), Some(mapping)) = (&command, args_mapping) {
        for referenced in referenced_args(command) {
            if referenced.is_empty() {
                findings.error(FieldError::new(
                    f.path("command"),
                    FieldErrorKind::DanglingPlaceholder,
                    "placeholder `{{args.}}` does not name an argument",
                ));
            } else if !mapping.contains_key(referenced) {
                findings.error(FieldError::new(
                    f.path("command"),
                    FieldErrorKind::DanglingPlaceholder,
                    format!(
                        "placeholder `{{{{args.{}}}}}` references undeclared argument '{}'",
                        referenced, referenced
                    ),
                ));
            }
        }
    }

    Some(Tool {
        name: name?,
        description: description?,
        command: command?,
        runtime: runtime?,
        confirmation: confirmation?,
        args: args?,
        extra: f.extra(TOOL_FIELDS),
    })
}

fn arg_specs(
    f: &FieldReader<'_>,
    mapping: &Mapping,
    findings: &mut Findings,
) -> Option<Vec<(String, ArgSpec)>> {
    let args_path = f.path("args");
    let mut specs = Vec::with_capacity(mapping.len());
    let mut valid = true;

    for (key, value) in mapping {
        let Some(arg_name) = key.as_str() else {
            findings.error(FieldError::type_mismatch(
                args_path.as_str(),
                "string argument names",
                value_kind(key),
            ));
            valid = false;
            continue;
        };
        let path = format!("{}.{}", args_path, arg_name);
        let Value::Mapping(spec) = value else {
            findings.error(FieldError::type_mismatch(path, "mapping", value_kind(value)));
            valid = false;
            continue;
        };

        let spec_fields = FieldReader::nested(spec, path);
        let arg_type = spec_fields.vocab::<ArgType>("type", findings);
        let description = spec_fields.string("description", findings);
        let required = spec_fields.bool_or("required", true, findings);

        match (arg_type, description, required) {
            (Some(arg_type), Some(description), Some(required)) => specs.push((
                arg_name.to_string(),
                ArgSpec {
                    arg_type,
                    description,
                    required,
                    extra: spec_fields.extra(ARG_FIELDS),
                },
            )),
            _ => valid = false,
        }
    }

    valid.then_some(specs)
}

fn workflow(f: &FieldReader<'_>, findings: &mut Findings) -> Option<Workflow> {
    let name = f.string("name", findings);
    let slug = f.string("slug", findings).and_then(|slug| {
        require_pattern(&f.path("slug"), slug, is_slug, "'/' followed by a command name", findings)
    });
    let description = f.string("description", findings);
    let mode = f.vocab::<WorkflowMode>("mode", findings);
    let context = f.string_list("context", findings);
    let on_finish = f.string("on_finish", findings);
    let inputs = f
        .sequence("inputs", findings)
        .and_then(|items| input_specs(f, items, findings));

    Some(Workflow {
        name: name?,
        slug: slug?,
        description: description?,
        mode: mode?,
        context: context?,
        on_finish: on_finish?,
        inputs: inputs?,
        extra: f.extra(WORKFLOW_FIELDS),
    })
}

fn input_specs(
    f: &FieldReader<'_>,
    items: &[Value],
    findings: &mut Findings,
) -> Option<Vec<InputSpec>> {
    let inputs_path = f.path("inputs");
    let mut specs = Vec::with_capacity(items.len());
    let mut valid = true;

    for (index, item) in items.iter().enumerate() {
        let path = format!("{}[{}]", inputs_path, index);
        let Value::Mapping(spec) = item else {
            findings.error(FieldError::type_mismatch(path, "mapping", value_kind(item)));
            valid = false;
            continue;
        };

        let input = FieldReader::nested(spec, path);
        let name = input.string("name", findings);
        let input_type = input.vocab::<InputType>("type", findings);
        let description = input.optional_string("description", findings);
        let default = input.get("default").cloned();
        let required = input.bool_or("required", true, findings);

        match (name, input_type, description, required) {
            (Some(name), Some(input_type), Some(description), Some(required)) => {
                specs.push(InputSpec {
                    name,
                    input_type,
                    description,
                    default,
                    required,
                    extra: input.extra(INPUT_FIELDS),
                })
            }
            _ => valid = false,
        }
    }

    valid.then_some(specs)
}

fn knowledge(f: &FieldReader<'_>, findings: &mut Findings) -> Option<Knowledge> {
    let name = f.string("name", findings);
    let sources = f.string_list("sources", findings);
    let refresh_schedule = f.vocab::<RefreshSchedule>("refresh_schedule", findings);
    let strategy = f.vocab::<ChunkStrategy>("strategy", findings);
    let access = f
        .required("access", findings)
        .and_then(|value| parse_access(&f.path("access"), value, findings));

    if let Some(name) = name.as_deref().filter(|name| !is_snake_case(name)) {
        findings.warn(
            f.path("name"),
            format!("knowledge source names are expected in snake_case (found '{}')", name),
        );
    }

    Some(Knowledge {
        name: name?,
        sources: sources?,
        refresh_schedule: refresh_schedule?,
        strategy: strategy?,
        access: access?,
        extra: f.extra(KNOWLEDGE_FIELDS),
    })
}

fn parse_access(path: &str, value: &Value, findings: &mut Findings) -> Option<Access> {
    match value {
        Value::String(level) => {
            let parsed = Visibility::parse(level);
            if parsed.is_none() {
                findings.error(FieldError::new(
                    path,
                    FieldErrorKind::EnumViolation,
                    format!(
                        "'{}' is not one of: {}, or a list of agent handles",
                        level,
                        Visibility::VALUES.join(", ")
                    ),
                ));
            }
            parsed.map(Access::Level)
        }
        Value::Sequence(items) => {
            let mut handles = Vec::with_capacity(items.len());
            let mut valid = true;
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, index);
                let handle = expect_string(&item_path, item, findings).and_then(|h| {
                    require_pattern(
                        &item_path,
                        h,
                        is_handle,
                        "an agent handle ('@' followed by a name)",
                        findings,
                    )
                });
                match handle {
                    Some(handle) => handles.push(handle),
                    None => valid = false,
                }
            }
            valid.then_some(Access::Handles(handles))
        }
        other => {
            findings.error(FieldError::type_mismatch(
                path,
                "'public', 'private' or a sequence of agent handles",
                value_kind(other),
            ));
            None
        }
    }
}
