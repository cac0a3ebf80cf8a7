//! Validated, strongly typed asset records.
//!
//! Records are built only by the validator and are read-only afterwards.
//! Keys the schema does not declare are kept in `extra`, in source order.

use super::kind::RecordKind;
use super::vocab::{
    ArgType, ChunkStrategy, Confirmation, InputType, JudgeModel, Model, RefreshSchedule, Runtime,
    Severity, Visibility, WorkflowMode,
};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Number, Value};

/// Rule priority above which a rule belongs to the critical-safety tier.
pub const CRITICAL_PRIORITY_THRESHOLD: f64 = 50.0;

/// Pass threshold strict evaluation profiles require.
pub const STRICT_PASS_THRESHOLD: f64 = 90.0;

pub const DEFAULT_RULE_PRIORITY: i64 = 1;

/// Whether a pass threshold satisfies the strict profile.
pub fn meets_strict_threshold(pass_threshold: f64) -> bool {
    pass_threshold >= STRICT_PASS_THRESHOLD
}

// YAML numbers always have a float view.
fn float(number: &Number) -> f64 {
    number.as_f64().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Persona {
    pub name: String,
    pub handle: String,
    pub description: String,
    pub model: Model,
    /// As written in the source (`1` stays an integer)
    pub temperature: Number,
    pub color: String,
    pub icon: String,
    pub tools: Vec<String>,
    pub context_globs: Vec<String>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl Persona {
    pub fn temperature_value(&self) -> f64 {
        float(&self.temperature)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globs: Option<Vec<String>>,
    pub priority: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Vec<String>>,
    pub severity: Severity,
    pub description: String,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Priority band of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    Standard,
    CriticalSafety,
}

impl Rule {
    pub fn priority_value(&self) -> f64 {
        float(&self.priority)
    }

    pub fn tier(&self) -> PriorityTier {
        if self.priority_value() > CRITICAL_PRIORITY_THRESHOLD {
            PriorityTier::CriticalSafety
        } else {
            PriorityTier::Standard
        }
    }

    /// A rule without globs applies to every file.
    pub fn is_global(&self) -> bool {
        self.globs.as_ref().map_or(true, |globs| globs.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgSpec {
    #[serde(rename = "type")]
    pub arg_type: ArgType,
    pub description: String,
    pub required: bool,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub command: String,
    pub runtime: Runtime,
    pub confirmation: Confirmation,
    /// Argument specs in declaration order
    pub args: Vec<(String, ArgSpec)>,
    pub extra: Mapping,
}

impl Tool {
    pub fn arg(&self, name: &str) -> Option<&ArgSpec> {
        self.args
            .iter()
            .find(|(arg_name, _)| arg_name == name)
            .map(|(_, spec)| spec)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    pub required: bool,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workflow {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub mode: WorkflowMode,
    pub context: Vec<String>,
    pub on_finish: String,
    pub inputs: Vec<InputSpec>,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Who may read a knowledge source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Access {
    Level(Visibility),
    Handles(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Knowledge {
    pub name: String,
    pub sources: Vec<String>,
    pub refresh_schedule: RefreshSchedule,
    pub strategy: ChunkStrategy,
    pub access: Access,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub name: String,
    pub target_agent: String,
    pub judge_model: JudgeModel,
    pub pass_threshold: Number,
    pub scenarios: Vec<String>,
    pub rubric: Vec<String>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl Evaluation {
    pub fn pass_threshold_value(&self) -> f64 {
        float(&self.pass_threshold)
    }
}

/// A validated record tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Persona(Persona),
    Rule(Rule),
    Tool(Tool),
    Workflow(Workflow),
    Knowledge(Knowledge),
    Evaluation(Evaluation),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Persona(_) => RecordKind::Persona,
            Record::Rule(_) => RecordKind::Rule,
            Record::Tool(_) => RecordKind::Tool,
            Record::Workflow(_) => RecordKind::Workflow,
            Record::Knowledge(_) => RecordKind::Knowledge,
            Record::Evaluation(_) => RecordKind::Evaluation,
        }
    }

    /// Value of the kind's identity field (handle, slug or name).
    pub fn identity(&self) -> &str {
        match self {
            Record::Persona(p) => &p.handle,
            Record::Rule(r) => &r.name,
            Record::Tool(t) => &t.name,
            Record::Workflow(w) => &w.slug,
            Record::Knowledge(k) => &k.name,
            Record::Evaluation(e) => &e.name,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Persona(p) => &p.name,
            Record::Rule(r) => &r.name,
            Record::Tool(t) => &t.name,
            Record::Workflow(w) => &w.name,
            Record::Knowledge(k) => &k.name,
            Record::Evaluation(e) => &e.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Record::Persona(p) => Some(&p.description),
            Record::Rule(r) => Some(&r.description),
            Record::Tool(t) => Some(&t.description),
            Record::Workflow(w) => Some(&w.description),
            Record::Knowledge(_) | Record::Evaluation(_) => None,
        }
    }

    /// Front-matter mapping of this record: declared fields with defaults
    /// applied, the `type` tag first for tagged kinds, extra keys last.
    pub fn to_mapping(&self) -> Result<Mapping, serde_yaml::Error> {
        let body = match self {
            Record::Persona(p) => serde_yaml::to_value(p)?,
            Record::Rule(r) => serde_yaml::to_value(r)?,
            Record::Tool(t) => tool_value(t)?,
            Record::Workflow(w) => serde_yaml::to_value(w)?,
            Record::Knowledge(k) => serde_yaml::to_value(k)?,
            Record::Evaluation(e) => serde_yaml::to_value(e)?,
        };
        let mut mapping = Mapping::new();
        if let Some(tag) = self.kind().type_tag() {
            mapping.insert(Value::from("type"), Value::from(tag));
        }
        if let Value::Mapping(fields) = body {
            mapping.extend(fields);
        }
        Ok(mapping)
    }
}

/// Tool args are held as ordered pairs; write them back out as a mapping.
fn tool_value(tool: &Tool) -> Result<Value, serde_yaml::Error> {
    let mut args = Mapping::new();
    for (name, spec) in &tool.args {
        args.insert(Value::from(name.as_str()), serde_yaml::to_value(spec)?);
    }
    let mut mapping = Mapping::new();
    mapping.insert("name".into(), tool.name.as_str().into());
    mapping.insert("description".into(), tool.description.as_str().into());
    mapping.insert("command".into(), tool.command.as_str().into());
    mapping.insert("runtime".into(), serde_yaml::to_value(tool.runtime)?);
    mapping.insert("confirmation".into(), serde_yaml::to_value(tool.confirmation)?);
    mapping.insert("args".into(), Value::Mapping(args));
    mapping.extend(tool.extra.clone());
    Ok(Value::Mapping(mapping))
}
