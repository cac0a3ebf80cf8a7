//! `{{args.<name>}}` placeholders in tool command templates.

use regex::Regex;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{\s*args\.([^{}]*?)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// A placeholder occurrence in a command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Argument name, trimmed; empty for a bare `{{args.}}`
    pub name: &'a str,
    /// The full `{{...}}` text as written
    pub raw: &'a str,
}

/// All `args` placeholders in order of appearance, repeats included.
pub fn placeholders(command: &str) -> Vec<Placeholder<'_>> {
    placeholder_regex()
        .captures_iter(command)
        .filter_map(|caps| {
            let raw = caps.get(0)?.as_str();
            let name = caps.get(1).map_or("", |m| m.as_str().trim());
            Some(Placeholder { name, raw })
        })
        .collect()
}

/// Distinct argument names referenced by the command, first occurrence order.
pub fn referenced_args(command: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for placeholder in placeholders(command) {
        if !names.contains(&placeholder.name) {
            names.push(placeholder.name);
        }
    }
    names
}
