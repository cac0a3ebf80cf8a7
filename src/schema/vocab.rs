//! Closed vocabularies used by enumerated fields.
//!
//! Each enum keeps its exact wire spelling so a validated record serializes
//! back to the same strings the author wrote.

use serde::{Deserialize, Serialize};

/// String-valued enumeration accepted by a schema field.
pub trait Vocabulary: Sized + Copy {
    /// Accepted spellings, in declaration order.
    const VALUES: &'static [&'static str];

    fn parse(value: &str) -> Option<Self>;

    fn as_str(&self) -> &'static str;
}

macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl Vocabulary for $name {
            const VALUES: &'static [&'static str] = &[$($wire),+];

            fn parse(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(Vocabulary::as_str(self))
            }
        }
    };
}

vocabulary! {
    /// Backend model a persona runs on.
    Model {
        Gemini3ProHigh => "gemini-3-pro-high",
        Gemini3ProLow => "gemini-3-pro-low",
        Gemini3Flash => "gemini-3-flash",
        ClaudeSonnet45 => "claude-sonnet-4.5",
        ClaudeSonnet45Thinking => "claude-sonnet-4.5-thinking",
        ClaudeOpus45Thinking => "claude-opus-4.5-thinking",
        GptOss120bMedium => "gpt-oss-120b-medium",
    }
}

vocabulary! {
    /// Model allowed to grade evaluation runs.
    JudgeModel {
        ClaudeOpus45Thinking => "claude-opus-4.5-thinking",
        Gemini3ProHigh => "gemini-3-pro-high",
    }
}

vocabulary! {
    /// How strictly a rule is enforced; `mandatory` forces rejection of violations.
    Severity {
        Mandatory => "mandatory",
        Guideline => "guideline",
        Suggestion => "suggestion",
    }
}

vocabulary! {
    Runtime {
        System => "system",
        Node => "node",
        Python => "python",
        Docker => "docker",
    }
}

vocabulary! {
    /// User permission requirement before a tool runs.
    Confirmation {
        Always => "always",
        Never => "never",
    }
}

vocabulary! {
    ArgType {
        String => "string",
        Number => "number",
        Boolean => "boolean",
    }
}

vocabulary! {
    WorkflowMode {
        Interactive => "interactive",
        Autonomous => "autonomous",
    }
}

vocabulary! {
    InputType {
        Text => "text",
        String => "string",
        Boolean => "boolean",
        FilePath => "file_path",
    }
}

vocabulary! {
    RefreshSchedule {
        Always => "always",
        Daily => "daily",
        Weekly => "weekly",
        Manual => "manual",
    }
}

vocabulary! {
    /// Chunking strategy for knowledge indexing.
    ChunkStrategy {
        Code => "code",
        Prose => "prose",
        Mixed => "mixed",
    }
}

vocabulary! {
    /// Literal visibility levels accepted by `access`.
    Visibility {
        Public => "public",
        Private => "private",
    }
}
