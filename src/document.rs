//! Asset documents: a front-matter block followed by a free-form body.

use crate::error::DocumentError;
use crate::schema::{FrontMatter, KeyOrder};
use serde_yaml::Mapping;

const BOM: char = '\u{feff}';

/// Front-matter syntax, chosen by the opening delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    /// `---`
    Yaml,
    /// `+++`
    Toml,
}

impl FrontMatterFormat {
    fn from_delimiter(line: &str) -> Option<Self> {
        match line {
            "---" => Some(FrontMatterFormat::Yaml),
            "+++" => Some(FrontMatterFormat::Toml),
            _ => None,
        }
    }

    pub fn delimiter(&self) -> &'static str {
        match self {
            FrontMatterFormat::Yaml => "---",
            FrontMatterFormat::Toml => "+++",
        }
    }

    fn key_order(&self) -> KeyOrder {
        match self {
            FrontMatterFormat::Yaml => KeyOrder::Preserved,
            FrontMatterFormat::Toml => KeyOrder::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub format: FrontMatterFormat,
    pub front_matter: FrontMatter,
    /// Everything after the closing delimiter line, verbatim
    pub body: String,
}

/// Split a document into its front matter and body.
pub fn parse_document(text: &str) -> Result<Document, DocumentError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut lines = text.split_inclusive('\n');

    let format = lines
        .next()
        .map(trim_line_end)
        .and_then(FrontMatterFormat::from_delimiter)
        .ok_or(DocumentError::MissingFrontMatter)?;

    let header_start = text.find('\n').map_or(text.len(), |i| i + 1);
    let mut offset = header_start;
    let mut close = None;
    for line in lines {
        if trim_line_end(line) == format.delimiter() {
            close = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }
    let (header_end, body_start) = close.ok_or(DocumentError::Unterminated(format.delimiter()))?;

    let header = &text[header_start..header_end];
    let front_matter = if header.trim().is_empty() {
        FrontMatter::new(Mapping::new(), format.key_order())
    } else {
        match format {
            FrontMatterFormat::Yaml => FrontMatter::from_yaml_str(header)?,
            FrontMatterFormat::Toml => FrontMatter::from_toml_str(header)?,
        }
    };

    Ok(Document {
        format,
        front_matter,
        body: text[body_start..].to_string(),
    })
}

fn trim_line_end(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r', ' ', '\t'])
}
