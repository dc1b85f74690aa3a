//! # frontmatter: metadata and body extraction for one Markdown document
//!
//! A document may open with a block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: My Post
//! description: short blurb
//! published: true
//! tags: a, b, c
//! ---
//!
//! Markdown body content starts here.
//! ```
//!
//! The block is a flat list of `key: value` lines, not YAML. [`FrontMatterParser`] finds
//! the block once, scans it once into a key/value map, and exposes one accessor per known
//! field. Every accessor is total: a missing block or key yields the field's default and a
//! diagnostic. Only [`FrontMatterParser::data`] can fail, when `title`, `description` or
//! the body is missing.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::contract::ArticleData;
use crate::decode::percent_decode;
use crate::diagnostics::{DiagnosticSink, Severity, TracingSink};

const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const COVER_IMAGE: &str = "cover_image";
const SERIES: &str = "series";
const CANONICAL_URL: &str = "canonical_url";
const TAGS: &str = "tags";
const PUBLISHED: &str = "published";

/// Leftover of the delimiters once the block content is cut out.
const DELIMITER_ARTIFACT: &str = "---\n\n";
const DELIMITER: &str = "---";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `title`, `description` or the body is missing or empty.
    #[error("Can't parse meta-data in {document}")]
    MissingMetadata { document: String },
}

fn block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Non-greedy: the first `---` after the opening line closes the block.
    // `\s` does not cover U+FEFF, so a leading byte order mark is allowed explicitly.
    PATTERN.get_or_init(|| {
        Regex::new(r"\A[\s\u{FEFF}]*---\n((?s:.*?))\n---")
            .expect("front matter pattern must compile")
    })
}

fn has_content(body: &str) -> bool {
    !body.is_empty() && body.trim_end_matches('\n') != DELIMITER
}

/// The captured block: its exact text and the fields scanned out of it.
#[derive(Debug)]
struct Block {
    raw: String,
    fields: HashMap<String, String>,
}

impl Block {
    fn scan(raw: &str) -> Self {
        let mut fields = HashMap::new();
        for line in raw.split(['\n', '\r', '\u{2028}', '\u{2029}']) {
            let line = line.trim_start_matches([' ', '\t']);
            if let Some((key, value)) = line.split_once(':') {
                fields
                    .entry(key.to_string())
                    .or_insert_with(|| value.trim_matches([' ', '\t']).to_string());
            }
        }
        Block {
            raw: raw.to_string(),
            fields,
        }
    }
}

/// Reads front matter fields and the body out of one document.
///
/// Built once per document and never mutated. Diagnostics go to the sink `S`; calling an
/// accessor twice returns the same value and emits its diagnostic twice.
#[derive(Debug)]
pub struct FrontMatterParser<S = TracingSink> {
    markdown: String,
    display_name: String,
    block: Option<Block>,
    sink: S,
}

impl FrontMatterParser<TracingSink> {
    /// Parser that reports diagnostics through `tracing`.
    pub fn new(markdown: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::with_sink(markdown, display_name, TracingSink)
    }
}

impl<S: DiagnosticSink> FrontMatterParser<S> {
    pub fn with_sink(
        markdown: impl Into<String>,
        display_name: impl Into<String>,
        sink: S,
    ) -> Self {
        let markdown = markdown.into();
        let display_name = display_name.into();

        let block = block_pattern()
            .captures(&markdown)
            .and_then(|caps| caps.get(1))
            .map(|m| Block::scan(m.as_str()));

        if markdown.is_empty() {
            sink.record(Severity::Info, &format!("{display_name} is empty"));
        } else if block.is_none() {
            sink.record(
                Severity::Info,
                &format!("front matter not found in {display_name}"),
            );
        }

        Self {
            markdown,
            display_name,
            block,
            sink,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn has_front_matter(&self) -> bool {
        self.block.is_some()
    }

    fn raw_field(&self, key: &str) -> Option<&str> {
        self.block
            .as_ref()
            .and_then(|block| block.fields.get(key))
            .map(String::as_str)
    }

    /// Undecodable values are kept verbatim and reported.
    fn decode_field(&self, key: &str, raw: &str) -> String {
        match percent_decode(raw) {
            Ok(decoded) => decoded,
            Err(e) => {
                self.sink.record(
                    Severity::Warning,
                    &format!(
                        "Keeping raw '{key}:' value in {}: {e}",
                        self.display_name
                    ),
                );
                raw.to_string()
            }
        }
    }

    /// Decoded `title`. Required: a missing title is reported as a warning.
    pub fn title(&self) -> Option<String> {
        match self.raw_field(TITLE) {
            Some(raw) => Some(self.decode_field(TITLE, raw)),
            None => {
                self.sink.record(
                    Severity::Warning,
                    &format!("'title:' is required in {}", self.display_name),
                );
                None
            }
        }
    }

    pub fn description(&self) -> Option<String> {
        match self.raw_field(DESCRIPTION) {
            Some(raw) => Some(self.decode_field(DESCRIPTION, raw)),
            None => {
                self.sink.record(
                    Severity::Info,
                    &format!(
                        "Set 'description:' as null default in {}",
                        self.display_name
                    ),
                );
                None
            }
        }
    }

    pub fn cover_image(&self) -> Option<String> {
        match self.raw_field(COVER_IMAGE) {
            Some(raw) => Some(self.decode_field(COVER_IMAGE, raw)),
            None => {
                self.sink.record(
                    Severity::Info,
                    &format!(
                        "Set 'cover_image:' as null default in {}",
                        self.display_name
                    ),
                );
                None
            }
        }
    }

    pub fn series(&self) -> String {
        match self.raw_field(SERIES) {
            Some(raw) => self.decode_field(SERIES, raw),
            None => {
                self.sink.record(
                    Severity::Info,
                    &format!(
                        "Set 'series:' as \"\" (empty) default in {}",
                        self.display_name
                    ),
                );
                String::new()
            }
        }
    }

    pub fn canonical_url(&self) -> String {
        match self.raw_field(CANONICAL_URL) {
            Some(raw) => self.decode_field(CANONICAL_URL, raw),
            None => {
                self.sink.record(
                    Severity::Info,
                    &format!(
                        "Set 'canonical_url:' as \"\" (empty) default in {}",
                        self.display_name
                    ),
                );
                String::new()
            }
        }
    }

    /// Comma separated; each piece is trimmed then decoded, and empty pieces are dropped.
    pub fn tags(&self) -> Vec<String> {
        match self.raw_field(TAGS) {
            Some(raw) => raw
                .split(',')
                .map(|tag| self.decode_field(TAGS, tag.trim()))
                .filter(|tag| !tag.is_empty())
                .collect(),
            None => {
                self.sink.record(
                    Severity::Info,
                    &format!("Set 'tags:' as [] default in {}", self.display_name),
                );
                Vec::new()
            }
        }
    }

    /// `true` only for the literal value `true`.
    pub fn published(&self) -> bool {
        match self.raw_field(PUBLISHED) {
            Some(raw) => raw == "true",
            None => {
                self.sink.record(
                    Severity::Info,
                    &format!("Set \"published: false\" in {}", self.display_name),
                );
                false
            }
        }
    }

    /// The document with the front matter cut out.
    ///
    /// The first occurrence of the block text is removed, then every `---\n\n` left
    /// behind by the delimiters. An empty result, or only a stray closing delimiter,
    /// counts as missing. Whitespace-only remainders are returned as they are.
    pub fn body(&self) -> Option<String> {
        let body = self.block.as_ref().map(|block| {
            self.markdown
                .replacen(&block.raw, "", 1)
                .replace(DELIMITER_ARTIFACT, "")
        });
        match body {
            Some(body) if has_content(&body) => Some(body),
            _ => {
                self.sink.record(
                    Severity::Warning,
                    &format!("Can't parse markdown body in {}", self.display_name),
                );
                None
            }
        }
    }

    /// Assemble the publishable record.
    ///
    /// Fails when `title`, `description` or the body is missing or empty. Optional fields
    /// are only read once the required ones are known to be present.
    pub fn data(&self) -> Result<ArticleData, ParseError> {
        let title = self.title().filter(|t| !t.is_empty());
        let description = self.description().filter(|d| !d.is_empty());
        let body_markdown = self.body();

        match (title, description, body_markdown) {
            (Some(title), Some(description), Some(body_markdown)) => Ok(ArticleData {
                title,
                description,
                body_markdown,
                published: self.published(),
                series: self.series(),
                tags: self.tags(),
                canonical_url: self.canonical_url(),
                cover_image: self.cover_image(),
            }),
            _ => Err(ParseError::MissingMetadata {
                document: self.display_name.clone(),
            }),
        }
    }
}
