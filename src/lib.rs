#![doc = "devto-sync: front matter extraction and article synchronisation for dev.to."]

//! Markdown articles carry their metadata in a `---` delimited front matter block.
//! [`frontmatter::FrontMatterParser`] turns one document into an
//! [`contract::ArticleData`] record; [`synchronise::synchronise`] runs that over a batch
//! and hands each record to a [`contract::Publisher`].
//!
//! Transport, authentication and command-line handling are left to the caller.

pub mod config;
pub mod contract;
pub mod decode;
pub mod diagnostics;
pub mod documents;
pub mod frontmatter;
pub mod load_config;
pub mod synchronise;

pub use contract::{Article, ArticleData, PublishError, Publisher};
pub use diagnostics::{DiagnosticSink, Severity, TracingSink};
pub use frontmatter::{FrontMatterParser, ParseError};
