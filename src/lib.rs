//! # domain-annotations
//!
//! Marks hyperlinks in rendered HTML with the domain they point to, unless
//! the link text already mentions it.
//!
//! ## Modules
//!
//! - `annotator` - link matching and annotation of an HTML fragment
//! - `content` - content items and the generators grouping them
//! - `hooks` - finalization hooks for a site build pipeline
//! - `core` - file front-end used by the command line tool
//! - `env` - environment configuration
//! - `error` - error types

pub mod annotator;
pub mod content;
pub mod core;
pub mod env;
pub mod error;
pub mod hooks;

// Re-export commonly used items for convenience
pub use annotator::{annotate, LinkMatch, Segment};
pub use content::{ArticlesGenerator, ContentItem, Generator, PagesGenerator};
pub use error::{AnnotationError, Result};
pub use hooks::{
    process_articles, process_collection, process_pages, register, HookRegistry, Signals,
};
