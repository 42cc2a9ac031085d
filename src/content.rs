//! Content items and the generator contexts exposing them
//!
//! A generator groups the rendered items of one kind (articles or pages)
//! into named collections, mirroring what a static site builder hands to
//! its plugins once rendering is finished.

use std::path::{Path, PathBuf};

/// An article or page with its rendered HTML body
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentItem {
    pub source_path: Option<PathBuf>,
    pub rendered_body: String,
}

impl ContentItem {
    pub fn new(rendered_body: impl Into<String>) -> Self {
        ContentItem {
            source_path: None,
            rendered_body: rendered_body.into(),
        }
    }

    pub fn with_source_path(mut self, path: impl AsRef<Path>) -> Self {
        self.source_path = Some(path.as_ref().to_path_buf());
        self
    }
}

/// Access to the named item collections of a generator
pub trait Generator {
    /// Collections in processing order, paired with their names
    fn collections_mut(&mut self) -> Vec<(&'static str, &mut Vec<ContentItem>)>;
}

/// Articles handed over at the "article generator finalized" point
#[derive(Clone, Debug, Default)]
pub struct ArticlesGenerator {
    pub articles: Vec<ContentItem>,
    pub translations: Vec<ContentItem>,
    pub hidden_articles: Vec<ContentItem>,
    pub hidden_translations: Vec<ContentItem>,
    pub drafts: Vec<ContentItem>,
    pub drafts_translations: Vec<ContentItem>,
}

impl Generator for ArticlesGenerator {
    fn collections_mut(&mut self) -> Vec<(&'static str, &mut Vec<ContentItem>)> {
        vec![
            ("articles", &mut self.articles),
            ("translations", &mut self.translations),
            ("hidden_articles", &mut self.hidden_articles),
            ("hidden_translations", &mut self.hidden_translations),
            ("drafts", &mut self.drafts),
            ("drafts_translations", &mut self.drafts_translations),
        ]
    }
}

/// Pages handed over at the "page generator finalized" point
#[derive(Clone, Debug, Default)]
pub struct PagesGenerator {
    pub pages: Vec<ContentItem>,
    pub translations: Vec<ContentItem>,
    pub hidden_pages: Vec<ContentItem>,
    pub hidden_translations: Vec<ContentItem>,
    pub draft_pages: Vec<ContentItem>,
    pub draft_translations: Vec<ContentItem>,
}

impl Generator for PagesGenerator {
    fn collections_mut(&mut self) -> Vec<(&'static str, &mut Vec<ContentItem>)> {
        vec![
            ("pages", &mut self.pages),
            ("translations", &mut self.translations),
            ("hidden_pages", &mut self.hidden_pages),
            ("hidden_translations", &mut self.hidden_translations),
            ("draft_pages", &mut self.draft_pages),
            ("draft_translations", &mut self.draft_translations),
        ]
    }
}
