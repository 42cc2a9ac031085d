//! Pipeline hooks
//!
//! Wires the annotator into the two finalization points of a site build:
//! once all articles are rendered and once all pages are rendered.

use crate::annotator::annotate;
use crate::content::{ArticlesGenerator, ContentItem, Generator, PagesGenerator};

pub type ArticlesHook = fn(&mut ArticlesGenerator);
pub type PagesHook = fn(&mut PagesGenerator);

/// Lifecycle points a plugin can attach to
pub trait HookRegistry {
    fn connect_article_generator_finalized(&mut self, hook: ArticlesHook);
    fn connect_page_generator_finalized(&mut self, hook: PagesHook);
}

/// Replaces every item's body with `annotate(body)`, in order
pub fn process_collection<F>(items: &mut [ContentItem], annotate: F)
where
    F: Fn(&str) -> String,
{
    for item in items.iter_mut() {
        item.rendered_body = annotate(&item.rendered_body);
    }
}

fn process_generator<G: Generator>(generator: &mut G) {
    for (name, items) in generator.collections_mut() {
        if items.is_empty() {
            continue;
        }
        tracing::debug!("Annotating {} item(s) in {}", items.len(), name);
        process_collection(items, annotate);
    }
}

/// Processes all articles
pub fn process_articles(generator: &mut ArticlesGenerator) {
    process_generator(generator);
}

/// Processes all pages
pub fn process_pages(generator: &mut PagesGenerator) {
    process_generator(generator);
}

/// Registers the plugin with the host pipeline
pub fn register<R: HookRegistry + ?Sized>(registry: &mut R) {
    registry.connect_article_generator_finalized(process_articles);
    registry.connect_page_generator_finalized(process_pages);
}

/// Minimal in-process host: keeps connected hooks and fires them on demand
#[derive(Default)]
pub struct Signals {
    article_generator_finalized: Vec<ArticlesHook>,
    page_generator_finalized: Vec<PagesHook>,
}

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every hook connected to "article generator finalized", in connection order
    pub fn send_article_generator_finalized(&self, generator: &mut ArticlesGenerator) {
        for hook in &self.article_generator_finalized {
            hook(generator);
        }
    }

    /// Runs every hook connected to "page generator finalized", in connection order
    pub fn send_page_generator_finalized(&self, generator: &mut PagesGenerator) {
        for hook in &self.page_generator_finalized {
            hook(generator);
        }
    }

    #[cfg(test)]
    fn receiver_count(&self) -> (usize, usize) {
        (
            self.article_generator_finalized.len(),
            self.page_generator_finalized.len(),
        )
    }
}

impl HookRegistry for Signals {
    fn connect_article_generator_finalized(&mut self, hook: ArticlesHook) {
        self.article_generator_finalized.push(hook);
    }

    fn connect_page_generator_finalized(&mut self, hook: PagesHook) {
        self.page_generator_finalized.push(hook);
    }
}
