//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use domain_annotations::hooks::{ArticlesHook, PagesHook};
    use domain_annotations::{
        register, ArticlesGenerator, ContentItem, HookRegistry, PagesGenerator, Signals,
    };

    #[derive(Default)]
    struct RecordingRegistry {
        articles: Vec<ArticlesHook>,
        pages: Vec<PagesHook>,
    }

    impl HookRegistry for RecordingRegistry {
        fn connect_article_generator_finalized(&mut self, hook: ArticlesHook) {
            self.articles.push(hook);
        }

        fn connect_page_generator_finalized(&mut self, hook: PagesHook) {
            self.pages.push(hook);
        }
    }

    #[test]
    fn one_hook_per_lifecycle_point() {
        let mut registry = RecordingRegistry::default();

        register(&mut registry);

        assert_eq!(registry.articles.len(), 1);
        assert_eq!(registry.pages.len(), 1);
    }

    #[test]
    fn registered_hooks_annotate() {
        let mut registry = RecordingRegistry::default();
        register(&mut registry);

        let mut articles = ArticlesGenerator {
            articles: vec![ContentItem::new(r#"<a href="https://example.com">site</a>"#)],
            ..Default::default()
        };
        (registry.articles[0])(&mut articles);

        assert_eq!(
            articles.articles[0].rendered_body,
            r#"<a href="https://example.com">site</a> <span class="domain">(example.com)</span>"#
        );
    }

    #[test]
    fn registering_twice_annotates_twice() {
        let mut signals = Signals::new();
        register(&mut signals);
        register(&mut signals);

        let mut pages = PagesGenerator {
            hidden_pages: vec![ContentItem::new(r#"<a href="https://example.com">site</a>"#)],
            ..Default::default()
        };
        signals.send_page_generator_finalized(&mut pages);

        assert_eq!(
            pages.hidden_pages[0].rendered_body,
            r#"<a href="https://example.com">site</a> <span class="domain">(example.com)</span> <span class="domain">(example.com)</span>"#
        );
    }
}
