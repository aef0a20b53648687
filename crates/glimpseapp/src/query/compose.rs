use super::{clamp_limit, Order, QueryDescriptor, ResultType};
use crate::attributes::FilterConfiguration;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Post-processing applied to every composed descriptor.
pub type ComposeHook =
    Arc<dyn Fn(QueryDescriptor, &FilterConfiguration) -> QueryDescriptor + Send + Sync>;

/// Build the descriptor for a configuration, without any hook.
pub fn compose(config: &FilterConfiguration) -> QueryDescriptor {
    let mut descriptor = QueryDescriptor {
        result_type: ResultType::PublishedPosts,
        order: Order::DateDesc,
        limit: clamp_limit(config.limit),
        category_filter: None,
        tag_filter: None,
        id_filter: None,
    };

    if let Some(category) = config.category_id.filter(|id| *id > 0) {
        descriptor.category_filter = Some(category);
    }

    if !config.tag_ids.is_empty() {
        descriptor.tag_filter = Some(config.tag_ids.clone());
    }

    if !config.explicit_post_ids.is_empty() {
        descriptor.id_filter = Some(config.explicit_post_ids.clone());
        descriptor.order = Order::Explicit(config.explicit_post_ids.clone());
        descriptor.category_filter = None;
        descriptor.tag_filter = None;
    }

    descriptor
}

/// The Filter Composer, with an optional post-processing hook.
///
/// Stateless apart from the hook: build one at startup and share it.
#[derive(Clone, Default)]
pub struct FilterComposer {
    hook: Option<ComposeHook>,
}

impl FilterComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a hook that may observe and replace each composed descriptor.
    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(QueryDescriptor, &FilterConfiguration) -> QueryDescriptor + Send + Sync + 'static,
    {
        self.hook = Some(Arc::new(hook));
        self
    }

    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    pub fn compose(&self, config: &FilterConfiguration) -> QueryDescriptor {
        let descriptor = compose(config);
        let descriptor = match &self.hook {
            Some(hook) => hook(descriptor, config),
            None => descriptor,
        };
        debug!(
            limit = descriptor.limit,
            explicit = descriptor.is_explicit(),
            category = ?descriptor.category_filter,
            tags = ?descriptor.tag_filter,
            "composed query"
        );
        descriptor
    }
}

impl fmt::Debug for FilterComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterComposer")
            .field("hook", &self.hook.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn empty_configuration_is_recent_five() {
        let descriptor = compose(&FilterConfiguration::new());
        assert_eq!(descriptor, QueryDescriptor::recent(5));
        assert_eq!(descriptor.order, Order::DateDesc);
        assert!(descriptor.category_filter.is_none());
        assert!(descriptor.tag_filter.is_none());
        assert!(descriptor.id_filter.is_none());
    }

    #[test]
    fn category_only() {
        let config = FilterConfiguration::new().with_category(3).with_limit(5);
        let descriptor = compose(&config);
        assert_eq!(descriptor.category_filter, Some(3));
        assert_eq!(descriptor.tag_filter, None);
        assert_eq!(descriptor.id_filter, None);
        assert_eq!(descriptor.order, Order::DateDesc);
        assert_eq!(descriptor.limit, 5);
    }

    #[test]
    fn category_and_tags_combine() {
        let config = FilterConfiguration::new()
            .with_category(3)
            .with_tags(vec![7, 8]);
        let descriptor = compose(&config);
        assert_eq!(descriptor.category_filter, Some(3));
        assert_eq!(descriptor.tag_filter, Some(vec![7, 8]));
    }

    #[test]
    fn explicit_selection_wins() {
        let config = FilterConfiguration::new()
            .with_category(3)
            .with_tags(vec![7])
            .with_posts(vec![10, 2, 5])
            .with_limit(50);
        let descriptor = compose(&config);
        assert_eq!(descriptor.category_filter, None);
        assert_eq!(descriptor.tag_filter, None);
        assert_eq!(descriptor.id_filter, Some(vec![10, 2, 5]));
        assert_eq!(descriptor.order, Order::Explicit(vec![10, 2, 5]));
        assert_eq!(descriptor.limit, 20);
    }

    #[test]
    fn explicit_order_is_preserved_exactly() {
        let ids = vec![9, 1, 9, 4];
        let descriptor = compose(&FilterConfiguration::new().with_posts(ids.clone()));
        assert_eq!(descriptor.order, Order::Explicit(ids));
    }

    #[test]
    fn limit_is_clamped() {
        let low = compose(&FilterConfiguration::new().with_limit(0));
        let high = compose(&FilterConfiguration::new().with_limit(999));
        assert_eq!(low.limit, 1);
        assert_eq!(high.limit, 20);
    }

    #[test]
    fn display_flags_do_not_affect_query() {
        let mut plain = FilterConfiguration::new().with_category(2);
        let base = compose(&plain);
        plain.display.show_title = false;
        plain.display.button_link = true;
        plain.display.class_name = "x".into();
        assert_eq!(compose(&plain), base);
    }

    #[test]
    fn composer_without_hook_matches_compose() {
        let config = FilterConfiguration::new().with_tags(vec![1]);
        let composer = FilterComposer::new();
        assert!(!composer.has_hook());
        assert_eq!(composer.compose(&config), compose(&config));
    }

    #[test]
    fn identity_hook_leaves_output_unchanged() {
        let config = FilterConfiguration::new().with_posts(vec![3, 1]);
        let composer = FilterComposer::new().with_hook(|descriptor, _| descriptor);
        assert_eq!(composer.compose(&config), compose(&config));
    }

    #[test]
    fn hook_runs_once_and_its_result_is_final() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let composer = FilterComposer::new().with_hook(move |mut descriptor, config| {
            seen.fetch_add(1, Ordering::SeqCst);
            assert_eq!(config.category_id, Some(4));
            descriptor.limit = 2;
            descriptor.tag_filter = Some(vec![99]);
            descriptor
        });

        let descriptor = composer.compose(&FilterConfiguration::new().with_category(4));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(descriptor.limit, 2);
        assert_eq!(descriptor.tag_filter, Some(vec![99]));
        assert_eq!(descriptor.category_filter, Some(4));
    }

    #[test]
    fn composer_is_shareable_across_threads() {
        let composer = FilterComposer::new().with_hook(|d, _| d);
        let handles: Vec<_> = (1..=4)
            .map(|n| {
                let composer = composer.clone();
                std::thread::spawn(move || {
                    composer
                        .compose(&FilterConfiguration::new().with_limit(n))
                        .limit
                })
            })
            .collect();
        let limits: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(limits, vec![1, 2, 3, 4]);
    }
}
