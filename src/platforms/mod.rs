pub mod error;
mod json;
pub mod panda;
pub mod traits;
pub mod vimeo;
pub mod youtube;

pub use error::ResolveError;
pub use traits::MediaResolver;

/// Dispatches embed URLs to the first resolver that claims them.
pub struct ResolverRegistry {
    resolvers: Vec<Box<dyn MediaResolver>>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// A registry with every built-in provider resolver registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(vimeo::VimeoResolver::new()));
        registry.register(Box::new(youtube::YouTubeResolver::new()));
        registry.register(Box::new(panda::PandaResolver::new()));
        registry
    }

    pub fn register(&mut self, resolver: Box<dyn MediaResolver>) {
        self.resolvers.push(resolver);
    }

    pub fn find(&self, url: &str) -> Option<&dyn MediaResolver> {
        let found = self
            .resolvers
            .iter()
            .find(|r| r.can_handle(url))
            .map(|r| r.as_ref());

        match found {
            Some(resolver) => tracing::debug!(resolver = resolver.name(), url, "embed matched"),
            None => tracing::debug!(url, "no resolver for embed"),
        }

        found
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
