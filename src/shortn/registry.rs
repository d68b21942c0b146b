//! # Service Registry
//!
//! An immutable table from service identifier to backend constructor, built
//! once and handed to whoever needs to instantiate a backend. Unknown
//! identifiers resolve to [`DEFAULT_SERVICE`] instead of failing, so a typo in
//! the config still leaves a working shortener.

use crate::services::{bitly, google, isgood, shlink, tinyurl, ServiceConfig, Shortener};
use tracing::warn;

pub const DEFAULT_SERVICE: &str = tinyurl::ID;

type Constructor = fn(ServiceConfig) -> Box<dyn Shortener>;

pub struct ServiceEntry {
    pub id: &'static str,
    /// Used when the configuration leaves `api_url` unset.
    pub default_api_url: Option<&'static str>,
    construct: Constructor,
}

pub struct ServiceRegistry {
    entries: Vec<ServiceEntry>,
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self {
            entries: vec![
                ServiceEntry {
                    id: tinyurl::ID,
                    default_api_url: Some(tinyurl::DEFAULT_API_URL),
                    construct: |c| Box::new(tinyurl::TinyUrl::new(c)),
                },
                ServiceEntry {
                    id: isgood::ID,
                    default_api_url: Some(isgood::DEFAULT_API_URL),
                    construct: |c| Box::new(isgood::IsGood::new(c)),
                },
                ServiceEntry {
                    id: bitly::ID,
                    default_api_url: Some(bitly::DEFAULT_API_URL),
                    construct: |c| Box::new(bitly::Bitly::new(c)),
                },
                ServiceEntry {
                    id: shlink::ID,
                    default_api_url: None,
                    construct: |c| Box::new(shlink::Shlink::new(c)),
                },
                ServiceEntry {
                    id: google::ID,
                    default_api_url: Some(google::DEFAULT_API_URL),
                    construct: |c| Box::new(google::Google::new(c)),
                },
            ],
        }
    }
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn contains(&self, service_id: &str) -> bool {
        self.entries.iter().any(|e| e.id == service_id)
    }

    /// The registered entry for `service_id`, or the default entry.
    pub fn resolve(&self, service_id: &str) -> &ServiceEntry {
        let found = self.entries.iter().find(|e| e.id == service_id);
        match found {
            Some(entry) => entry,
            None => {
                warn!(service_id, fallback = DEFAULT_SERVICE, "unknown service");
                self.default_entry()
            }
        }
    }

    /// Build the backend for `service_id`, falling back to the default service.
    /// An empty `api_url` picks up the service's built-in endpoint.
    pub fn new_backend(
        &self,
        service_id: &str,
        api_url: Option<String>,
        api_key: Option<String>,
    ) -> Box<dyn Shortener> {
        let entry = self.resolve(service_id);
        let api_url = api_url
            .filter(|url| !url.is_empty())
            .or_else(|| entry.default_api_url.map(str::to_string))
            .unwrap_or_default();
        (entry.construct)(ServiceConfig::new(api_url, api_key))
    }

    fn default_entry(&self) -> &ServiceEntry {
        // DEFAULT_SERVICE is always registered by Default.
        self.entries
            .iter()
            .find(|e| e.id == DEFAULT_SERVICE)
            .unwrap_or(&self.entries[0])
    }
}
