//! LocaleStore - Current Language with Subscribers
//!
//! One store per page. It owns the current language, persists changes and
//! notifies subscribers synchronously in subscription order.

use std::fmt;
use std::rc::Rc;

use hashlink::LinkedHashMap;
use tracing::{info, warn};

use super::{resolve_initial_language, Catalogs, ClientContext, MessageKey, SupportedLanguage};
use crate::constants::PREFERRED_LANGUAGE_KEY;
use crate::error::Result;
use crate::utils::preferences::SharedStorage;

/// Identity of a subscriber, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(SupportedLanguage)>;

/// Page-wide locale state
pub struct LocaleStore {
    current: SupportedLanguage,
    catalogs: Rc<Catalogs>,
    storage: SharedStorage,
    subscribers: LinkedHashMap<SubscriptionId, Listener>,
    next_id: u64,
}

impl LocaleStore {
    /// Create a store, resolving the initial language from `context` and `storage`
    pub fn new(catalogs: Rc<Catalogs>, storage: SharedStorage, context: &ClientContext) -> Self {
        let current = resolve_initial_language(context, &*storage);
        info!(lang = %current, "Initial language resolved");

        Self {
            current,
            catalogs,
            storage,
            subscribers: LinkedHashMap::new(),
            next_id: 1,
        }
    }

    /// Current language
    pub fn current(&self) -> SupportedLanguage {
        self.current
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Switch language by code.
    ///
    /// Codes outside en/pt/es are rejected without touching state, storage
    /// or subscribers.
    pub fn set_language(&mut self, code: &str) -> Result<SupportedLanguage> {
        let lang = code.parse::<SupportedLanguage>().inspect_err(|e| {
            warn!(error = %e, "Rejected language change");
        })?;
        Ok(self.set(lang))
    }

    /// Switch language: persist, update, then notify every subscriber once
    pub fn set(&mut self, lang: SupportedLanguage) -> SupportedLanguage {
        if let Err(e) = self.storage.set(PREFERRED_LANGUAGE_KEY, lang.code()) {
            warn!(error = %e, lang = %lang, "Language preference not persisted");
        }

        let previous = self.current;
        self.current = lang;
        info!(from = %previous, to = %lang, "Language changed");

        for listener in self.subscribers.values_mut() {
            listener(lang);
        }
        lang
    }

    /// Register a callback invoked with the new language on every change
    pub fn subscribe(&mut self, listener: impl FnMut(SupportedLanguage) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.insert(id, Box::new(listener));
        id
    }

    /// Remove a subscriber; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Translate `key` into `lang`
    pub fn t(&self, key: MessageKey, lang: SupportedLanguage) -> &str {
        self.catalogs.translate(key, lang)
    }

    /// Translate `key` into the current language
    pub fn text(&self, key: MessageKey) -> &str {
        self.t(key, self.current)
    }

    /// Translate a free-form key from page content into the current language
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalogs.lookup(key, self.current)
    }
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
