use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::sink::Sink;

/// Registry of named sinks.
///
/// Every dispatched line goes to every sink registered here at the moment of
/// dispatch. Names are unique: registering under a name that is taken
/// shadows the existing sink until the new registration ends, at which point
/// the shadowed sink comes back.
///
/// # Thread Safety
///
/// The map sits behind a `parking_lot::RwLock`. Dispatch only holds the read
/// lock long enough to copy out the current entries, so sinks run without any
/// registry lock held and may themselves log or (un)register sinks.
///
/// # Nesting
///
/// Restoration is exact when registrations under one name end in reverse
/// order of creation. If an outer registration ends before an inner one,
/// each ending registration still restores the sink it displaced, so the
/// last restore observed wins. That is never memory unsafe, but it is up to
/// callers to keep registrations properly nested.
pub struct SinkRegistry {
    sinks: RwLock<BTreeMap<Arc<str>, Arc<dyn Sink>>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self {
            sinks: RwLock::new(BTreeMap::new()),
        }
    }

    /// Registers `sink` under `name` until the returned token is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slog::{FnSink, Record, Sink, SinkRegistry};
    /// # use std::sync::Arc;
    /// let registry = SinkRegistry::new();
    /// let quiet: Arc<dyn Sink> = Arc::new(FnSink::new(|_: &Record<'_>| {}));
    /// {
    ///     let _token = registry.register("quiet", quiet);
    ///     assert!(registry.contains("quiet"));
    /// }
    /// assert!(!registry.contains("quiet"));
    /// ```
    pub fn register(&self, name: impl Into<String>, sink: Arc<dyn Sink>) -> SinkRegistration<'_> {
        let name: Arc<str> = Arc::from(name.into());
        let previous = self.sinks.write().insert(name.clone(), sink);
        SinkRegistration {
            registry: self,
            name,
            previous,
            armed: true,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sinks.read().contains_key(name)
    }

    /// Returns the sink currently registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Sink>> {
        self.sinks.read().get(name).cloned()
    }

    /// Registered names, in dispatch order.
    pub fn names(&self) -> Vec<String> {
        self.sinks.read().keys().map(|k| k.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.read().is_empty()
    }

    /// Copies out the current entries in dispatch order (sorted by name).
    pub fn snapshot(&self) -> Vec<(Arc<str>, Arc<dyn Sink>)> {
        self.sinks
            .read()
            .iter()
            .map(|(name, sink)| (name.clone(), sink.clone()))
            .collect()
    }

    fn restore(&self, name: &Arc<str>, previous: Option<Arc<dyn Sink>>) {
        let mut sinks = self.sinks.write();
        match previous {
            Some(sink) => {
                sinks.insert(name.clone(), sink);
            }
            None => {
                sinks.remove(name);
            }
        }
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Token for one sink registration.
///
/// Dropping the token ends the registration: the sink it displaced, if any,
/// is put back; otherwise the name is removed.
#[must_use = "the sink is unregistered as soon as the registration is dropped"]
pub struct SinkRegistration<'a> {
    registry: &'a SinkRegistry,
    name: Arc<str>,
    previous: Option<Arc<dyn Sink>>,
    armed: bool,
}

impl SinkRegistration<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` if this registration displaced an existing sink.
    pub fn shadows(&self) -> bool {
        self.previous.is_some()
    }

    /// Keeps the sink registered for the rest of the registry's life.
    ///
    /// The displaced sink, if any, is released and will not come back.
    pub fn keep(mut self) {
        self.armed = false;
    }
}

impl Drop for SinkRegistration<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.registry.restore(&self.name, self.previous.take());
        }
    }
}
