// Theme state container: the single source of truth for the active theme.
use super::applier::{apply_theme, StyleSink};
use shared::models::ThemeMode;
use std::fmt;

pub type SubscriptionId = u64;

type Listener = Box<dyn FnMut(ThemeMode)>;

/// Owns the current `ThemeMode` and the sink its palette is written to.
///
/// The store is meant to be created once and handed down the component tree
/// (in the GUI it lives inside a Dioxus signal provided as context). Every
/// change re-applies the palette and then calls subscribers synchronously, in
/// the order they subscribed.
pub struct ThemeStore {
    mode: ThemeMode,
    sink: Box<dyn StyleSink>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: SubscriptionId,
}

impl ThemeStore {
    /// Creates the store and applies the initial palette right away.
    pub fn new(initial: ThemeMode, sink: impl StyleSink + 'static) -> Self {
        let mut store = ThemeStore {
            mode: initial,
            sink: Box::new(sink),
            listeners: Vec::new(),
            next_id: 0,
        };
        apply_theme(initial, store.sink.as_mut());
        store
    }

    pub fn theme(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle_theme(&mut self) {
        let next = self.mode.toggled();
        self.commit(next);
    }

    /// Switches to `mode`. Subscribers only hear about actual changes.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        if mode == self.mode {
            apply_theme(mode, self.sink.as_mut());
            return;
        }
        self.commit(mode);
    }

    pub fn subscribe(&mut self, listener: impl FnMut(ThemeMode) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn commit(&mut self, mode: ThemeMode) {
        self.mode = mode;
        apply_theme(mode, self.sink.as_mut());
        tracing::info!(theme = %mode, subscribers = self.listeners.len(), "Theme changed");
        for (_, listener) in self.listeners.iter_mut() {
            listener(mode);
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
