//! Reactive values: writable [`Signal`]s and read-only [`Dynamic`] sources

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

/// A writable reactive cell
///
/// Cloning a signal yields another handle to the same cell. Observers either
/// read the current value with [`get`](Signal::get) or
/// [`subscribe`](Signal::subscribe) to change notifications.
pub struct Signal<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(value);
        Self { tx: Arc::new(tx) }
    }

    /// Current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    /// Replaces the value and notifies subscribers, returning the previous one
    pub fn set(&self, value: T) -> T {
        self.tx.send_replace(value)
    }

    /// Modifies the value in place and notifies subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Read-only view of this signal, suitable as validation input or option
    pub fn reader(&self) -> Dynamic<T> {
        Dynamic::Watched(self.tx.subscribe())
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&*self.tx.borrow()).finish()
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A value resolved at validation time
///
/// Either fixed, computed on demand (e.g. derived from application state), or
/// the latest value of a [`Signal`].
pub enum Dynamic<T> {
    Static(T),
    Computed(Arc<dyn Fn() -> T + Send + Sync>),
    Watched(watch::Receiver<T>),
}

impl<T> Dynamic<T> {
    pub fn computed(f: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Dynamic::Computed(Arc::new(f))
    }

    /// Resolves to the current concrete value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        match self {
            Dynamic::Static(value) => value.clone(),
            Dynamic::Computed(f) => f(),
            Dynamic::Watched(rx) => rx.borrow().clone(),
        }
    }
}

impl<T: Clone> Clone for Dynamic<T> {
    fn clone(&self) -> Self {
        match self {
            Dynamic::Static(value) => Dynamic::Static(value.clone()),
            Dynamic::Computed(f) => Dynamic::Computed(Arc::clone(f)),
            Dynamic::Watched(rx) => Dynamic::Watched(rx.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Dynamic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Dynamic::Computed(_) => f.write_str("Computed(..)"),
            Dynamic::Watched(rx) => f.debug_tuple("Watched").field(&*rx.borrow()).finish(),
        }
    }
}

impl<T: Default> Default for Dynamic<T> {
    fn default() -> Self {
        Dynamic::Static(T::default())
    }
}

impl<T> From<T> for Dynamic<T> {
    fn from(value: T) -> Self {
        Dynamic::Static(value)
    }
}

impl From<&str> for Dynamic<String> {
    fn from(value: &str) -> Self {
        Dynamic::Static(value.to_string())
    }
}

impl<T> From<&Signal<T>> for Dynamic<T> {
    fn from(signal: &Signal<T>) -> Self {
        signal.reader()
    }
}
