//! Last-value-wins observable slots backed by `tokio::sync::watch`.

use tokio::sync::watch;

/// A value collaborators can read at any time or wait on for changes.
///
/// Publishing never blocks and works with no subscribers; slow subscribers
/// only ever see the latest value.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    pub fn publish(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Modify in place; subscribers are notified only when `f` returns true.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }
}
