//! Where page state lives
//!
//! The page only ever reads or replaces state through a closure, so the same
//! logic drives a Leptos signal in the browser and a plain mutex in tests.

use std::sync::{Arc, Mutex};

use leptos::prelude::{RwSignal, Update, WithUntracked};

/// A cell holding a `T` that can be inspected and modified in place
pub trait Store<T>: Clone {
    /// Run `f` against the current value; `None` if the store is gone
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;

    /// Run `f` against the value and publish the change; `None` if the store is gone
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> Store<T> for RwSignal<T>
where
    T: Send + Sync + 'static,
{
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> Store<T> for Arc<Mutex<T>> {
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.lock().ok().map(|guard| f(&*guard))
    }

    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.lock().ok().map(|mut guard| f(&mut *guard))
    }
}
