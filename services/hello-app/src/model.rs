//! Page state: the fetch panel fields and the click counter

use std::fmt;

use crate::error::FetchError;

/// Identifies one fetch attempt; later attempts get larger ids
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State behind the API panel
///
/// Only the most recently started attempt may settle the state. A
/// completion carrying an older [`RequestId`] is dropped untouched, so
/// overlapping attempts cannot leave an outdated result on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    loading: bool,
    result: Option<String>,
    error: Option<String>,
    latest: RequestId,
}

impl FetchState {
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Id of the most recently started attempt
    pub fn latest(&self) -> RequestId {
        self.latest
    }

    /// Start a new attempt, clearing the previous outcome
    pub fn begin(&mut self) -> RequestId {
        self.latest = self.latest.next();
        self.loading = true;
        self.result = None;
        self.error = None;
        self.latest
    }

    /// Record the outcome of attempt `id`
    ///
    /// Returns `false` when `id` has been superseded and the outcome was dropped.
    pub fn settle(&mut self, id: RequestId, outcome: Result<String, FetchError>) -> bool {
        if id != self.latest {
            return false;
        }

        match outcome {
            Ok(body) => {
                self.result = Some(body);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
        true
    }
}

/// Display-only click counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter(u64);

impl Counter {
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}
