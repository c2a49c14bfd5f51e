//! Fetch-and-display logic behind the API panel

use std::sync::Arc;

use crate::api::HelloClient;
use crate::model::FetchState;
use crate::store::Store;
use crate::view::PanelView;

/// One mounted instance of the hello page
///
/// Holds the client used for fetch attempts and the store the panel renders
/// from. Cloning is cheap and every clone drives the same state.
pub struct HelloPage<C: ?Sized, S> {
    client: Arc<C>,
    state: S,
}

impl<C: ?Sized, S: Clone> Clone for HelloPage<C, S> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            state: self.state.clone(),
        }
    }
}

impl<C, S> HelloPage<C, S>
where
    C: HelloClient + ?Sized,
    S: Store<FetchState>,
{
    pub fn new(client: Arc<C>, state: S) -> Self {
        Self { client, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Initial fetch performed when the page appears
    pub async fn mount(&self) -> bool {
        tracing::debug!("Hello page mounted");
        self.refetch().await
    }

    /// Run one fetch attempt and settle the panel state with its outcome
    ///
    /// Returns `false` if the outcome was dropped because a newer attempt
    /// started in the meantime, or the store is gone.
    pub async fn refetch(&self) -> bool {
        let Some(id) = self.state.modify(FetchState::begin) else {
            tracing::warn!("Fetch state is gone, skipping fetch");
            return false;
        };
        tracing::debug!("Fetch attempt {} started", id);

        let outcome = self.client.fetch_hello().await;
        if let Err(e) = &outcome {
            tracing::debug!("Fetch attempt {} failed: {}", id, e);
        }

        let applied = self
            .state
            .modify(|state| state.settle(id, outcome))
            .unwrap_or(false);
        if applied {
            tracing::debug!("Fetch attempt {} settled", id);
        } else {
            tracing::debug!("Fetch attempt {} superseded, outcome dropped", id);
        }
        applied
    }

    /// Current panel content
    pub fn panel(&self) -> Option<PanelView> {
        self.state.inspect(PanelView::from_state)
    }
}
