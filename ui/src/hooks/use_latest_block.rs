use std::time::Duration;

use dioxus::prelude::*;
use web_time::SystemTime;

use crate::block_source::fetch_latest;
use crate::block_source::ServerApi;
use crate::fetch_state::FetchState;

/// Handle to the latest-block state owned by the calling component.
///
/// Any refresh still in flight when the component unmounts is dropped with it,
/// so no result is ever written to a dead view.
#[derive(Clone, Copy)]
pub struct LatestBlockController {
    state: Signal<FetchState>,
}

impl LatestBlockController {
    /// Subscribe by calling `.read()` inside a component.
    pub fn state(&self) -> Signal<FetchState> {
        self.state
    }

    /// Starts a new cycle. A cycle already running is superseded and its
    /// result discarded.
    pub fn refresh(&self) {
        spawn(run_cycle(self.state));
    }
}

async fn run_cycle(mut state: Signal<FetchState>) {
    let ticket = state.write().begin();
    dioxus_logger::tracing::debug!("refreshing latest block");

    let outcome = fetch_latest(&ServerApi).await.map_err(|e| {
        dioxus_logger::tracing::warn!("latest block refresh failed: {}", e);
        e.to_string()
    });

    if state.write().finish(ticket, outcome, SystemTime::now()) {
        dioxus_logger::tracing::debug!("latest block refresh finished");
    } else {
        dioxus_logger::tracing::debug!("dropped result of superseded refresh");
    }
}

/// Fetches the latest block on mount, then again every `poll_interval`.
///
/// With no interval only the initial fetch and manual refreshes happen.
pub fn use_latest_block(poll_interval: Option<Duration>) -> LatestBlockController {
    let state = use_signal(FetchState::default);

    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            run_cycle(state).await;

            match poll_interval {
                Some(interval) => crate::compat::sleep(interval).await,
                None => break,
            }
        }
    });

    LatestBlockController { state }
}
