//! Boundary to the external narrative service.
//!
//! After a transition is committed the phase machine may hand back a
//! `NarrativeRequest`. The table passes it to a `Narrator` and shows
//! whatever `describe` resolves to. The engine never waits on this: the
//! state is final before the request exists, and a slow or failing service
//! only costs flavor text.
//!
//! ```
//! use futures::executor::block_on;
//! use werewolf_engine::core::GameState;
//! use werewolf_engine::narrative::{describe, NarrativeRequest, Silent};
//!
//! let request = NarrativeRequest::new(&GameState::new(), "Nothing happened.");
//! assert_eq!(block_on(describe(&Silent, &request)), "Nothing happened.");
//! ```

use futures::future::{self, BoxFuture};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::{GameState, Phase};
use crate::error::NarrativeError;

/// What the narrative service is told about the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeRequest {
    pub day: u32,
    pub phase: Phase,
    pub alive: Vec<String>,
    pub dead: Vec<String>,
    /// The engine's own account of what just happened.
    pub summary: String,
}

impl NarrativeRequest {
    /// Snapshot the public side of `state` alongside `summary`.
    #[must_use]
    pub fn new(state: &GameState, summary: impl Into<String>) -> Self {
        let (alive, dead): (Vec<_>, Vec<_>) = state.players.iter().partition(|p| p.is_alive);
        Self {
            day: state.day_count,
            phase: state.phase,
            alive: alive.into_iter().map(|p| p.name.clone()).collect(),
            dead: dead.into_iter().map(|p| p.name.clone()).collect(),
            summary: summary.into(),
        }
    }

    /// JSON body for HTTP-backed narrators.
    pub fn to_json(&self) -> Result<String, NarrativeError> {
        serde_json::to_string(self).map_err(|e| NarrativeError::Encode(e.to_string()))
    }
}

/// Something that turns a summary into flavor text.
///
/// `Ok(None)` means the service had nothing to say.
pub trait Narrator {
    fn narrate(&self, request: &NarrativeRequest) -> BoxFuture<'static, Result<Option<String>, NarrativeError>>;
}

/// Narrator that never has anything to say.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Narrator for Silent {
    fn narrate(&self, _request: &NarrativeRequest) -> BoxFuture<'static, Result<Option<String>, NarrativeError>> {
        Box::pin(future::ready(Ok(None)))
    }
}

/// Text to display for `request`: the narrator's, or the summary verbatim.
pub async fn describe<N: Narrator + ?Sized>(narrator: &N, request: &NarrativeRequest) -> String {
    match narrator.narrate(request).await {
        Ok(Some(text)) if !text.trim().is_empty() => text,
        Ok(_) => request.summary.clone(),
        Err(e) => {
            warn!("narrative fallback: {e}");
            request.summary.clone()
        }
    }
}
