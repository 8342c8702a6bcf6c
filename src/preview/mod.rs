// src/preview/mod.rs
//! Preview panel state machine.
//!
//! ```text
//! Hidden ──show──▶ Loading ──probe ok / unconfirmed──▶ Shown
//!                     │ ──probe failed / timeout────▶ Error
//! Shown | Error ──refresh──▶ Loading
//! any ──hide──▶ Hidden
//! ```
//!
//! Every load gets a fresh generation number. Probe results carry the
//! generation they were started for; results for anything but the current
//! load are dropped, so a late probe can't overwrite a newer state.

pub mod probe;

use std::time::{Duration, Instant};

use crate::error::PreviewError;

/// What the probe could establish about the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// Page fetched and answered with a success status.
    Loaded { title: Option<String> },
    /// Connection or HTTP failure.
    Failed(String),
    /// Reachable, but the content can't be inspected (TLS, unknown scheme).
    /// Treated as success, shown as unverified.
    Unconfirmed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewState {
    Hidden,
    Loading { url: String, generation: u64, started: Instant },
    Shown { url: String, outcome: PreviewOutcome },
    Error { url: String, reason: String },
}

/// Handed to whoever starts the probe for a new load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeTicket {
    pub url: String,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeEvent {
    pub generation: u64,
    pub outcome: PreviewOutcome,
}

#[derive(Clone, Debug)]
pub struct PreviewPanel {
    state: PreviewState,
    generation: u64,
    timeout: Duration,
}

impl PreviewPanel {
    pub fn new(timeout: Duration) -> Self {
        Self { state: PreviewState::Hidden, generation: 0, timeout }
    }

    pub fn state(&self) -> &PreviewState { &self.state }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state, PreviewState::Hidden)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PreviewState::Loading { .. })
    }

    pub fn show(&mut self, url: Option<&str>, now: Instant) -> Result<ProbeTicket, PreviewError> {
        let url = url.filter(|u| !u.is_empty()).ok_or(PreviewError::NoUrl)?;
        Ok(self.start(url, now))
    }

    pub fn hide(&mut self) {
        if self.is_visible() {
            logd!("Preview: → Hidden");
        }
        self.state = PreviewState::Hidden;
    }

    /// Show when hidden, hide otherwise. A ticket is returned only when a load starts.
    pub fn toggle(&mut self, url: Option<&str>, now: Instant) -> Result<Option<ProbeTicket>, PreviewError> {
        if self.is_visible() {
            self.hide();
            Ok(None)
        } else {
            self.show(url, now).map(Some)
        }
    }

    pub fn refresh(&mut self, url: Option<&str>, now: Instant) -> Result<ProbeTicket, PreviewError> {
        if !self.is_visible() {
            return Err(PreviewError::NothingToRefresh);
        }
        let url = url.filter(|u| !u.is_empty()).ok_or(PreviewError::NothingToRefresh)?;
        Ok(self.start(url, now))
    }

    fn start(&mut self, url: &str, now: Instant) -> ProbeTicket {
        self.generation += 1;
        self.state = PreviewState::Loading {
            url: s!(url),
            generation: self.generation,
            started: now,
        };
        logf!("Preview: → Loading gen={} url={}", self.generation, url);
        ProbeTicket { url: s!(url), generation: self.generation }
    }

    /// Apply a probe result. Returns false if it was stale and ignored.
    pub fn resolve(&mut self, event: ProbeEvent) -> bool {
        let url = match &self.state {
            PreviewState::Loading { url, generation, .. } if *generation == event.generation => url.clone(),
            _ => {
                logd!("Preview: dropped stale probe gen={}", event.generation);
                return false;
            }
        };

        self.state = match event.outcome {
            PreviewOutcome::Failed(reason) => {
                logf!("Preview: → Error ({})", reason);
                PreviewState::Error { url, reason }
            }
            outcome => {
                logf!("Preview: → Shown ({:?})", outcome);
                PreviewState::Shown { url, outcome }
            }
        };
        true
    }

    /// Time out a load that has been pending too long. Returns true on transition.
    pub fn tick(&mut self, now: Instant) -> bool {
        let url = match &self.state {
            PreviewState::Loading { url, started, .. }
                if now.saturating_duration_since(*started) >= self.timeout => url.clone(),
            _ => return false,
        };
        loge!("Preview: timed out after {:?} url={}", self.timeout, url);
        self.state = PreviewState::Error { url, reason: s!("Preview timed out") };
        true
    }

    /// Time left before the pending load times out.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match &self.state {
            PreviewState::Loading { started, .. } => {
                Some(self.timeout.saturating_sub(now.saturating_duration_since(*started)))
            }
            _ => None,
        }
    }
}
