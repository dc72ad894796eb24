//! Per-session state: drafts, image artifact, and the current cycle token.

use super::types::{ContentMap, Draft, ImageArtifact};
use crate::platform::Platform;
use std::sync::{Arc, Mutex};

/// Monotonic token identifying one generation cycle. Writes tagged with a
/// superseded token are dropped instead of clobbering the newer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleToken(u64);

/// Shared handle to the session. The orchestrator is the only writer during
/// a cycle; publishing only reads.
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<Mutex<SessionInner>>,
}

#[derive(Default)]
struct SessionInner {
    cycle: u64,
    drafts: ContentMap,
    artifact: Option<ImageArtifact>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle: clears drafts and artifact and invalidates every
    /// previously issued token.
    pub fn begin_cycle(&self) -> CycleToken {
        let mut inner = self.inner.lock().unwrap();
        inner.cycle += 1;
        inner.drafts.clear();
        inner.artifact = None;
        CycleToken(inner.cycle)
    }

    /// The token of the cycle currently owning the session.
    pub fn token(&self) -> CycleToken {
        CycleToken(self.inner.lock().unwrap().cycle)
    }

    /// Record a draft for `platform`. Returns false, dropping the write, when
    /// the token has been superseded by a newer cycle.
    pub fn record_draft(&self, token: CycleToken, platform: Platform, draft: Draft) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.cycle != token.0 {
            return false;
        }
        inner.drafts.insert(platform, draft);
        true
    }

    /// Install the cycle's image artifact, subject to the same staleness rule.
    pub fn set_artifact(&self, token: CycleToken, artifact: ImageArtifact) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.cycle != token.0 {
            return false;
        }
        inner.artifact = Some(artifact);
        true
    }

    pub fn drafts(&self) -> ContentMap {
        self.inner.lock().unwrap().drafts.clone()
    }

    pub fn artifact(&self) -> Option<ImageArtifact> {
        self.inner.lock().unwrap().artifact.clone()
    }
}
