//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::error::{AppError, FetchError};
use crate::core::fetch::{CloudBackend, Identity, LogGroupPages};
use crate::core::filter::MatchPolicy;
use crate::core::log_group::{LogGroupCollection, LogGroupName};
use crate::core::state::{BrowserState, Viewport};

/// The three-group collection used throughout the tests.
pub fn sample_groups() -> LogGroupCollection {
    ["/aws/lambda/a", "/aws/lambda/b", "/ecs/service/c"]
        .into_iter()
        .collect()
}

/// A case-insensitive browser over `groups` on a `width`×`height` terminal.
pub fn state_with(groups: LogGroupCollection, width: u16, height: u16) -> BrowserState {
    BrowserState::new(groups, MatchPolicy::default(), Viewport::new(width, height))
}

type Page = Result<Vec<LogGroupName>, FetchError>;

/// Hands out a fixed list of pages, counting every request.
pub struct ScriptedPages {
    pages: VecDeque<Page>,
    requested: Arc<AtomicUsize>,
}

impl ScriptedPages {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages: pages.into(),
            requested: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn requested(&self) -> usize {
        self.requested.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LogGroupPages for ScriptedPages {
    async fn next_page(&mut self) -> Option<Page> {
        self.requested.fetch_add(1, Ordering::SeqCst);
        self.pages.pop_front()
    }
}

/// A backend with a canned identity result and canned pages.
pub struct ScriptedBackend {
    identity: Mutex<Option<Result<Identity, AppError>>>,
    pages: Mutex<Vec<Page>>,
    requested: Arc<AtomicUsize>,
}

impl ScriptedBackend {
    pub fn new(identity: Result<Identity, AppError>, pages: Vec<Page>) -> Self {
        Self {
            identity: Mutex::new(Some(identity)),
            pages: Mutex::new(pages),
            requested: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn identity() -> Identity {
        Identity {
            account: "123456789012".to_string(),
            arn: "arn:aws:sts::123456789012:assumed-role/Dev/me".to_string(),
        }
    }

    pub fn pages_requested(&self) -> usize {
        self.requested.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CloudBackend for ScriptedBackend {
    fn region(&self) -> &str {
        "eu-west-1"
    }

    async fn verify_identity(&self) -> Result<Identity, AppError> {
        self.identity
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Self::identity()))
    }

    fn pages(&self) -> Box<dyn LogGroupPages + '_> {
        let pages = std::mem::take(&mut *self.pages.lock().unwrap());
        Box::new(ScriptedPages {
            pages: pages.into(),
            requested: Arc::clone(&self.requested),
        })
    }
}
