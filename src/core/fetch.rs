//! # Fetching
//!
//! Drains a paginated source of log group names into a `LogGroupCollection`.
//!
//! The source and the backend are traits so the loop can be driven by
//! scripted fakes in tests; the AWS implementations live in `crate::aws`.
//!
//! ```text
//! verify_identity()  →  pages()  →  next_page() … next_page() == None
//!        │                                  │
//!        └─ AppError::Identity              └─ AppError::Fetch (first failure wins)
//! ```

use async_trait::async_trait;
use log::{debug, info};

use crate::core::error::{AppError, FetchError};
use crate::core::log_group::{LogGroupCollection, LogGroupName};

/// The account the session authenticated as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub account: String,
    pub arn: String,
}

/// A paginated listing. `None` means there are no more pages.
#[async_trait]
pub trait LogGroupPages: Send {
    async fn next_page(&mut self) -> Option<Result<Vec<LogGroupName>, FetchError>>;
}

/// Everything the startup sequence needs from the cloud side.
#[async_trait]
pub trait CloudBackend: Send + Sync {
    fn region(&self) -> &str;

    async fn verify_identity(&self) -> Result<Identity, AppError>;

    fn pages(&self) -> Box<dyn LogGroupPages + '_>;
}

/// Request pages one after another until the source is exhausted.
///
/// The first failing page aborts the whole fetch; nothing collected so far
/// is returned and no further pages are requested.
pub async fn fetch_all<P: LogGroupPages + ?Sized>(pages: &mut P) -> Result<LogGroupCollection, FetchError> {
    let mut names = Vec::new();
    let mut page_count = 0usize;

    while let Some(page) = pages.next_page().await {
        page_count += 1;
        let page = page?;
        debug!("Page {}: {} log groups", page_count, page.len());
        names.extend(page);
    }

    info!("Fetched {} log groups in {} pages", names.len(), page_count);
    Ok(LogGroupCollection::from(names))
}

/// Verify the caller identity, then fetch every log group.
///
/// No page is requested when the identity check fails.
pub async fn load_log_groups<B: CloudBackend + ?Sized>(
    backend: &B,
) -> Result<(Identity, LogGroupCollection), AppError> {
    let identity = backend.verify_identity().await?;
    info!(
        "Authenticated as {} (account {}) in {}",
        identity.arn,
        identity.account,
        backend.region()
    );

    let mut pages = backend.pages();
    let groups = fetch_all(pages.as_mut()).await?;
    Ok((identity, groups))
}
