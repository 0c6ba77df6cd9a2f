//! `DescribeLogGroups` as a `LogGroupPages` source.
//!
//! Pages are requested strictly one at a time. The `nextToken` from each
//! response feeds the next request; a response without a token is the last.

use async_trait::async_trait;
use aws_sdk_cloudwatchlogs as cloudwatchlogs;
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;
use log::{debug, warn};

use crate::core::error::FetchError;
use crate::core::fetch::LogGroupPages;
use crate::core::log_group::LogGroupName;

pub struct CloudWatchPages {
    client: cloudwatchlogs::Client,
    prefix: Option<String>,
    next_token: Option<String>,
    page: usize,
    done: bool,
}

impl CloudWatchPages {
    pub fn new(client: cloudwatchlogs::Client, prefix: Option<String>) -> Self {
        Self {
            client,
            prefix,
            next_token: None,
            page: 0,
            done: false,
        }
    }
}

#[async_trait]
impl LogGroupPages for CloudWatchPages {
    async fn next_page(&mut self) -> Option<Result<Vec<LogGroupName>, FetchError>> {
        if self.done {
            return None;
        }
        self.page += 1;

        debug!(
            "DescribeLogGroups page {} (token: {})",
            self.page,
            self.next_token.is_some()
        );
        let response = self
            .client
            .describe_log_groups()
            .set_log_group_name_prefix(self.prefix.clone())
            .set_next_token(self.next_token.take())
            .send()
            .await;

        let output = match response {
            Ok(output) => output,
            Err(e) => {
                self.done = true;
                let message = DisplayErrorContext(&e).to_string();
                warn!("DescribeLogGroups page {} failed: {}", self.page, message);
                return Some(Err(FetchError::new(self.page, message)));
            }
        };

        self.next_token = output.next_token.filter(|t| !t.is_empty());
        self.done = self.next_token.is_none();

        let names = output
            .log_groups
            .unwrap_or_default()
            .into_iter()
            .filter_map(|group| group.log_group_name)
            .map(LogGroupName::from)
            .collect();
        Some(Ok(names))
    }
}
