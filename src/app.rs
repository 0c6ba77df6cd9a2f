//! # Startup Sequence
//!
//! ```text
//! AwsBackend::load → verify_identity → fetch_all → tui::run | write_plain
//! ```
//!
//! Each step either hands its result to the next one or ends the process
//! with an `AppError`. Nothing is retried.

use std::io::{self, Write};

use chrono::Local;
use crossterm::style::{Color, Stylize};
use log::info;

use crate::aws::AwsBackend;
use crate::core::config::ResolvedConfig;
use crate::core::error::AppError;
use crate::core::fetch::load_log_groups;
use crate::core::log_group::LogGroupCollection;
use crate::tui::{self, Header};

pub async fn run(config: &ResolvedConfig) -> Result<(), AppError> {
    let backend = AwsBackend::load(config).await?;
    let (identity, groups) = load_log_groups(&backend).await?;

    if config.plain {
        info!("Writing {} log groups to stdout", groups.len());
        let stdout = io::stdout();
        write_plain(&groups, &mut stdout.lock())?;
        return Ok(());
    }

    let header = Header {
        region: config.region.clone(),
        account: identity.account,
        fetched_at: Local::now().format("%H:%M:%S").to_string(),
    };
    tui::run(groups, header, config)
}

/// One name per line, in arrival order.
pub fn write_plain<W: Write>(groups: &LogGroupCollection, out: &mut W) -> io::Result<()> {
    for name in groups.iter() {
        writeln!(out, "{name}")?;
    }
    out.flush()
}

/// The message printed to stderr for a fatal error. Setup problems get the
/// error color so they stand out from normal output.
pub fn error_message(err: &AppError, error_color: u8) -> String {
    let text = err.to_string();
    if err.is_styled() {
        text.with(Color::AnsiValue(error_color)).to_string()
    } else {
        text
    }
}
