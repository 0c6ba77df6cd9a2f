//! # AWS Adapter
//!
//! Builds the SDK session, checks who we are with STS, and exposes
//! CloudWatch Logs pagination as a `LogGroupPages` source.
//!
//! Credentials come from the SDK's default chain (env vars, shared config and
//! credentials files, SSO, instance metadata), optionally pinned to a profile.

mod pages;

pub use pages::CloudWatchPages;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_cloudwatchlogs as cloudwatchlogs;
use aws_sdk_sts as sts;
use aws_sdk_sts::error::DisplayErrorContext;
use aws_types::SdkConfig;
use aws_types::region::Region;
use log::{info, warn};

use crate::core::config::ResolvedConfig;
use crate::core::error::AppError;
use crate::core::fetch::{CloudBackend, Identity, LogGroupPages};

pub struct AwsBackend {
    sdk_config: SdkConfig,
    region: String,
    prefix: Option<String>,
}

impl AwsBackend {
    /// Load the shared SDK configuration for the resolved region/profile.
    pub async fn load(config: &ResolvedConfig) -> Result<Self, AppError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;

        resolve_credentials(&sdk_config).await?;
        info!(
            "AWS session ready (region={}, profile={})",
            config.region,
            config.profile.as_deref().unwrap_or("default")
        );

        Ok(Self::from_sdk_config(
            sdk_config,
            config.region.clone(),
            config.name_prefix.clone(),
        ))
    }

    pub fn from_sdk_config(sdk_config: SdkConfig, region: String, prefix: Option<String>) -> Self {
        Self {
            sdk_config,
            region,
            prefix,
        }
    }
}

/// Run the credential chain once so that "no credentials at all" is reported
/// as a session problem, separately from credentials STS rejects.
async fn resolve_credentials(sdk_config: &SdkConfig) -> Result<(), AppError> {
    let provider = sdk_config
        .credentials_provider()
        .ok_or_else(|| AppError::AwsSession("no credentials provider configured".to_string()))?;
    provider.provide_credentials().await.map_err(|e| {
        let message = DisplayErrorContext(&e).to_string();
        warn!("credential resolution failed: {}", message);
        AppError::AwsSession(message)
    })?;
    Ok(())
}

#[async_trait]
impl CloudBackend for AwsBackend {
    fn region(&self) -> &str {
        &self.region
    }

    async fn verify_identity(&self) -> Result<Identity, AppError> {
        let client = sts::Client::new(&self.sdk_config);
        let output = client.get_caller_identity().send().await.map_err(|e| {
            let message = DisplayErrorContext(&e).to_string();
            warn!("GetCallerIdentity failed: {}", message);
            AppError::Identity(message)
        })?;

        Ok(Identity {
            account: output.account.unwrap_or_default(),
            arn: output.arn.unwrap_or_default(),
        })
    }

    fn pages(&self) -> Box<dyn LogGroupPages + '_> {
        let client = cloudwatchlogs::Client::new(&self.sdk_config);
        Box::new(CloudWatchPages::new(client, self.prefix.clone()))
    }
}
