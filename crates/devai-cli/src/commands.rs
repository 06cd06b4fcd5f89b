//! CLI command implementations.

use devai_core::api::{DevaiClient, FeatureInfo};
use devai_core::config::Config;
use devai_core::results::{
    ActivityFeed, AnalysisResult, CodeReview, CommitAnalysis, CommitHistory, Documentation,
    Insights, Onboarding, SecurityScan,
};
use devai_core::view::{run_submission, SubmitError, SubmitPolicy, ViewState};
use devai_core::Feature;
use thiserror::Error;

use crate::render::{Render, Report};

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] devai_core::Error),

    #[error("{0}")]
    Rejected(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// List features, preferring the backend's catalogue.
pub async fn features(config: &Config) -> Result<()> {
    let client = DevaiClient::new(&config.api_url);

    let features = match client.list_features().await {
        Ok(features) if !features.is_empty() => features,
        Ok(_) => builtin_features(),
        Err(e) => {
            tracing::warn!(error = %e, "Backend unavailable, showing built-in catalogue");
            builtin_features()
        }
    };

    for info in features {
        let slug = info.feature().map_or("-", Feature::slug);
        println!("{:>2}  {:<14} {}", info.id, slug, info.name);
        if !info.description.is_empty() {
            println!("                    {}", info.description);
        }
    }
    Ok(())
}

fn builtin_features() -> Vec<FeatureInfo> {
    Feature::ALL.into_iter().map(FeatureInfo::from).collect()
}

/// Run `feature` against `repo` and print the result.
pub async fn run(config: &Config, feature: Feature, repo: &str, json: bool) -> Result<()> {
    let client = DevaiClient::new(&config.api_url);
    let policy = config.submit_policy;

    let output = match feature {
        Feature::CodeReview => execute::<CodeReview>(&client, repo, policy, json).await,
        Feature::Insights => execute::<Insights>(&client, repo, policy, json).await,
        Feature::CommitIntent => execute::<CommitAnalysis>(&client, repo, policy, json).await,
        Feature::Documentation => execute::<Documentation>(&client, repo, policy, json).await,
        Feature::SecurityScan => execute::<SecurityScan>(&client, repo, policy, json).await,
        Feature::CommitHistory => execute::<CommitHistory>(&client, repo, policy, json).await,
        Feature::Onboarding => execute::<Onboarding>(&client, repo, policy, json).await,
        Feature::Activity => execute::<ActivityFeed>(&client, repo, policy, json).await,
    }?;

    println!("{output}");
    Ok(())
}

/// Drive one view submission and format the outcome.
async fn execute<R>(
    client: &DevaiClient,
    repo: &str,
    policy: SubmitPolicy,
    json: bool,
) -> Result<String>
where
    R: AnalysisResult + Render,
{
    let mut view = ViewState::<R>::new(policy);
    view.set_input(repo);

    let submission = match view.submit() {
        Ok(submission) => submission,
        Err(SubmitError::InvalidRepository(_)) => {
            let message = view.error().map(ToString::to_string).unwrap_or_default();
            return Err(CliError::Rejected(message));
        }
        Err(e @ SubmitError::Busy) => return Err(CliError::Rejected(e.to_string())),
    };

    tracing::info!(feature = R::FEATURE.id(), repo = %submission.repo(), "Running feature");
    let outcome = run_submission::<R>(client, &submission).await;
    if let Err(ref e) = outcome {
        tracing::debug!(error = %e, "Request failed");
    }
    view.complete(submission.token(), outcome);

    if let Some(err) = view.error() {
        return Err(CliError::Request(err.message().to_string()));
    }
    let Some(result) = view.result() else {
        return Err(CliError::Request("no result".to_string()));
    };

    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(Report(result).to_string())
    }
}

/// Show the effective configuration.
pub fn config_show(config: &Config) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    if let Some(path) = Config::config_path() {
        println!("\nConfig file: {}", path.display());
    }
    Ok(())
}

/// Persist a new backend URL.
pub fn config_set_url(url: &str) -> Result<()> {
    let mut config = Config::load();
    config.set_api_url(url)?;
    config.save()?;
    println!("API URL set to {}", config.api_url);
    Ok(())
}

/// Persist a new submit policy.
pub fn config_set_policy(policy: SubmitPolicy) -> Result<()> {
    let mut config = Config::load();
    config.submit_policy = policy;
    config.save()?;
    println!("Submit policy set to {policy}");
    Ok(())
}
