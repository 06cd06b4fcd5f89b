//! # View State
//!
//! The request state machine shared by every dashboard page.
//!
//! A view collects one repository identifier, submits it, and shows the
//! decoded result or an error. At rest exactly one of three things holds:
//! nothing is shown, a result is shown, or an error is shown. `loading` is
//! only true between [`ViewState::submit`] and the matching
//! [`ViewState::complete`].
//!
//! Every submission gets a [`RequestToken`] from a per-view counter.
//! Outcomes carrying anything but the latest token are dropped, so a slow
//! response from a superseded submission can never overwrite a newer one.
//! Each submission's cancellation token is a child of the view's teardown
//! token, so tearing the view down aborts whatever is still in flight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiError, ApiResult, DevaiClient};
use crate::results::AnalysisResult;
use crate::RepositoryRef;

/// Message shown when the input is not an `owner/name` identifier.
pub const INVALID_REPOSITORY_MESSAGE: &str = "Invalid repository format. Use 'owner/repo'";

/// What to do when the user submits while a request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmitPolicy {
    /// Ignore the new submission.
    #[default]
    RejectIfBusy,
    /// Cancel the in-flight request and start a new one.
    CancelAndReplace,
}

impl SubmitPolicy {
    /// Both policies, for settings pickers.
    pub const ALL: [SubmitPolicy; 2] = [SubmitPolicy::RejectIfBusy, SubmitPolicy::CancelAndReplace];

    /// Configuration name of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RejectIfBusy => "reject-if-busy",
            Self::CancelAndReplace => "cancel-and-replace",
        }
    }
}

impl fmt::Display for SubmitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmitPolicy {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| {
                crate::Error::invalid_input(
                    "submit_policy",
                    format!("expected 'reject-if-busy' or 'cancel-and-replace', got '{s}'"),
                )
            })
    }
}

/// Identifies one submission of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// The raw sequence number.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// The error currently shown by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The input failed validation; no request was made.
    Validation(String),
    /// The request failed.
    Request(String),
}

impl ViewError {
    /// The user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::Request(m) => m,
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Why a submission did not start a request.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The input is not an `owner/name` identifier.
    #[error("invalid repository: {0}")]
    InvalidRepository(#[source] crate::Error),

    /// A request is in flight and the policy is [`SubmitPolicy::RejectIfBusy`].
    #[error("a request is already in flight")]
    Busy,
}

/// A started request, handed to the caller to drive.
#[derive(Debug, Clone)]
pub struct Submission {
    token: RequestToken,
    repo: RepositoryRef,
    cancel: CancellationToken,
}

impl Submission {
    /// The token to pass back to [`ViewState::complete`].
    #[must_use]
    pub fn token(&self) -> RequestToken {
        self.token
    }

    /// The validated repository.
    #[must_use]
    pub fn repo(&self) -> &RepositoryRef {
        &self.repo
    }

    /// Fires when the submission is superseded or the view is torn down.
    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// True once the submission has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Local state of one view.
#[derive(Debug, Clone)]
pub struct ViewState<R> {
    input: String,
    filter: String,
    loading: bool,
    error: Option<ViewError>,
    result: Option<R>,
    policy: SubmitPolicy,
    next_token: u64,
    latest: Option<RequestToken>,
    in_flight: Option<CancellationToken>,
    teardown: CancellationToken,
}

impl<R: AnalysisResult> ViewState<R> {
    /// Creates an empty view.
    #[must_use]
    pub fn new(policy: SubmitPolicy) -> Self {
        Self {
            input: String::new(),
            filter: String::new(),
            loading: false,
            error: None,
            result: None,
            policy,
            next_token: 0,
            latest: None,
            in_flight: None,
            teardown: CancellationToken::new(),
        }
    }

    /// Shows `initial` until the first submission.
    #[must_use]
    pub fn with_initial_result(mut self, initial: Option<R>) -> Self {
        self.result = initial;
        self
    }

    /// Ties the view's lifetime to an externally owned teardown token.
    #[must_use]
    pub fn with_teardown(mut self, teardown: CancellationToken) -> Self {
        self.teardown = teardown;
        self
    }

    /// The bound input field.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Updates the input field. Validation happens on submit.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// The client-side filter text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Updates the client-side filter. Never sent to the backend.
    pub fn set_filter(&mut self, value: impl Into<String>) {
        self.filter = value.into();
    }

    /// True while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The error being shown, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    /// The result being shown, if any.
    #[must_use]
    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    /// The active submit policy.
    #[must_use]
    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    /// Changes the submit policy for subsequent submissions.
    pub fn set_policy(&mut self, policy: SubmitPolicy) {
        self.policy = policy;
    }

    /// The token of the most recent submission.
    #[must_use]
    pub fn latest_token(&self) -> Option<RequestToken> {
        self.latest
    }

    /// True once [`ViewState::teardown`] was called or the teardown token fired.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.teardown.is_cancelled()
    }

    /// Validates the input and starts a submission.
    ///
    /// On success the view is loading, shows nothing else, and the
    /// returned [`Submission`] must be driven by the caller (see
    /// [`run_submission`]) and its outcome passed to
    /// [`ViewState::complete`].
    ///
    /// # Errors
    ///
    /// * [`SubmitError::InvalidRepository`] - the input is malformed; the
    ///   view now shows [`INVALID_REPOSITORY_MESSAGE`]
    /// * [`SubmitError::Busy`] - a request is in flight under
    ///   [`SubmitPolicy::RejectIfBusy`]; the view is unchanged
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        if self.loading && self.policy == SubmitPolicy::RejectIfBusy {
            tracing::debug!(feature = R::FEATURE.id(), "Submission rejected, request in flight");
            return Err(SubmitError::Busy);
        }

        let repo = match RepositoryRef::parse(&self.input) {
            Ok(repo) => repo,
            Err(e) => {
                self.cancel_in_flight();
                self.latest = None;
                self.loading = false;
                self.result = None;
                self.error = Some(ViewError::Validation(INVALID_REPOSITORY_MESSAGE.to_string()));
                return Err(SubmitError::InvalidRepository(e));
            }
        };

        self.cancel_in_flight();

        self.next_token += 1;
        let token = RequestToken(self.next_token);
        let cancel = self.teardown.child_token();

        self.latest = Some(token);
        self.in_flight = Some(cancel.clone());
        self.loading = true;
        self.error = None;
        self.result = None;

        tracing::debug!(feature = R::FEATURE.id(), token = token.0, %repo, "Submitted");

        Ok(Submission {
            token,
            repo,
            cancel,
        })
    }

    /// Applies the outcome of a submission.
    ///
    /// Returns `false` and leaves the view unchanged when `token` is not
    /// the latest submission, the submission already completed, or the
    /// view was torn down.
    pub fn complete(&mut self, token: RequestToken, outcome: ApiResult<R>) -> bool {
        if self.is_torn_down() {
            tracing::debug!(token = token.0, "Dropping outcome for torn down view");
            return false;
        }
        if self.latest != Some(token) || !self.loading {
            tracing::warn!(
                feature = R::FEATURE.id(),
                token = token.0,
                latest = ?self.latest.map(RequestToken::get),
                "Dropping stale outcome"
            );
            return false;
        }

        self.loading = false;
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                self.error = None;
                self.result = Some(result);
            }
            Err(ApiError::Cancelled) => {
                self.error = None;
                self.result = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(ViewError::Request(e.user_message()));
            }
        }
        true
    }

    /// Cancels everything in flight and ignores later outcomes.
    pub fn teardown(&mut self) {
        self.teardown.cancel();
        self.in_flight = None;
        self.loading = false;
    }

    fn cancel_in_flight(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(
                feature = R::FEATURE.id(),
                token = ?self.latest.map(RequestToken::get),
                "Cancelling superseded request"
            );
            previous.cancel();
        }
    }
}

/// Drives a submission to completion.
///
/// Resolves to [`ApiError::Cancelled`] as soon as the submission is
/// superseded or its view is torn down, dropping the HTTP request.
///
/// # Errors
///
/// Whatever [`DevaiClient::execute`] returns, or [`ApiError::Cancelled`].
pub async fn run_submission<R: AnalysisResult>(
    client: &DevaiClient,
    submission: &Submission,
) -> ApiResult<R> {
    tokio::select! {
        biased;
        () = submission.cancel.cancelled() => {
            tracing::debug!(token = submission.token.0, "Request cancelled");
            Err(ApiError::Cancelled)
        }
        outcome = client.execute::<R>(&submission.repo) => outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{ChangeStats, Commit, CommitHistory};
    use pretty_assertions::assert_eq;

    fn history(summary: &str) -> CommitHistory {
        CommitHistory {
            commits: vec![Commit {
                sha: "abc1234".to_string(),
                message: "init".to_string(),
                author: "octocat".to_string(),
                date: "2024-01-01T00:00:00Z".to_string(),
                changes: ChangeStats::default(),
            }],
            summary: summary.to_string(),
        }
    }

    fn view(policy: SubmitPolicy) -> ViewState<CommitHistory> {
        let mut view = ViewState::new(policy);
        view.set_input("octocat/Hello-World");
        view
    }

    #[test]
    fn invalid_input_sets_validation_error() {
        let mut view = ViewState::<CommitHistory>::new(SubmitPolicy::RejectIfBusy)
            .with_initial_result(Some(history("sample")));
        view.set_input("not-a-repo");

        let err = view.submit().unwrap_err();

        assert!(matches!(err, SubmitError::InvalidRepository(_)));
        assert!(!view.is_loading());
        assert!(view.result().is_none());
        assert_eq!(
            view.error(),
            Some(&ViewError::Validation(INVALID_REPOSITORY_MESSAGE.to_string()))
        );
        assert_eq!(view.latest_token(), None);
    }

    #[test]
    fn submit_clears_previous_state_and_loads() {
        let mut view = view(SubmitPolicy::RejectIfBusy).with_initial_result(Some(history("sample")));

        let submission = view.submit().unwrap();

        assert!(view.is_loading());
        assert!(view.result().is_none());
        assert!(view.error().is_none());
        assert_eq!(submission.repo().to_string(), "octocat/Hello-World");
        assert_eq!(submission.token().get(), 1);
    }

    #[test]
    fn submit_trims_input() {
        let mut view = ViewState::<CommitHistory>::new(SubmitPolicy::RejectIfBusy);
        view.set_input("  octocat/Hello-World  ");
        let submission = view.submit().unwrap();
        assert_eq!(submission.repo().full_name(), "octocat/Hello-World");
    }

    #[test]
    fn successful_completion_sets_result() {
        let mut view = view(SubmitPolicy::RejectIfBusy);
        let submission = view.submit().unwrap();

        assert!(view.complete(submission.token(), Ok(history("done"))));

        assert!(!view.is_loading());
        assert!(view.error().is_none());
        assert_eq!(view.result().map(|h| h.summary.as_str()), Some("done"));
    }

    #[test]
    fn failed_completion_sets_error_and_no_result() {
        let mut view = view(SubmitPolicy::RejectIfBusy);
        let submission = view.submit().unwrap();

        let outcome = Err(ApiError::Server {
            status: 500,
            message: Some("rate limited".to_string()),
        });
        assert!(view.complete(submission.token(), outcome));

        assert!(!view.is_loading());
        assert!(view.result().is_none());
        assert_eq!(view.error().map(ViewError::message), Some("rate limited"));
    }

    #[test]
    fn reject_if_busy_keeps_first_submission() {
        let mut view = view(SubmitPolicy::RejectIfBusy);
        let first = view.submit().unwrap();

        assert!(matches!(view.submit(), Err(SubmitError::Busy)));
        assert!(!first.is_cancelled());
        assert_eq!(view.latest_token(), Some(first.token()));
        assert!(view.complete(first.token(), Ok(history("first"))));
    }

    #[test]
    fn cancel_and_replace_supersedes_first_submission() {
        let mut view = view(SubmitPolicy::CancelAndReplace);
        let first = view.submit().unwrap();
        let second = view.submit().unwrap();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(second.token() > first.token());

        assert!(!view.complete(first.token(), Ok(history("stale"))));
        assert!(view.is_loading());

        assert!(view.complete(second.token(), Ok(history("fresh"))));
        assert_eq!(view.result().map(|h| h.summary.as_str()), Some("fresh"));
    }

    #[test]
    fn duplicate_completion_is_ignored() {
        let mut view = view(SubmitPolicy::RejectIfBusy);
        let submission = view.submit().unwrap();

        assert!(view.complete(submission.token(), Ok(history("once"))));
        assert!(!view.complete(
            submission.token(),
            Err(ApiError::InvalidResponse("late".into()))
        ));
        assert!(view.error().is_none());
    }

    #[test]
    fn teardown_cancels_and_ignores_late_outcome() {
        let mut view = view(SubmitPolicy::RejectIfBusy);
        let submission = view.submit().unwrap();

        view.teardown();

        assert!(submission.is_cancelled());
        assert!(view.is_torn_down());
        assert!(!view.complete(submission.token(), Ok(history("late"))));
        assert!(view.result().is_none());
    }

    #[test]
    fn external_teardown_token_cancels_submissions() {
        let teardown = CancellationToken::new();
        let mut view = view(SubmitPolicy::RejectIfBusy).with_teardown(teardown.clone());
        let submission = view.submit().unwrap();

        teardown.cancel();

        assert!(submission.is_cancelled());
        assert!(!view.complete(submission.token(), Ok(history("late"))));
    }

    #[test]
    fn validation_failure_while_loading_supersedes_request() {
        let mut view = view(SubmitPolicy::CancelAndReplace);
        let first = view.submit().unwrap();

        view.set_input("broken");
        assert!(view.submit().is_err());

        assert!(first.is_cancelled());
        assert!(!view.is_loading());
        assert!(!view.complete(first.token(), Ok(history("stale"))));
        assert!(matches!(view.error(), Some(ViewError::Validation(_))));
    }

    #[test]
    fn filter_does_not_touch_request_state() {
        let mut view = view(SubmitPolicy::RejectIfBusy);
        view.set_filter("octocat");
        assert_eq!(view.filter(), "octocat");
        assert!(!view.is_loading());
        assert!(view.error().is_none());
    }

    #[test]
    fn policy_round_trips_through_str() {
        for policy in SubmitPolicy::ALL {
            assert_eq!(policy.as_str().parse::<SubmitPolicy>().unwrap(), policy);
        }
        assert!("queue".parse::<SubmitPolicy>().is_err());
    }
}
