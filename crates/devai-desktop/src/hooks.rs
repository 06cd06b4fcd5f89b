//! Signal-backed view state.

use devai_core::api::DevaiClient;
use devai_core::results::AnalysisResult;
use devai_core::view::{run_submission, ViewState};
use dioxus::prelude::*;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Creates the [`ViewState`] for a feature page.
///
/// The view's teardown token is cancelled when the page unmounts, which
/// aborts any request still in flight.
pub fn use_analysis<R: AnalysisResult>(
    initial: impl FnOnce() -> Option<R>,
) -> Signal<ViewState<R>> {
    let state = use_context::<AppState>();
    let teardown = use_hook(CancellationToken::new);

    let view = use_signal(|| {
        let policy = state.config.peek().submit_policy;
        ViewState::new(policy)
            .with_initial_result(initial())
            .with_teardown(teardown.clone())
    });

    use_drop(move || {
        tracing::debug!(feature = R::FEATURE.id(), "View torn down");
        teardown.cancel();
    });

    view
}

/// Submits the view's current input and spawns the request.
///
/// Rejected submissions leave their outcome in the view state and spawn
/// nothing.
pub fn submit<R: AnalysisResult>(mut view: Signal<ViewState<R>>, client: DevaiClient) {
    let submitted = view.write().submit();
    let submission = match submitted {
        Ok(submission) => submission,
        Err(e) => {
            tracing::debug!(feature = R::FEATURE.id(), error = %e, "Submission rejected");
            return;
        }
    };

    tracing::info!(
        feature = R::FEATURE.id(),
        repo = %submission.repo(),
        token = submission.token().get(),
        "Running feature"
    );

    spawn(async move {
        let outcome = run_submission::<R>(&client, &submission).await;
        if submission.is_cancelled() {
            tracing::debug!(token = submission.token().get(), "Dropping cancelled outcome");
            return;
        }
        if let Err(ref e) = outcome {
            tracing::warn!(feature = R::FEATURE.id(), error = %e, "Request failed");
        }
        view.write().complete(submission.token(), outcome);
    });
}
