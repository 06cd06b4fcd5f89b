//! End-to-end view scenarios against a mocked backend.

use std::time::Duration;

use devai_core::api::{ApiError, DevaiClient, FALLBACK_ERROR_MESSAGE};
use devai_core::results::{CommitHistory, Insights};
use devai_core::view::{
    run_submission, SubmitError, SubmitPolicy, ViewError, ViewState, INVALID_REPOSITORY_MESSAGE,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn three_commits() -> serde_json::Value {
    json!({
        "result": {
            "commits": [
                {
                    "sha": "7fd1a60b01f91b314f59955a4e4d4e80d8edf11d",
                    "message": "Merge pull request #6 from Spaceghost/patch-1",
                    "author": "The Octocat",
                    "date": "2012-03-06T23:06:50Z",
                    "changes": { "additions": 1, "deletions": 0, "files": 1 }
                },
                {
                    "sha": "762941318ee16e59dabbacb1b4049eec22f0d303",
                    "message": "New line at end of file.",
                    "author": "Johnneylee Jack Rollins",
                    "date": "2011-09-14T04:42:41Z",
                    "changes": { "additions": 1, "deletions": 1, "files": 1 }
                },
                {
                    "sha": "553c2077f0edc3d5dc5d17262f6aa498e69d6f8e",
                    "message": "first commit",
                    "author": "cameronmcefee",
                    "date": "2011-01-26T19:01:12Z",
                    "changes": { "additions": 1, "deletions": 0, "files": 1 }
                }
            ],
            "summary": "- Created the README\n- Merged a community patch"
        }
    })
}

#[tokio::test]
async fn history_view_shows_commits_and_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/execute/6"))
        .and(body_json(json!({ "repo": "octocat/Hello-World" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_commits()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = DevaiClient::new(mock_server.uri());
    let mut view = ViewState::<CommitHistory>::new(SubmitPolicy::RejectIfBusy);
    view.set_input("octocat/Hello-World");

    let submission = view.submit().unwrap();
    assert!(view.is_loading());

    let outcome = run_submission(&client, &submission).await;
    assert!(view.complete(submission.token(), outcome));

    let history = view.result().expect("result should be set");
    assert_eq!(history.commits.len(), 3);
    assert_eq!(
        history.summary,
        "- Created the README\n- Merged a community patch"
    );
    assert!(!view.is_loading());
    assert!(view.error().is_none());
}

#[tokio::test]
async fn invalid_repository_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_commits()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut view = ViewState::<CommitHistory>::new(SubmitPolicy::RejectIfBusy);

    for input in ["not-a-repo", "", "/Hello-World", "octocat/", "a/b/c"] {
        view.set_input(input);
        let err = view.submit().unwrap_err();
        assert!(matches!(err, SubmitError::InvalidRepository(_)));
        assert_eq!(
            view.error(),
            Some(&ViewError::Validation(INVALID_REPOSITORY_MESSAGE.to_string()))
        );
        assert!(!view.is_loading());
    }

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn server_error_message_is_shown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/execute/6"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "rate limited" })))
        .mount(&mock_server)
        .await;

    let client = DevaiClient::new(mock_server.uri());
    let mut view = ViewState::<CommitHistory>::new(SubmitPolicy::RejectIfBusy);
    view.set_input("octocat/Hello-World");

    let submission = view.submit().unwrap();
    let outcome = run_submission(&client, &submission).await;
    view.complete(submission.token(), outcome);

    assert_eq!(view.error().map(ViewError::message), Some("rate limited"));
    assert!(view.result().is_none());
    assert!(!view.is_loading());
}

#[tokio::test]
async fn server_error_without_message_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/execute/2"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let client = DevaiClient::new(mock_server.uri());
    let mut view = ViewState::<Insights>::new(SubmitPolicy::RejectIfBusy);
    view.set_input("octocat/Hello-World");

    let submission = view.submit().unwrap();
    let outcome = run_submission(&client, &submission).await;
    view.complete(submission.token(), outcome);

    assert_eq!(view.error().map(ViewError::message), Some(FALLBACK_ERROR_MESSAGE));
    assert!(view.result().is_none());
}

#[tokio::test]
async fn unreachable_backend_uses_fallback() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = DevaiClient::new(format!("http://127.0.0.1:{port}"));
    let mut view = ViewState::<CommitHistory>::new(SubmitPolicy::RejectIfBusy);
    view.set_input("octocat/Hello-World");

    let submission = view.submit().unwrap();
    let outcome = run_submission(&client, &submission).await;
    assert!(matches!(outcome, Err(ApiError::Network(_))));

    assert!(view.complete(submission.token(), outcome));
    assert_eq!(
        view.error(),
        Some(&ViewError::Request(FALLBACK_ERROR_MESSAGE.to_string()))
    );
    assert!(view.result().is_none());
    assert!(!view.is_loading());
}

#[tokio::test]
async fn unrecognized_shape_is_a_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/execute/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "status": "Feature executed, check server logs or notifications.json" }
        })))
        .mount(&mock_server)
        .await;

    let client = DevaiClient::new(mock_server.uri());
    let mut view = ViewState::<CommitHistory>::new(SubmitPolicy::RejectIfBusy);
    view.set_input("octocat/Hello-World");

    let submission = view.submit().unwrap();
    let outcome = run_submission(&client, &submission).await;
    view.complete(submission.token(), outcome);

    assert!(matches!(view.error(), Some(ViewError::Request(_))));
    assert!(view.result().is_none());
}

#[tokio::test]
async fn insights_missing_metrics_default_to_zero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/execute/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "merged_prs": 12, "contributors": 3 }
        })))
        .mount(&mock_server)
        .await;

    let client = DevaiClient::new(mock_server.uri());
    let mut view = ViewState::<Insights>::new(SubmitPolicy::RejectIfBusy);
    view.set_input("octocat/Hello-World");

    let submission = view.submit().unwrap();
    let outcome = run_submission(&client, &submission).await;
    view.complete(submission.token(), outcome);

    let insights = view.result().unwrap();
    assert_eq!(insights.merged_prs, 12);
    assert_eq!(insights.contributors, 3);
    assert_eq!(insights.total_additions, 0);
    assert_eq!(insights.total_deletions, 0);
}

#[tokio::test]
async fn cancel_and_replace_aborts_slow_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/execute/6"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(three_commits())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = DevaiClient::new(mock_server.uri());
    let mut view = ViewState::<CommitHistory>::new(SubmitPolicy::CancelAndReplace);
    view.set_input("octocat/Hello-World");

    let first = view.submit().unwrap();
    let slow = {
        let client = client.clone();
        let first = first.clone();
        tokio::spawn(async move { run_submission::<CommitHistory>(&client, &first).await })
    };

    let second = view.submit().unwrap();
    let first_outcome = tokio::time::timeout(Duration::from_secs(2), slow)
        .await
        .expect("cancelled request should resolve promptly")
        .unwrap();

    assert!(matches!(
        first_outcome,
        Err(ApiError::Cancelled)
    ));
    assert!(!view.complete(first.token(), first_outcome));
    assert!(view.is_loading());
    assert_eq!(view.latest_token(), Some(second.token()));
}

#[tokio::test]
async fn teardown_aborts_in_flight_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(three_commits())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = DevaiClient::new(mock_server.uri());
    let mut view = ViewState::<CommitHistory>::new(SubmitPolicy::RejectIfBusy);
    view.set_input("octocat/Hello-World");

    let submission = view.submit().unwrap();
    let pending = {
        let client = client.clone();
        let submission = submission.clone();
        tokio::spawn(async move { run_submission::<CommitHistory>(&client, &submission).await })
    };

    view.teardown();

    let outcome = tokio::time::timeout(Duration::from_secs(2), pending)
        .await
        .expect("torn down request should resolve promptly")
        .unwrap();

    assert!(!view.complete(submission.token(), outcome));
    assert!(view.result().is_none());
    assert!(!view.is_loading());
}
