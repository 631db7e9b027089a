use anyhow::Result;
use httpmock::prelude::*;
use polly_client::{Credentials, PollClient, PollError, Walkthrough};
use serde_json::json;

#[tokio::test]
async fn test_walkthrough_against_mock_service() -> Result<()> {
    let server = MockServer::start();

    let register = server.mock(|when, then| {
        when.method(POST)
            .path("/register")
            .json_body(json!({"username": "testuser4321", "password": "testpass"}));
        then.status(201).json_body(json!({"id": 12, "username": "testuser4321"}));
    });
    let login = server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200)
            .json_body(json!({"access_token": "walk-token", "token_type": "bearer"}));
    });
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/polls")
            .query_param("skip", "0")
            .query_param("limit", "10");
        then.status(200).json_body(json!([]));
    });
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/polls")
            .header("Authorization", "Bearer walk-token")
            .json_body(json!({"question": "Test question?", "options": ["Option A", "Option B"]}));
        then.status(201).json_body(json!({
            "id": 31,
            "question": "Test question?",
            "options": [{"id": 301, "text": "Option A"}, {"id": 302, "text": "Option B"}]
        }));
    });
    let vote = server.mock(|when, then| {
        when.method(POST)
            .path("/polls/31/vote")
            .json_body(json!({"option_id": 301}));
        then.status(200).json_body(json!({"id": 3001, "option_id": 301}));
    });
    let results = server.mock(|when, then| {
        when.method(GET).path("/polls/31/results");
        then.status(200).json_body(json!({
            "question": "Test question?",
            "results": [{"option_id": 301, "votes": 1}, {"option_id": 302, "votes": 0}]
        }));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/polls/31")
            .header("Authorization", "Bearer walk-token");
        then.status(200).json_body(json!({"ok": true}));
    });

    let client = PollClient::new(&server.base_url())?;
    let report = Walkthrough::new(client)
        .run(&Credentials::new("testuser4321", "testpass"))
        .await?;

    for mock in [&register, &login, &list, &create, &vote, &results, &delete] {
        mock.assert();
    }

    assert_eq!(report.username, "testuser4321");
    assert_eq!(report.user_id, Some(12));
    assert_eq!(report.polls_listed, 0);
    assert_eq!(report.poll_id, 31);
    assert_eq!(report.option_ids, vec![301, 302]);
    assert_eq!(report.vote_id, 3001);
    assert_eq!(report.results_question.as_deref(), Some("Test question?"));
    assert_eq!(report.delete_status, 200);
    Ok(())
}

#[tokio::test]
async fn test_walkthrough_aborts_when_login_lacks_token() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/register");
        then.status(201).json_body(json!({"id": 1}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200).json_body(json!({"detail": "ok"}));
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/polls");
        then.status(200).json_body(json!([]));
    });

    let client = PollClient::new(&server.base_url())?;
    let err = Walkthrough::new(client)
        .run(&Credentials::new("bob", "pw"))
        .await
        .unwrap_err();

    assert!(matches!(err, PollError::MissingTokenError));
    assert_eq!(list.hits(), 0);
    Ok(())
}
