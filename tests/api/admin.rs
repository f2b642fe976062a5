use reqwest::StatusCode;

use serde_json::Value;

use uuid::Uuid;

use crate::helpers::{NewSubmission, TestApp};

async fn submit_one(app: &TestApp, name: &str) -> String {
    let new_submission = NewSubmission {
        name: Some(name.into()),
        ..NewSubmission::valid()
    };
    app.submit(&new_submission)
        .await
        .expect("Failed to execute request");

    app.stored()
        .into_iter()
        .find(|r| r.name == name)
        .expect("Submission was not stored")
        .id
        .to_string()
}

async fn listed(app: &TestApp) -> Vec<Value> {
    let res = app.messages().await.expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());
    res.json().await.expect("Failed to parse messages")
}

#[tokio::test]
async fn admin_api_requires_login() {
    let app = TestApp::spawn().await;
    let id = submit_one(&app, "Jane").await;

    let responses = vec![
        ("list", app.messages().await),
        ("mark", app.mark(&id).await),
        ("delete", app.delete(&id).await),
    ];

    for (desc, res) in responses {
        let res = res.expect("Failed to execute request");
        assert_eq!(StatusCode::UNAUTHORIZED, res.status(), "{}", desc);
        let body: Value = res.json().await.unwrap();
        assert_eq!("Unauthorized", body["error"], "{}", desc);
    }

    // Nothing changed behind the guard
    let stored = app.stored();
    assert_eq!(1, stored.len());
    assert_eq!("new", stored[0].status.as_str());
}

#[tokio::test]
async fn admin_page_shows_login_form_when_logged_out() {
    let app = TestApp::spawn().await;

    let res = app.admin_page().await.expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    assert!(res.text().await.unwrap().contains("Admin Login"));
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app.login("not-the-password").await.expect("Failed to execute request");

    assert_eq!(StatusCode::UNAUTHORIZED, res.status());
    assert!(res.text().await.unwrap().contains("Incorrect password"));

    let res = app.messages().await.expect("Failed to execute request");
    assert_eq!(StatusCode::UNAUTHORIZED, res.status());
}

#[tokio::test]
async fn login_opens_the_dashboard() {
    let app = TestApp::spawn().await;

    let res = app
        .login(crate::helpers::ADMIN_PASSWORD)
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::SEE_OTHER, res.status());
    assert_eq!("/admin", res.headers()["location"]);

    let res = app.admin_page().await.expect("Failed to execute request");
    let body = res.text().await.unwrap();
    assert!(body.contains("/admin/api/messages"));
    assert!(!body.contains("Admin Login"));
}

#[tokio::test]
async fn messages_lists_submissions_most_recent_first() {
    let app = TestApp::spawn().await;
    submit_one(&app, "First").await;
    submit_one(&app, "Second").await;
    app.login_as_admin().await;

    let messages = listed(&app).await;

    assert_eq!(2, messages.len());
    assert_eq!("Second", messages[0]["name"]);
    assert_eq!("First", messages[1]["name"]);
    for message in &messages {
        for key in [
            "id", "name", "phone", "email", "address", "voucher", "createdAt", "status",
        ] {
            assert!(message.get(key).is_some(), "missing {}", key);
        }
        assert_eq!("AB12", message["voucher"]);
        assert_eq!("new", message["status"]);
    }
}

#[tokio::test]
async fn mark_toggles_status_back_and_forth() {
    let app = TestApp::spawn().await;
    let id = submit_one(&app, "Jane").await;
    app.login_as_admin().await;

    let res = app.mark(&id).await.expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());
    let body: Value = res.json().await.unwrap();
    assert_eq!(true, body["ok"]);
    assert_eq!("processed", listed(&app).await[0]["status"]);

    app.mark(&id).await.expect("Failed to execute request");
    assert_eq!("new", listed(&app).await[0]["status"]);
}

#[tokio::test]
async fn mark_preserves_other_fields() {
    let app = TestApp::spawn().await;
    let id = submit_one(&app, "Jane").await;
    let before = app.stored()[0].clone();
    app.login_as_admin().await;

    app.mark(&id).await.expect("Failed to execute request");

    let after = app.stored()[0].clone();
    assert_eq!(before.created_at, after.created_at);
    assert_eq!(before.id, after.id);
    assert_eq!(before.voucher, after.voucher);
    assert_ne!(before.status, after.status);
}

#[tokio::test]
async fn delete_removes_only_that_submission() {
    let app = TestApp::spawn().await;
    let keep = submit_one(&app, "Keep").await;
    let remove = submit_one(&app, "Remove").await;
    app.login_as_admin().await;

    let res = app.delete(&remove).await.expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let messages = listed(&app).await;
    assert_eq!(1, messages.len());
    assert_eq!(keep, messages[0]["id"]);
}

#[tokio::test]
async fn unknown_ids_are_accepted_as_noops() {
    let app = TestApp::spawn().await;
    submit_one(&app, "Jane").await;
    let before = app.stored();
    app.login_as_admin().await;

    let unknown = Uuid::new_v4().to_string();
    for id in [unknown.as_str(), "not-a-uuid"] {
        let res = app.mark(id).await.expect("Failed to execute request");
        assert_eq!(StatusCode::OK, res.status());
        let res = app.delete(id).await.expect("Failed to execute request");
        assert_eq!(StatusCode::OK, res.status());
    }

    assert_eq!(before, app.stored());
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = TestApp::spawn().await;
    app.login_as_admin().await;
    listed(&app).await;

    let res = app.logout().await.expect("Failed to execute request");
    assert_eq!(StatusCode::SEE_OTHER, res.status());

    let res = app.messages().await.expect("Failed to execute request");
    assert_eq!(StatusCode::UNAUTHORIZED, res.status());
}
