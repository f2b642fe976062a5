use reqwest::StatusCode;

use voucher_desk::model::SubmissionStatus;

use crate::helpers::{NewSubmission, TestApp};

#[tokio::test]
async fn index_serves_the_form() {
    let app = TestApp::spawn().await;

    let res = app.index().await.expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let body = res.text().await.unwrap();
    assert!(body.contains(r#"action="/submit""#));
}

#[tokio::test]
async fn submit_stores_a_normalized_record() {
    let app = TestApp::spawn().await;

    let res = app
        .submit(&NewSubmission::valid())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    assert!(res.text().await.unwrap().contains("Thank you, Jane!"));

    let stored = app.stored();
    assert_eq!(1, stored.len());
    let record = &stored[0];
    assert_eq!("Jane", record.name);
    assert_eq!("123", record.phone);
    assert_eq!("j@x.com", record.email);
    assert_eq!("", record.address);
    assert_eq!("AB12", record.voucher);
    assert_eq!(SubmissionStatus::New, record.status);
}

#[tokio::test]
async fn submit_accepts_json() {
    let app = TestApp::spawn().await;

    let res = app
        .submit_json(&NewSubmission::valid())
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    assert_eq!(1, app.stored().len());
}

#[tokio::test]
async fn submit_accepts_long_fields() {
    let app = TestApp::spawn().await;
    let name = "J".repeat(300);
    let address = "Flat 12, Long Street\n".repeat(40);

    let new_submission = NewSubmission {
        name: Some(name.clone()),
        address: Some(address.clone()),
        ..NewSubmission::valid()
    };
    let res = app
        .submit(&new_submission)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let stored = app.stored();
    assert_eq!(1, stored.len());
    assert_eq!(name, stored[0].name);
    assert_eq!(address.trim(), stored[0].address);
}

#[tokio::test]
async fn submit_trims_fields_and_allows_missing_address() {
    let app = TestApp::spawn().await;

    let new_submission = NewSubmission {
        name: Some("  Jane Doe ".into()),
        phone: Some(" +1 555 0100 ".into()),
        email: Some(" jane@example.com\n".into()),
        address: None,
        voucher: Some("summer-24".into()),
    };
    let res = app
        .submit(&new_submission)
        .await
        .expect("Failed to execute request");
    assert!(res.status().is_success());

    let record = &app.stored()[0];
    assert_eq!("Jane Doe", record.name);
    assert_eq!("+1 555 0100", record.phone);
    assert_eq!("jane@example.com", record.email);
    assert_eq!("", record.address);
    assert_eq!("SUMMER-24", record.voucher);
}

#[tokio::test]
async fn submit_escapes_the_name_in_the_reply() {
    let app = TestApp::spawn().await;

    let new_submission = NewSubmission {
        name: Some("<script>alert(1)</script>".into()),
        ..NewSubmission::valid()
    };
    let res = app
        .submit(&new_submission)
        .await
        .expect("Failed to execute request");

    let body = res.text().await.unwrap();
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
    // Stored verbatim, escaped only on output
    assert_eq!("<script>alert(1)</script>", app.stored()[0].name);
}

#[tokio::test]
async fn submit_returns_bad_request_for_missing_data() {
    let app = TestApp::spawn().await;

    let test_cases = vec![
        (
            "missing name",
            NewSubmission {
                name: None,
                ..NewSubmission::valid()
            },
        ),
        (
            "missing phone",
            NewSubmission {
                phone: None,
                ..NewSubmission::valid()
            },
        ),
        (
            "missing email",
            NewSubmission {
                email: None,
                ..NewSubmission::valid()
            },
        ),
        (
            "missing voucher",
            NewSubmission {
                voucher: None,
                ..NewSubmission::valid()
            },
        ),
        (
            "blank voucher",
            NewSubmission {
                voucher: Some("   ".into()),
                ..NewSubmission::valid()
            },
        ),
        ("empty form", NewSubmission::default()),
    ];

    for (desc, new_submission) in test_cases {
        let res = app
            .submit(&new_submission)
            .await
            .expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "API did not fail when payload was {}",
            desc
        );
        assert_eq!(
            "Please fill in all required fields.",
            res.text().await.unwrap(),
            "{}",
            desc
        );
    }

    assert!(app.stored().is_empty());
    assert_eq!("[]", std::fs::read_to_string(app.store_path()).unwrap());
}

#[tokio::test]
async fn most_recent_submission_comes_first() {
    let app = TestApp::spawn().await;

    for name in ["First", "Second"] {
        let new_submission = NewSubmission {
            name: Some(name.into()),
            ..NewSubmission::valid()
        };
        app.submit(&new_submission)
            .await
            .expect("Failed to execute request");
    }

    let stored = app.stored();
    assert_eq!(2, stored.len());
    assert_eq!("Second", stored[0].name);
    assert_eq!("First", stored[1].name);
    assert_ne!(stored[0].id, stored[1].id);
}
