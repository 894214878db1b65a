//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL (SESSION_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_found, assert_json, assert_status, check_test_env, fixtures::*, Session, TestServer,
};
use reqwest::{header::LOCATION, StatusCode};

/// Sign a new user up in a fresh session and return the session and user id
async fn signed_up(server: &TestServer) -> (Session, SignupForm, i64) {
    let session = server.session().unwrap();
    let form = SignupForm::unique();

    let response = session.post_form("/signup", &form).await.unwrap();
    assert_found(response, "/").await.unwrap();

    let user_id = current_user_id(&session).await;
    (session, form, user_id)
}

/// Read the logged-in user's id from a redirect
///
/// Unfollowing an id nobody has ever held changes nothing.
async fn current_user_id(session: &Session) -> i64 {
    let response = session.post("/users/stop-following/0").await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    let location = response.headers()[LOCATION].to_str().unwrap().to_string();

    location
        .trim_start_matches("/users/")
        .trim_end_matches("/following")
        .parse()
        .unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.session().unwrap();

    let response = session.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = session.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Signup / Login Tests
// ============================================================================

#[tokio::test]
async fn test_signup_logs_in() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (session, form, user_id) = signed_up(&server).await;

    let response = session.get("/").await.unwrap();
    let timeline: Data<Vec<MessageResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(timeline.data.is_empty());

    let response = session.get(&format!("/users/{user_id}")).await.unwrap();
    let profile: Data<ProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.data.user.username, form.username);
    assert_eq!(profile.data.messages_count, 0);
}

#[tokio::test]
async fn test_signup_rejections_rerender() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (session, existing, _) = signed_up(&server).await;

    let blank_username = SignupForm {
        username: String::new(),
        ..SignupForm::unique()
    };
    let response = session.post_form("/signup", &blank_username).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let blank_email = SignupForm {
        email: String::new(),
        ..SignupForm::unique()
    };
    let response = session.post_form("/signup", &blank_email).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let taken = SignupForm {
        username: existing.username.clone(),
        ..SignupForm::unique()
    };
    let response = session.post_form("/signup", &taken).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Username already taken"));

    // None of the rejected forms created an account
    let anonymous = server.session().unwrap();
    let login = LoginForm::from_signup(&blank_email);
    let response = anonymous.post_form("/login", &login).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_and_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (first, form, _) = signed_up(&server).await;

    let response = first.post("/logout").await.unwrap();
    assert_found(response, "/login").await.unwrap();
    let response = first.get("/").await.unwrap();
    assert_found(response, "/signup").await.unwrap();

    let response = first
        .post_form(
            "/login",
            &LoginForm {
                username: form.username.clone(),
                password: "wrong-password".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("Invalid credentials."));

    let response = first
        .post_form("/login", &LoginForm::from_signup(&form))
        .await
        .unwrap();
    assert_found(response, "/").await.unwrap();
    let response = first.get("/").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (alice, _, alice_id) = signed_up(&server).await;
    let (bob, bob_form, bob_id) = signed_up(&server).await;

    let response = bob.post_form("/messages/new", &MessageForm::new("hello from bob")).await.unwrap();
    assert_found(response, &format!("/users/{bob_id}")).await.unwrap();

    let response = alice.post(&format!("/users/follow/{bob_id}")).await.unwrap();
    assert_found(response, &format!("/users/{alice_id}/following")).await.unwrap();

    let response = alice.get(&format!("/users/{alice_id}/following")).await.unwrap();
    let following: Data<Vec<UserResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(following.data.len(), 1);
    assert_eq!(following.data[0].username, bob_form.username);

    let response = alice.get("/").await.unwrap();
    let timeline: Data<Vec<MessageResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(timeline.data.len(), 1);
    assert_eq!(timeline.data[0].text, "hello from bob");

    let response = alice.post(&format!("/users/follow/{alice_id}")).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "CANNOT_FOLLOW_SELF");

    let response = alice.post(&format!("/users/stop-following/{bob_id}")).await.unwrap();
    assert_found(response, &format!("/users/{alice_id}/following")).await.unwrap();

    let response = alice.get(&format!("/users/{bob_id}/followers")).await.unwrap();
    let followers: Data<Vec<UserResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(followers.data.is_empty());
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_message_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (author, _, author_id) = signed_up(&server).await;
    let (other, _, _) = signed_up(&server).await;

    let response = author.post_form("/messages/new", &MessageForm::new("test message")).await.unwrap();
    assert_found(response, &format!("/users/{author_id}")).await.unwrap();

    let response = author.post_form("/messages/new", &MessageForm::new("")).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = author.get(&format!("/users/{author_id}")).await.unwrap();
    let profile: Data<ProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.data.messages_count, 1);
    let message_id = profile.data.messages[0].id;

    let response = other.post(&format!("/messages/{message_id}/delete")).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = author.post(&format!("/messages/{message_id}/delete")).await.unwrap();
    assert_found(response, &format!("/users/{author_id}")).await.unwrap();

    let response = author.get(&format!("/messages/{message_id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Account Deletion Tests
// ============================================================================

#[tokio::test]
async fn test_delete_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (doomed, _, doomed_id) = signed_up(&server).await;
    let (survivor, _, survivor_id) = signed_up(&server).await;

    let response = doomed.post("/users/delete").await.unwrap();
    assert_found(response, "/signup").await.unwrap();

    let response = survivor.get(&format!("/users/{doomed_id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    let response = survivor.get(&format!("/users/{survivor_id}")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let anonymous = server.session().unwrap();
    let response = anonymous.post("/users/delete").await.unwrap();
    assert_found(response, "/login").await.unwrap();
}
