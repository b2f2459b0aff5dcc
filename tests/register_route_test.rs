//! HTTP tests for the registration form, driving the router in-process.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use registration_form::{app, AppState};
use tower::ServiceExt;

const VALID_BODY: &str = "fullName=Jane+Doe&email=jane%40gmail.com&password=Abc123%21%40&confirmPassword=Abc123%21%40&birthDate=1990-01-01";

async fn send(request: Request<Body>) -> (StatusCode, String) {
    let router = app(AppState::new().expect("templates compile"));
    let response = router.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let body = hyper::body::to_bytes(response.into_body())
        .await
        .expect("read body");

    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

async fn post_form(body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request");

    send(request).await
}

fn field_errors<'a>(html: &'a str, field: &str) -> Vec<&'a str> {
    let marker = format!("data-field=\"{field}\">");
    html.match_indices(&marker)
        .filter_map(|(start, _)| {
            let rest = &html[start + marker.len()..];
            rest.find('<').map(|end| &rest[..end])
        })
        .collect()
}

#[tokio::test]
async fn get_renders_empty_form() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("request");
    let (status, html) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<form method=\"post\""));
    for field in ["fullName", "email", "password", "confirmPassword", "birthDate"] {
        assert!(html.contains(&format!("name=\"{field}\"")), "missing {field}");
    }
    assert!(!html.contains("class=\"field-error\""));
    assert!(!html.contains("Registration successful"));
}

#[tokio::test]
async fn valid_submission_renders_success() {
    let (status, html) = post_form(VALID_BODY).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Registration successful"));
    assert!(!html.contains("class=\"field-error\""));
}

#[tokio::test]
async fn non_gmail_address_is_reported_on_email() {
    let body = VALID_BODY.replace("gmail", "yahoo");
    let (status, html) = post_form(&body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("Registration successful"));
    assert_eq!(field_errors(&html, "email"), vec!["Email should end in @gmail.com"]);
    assert_eq!(html.matches("class=\"field-error\"").count(), 1);
}

#[tokio::test]
async fn password_mismatch_is_reported_on_confirm_password() {
    let body = VALID_BODY.replace("confirmPassword=Abc123%21%40", "confirmPassword=different");
    let (status, html) = post_form(&body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field_errors(&html, "confirmPassword"),
        vec!["Passwords does not match"]
    );
    assert!(field_errors(&html, "password").is_empty());
}

#[tokio::test]
async fn weak_password_is_reported_on_password_only() {
    let body = VALID_BODY.replace("Abc123%21%40", "abc");
    let (_, html) = post_form(&body).await;

    assert_eq!(field_errors(&html, "password").len(), 2);
    assert!(field_errors(&html, "confirmPassword").is_empty());
}

#[tokio::test]
async fn digits_in_full_name_are_reported() {
    let body = VALID_BODY.replace("Jane+Doe", "Jane2");
    let (_, html) = post_form(&body).await;

    assert_eq!(
        field_errors(&html, "fullName"),
        vec!["Full name cannot contain numbers"]
    );
}

#[tokio::test]
async fn missing_fields_are_required() {
    let (status, html) = post_form("fullName=Jane+Doe").await;

    assert_eq!(status, StatusCode::OK);
    assert!(field_errors(&html, "fullName").is_empty());
    for field in ["email", "password", "confirmPassword", "birthDate"] {
        assert_eq!(field_errors(&html, field), vec!["Required"], "{field}");
    }
}

#[tokio::test]
async fn form_body_is_required_on_post() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .expect("request");
    let (status, _) = send(request).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn unusual_local_part_is_reported_on_email() {
    let body = VALID_BODY.replace("jane%40gmail.com", "ja%21ne%40gmail.com");
    let (status, html) = post_form(&body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("Registration successful"));
    assert_eq!(field_errors(&html, "email"), vec!["Email should be valid"]);
}
