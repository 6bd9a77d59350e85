//! API Integration Tests
//!
//! Each test spawns the full axum application on an ephemeral port backed
//! by the in-memory store, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Local};
use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, token_cookie, TestServer,
};
use reqwest::{header, StatusCode};
use roomescape_core::value_objects::Role;

const PASSWORD: &str = "password";

/// Start a server with one logged-in member, returning the session token
async fn server_with_member() -> (TestServer, String) {
    let server = TestServer::start().await.expect("Failed to start server");
    server
        .seed_member("brown", "brown@email.com", PASSWORD, Role::Member)
        .await
        .unwrap();
    let token = server.login("brown@email.com", PASSWORD).await.unwrap();
    (server, token)
}

async fn create_theme(server: &TestServer) -> ThemeResponse {
    let response = server
        .post("/themes", &CreateThemeRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_time(server: &TestServer, start_at: &str) -> TimeResponse {
    let response = server
        .post("/times", &CreateTimeRequest::at(start_at))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup_and_login() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/members", &request).await.unwrap();
    let member: MemberResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(member.email, request.email);
    assert_eq!(member.role, "MEMBER");

    let response = server
        .post(
            "/login",
            &serde_json::json!({ "email": request.email, "password": request.password }),
        )
        .await
        .unwrap();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
    assert!(token_cookie(&response).is_some_and(|t| !t.is_empty()));
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    server.post("/members", &request).await.unwrap();
    let response = server.post("/members", &request).await.unwrap();

    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (server, _token) = server_with_member().await;

    let response = server
        .post(
            "/login",
            &serde_json::json!({ "email": "brown@email.com", "password": "wrong" }),
        )
        .await
        .unwrap();

    assert!(token_cookie(&response).is_none());
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_check() {
    let (server, token) = server_with_member().await;

    let response = server.get_auth("/login/check", &token).await.unwrap();
    let member: MemberResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(member.name, "brown");
    assert_eq!(member.email, "brown@email.com");
}

#[tokio::test]
async fn test_missing_credentials() {
    let server = TestServer::start().await.expect("Failed to start server");

    // No cookies at all
    let response = server.get("/login/check").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTH");

    // Cookies, but none named token
    let response = server
        .client
        .get(format!("{}/login/check", server.base_url()))
        .header(header::COOKIE, "theme=dark")
        .send()
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTH");
}

#[tokio::test]
async fn test_invalid_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get_auth("/login/check", "not-a-jwt").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let (server, token) = server_with_member().await;

    let response = server
        .post_auth("/logout", &token, &serde_json::json!({}))
        .await
        .unwrap();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("Max-Age=0"));
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_list_members_requires_admin() {
    let (server, member_token) = server_with_member().await;
    server
        .seed_member("admin", "admin@email.com", PASSWORD, Role::Admin)
        .await
        .unwrap();
    let admin_token = server.login("admin@email.com", PASSWORD).await.unwrap();

    let response = server.get_auth("/members", &member_token).await.unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "INSUFFICIENT_PERMISSIONS");

    let response = server.get_auth("/members", &admin_token).await.unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 2);
    assert!(members.iter().any(|m| m.role == "ADMIN"));
}

// ============================================================================
// Theme Tests
// ============================================================================

#[tokio::test]
async fn test_theme_crud() {
    let server = TestServer::start().await.expect("Failed to start server");

    let theme = create_theme(&server).await;

    let response = server.get("/themes").await.unwrap();
    let themes: Vec<ThemeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(themes, vec![theme]);

    let response = server.delete("/themes/1").await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete("/themes/1").await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_THEME");
}

#[tokio::test]
async fn test_theme_validation() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/themes",
            &serde_json::json!({ "name": "", "description": "d", "thumbnail": "t" }),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server.delete("/themes/abc").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_popular_themes() {
    let (server, token) = server_with_member().await;
    let quiet = create_theme(&server).await;
    let busy = create_theme(&server).await;
    let unbooked = create_theme(&server).await;
    let ten = create_time(&server, "10:00").await;
    let eleven = create_time(&server, "11:00").await;

    // Well inside the trailing week even if the server's clock crosses midnight
    let today = Local::now().date_naive();
    let one_day_ago = today - Duration::days(1);
    let two_days_ago = today - Duration::days(2);
    for (date, time_id, theme_id) in [
        (one_day_ago, ten.id, busy.id),
        (two_days_ago, eleven.id, busy.id),
        (one_day_ago, eleven.id, quiet.id),
    ] {
        let request = CreateReservationRequest::new(&date.to_string(), time_id, theme_id);
        let response = server
            .post_auth("/reservations", &token, &request)
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/themes/popular").await.unwrap();
    let popular: Vec<ThemeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<_> = popular.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![busy.id, quiet.id]);
    assert!(!ids.contains(&unbooked.id));
}

// ============================================================================
// Reservation Time Tests
// ============================================================================

#[tokio::test]
async fn test_time_crud() {
    let server = TestServer::start().await.expect("Failed to start server");

    let time = create_time(&server, "10:00").await;
    assert_eq!(time.start_at, "10:00");

    let response = server
        .post("/times", &CreateTimeRequest::at("10:00"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "DUPLICATE_RESERVATION_TIME");

    let response = server
        .post("/times", &CreateTimeRequest::at("half past ten"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get("/times").await.unwrap();
    let times: Vec<TimeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(times, vec![time]);

    let response = server.delete("/times/1").await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete("/times/1").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_available_times() {
    let (server, token) = server_with_member().await;
    let theme = create_theme(&server).await;
    let ten = create_time(&server, "10:00").await;
    let eleven = create_time(&server, "11:00").await;

    let request = CreateReservationRequest::new("2100-04-18", ten.id, theme.id);
    let response = server
        .post_auth("/reservations", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!(
            "/times/available?date=2100-04-18&themeId={}",
            theme.id
        ))
        .await
        .unwrap();
    let available: Vec<AvailableTimeResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let flags: Vec<_> = available
        .iter()
        .map(|a| (a.time.id, a.already_booked))
        .collect();
    assert_eq!(flags, vec![(ten.id, true), (eleven.id, false)]);

    let response = server.get("/times/available?date=2100-04-18").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_delete_time_in_use() {
    let (server, token) = server_with_member().await;
    let theme = create_theme(&server).await;
    let time = create_time(&server, "10:00").await;

    let request = CreateReservationRequest::new("2100-04-18", time.id, theme.id);
    server
        .post_auth("/reservations", &token, &request)
        .await
        .unwrap();

    let response = server.delete(&format!("/times/{}", time.id)).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "STILL_REFERENCED");
}

// ============================================================================
// Reservation Tests
// ============================================================================

#[tokio::test]
async fn test_create_reservation() {
    let (server, token) = server_with_member().await;
    let time = create_time(&server, "00:00").await;
    let theme = create_theme(&server).await;

    let request = CreateReservationRequest::new("2100-04-18", time.id, theme.id);
    let response = server
        .post_auth("/reservations", &token, &request)
        .await
        .unwrap();
    let reservation: ReservationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(reservation.date, "2100-04-18");
    assert_eq!(reservation.time.id, 1);
    assert_eq!(reservation.time.start_at, "00:00");
    assert_eq!(reservation.theme, theme);
    assert_eq!(reservation.name, "brown");

    // Repeating the same slot fails
    let response = server
        .post_auth("/reservations", &token, &request)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "DUPLICATE_RESERVATION");

    let response = server.get("/reservations").await.unwrap();
    let all: Vec<ReservationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_create_reservation_requires_login() {
    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateReservationRequest::new("2100-04-18", 1, 1);
    let response = server.post("/reservations", &request).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTH");
}

#[tokio::test]
async fn test_create_reservation_invalid_input() {
    let (server, token) = server_with_member().await;
    let time = create_time(&server, "10:00").await;
    let theme = create_theme(&server).await;

    for (request, expected_code) in [
        (
            CreateReservationRequest::new("2100-04-18", 99, theme.id),
            "INVALID_REFERENCE",
        ),
        (
            CreateReservationRequest::new("2100-04-18", time.id, 99),
            "INVALID_REFERENCE",
        ),
        (
            CreateReservationRequest::new("18-04-2100", time.id, theme.id),
            "INVALID_DATE",
        ),
    ] {
        let response = server
            .post_auth("/reservations", &token, &request)
            .await
            .unwrap();
        let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(code, expected_code);
    }
}

#[tokio::test]
async fn test_delete_reservation() {
    let (server, token) = server_with_member().await;
    let time = create_time(&server, "10:00").await;
    let theme = create_theme(&server).await;

    let response = server.delete("/reservations/1").await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_RESERVATION");

    let request = CreateReservationRequest::new("2100-04-18", time.id, theme.id);
    let response = server
        .post_auth("/reservations", &token, &request)
        .await
        .unwrap();
    let reservation: ReservationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/reservations/{}", reservation.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get("/reservations").await.unwrap();
    let all: Vec<ReservationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_my_reservations() {
    let (server, token) = server_with_member().await;
    server
        .seed_member("neo", "neo@email.com", PASSWORD, Role::Member)
        .await
        .unwrap();
    let other_token = server.login("neo@email.com", PASSWORD).await.unwrap();
    let time = create_time(&server, "10:00").await;
    let theme = create_theme(&server).await;

    let mut request = CreateReservationRequest::new("2100-04-18", time.id, theme.id);
    request.name = Some("guest".to_string());
    server
        .post_auth("/reservations", &token, &request)
        .await
        .unwrap();
    let request = CreateReservationRequest::new("2100-04-19", time.id, theme.id);
    server
        .post_auth("/reservations", &other_token, &request)
        .await
        .unwrap();

    let response = server.get_auth("/reservations-mine", &token).await.unwrap();
    let mine: Vec<ReservationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "guest");
    assert_eq!(mine[0].date, "2100-04-18");

    let response = server.get("/reservations-mine").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
