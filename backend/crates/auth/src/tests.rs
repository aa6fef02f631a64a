//! Router-level tests for the auth crate
//!
//! Exercises the full HTTP surface against the in-memory repository.

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::infra::memory::InMemoryAccountRepository;
    use crate::presentation::router::auth_router_generic;

    fn test_router() -> Router {
        auth_router_generic(InMemoryAccountRepository::new(), AuthConfig::development())
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn signup_body() -> Value {
        json!({
            "username": "peter",
            "email": "peter@dailybugle.com",
            "password": "webslinger"
        })
    }

    #[tokio::test]
    async fn test_signup_returns_token() {
        let app = test_router();

        let response = app
            .oneshot(json_request("POST", "/signup", signup_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = read_json(response).await;
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_signup_duplicate_username_conflict() {
        let app = test_router();

        let first = app
            .clone()
            .oneshot(json_request("POST", "/signup", signup_body()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        // Same username (different case), different email
        let second = app
            .oneshot(json_request(
                "POST",
                "/signup",
                json!({
                    "username": "Peter",
                    "email": "other@dailybugle.com",
                    "password": "webslinger"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(second.status(), StatusCode::CONFLICT);
        let body = read_json(second).await;
        assert!(body["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_conflict() {
        let app = test_router();

        let first = app
            .clone()
            .oneshot(json_request("POST", "/signup", signup_body()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .oneshot(json_request(
                "POST",
                "/signup",
                json!({
                    "username": "miles",
                    "email": "Peter@DailyBugle.com",
                    "password": "webslinger"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_signup_short_password_rejected() {
        let app = test_router();

        let response = app
            .oneshot(json_request(
                "POST",
                "/signup",
                json!({
                    "username": "peter",
                    "email": "peter@dailybugle.com",
                    "password": "webs"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_signup_invalid_email_rejected() {
        let app = test_router();

        let response = app
            .oneshot(json_request(
                "POST",
                "/signup",
                json!({
                    "username": "peter",
                    "email": "not-an-email",
                    "password": "webslinger"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_with_username() {
        let app = test_router();

        app.clone()
            .oneshot(json_request("POST", "/signup", signup_body()))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "POST",
                "/login",
                json!({ "identifier": "peter", "password": "webslinger" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_login_with_email() {
        let app = test_router();

        app.clone()
            .oneshot(json_request("POST", "/signup", signup_body()))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "POST",
                "/login",
                json!({ "identifier": "Peter@DailyBugle.com", "password": "webslinger" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_login_failures_are_uniform() {
        let app = test_router();

        app.clone()
            .oneshot(json_request("POST", "/signup", signup_body()))
            .await
            .unwrap();

        // Wrong password for an existing account
        let wrong_password = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/login",
                json!({ "identifier": "peter", "password": "wallcrawler" }),
            ))
            .await
            .unwrap();

        // Account that does not exist at all
        let unknown_account = app
            .oneshot(json_request(
                "POST",
                "/login",
                json!({ "identifier": "nobody", "password": "wallcrawler" }),
            ))
            .await
            .unwrap();

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_account.status(), StatusCode::UNAUTHORIZED);

        // Identical bodies, nothing to enumerate accounts with
        let body_a = read_json(wrong_password).await;
        let body_b = read_json(unknown_account).await;
        assert_eq!(body_a, body_b);
    }

    #[tokio::test]
    async fn test_profile_roundtrip() {
        let app = test_router();

        let signup = app
            .clone()
            .oneshot(json_request("POST", "/signup", signup_body()))
            .await
            .unwrap();
        let token = read_json(signup).await["token"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/profile")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["username"], "peter");
        assert_eq!(body["email"], "peter@dailybugle.com");
        assert_eq!(body["progress"], json!({}));
        assert!(body["id"].as_str().is_some());
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_profile_without_token_unauthorized() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_profile_with_garbage_token_unauthorized() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/profile")
                    .header(header::AUTHORIZATION, "Bearer not.a.real.token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_from_other_secret_rejected() {
        // Two routers with independent development configs have
        // different token secrets
        let app_a = test_router();
        let app_b = test_router();

        let signup = app_a
            .oneshot(json_request("POST", "/signup", signup_body()))
            .await
            .unwrap();
        let token = read_json(signup).await["token"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app_b
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/profile")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::log_in::{LogInInput, LogInUseCase};
    use crate::application::sign_up::{SignUpInput, SignUpUseCase};
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryAccountRepository;

    fn harness() -> (Arc<InMemoryAccountRepository>, Arc<AuthConfig>) {
        (
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(AuthConfig::development()),
        )
    }

    fn signup_input() -> SignUpInput {
        SignUpInput {
            user_name: "peter".to_string(),
            email: "peter@dailybugle.com".to_string(),
            password: "webslinger".to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_token_identifies_new_account() {
        let (repo, config) = harness();
        let use_case = SignUpUseCase::new(repo, config.clone());

        let output = use_case.execute(signup_input()).await.unwrap();

        let claims = config.token.verify(&output.token).unwrap();
        assert_eq!(claims.account_id, output.account_id.into_uuid());
    }

    #[tokio::test]
    async fn test_signup_whitespace_username_rejected() {
        let (repo, config) = harness();
        let use_case = SignUpUseCase::new(repo, config);

        let result = use_case
            .execute(SignUpInput {
                user_name: "peter parker".to_string(),
                ..signup_input()
            })
            .await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_signup_username_with_at_sign_rejected() {
        // An `@` in a username would make the login identifier route to
        // the email lookup, stranding the account. Signup must refuse
        // it rather than create an account that cannot log in.
        let (repo, config) = harness();
        let use_case = SignUpUseCase::new(repo, config);

        let result = use_case
            .execute(SignUpInput {
                user_name: "pet@er".to_string(),
                ..signup_input()
            })
            .await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_login_identifier_is_trimmed_and_case_insensitive() {
        let (repo, config) = harness();
        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(signup_input())
            .await
            .unwrap();

        let use_case = LogInUseCase::new(repo, config);

        let result = use_case
            .execute(LogInInput {
                identifier: "  PETER  ".to_string(),
                password: "webslinger".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }
}
