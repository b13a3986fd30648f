#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::auth::jwt;
    use crate::tests::{body_json, form_request, get_authed, json_request, setup_test_app};

    async fn signup(
        app: &axum::Router,
        name: &str,
        email: &str,
        password: &str,
    ) -> axum::http::StatusCode {
        let req = json_request(
            "POST",
            "/api/v1/token/signup",
            None,
            json!({ "name": name, "email": email, "password": password }),
        );
        app.clone().oneshot(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_signup_creates_user() {
        let (app, _) = setup_test_app().await;
        let status = signup(&app, "Alice", "alice@example.com", "s3cret-pass").await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_conflicts() {
        let (app, _) = setup_test_app().await;
        assert_eq!(signup(&app, "Alice", "alice@example.com", "s3cret-pass").await, StatusCode::CREATED);
        assert_eq!(signup(&app, "Alice 2", "alice@example.com", "other-pass").await, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email_is_404() {
        let (app, _) = setup_test_app().await;
        let response = app
            .oneshot(form_request("/api/v1/token", "username=ghost%40example.com&password=whatever"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password_is_401() {
        let (app, _) = setup_test_app().await;
        signup(&app, "Alice", "alice@example.com", "s3cret-pass").await;

        let response = app
            .oneshot(form_request("/api/v1/token", "username=alice%40example.com&password=wrong"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_authenticate_issues_token_with_email_subject() {
        let (app, state) = setup_test_app().await;
        signup(&app, "Alice", "alice@example.com", "s3cret-pass").await;

        let response = app
            .oneshot(form_request("/api/v1/token", "username=alice%40example.com&password=s3cret-pass"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["token_type"], "bearer");

        let claims =
            jwt::validate_token(body["access_token"].as_str().unwrap(), &state.config.auth).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.name, "Alice");

        // Expiry is 60 minutes from issuance, within clock-skew tolerance.
        let expected = chrono::Utc::now().timestamp() + 60 * 60;
        assert!((claims.exp - expected).abs() <= 5);
    }

    #[tokio::test]
    async fn test_issued_token_opens_protected_routes() {
        let (app, _) = setup_test_app().await;
        signup(&app, "Alice", "alice@example.com", "s3cret-pass").await;

        let response = app
            .clone()
            .oneshot(form_request("/api/v1/token", "username=alice%40example.com&password=s3cret-pass"))
            .await
            .unwrap();
        let body = body_json(response).await;
        let bearer = format!("Bearer {}", body["access_token"].as_str().unwrap());

        let response = app.oneshot(get_authed("/api/v1/manuals", &bearer)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_signup_response_contains_no_password_material() {
        let (app, _) = setup_test_app().await;
        let req = json_request(
            "POST",
            "/api/v1/token/signup",
            None,
            json!({ "name": "Alice", "email": "alice@example.com", "password": "s3cret-pass" }),
        );
        let response = app.oneshot(req).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["email"], "alice@example.com");
        assert!(body.get("password").is_none());
        assert!(body.get("hashed_password").is_none());
    }
}
