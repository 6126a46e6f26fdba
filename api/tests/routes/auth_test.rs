#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::user::{Model as UserModel, UserRole};
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;

    fn post_json(uri: &str, payload: &Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from(serde_json::to_vec(payload).unwrap()))
            .unwrap()
    }

    /// Test Case: Successful registration returns a token
    #[tokio::test]
    #[serial]
    async fn test_register_success() {
        let (app, _) = make_test_app().await;

        let payload = json!({"name": "Grace", "email": "Grace@Example.com", "password": "supersecret"});
        let response = app.oneshot(post_json("/api/auth/register", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "User registered successfully");
        assert_eq!(json["data"]["email"], "grace@example.com");
        assert_eq!(json["data"]["role"], "User");
        assert!(json["data"]["token"].as_str().is_some());
        assert!(json["data"]["expires_at"].as_str().is_some());
    }

    /// Test Case: Registering an existing email conflicts
    #[tokio::test]
    #[serial]
    async fn test_register_duplicate_email() {
        let (app, state) = make_test_app().await;
        UserModel::create(state.db(), "Taken", "taken@example.com", "password123", UserRole::User)
            .await
            .unwrap();

        let payload = json!({"name": "Other", "email": "taken@example.com", "password": "password123"});
        let response = app.oneshot(post_json("/api/auth/register", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "A user with this email already exists");
    }

    /// Test Case: Short password is rejected
    #[tokio::test]
    #[serial]
    async fn test_register_short_password() {
        let (app, _) = make_test_app().await;

        let payload = json!({"name": "Short", "email": "short@example.com", "password": "123"});
        let response = app.oneshot(post_json("/api/auth/register", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Test Case: Login with right and wrong passwords
    #[tokio::test]
    #[serial]
    async fn test_login() {
        let (app, state) = make_test_app().await;
        UserModel::create(state.db(), "Lin", "lin@example.com", "password123", UserRole::Admin)
            .await
            .unwrap();

        let ok = app
            .clone()
            .oneshot(post_json("/api/auth/login", &json!({"email": "lin@example.com", "password": "password123"})))
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);
        let json = get_json_body(ok).await;
        assert_eq!(json["message"], "Login successful");
        assert_eq!(json["data"]["role"], "Admin");

        let wrong = app
            .oneshot(post_json("/api/auth/login", &json!({"email": "lin@example.com", "password": "nope-nope"})))
            .await
            .unwrap();
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
        let json = get_json_body(wrong).await;
        assert_eq!(json["message"], "Invalid email or password");
    }

    /// Test Case: /me requires a token and returns the caller
    #[tokio::test]
    #[serial]
    async fn test_me() {
        let (app, state) = make_test_app().await;
        let user = UserModel::create(state.db(), "Me", "me@example.com", "password123", UserRole::User)
            .await
            .unwrap();

        let anonymous = Request::builder().uri("/api/auth/me").body(AxumBody::empty()).unwrap();
        let response = app.clone().oneshot(anonymous).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let req = Request::builder()
            .uri("/api/auth/me")
            .header("Authorization", bearer(&user))
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["id"], user.id);
        assert!(json["data"].get("password_hash").is_none());
    }

    /// Test Case: A garbage token is rejected
    #[tokio::test]
    #[serial]
    async fn test_invalid_token() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .uri("/api/auth/me")
            .header("Authorization", "Bearer not-a-jwt")
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Invalid or expired token");
    }
}
