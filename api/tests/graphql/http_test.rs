#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::user::{Model as UserModel, UserRole};
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    fn graphql(query: &str, token: Option<&str>) -> Request<AxumBody> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", token);
        }
        builder
            .body(AxumBody::from(json!({ "query": query }).to_string()))
            .unwrap()
    }

    /// Test Case: Bearer token identifies the caller
    #[tokio::test]
    #[serial]
    async fn test_graphql_me_over_http() {
        let (app, state) = make_test_app().await;
        let user = UserModel::create(state.db(), "Http", "http@example.com", "password123", UserRole::User)
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(graphql("{ me { email } }", Some(&bearer(&user))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["me"]["email"], "http@example.com");

        let response = app
            .oneshot(graphql("{ me { email } }", Some("Bearer broken")))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
    }

    /// Test Case: GraphiQL is served on GET
    #[tokio::test]
    #[serial]
    async fn test_graphiql_page() {
        let (app, _) = make_test_app().await;

        let req = Request::builder().uri("/graphql").body(AxumBody::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("graphiql"));
    }
}
