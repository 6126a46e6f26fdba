#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::user::{Model as UserModel, UserRole};
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;

    struct TestData {
        admin: UserModel,
        regular: UserModel,
        target: UserModel,
    }

    async fn setup_test_data(db: &DatabaseConnection) -> TestData {
        let admin = UserModel::create(db, "Root", "root@example.com", "password123", UserRole::Admin)
            .await
            .unwrap();
        let regular = UserModel::create(db, "Regular", "regular@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let target = UserModel::create(db, "Target", "target@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        TestData { admin, regular, target }
    }

    fn authed(method: &str, uri: &str, token: &str) -> Request<AxumBody> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", token)
            .body(AxumBody::empty())
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, token: &str, payload: &Value) -> Request<AxumBody> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header("Authorization", token)
            .body(AxumBody::from(serde_json::to_vec(payload).unwrap()))
            .unwrap()
    }

    /// Test Case: User management is admin-only
    #[tokio::test]
    #[serial]
    async fn test_list_users_requires_admin() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;

        let response = app
            .clone()
            .oneshot(authed("GET", "/api/users", &bearer(&data.regular)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Admin access required");

        let response = app
            .oneshot(authed("GET", "/api/users?role=user&sort=name", &bearer(&data.admin)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["total"], 2);
        assert_eq!(json["data"]["users"][0]["name"], "Regular");
    }

    /// Test Case: Unknown role filter is a bad request
    #[tokio::test]
    #[serial]
    async fn test_list_users_invalid_role() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;

        let response = app
            .oneshot(authed("GET", "/api/users?role=owner", &bearer(&data.admin)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Invalid role");
    }

    /// Test Case: Admin promotes a user
    #[tokio::test]
    #[serial]
    async fn test_update_user_role() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;

        let uri = format!("/api/users/{}", data.target.id);
        let response = app
            .oneshot(json_request("PUT", &uri, &bearer(&data.admin), &json!({"role": "Admin"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["role"], "Admin");
        assert_eq!(json["message"], "User updated successfully");
    }

    /// Test Case: Admin deletes another user but not themself
    #[tokio::test]
    #[serial]
    async fn test_delete_user() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let admin = bearer(&data.admin);

        let own = format!("/api/users/{}", data.admin.id);
        let response = app.clone().oneshot(authed("DELETE", &own, &admin)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let uri = format!("/api/users/{}", data.target.id);
        let response = app.clone().oneshot(authed("DELETE", &uri, &admin)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "User deleted successfully");

        let response = app.oneshot(authed("GET", &uri, &admin)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], format!("User {} not found", data.target.id));
    }

    /// Test Case: Deleting a user removes their bookings and reviews
    #[tokio::test]
    #[serial]
    async fn test_delete_user_cascades() {
        use chrono::NaiveDate;
        use db::models::{apartment::Model as ApartmentModel, booking, review};
        use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
        use services::{
            booking_service::{BookingService, CreateBooking},
            review_service::{CreateReview, ReviewService},
        };
        use util::jwt::Claims;

        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let flat = ApartmentModel::create(state.db(), "Flat", "", "Oslo", 1, 1, vec![], 100.0)
            .await
            .unwrap();

        for (user, month) in [(&data.target, 8), (&data.regular, 9)] {
            let actor = Claims { sub: user.id, email: user.email.clone(), admin: false, exp: 0 };
            BookingService::create(
                state.db(),
                &actor,
                CreateBooking {
                    apartment_id: flat.id,
                    check_in: NaiveDate::from_ymd_opt(2025, month, 1).unwrap(),
                    check_out: NaiveDate::from_ymd_opt(2025, month, 5).unwrap(),
                },
            )
            .await
            .unwrap();
            ReviewService::create(
                state.db(),
                CreateReview { apartment_id: flat.id, user_id: user.id, rating: 5, comment: String::new() },
            )
            .await
            .unwrap();
        }

        let uri = format!("/api/users/{}", data.target.id);
        let response = app
            .clone()
            .oneshot(authed("DELETE", &uri, &bearer(&data.admin)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bookings_left = booking::Entity::find()
            .filter(booking::Column::UserId.eq(data.target.id))
            .count(state.db())
            .await
            .unwrap();
        let reviews_left = review::Entity::find()
            .filter(review::Column::UserId.eq(data.target.id))
            .count(state.db())
            .await
            .unwrap();
        assert_eq!((bookings_left, reviews_left), (0, 0));

        // Other guests' stays are untouched
        let response = app
            .oneshot(authed("GET", "/api/me/bookings", &bearer(&data.regular)))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().map(Vec::len), Some(1));
    }

    /// Test Case: Users edit their own profile through /me
    #[tokio::test]
    #[serial]
    async fn test_update_own_profile() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let token = bearer(&data.regular);

        let response = app
            .clone()
            .oneshot(json_request("PUT", "/api/me", &token, &json!({"name": "Renamed"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["name"], "Renamed");

        let response = app
            .oneshot(json_request("PUT", "/api/me", &token, &json!({"email": "target@example.com"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
