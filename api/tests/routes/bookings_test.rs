#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::{
        apartment::Model as ApartmentModel,
        user::{Model as UserModel, UserRole},
    };
    use sea_orm::DatabaseConnection;
    use serde_json::{Value, json};
    use serial_test::serial;
    use tower::ServiceExt;

    struct TestData {
        admin: UserModel,
        alice: UserModel,
        bob: UserModel,
        flat: ApartmentModel,
    }

    async fn setup_test_data(db: &DatabaseConnection) -> TestData {
        let admin = UserModel::create(db, "Admin", "admin@example.com", "password123", UserRole::Admin)
            .await
            .unwrap();
        let alice = UserModel::create(db, "Alice", "alice@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let bob = UserModel::create(db, "Bob", "bob@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let flat = ApartmentModel::create(db, "Old Town Flat", "", "Prague", 2, 1, vec![], 99.99)
            .await
            .unwrap();
        TestData { admin, alice, bob, flat }
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

    fn authed(method: &str, uri: &str, token: &str) -> Request<AxumBody> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", token)
            .body(AxumBody::empty())
            .unwrap()
    }

    async fn book(app: &axum::Router, token: &str, apartment_id: i64, check_in: &str, check_out: &str) -> axum::response::Response {
        let payload = json!({"apartment_id": apartment_id, "check_in": check_in, "check_out": check_out});
        app.clone()
            .oneshot(json_request("POST", "/api/bookings", token, &payload))
            .await
            .unwrap()
    }

    /// Test Case: Booking computes nights and price
    #[tokio::test]
    #[serial]
    async fn test_create_booking_prices_stay() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let alice = bearer(&data.alice);

        let response = book(&app, &alice, data.flat.id, "2026-07-01", "2026-07-04").await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Booking created successfully");
        assert_eq!(json["data"]["nights"], 3);
        assert_eq!(json["data"]["total_price"], 299.97);
        assert_eq!(json["data"]["user_id"], data.alice.id);
        assert_eq!(json["data"]["check_in"], "2026-07-01");
    }

    /// Test Case: Overlapping stays conflict, back-to-back stays do not
    #[tokio::test]
    #[serial]
    async fn test_overlapping_booking_conflicts() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let alice = bearer(&data.alice);
        let bob = bearer(&data.bob);

        let first = book(&app, &alice, data.flat.id, "2026-07-01", "2026-07-05").await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let overlap = book(&app, &bob, data.flat.id, "2026-07-04", "2026-07-08").await;
        assert_eq!(overlap.status(), StatusCode::CONFLICT);
        let json = get_json_body(overlap).await;
        assert_eq!(json["message"], "Apartment is already booked for the selected dates");

        let adjacent = book(&app, &bob, data.flat.id, "2026-07-05", "2026-07-08").await;
        assert_eq!(adjacent.status(), StatusCode::CREATED);
    }

    /// Test Case: Invalid date ranges and unknown apartments
    #[tokio::test]
    #[serial]
    async fn test_create_booking_rejects_bad_input() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let alice = bearer(&data.alice);

        let same_day = book(&app, &alice, data.flat.id, "2026-07-01", "2026-07-01").await;
        assert_eq!(same_day.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(same_day).await;
        assert_eq!(json["message"], "Check-out must be after check-in");

        let missing = book(&app, &alice, 4242, "2026-07-01", "2026-07-03").await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let anonymous = Request::builder()
            .method("POST")
            .uri("/api/bookings")
            .header(CONTENT_TYPE, "application/json")
            .body(AxumBody::from("{}"))
            .unwrap();
        let response = app.oneshot(anonymous).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    /// Test Case: Users see only their own bookings, admins see all
    #[tokio::test]
    #[serial]
    async fn test_list_and_get_visibility() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let alice = bearer(&data.alice);
        let bob = bearer(&data.bob);
        let admin = bearer(&data.admin);

        let created = book(&app, &alice, data.flat.id, "2026-08-01", "2026-08-03").await;
        let booking_id = get_json_body(created).await["data"]["id"].as_i64().unwrap();
        book(&app, &bob, data.flat.id, "2026-08-10", "2026-08-12").await;

        let response = app.clone().oneshot(authed("GET", "/api/bookings", &alice)).await.unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["total"], 1);

        let response = app.clone().oneshot(authed("GET", "/api/bookings", &admin)).await.unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["total"], 2);

        let uri = format!("/api/bookings/{booking_id}");
        let response = app.clone().oneshot(authed("GET", &uri, &bob)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app.clone().oneshot(authed("GET", &uri, &admin)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(authed("GET", "/api/me/bookings", &alice)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    /// Test Case: Changing dates recomputes the price and ignores the booking itself
    #[tokio::test]
    #[serial]
    async fn test_update_booking_dates() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let alice = bearer(&data.alice);

        let created = book(&app, &alice, data.flat.id, "2026-09-01", "2026-09-04").await;
        let booking_id = get_json_body(created).await["data"]["id"].as_i64().unwrap();

        let uri = format!("/api/bookings/{booking_id}");
        let response = app
            .oneshot(json_request("PUT", &uri, &alice, &json!({"check_out": "2026-09-05"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["nights"], 4);
        assert_eq!(json["data"]["total_price"], 399.96);
    }

    /// Test Case: Cancelling frees the dates
    #[tokio::test]
    #[serial]
    async fn test_cancel_booking() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let alice = bearer(&data.alice);
        let bob = bearer(&data.bob);

        let created = book(&app, &alice, data.flat.id, "2026-10-01", "2026-10-03").await;
        let booking_id = get_json_body(created).await["data"]["id"].as_i64().unwrap();
        let uri = format!("/api/bookings/{booking_id}");

        let response = app.clone().oneshot(authed("DELETE", &uri, &bob)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app.clone().oneshot(authed("DELETE", &uri, &alice)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Booking cancelled successfully");

        let rebook = book(&app, &bob, data.flat.id, "2026-10-01", "2026-10-03").await;
        assert_eq!(rebook.status(), StatusCode::CREATED);
    }
}
