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
        guest: UserModel,
        loft: ApartmentModel,
        villa: ApartmentModel,
    }

    async fn setup_test_data(db: &DatabaseConnection) -> TestData {
        let admin = UserModel::create(db, "Admin", "admin@example.com", "password123", UserRole::Admin)
            .await
            .unwrap();
        let guest = UserModel::create(db, "Guest", "guest@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let loft = ApartmentModel::create(
            db,
            "Harbour Loft",
            "Bright loft above the harbour",
            "Lisbon",
            1,
            1,
            vec!["WiFi".into()],
            80.0,
        )
        .await
        .unwrap();
        let villa = ApartmentModel::create(
            db,
            "Cliff Villa",
            "Villa with a pool",
            "Cape Town",
            4,
            3,
            vec!["Pool".into(), "WiFi".into()],
            320.0,
        )
        .await
        .unwrap();

        TestData { admin, guest, loft, villa }
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, payload: &Value) -> Request<AxumBody> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", token);
        }
        builder
            .body(AxumBody::from(serde_json::to_vec(payload).unwrap()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<AxumBody> {
        Request::builder().uri(uri).body(AxumBody::empty()).unwrap()
    }

    /// Test Case: Listing is public and paginated
    #[tokio::test]
    #[serial]
    async fn test_list_apartments_public() {
        let (app, state) = make_test_app().await;
        setup_test_data(state.db()).await;

        let response = app.oneshot(get("/api/apartments?per_page=1&sort=-price_per_night")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["total"], 2);
        assert_eq!(json["data"]["per_page"], 1);
        let apartments = json["data"]["apartments"].as_array().unwrap();
        assert_eq!(apartments.len(), 1);
        assert_eq!(apartments[0]["name"], "Cliff Villa");
    }

    /// Test Case: Filters narrow the list
    #[tokio::test]
    #[serial]
    async fn test_list_apartments_filters() {
        let (app, state) = make_test_app().await;
        setup_test_data(state.db()).await;

        let response = app
            .clone()
            .oneshot(get("/api/apartments?amenity=pool&min_bedrooms=2"))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["apartments"][0]["location"], "Cape Town");

        let response = app
            .clone()
            .oneshot(get("/api/apartments?min_price=100&max_price=50"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app.oneshot(get("/api/apartments?sort=name;drop")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Invalid sort parameter");
    }

    /// Test Case: Detail view includes the rating summary
    #[tokio::test]
    #[serial]
    async fn test_get_apartment_with_rating() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;

        let response = app
            .clone()
            .oneshot(get(&format!("/api/apartments/{}", data.loft.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["review_count"], 0);
        assert!(json["data"].get("average_rating").is_none());

        let response = app.oneshot(get("/api/apartments/9999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Apartment 9999 not found");
    }

    /// Test Case: Only admins may create apartments
    #[tokio::test]
    #[serial]
    async fn test_create_apartment_requires_admin() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let payload = json!({
            "name": "Garden Flat",
            "location": "Porto",
            "bedrooms": 2,
            "bathrooms": 1,
            "amenities": ["Garden"],
            "price_per_night": 95.5
        });

        let anonymous = app
            .clone()
            .oneshot(json_request("POST", "/api/apartments", None, &payload))
            .await
            .unwrap();
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

        let guest = bearer(&data.guest);
        let forbidden = app
            .clone()
            .oneshot(json_request("POST", "/api/apartments", Some(&guest), &payload))
            .await
            .unwrap();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

        let admin = bearer(&data.admin);
        let created = app
            .oneshot(json_request("POST", "/api/apartments", Some(&admin), &payload))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let json = get_json_body(created).await;
        assert_eq!(json["data"]["name"], "Garden Flat");
        assert_eq!(json["data"]["is_available"], true);
    }

    /// Test Case: Non-positive price is rejected
    #[tokio::test]
    #[serial]
    async fn test_create_apartment_invalid_price() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let admin = bearer(&data.admin);

        let payload = json!({"name": "Free", "location": "Nowhere", "bedrooms": 1, "bathrooms": 1, "price_per_night": 0});
        let response = app
            .oneshot(json_request("POST", "/api/apartments", Some(&admin), &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Test Case: Partial update and delete
    #[tokio::test]
    #[serial]
    async fn test_update_and_delete_apartment() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let admin = bearer(&data.admin);
        let uri = format!("/api/apartments/{}", data.villa.id);

        let updated = app
            .clone()
            .oneshot(json_request("PUT", &uri, Some(&admin), &json!({"price_per_night": 300.0, "is_available": false})))
            .await
            .unwrap();
        assert_eq!(updated.status(), StatusCode::OK);
        let json = get_json_body(updated).await;
        assert_eq!(json["data"]["price_per_night"], 300.0);
        assert_eq!(json["data"]["is_available"], false);
        assert_eq!(json["data"]["name"], "Cliff Villa");

        let delete = Request::builder()
            .method("DELETE")
            .uri(&uri)
            .header("Authorization", &admin)
            .body(AxumBody::empty())
            .unwrap();
        let response = app.clone().oneshot(delete).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Apartment deleted successfully");

        let response = app.oneshot(get(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Test Case: Deleting an apartment removes its bookings and reviews
    #[tokio::test]
    #[serial]
    async fn test_delete_apartment_cascades() {
        use chrono::NaiveDate;
        use db::models::{booking, review};
        use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
        use services::{
            booking_service::{BookingService, CreateBooking},
            review_service::{CreateReview, ReviewService},
        };
        use util::jwt::Claims;

        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let guest = Claims { sub: data.guest.id, email: data.guest.email.clone(), admin: false, exp: 0 };

        for apartment_id in [data.villa.id, data.loft.id] {
            BookingService::create(
                state.db(),
                &guest,
                CreateBooking {
                    apartment_id,
                    check_in: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                    check_out: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
                },
            )
            .await
            .unwrap();
            ReviewService::create(
                state.db(),
                CreateReview { apartment_id, user_id: data.guest.id, rating: 4, comment: "Nice".into() },
            )
            .await
            .unwrap();
        }

        let delete = Request::builder()
            .method("DELETE")
            .uri(format!("/api/apartments/{}", data.villa.id))
            .header("Authorization", bearer(&data.admin))
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(delete).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bookings_left = booking::Entity::find()
            .filter(booking::Column::ApartmentId.eq(data.villa.id))
            .count(state.db())
            .await
            .unwrap();
        let reviews_left = review::Entity::find()
            .filter(review::Column::ApartmentId.eq(data.villa.id))
            .count(state.db())
            .await
            .unwrap();
        assert_eq!((bookings_left, reviews_left), (0, 0));

        // The other apartment keeps its own
        assert_eq!(booking::Entity::find().count(state.db()).await.unwrap(), 1);
        assert_eq!(review::Entity::find().count(state.db()).await.unwrap(), 1);
    }

    /// Test Case: Reviews are added by logged-in users and listed publicly
    #[tokio::test]
    #[serial]
    async fn test_add_and_list_reviews() {
        let (app, state) = make_test_app().await;
        let data = setup_test_data(state.db()).await;
        let guest = bearer(&data.guest);
        let uri = format!("/api/apartments/{}/reviews", data.loft.id);

        let anonymous = app
            .clone()
            .oneshot(json_request("POST", &uri, None, &json!({"rating": 5})))
            .await
            .unwrap();
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

        let bad = app
            .clone()
            .oneshot(json_request("POST", &uri, Some(&guest), &json!({"rating": 6})))
            .await
            .unwrap();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        for rating in [5, 4] {
            let created = app
                .clone()
                .oneshot(json_request("POST", &uri, Some(&guest), &json!({"rating": rating, "comment": "Nice"})))
                .await
                .unwrap();
            assert_eq!(created.status(), StatusCode::CREATED);
        }

        let listed = app.clone().oneshot(get(&uri)).await.unwrap();
        assert_eq!(listed.status(), StatusCode::OK);
        let json = get_json_body(listed).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["data"][0]["user_id"], data.guest.id);

        let detail = app
            .oneshot(get(&format!("/api/apartments/{}", data.loft.id)))
            .await
            .unwrap();
        let json = get_json_body(detail).await;
        assert_eq!(json["data"]["average_rating"], 4.5);
        assert_eq!(json["data"]["review_count"], 2);
    }
}
