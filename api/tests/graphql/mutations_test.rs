#[cfg(test)]
mod tests {
    use crate::graphql::{error_code, run, schema};
    use db::models::{
        apartment::Model as ApartmentModel,
        user::{Model as UserModel, UserRole},
    };
    use db::test_utils::setup_test_db;
    use serial_test::serial;
    use util::relay::encode_global_id;

    const CREATE: &str = r#"mutation {
        createApartment(input: {
            name: "Dune Cabin", location: "Sossusvlei", bedrooms: 1, bathrooms: 1,
            amenities: ["Stargazing deck", "stargazing deck"], pricePerNight: 210.0
        }) { id name amenities isAvailable }
    }"#;

    #[tokio::test]
    #[serial]
    async fn create_apartment_is_admin_only() {
        let db = setup_test_db().await;
        let admin = UserModel::create(&db, "Admin", "admin@example.com", "password123", UserRole::Admin)
            .await
            .unwrap();
        let guest = UserModel::create(&db, "Guest", "guest@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let schema = schema(&db);

        let response = run(&schema, CREATE, None).await;
        assert_eq!(error_code(&response), "UNAUTHENTICATED");

        let response = run(&schema, CREATE, Some(&guest)).await;
        assert_eq!(error_code(&response), "FORBIDDEN");

        let response = run(&schema, CREATE, Some(&admin)).await;
        let created = &response["data"]["createApartment"];
        assert_eq!(created["name"], "Dune Cabin");
        assert_eq!(created["amenities"].as_array().unwrap().len(), 1);
        assert_eq!(created["isAvailable"], true);
    }

    #[tokio::test]
    #[serial]
    async fn update_and_delete_apartment() {
        let db = setup_test_db().await;
        let admin = UserModel::create(&db, "Admin", "admin@example.com", "password123", UserRole::Admin)
            .await
            .unwrap();
        let flat = ApartmentModel::create(&db, "Loft", "", "Oslo", 1, 1, vec![], 130.0)
            .await
            .unwrap();
        let schema = schema(&db);
        let id = encode_global_id("Apartment", flat.id);

        let response = run(
            &schema,
            &format!(r#"mutation {{ updateApartment(id: "{id}", input: {{ pricePerNight: 0 }}) {{ id }} }}"#),
            Some(&admin),
        )
        .await;
        assert_eq!(error_code(&response), "BAD_REQUEST");

        let response = run(
            &schema,
            &format!(r#"mutation {{ updateApartment(id: "{id}", input: {{ bedrooms: 2 }}) {{ bedrooms name }} }}"#),
            Some(&admin),
        )
        .await;
        assert_eq!(response["data"]["updateApartment"]["bedrooms"], 2);
        assert_eq!(response["data"]["updateApartment"]["name"], "Loft");

        let response = run(
            &schema,
            &format!(r#"mutation {{ deleteApartment(id: "{id}") }}"#),
            Some(&admin),
        )
        .await;
        assert_eq!(response["data"]["deleteApartment"], id);

        let response = run(
            &schema,
            &format!(r#"mutation {{ deleteApartment(id: "{id}") }}"#),
            Some(&admin),
        )
        .await;
        assert_eq!(error_code(&response), "NOT_FOUND");
    }

    #[tokio::test]
    #[serial]
    async fn booking_lifecycle() {
        let db = setup_test_db().await;
        let alice = UserModel::create(&db, "Alice", "alice@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let bob = UserModel::create(&db, "Bob", "bob@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let flat = ApartmentModel::create(&db, "Riad", "", "Marrakesh", 3, 2, vec![], 99.99)
            .await
            .unwrap();
        let schema = schema(&db);
        let apartment_id = encode_global_id("Apartment", flat.id);

        let booking = |check_in: &str, check_out: &str| {
            format!(
                r#"mutation {{ createBooking(input: {{ apartmentId: "{apartment_id}", checkIn: "{check_in}", checkOut: "{check_out}" }}) {{
                    id nights totalPrice apartment {{ name }}
                }} }}"#
            )
        };

        let response = run(&schema, &booking("2026-12-20", "2026-12-24"), None).await;
        assert_eq!(error_code(&response), "UNAUTHENTICATED");

        let response = run(&schema, &booking("2026-12-20", "2026-12-24"), Some(&alice)).await;
        let created = &response["data"]["createBooking"];
        assert_eq!(created["nights"], 4);
        assert_eq!(created["totalPrice"], 399.96);
        assert_eq!(created["apartment"]["name"], "Riad");
        let booking_id = created["id"].as_str().unwrap().to_string();

        let response = run(&schema, &booking("2026-12-23", "2026-12-27"), Some(&bob)).await;
        assert_eq!(error_code(&response), "CONFLICT");

        let response = run(&schema, &booking("2026-12-24", "2026-12-20"), Some(&bob)).await;
        assert_eq!(error_code(&response), "BAD_REQUEST");

        let cancel = format!(r#"mutation {{ cancelBooking(id: "{booking_id}") }}"#);
        let response = run(&schema, &cancel, Some(&bob)).await;
        assert_eq!(error_code(&response), "FORBIDDEN");

        let response = run(&schema, &cancel, Some(&alice)).await;
        assert_eq!(response["data"]["cancelBooking"], booking_id);

        let response = run(&schema, &booking("2026-12-23", "2026-12-27"), Some(&bob)).await;
        assert!(response.get("errors").is_none(), "{response}");
    }

    #[tokio::test]
    #[serial]
    async fn add_and_delete_review() {
        let db = setup_test_db().await;
        let author = UserModel::create(&db, "Author", "author@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let other = UserModel::create(&db, "Other", "other@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let flat = ApartmentModel::create(&db, "Chalet", "", "Zermatt", 2, 2, vec![], 280.0)
            .await
            .unwrap();
        let schema = schema(&db);
        let apartment_id = encode_global_id("Apartment", flat.id);

        let response = run(
            &schema,
            &format!(r#"mutation {{ addReview(input: {{ apartmentId: "{apartment_id}", rating: 9 }}) {{ id }} }}"#),
            Some(&author),
        )
        .await;
        assert_eq!(error_code(&response), "BAD_REQUEST");

        let response = run(
            &schema,
            &format!(
                r#"mutation {{ addReview(input: {{ apartmentId: "{apartment_id}", rating: 4, comment: "Cosy" }}) {{ id rating comment apartment {{ reviewCount }} }} }}"#
            ),
            Some(&author),
        )
        .await;
        let review = &response["data"]["addReview"];
        assert_eq!(review["rating"], 4);
        assert_eq!(review["apartment"]["reviewCount"], 1);
        let review_id = review["id"].as_str().unwrap().to_string();

        let delete = format!(r#"mutation {{ deleteReview(id: "{review_id}") }}"#);
        let response = run(&schema, &delete, Some(&other)).await;
        assert_eq!(error_code(&response), "FORBIDDEN");

        let response = run(&schema, &delete, Some(&author)).await;
        assert_eq!(response["data"]["deleteReview"], review_id);
    }
}
