#[cfg(test)]
mod tests {
    use crate::graphql::{error_code, run, schema};
    use db::models::{
        apartment::Model as ApartmentModel,
        review,
        user::{Model as UserModel, UserRole},
    };
    use db::test_utils::setup_test_db;
    use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
    use serial_test::serial;
    use util::relay::encode_global_id;

    async fn seed_apartments(db: &DatabaseConnection) -> Vec<ApartmentModel> {
        let mut out = Vec::new();
        for (name, location, price) in [
            ("Budget Room", "Berlin", 45.0),
            ("City Studio", "Berlin", 90.0),
            ("Penthouse", "Paris", 400.0),
        ] {
            out.push(
                ApartmentModel::create(db, name, "", location, 1, 1, vec!["WiFi".into()], price)
                    .await
                    .unwrap(),
            );
        }
        out
    }

    #[tokio::test]
    #[serial]
    async fn apartments_connection_pages_forward() {
        let db = setup_test_db().await;
        seed_apartments(&db).await;
        let schema = schema(&db);

        let first = run(
            &schema,
            r#"{ apartments(first: 2, order: [{ field: PRICE_PER_NIGHT }]) {
                totalCount
                edges { cursor node { name pricePerNight } }
                pageInfo { hasNextPage hasPreviousPage endCursor }
            } }"#,
            None,
        )
        .await;
        assert!(first.get("errors").is_none(), "{first}");
        let conn = &first["data"]["apartments"];
        assert_eq!(conn["totalCount"], 3);
        assert_eq!(conn["edges"][0]["node"]["name"], "Budget Room");
        assert_eq!(conn["edges"][1]["node"]["name"], "City Studio");
        assert_eq!(conn["pageInfo"]["hasNextPage"], true);
        assert_eq!(conn["pageInfo"]["hasPreviousPage"], false);

        let end = conn["pageInfo"]["endCursor"].as_str().unwrap();
        let next = run(
            &schema,
            &format!(
                r#"{{ apartments(first: 2, after: "{end}", order: [{{ field: PRICE_PER_NIGHT }}]) {{
                    nodes {{ name }}
                    pageInfo {{ hasNextPage hasPreviousPage }}
                }} }}"#
            ),
            None,
        )
        .await;
        let conn = &next["data"]["apartments"];
        assert_eq!(conn["nodes"].as_array().unwrap().len(), 1);
        assert_eq!(conn["nodes"][0]["name"], "Penthouse");
        assert_eq!(conn["pageInfo"]["hasNextPage"], false);
        assert_eq!(conn["pageInfo"]["hasPreviousPage"], true);
    }

    #[tokio::test]
    #[serial]
    async fn apartments_where_and_last() {
        let db = setup_test_db().await;
        seed_apartments(&db).await;
        let schema = schema(&db);

        let response = run(
            &schema,
            r#"{ apartments(where: { location: "berlin", maxPrice: 100 }, last: 1, order: [{ field: NAME, direction: ASC }]) {
                totalCount nodes { name }
            } }"#,
            None,
        )
        .await;
        assert_eq!(response["data"]["apartments"]["totalCount"], 2);
        assert_eq!(response["data"]["apartments"]["nodes"][0]["name"], "City Studio");
    }

    #[tokio::test]
    #[serial]
    async fn oversized_page_is_rejected() {
        let db = setup_test_db().await;
        let schema = schema(&db);

        let response = run(&schema, "{ apartments(first: 51) { totalCount } }", None).await;
        assert_eq!(error_code(&response), "BAD_REQUEST");

        let response = run(&schema, r#"{ apartments(after: "bogus") { totalCount } }"#, None).await;
        assert_eq!(error_code(&response), "BAD_REQUEST");
    }

    #[tokio::test]
    #[serial]
    async fn apartment_and_node_lookup() {
        let db = setup_test_db().await;
        let apartments = seed_apartments(&db).await;
        let guest = UserModel::create(&db, "Guest", "guest@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        review::ActiveModel {
            apartment_id: Set(apartments[2].id),
            user_id: Set(guest.id),
            rating: Set(5),
            comment: Set("Stunning".into()),
            reviewed_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
        let schema = schema(&db);

        let id = encode_global_id("Apartment", apartments[2].id);
        let response = run(
            &schema,
            &format!(
                r#"{{ apartment(id: "{id}") {{ id databaseId name averageRating reviewCount reviews {{ rating authorName }} }} }}"#
            ),
            None,
        )
        .await;
        let apartment = &response["data"]["apartment"];
        assert_eq!(apartment["id"], id);
        assert_eq!(apartment["databaseId"], apartments[2].id);
        assert_eq!(apartment["averageRating"], 5.0);
        assert_eq!(apartment["reviewCount"], 1);
        assert_eq!(apartment["reviews"][0]["authorName"], "Guest");

        let missing = encode_global_id("Apartment", 999);
        let response = run(&schema, &format!(r#"{{ apartment(id: "{missing}") {{ name }} }}"#), None).await;
        assert!(response["data"]["apartment"].is_null());

        let response = run(
            &schema,
            &format!(r#"{{ node(id: "{id}") {{ __typename ... on Apartment {{ name }} }} }}"#),
            None,
        )
        .await;
        assert_eq!(response["data"]["node"]["__typename"], "Apartment");
        assert_eq!(response["data"]["node"]["name"], "Penthouse");

        let user_id = encode_global_id("User", guest.id);
        let response = run(&schema, &format!(r#"{{ node(id: "{user_id}") {{ __typename }} }}"#), None).await;
        assert_eq!(error_code(&response), "UNAUTHENTICATED");

        let response = run(
            &schema,
            &format!(r#"{{ node(id: "{user_id}") {{ ... on User {{ email }} }} }}"#),
            Some(&guest),
        )
        .await;
        assert_eq!(response["data"]["node"]["email"], "guest@example.com");
    }

    #[tokio::test]
    #[serial]
    async fn wrong_id_type_is_rejected() {
        let db = setup_test_db().await;
        let schema = schema(&db);

        let booking_id = encode_global_id("Booking", 1);
        let response = run(&schema, &format!(r#"{{ apartment(id: "{booking_id}") {{ name }} }}"#), None).await;
        assert_eq!(error_code(&response), "BAD_REQUEST");
    }

    #[tokio::test]
    #[serial]
    async fn viewer_queries_need_authentication() {
        let db = setup_test_db().await;
        let admin = UserModel::create(&db, "Admin", "admin@example.com", "password123", UserRole::Admin)
            .await
            .unwrap();
        let guest = UserModel::create(&db, "Guest", "guest@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let schema = schema(&db);

        let response = run(&schema, "{ me { name } }", None).await;
        assert_eq!(error_code(&response), "UNAUTHENTICATED");

        let response = run(&schema, "{ me { name role } myBookings { id } }", Some(&guest)).await;
        assert_eq!(response["data"]["me"]["name"], "Guest");
        assert_eq!(response["data"]["me"]["role"], "User");
        assert_eq!(response["data"]["myBookings"].as_array().unwrap().len(), 0);

        let response = run(&schema, "{ users { email } }", Some(&guest)).await;
        assert_eq!(error_code(&response), "FORBIDDEN");

        let response = run(&schema, "{ users { email } }", Some(&admin)).await;
        assert_eq!(response["data"]["users"].as_array().unwrap().len(), 2);
    }
}
