#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, get_json_body, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use db::models::{
        apartment::Model as ApartmentModel,
        review,
        user::{Model as UserModel, UserRole},
    };
    use sea_orm::{ActiveModelTrait, Set};
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    /// Test Case: Authors edit and delete their reviews, others may not
    #[tokio::test]
    #[serial]
    async fn test_review_ownership() {
        let (app, state) = make_test_app().await;
        let db = state.db();
        let author = UserModel::create(db, "Author", "author@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let stranger = UserModel::create(db, "Stranger", "stranger@example.com", "password123", UserRole::User)
            .await
            .unwrap();
        let flat = ApartmentModel::create(db, "Canal House", "", "Amsterdam", 2, 1, vec![], 150.0)
            .await
            .unwrap();
        let stored = review::ActiveModel {
            apartment_id: Set(flat.id),
            user_id: Set(author.id),
            rating: Set(3),
            comment: Set("Okay".into()),
            reviewed_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();

        let uri = format!("/api/reviews/{}", stored.id);
        let edit = |token: String| {
            Request::builder()
                .method("PUT")
                .uri(&uri)
                .header(CONTENT_TYPE, "application/json")
                .header("Authorization", token)
                .body(AxumBody::from(json!({"rating": 4}).to_string()))
                .unwrap()
        };

        let response = app.clone().oneshot(edit(bearer(&stranger))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app.clone().oneshot(edit(bearer(&author))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["rating"], 4);
        assert_eq!(json["data"]["comment"], "Okay");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/me/reviews")
                    .header("Authorization", bearer(&author))
                    .body(AxumBody::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);

        let delete = Request::builder()
            .method("DELETE")
            .uri(&uri)
            .header("Authorization", bearer(&author))
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(delete).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Review deleted successfully");
    }
}
