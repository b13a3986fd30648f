#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::tests::{body_json, get, setup_test_app};

    fn post(uri: &str) -> Request<Body> {
        Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap()
    }

    async fn seed(app: &axum::Router) {
        let response = app.clone().oneshot(post("/api/v1/converters/add_all")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_add_all_seeds_the_inventory() {
        let (app, _) = setup_test_app().await;
        seed(&app).await;

        let listed = body_json(app.oneshot(get("/api/v1/converters")).await.unwrap()).await;
        let items = listed.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|c| c["id"].is_i64()));
    }

    #[tokio::test]
    async fn test_paginated_listing_reports_totals() {
        let (app, _) = setup_test_app().await;
        seed(&app).await;

        let response = app
            .clone()
            .oneshot(get("/api/v1/converters/paginated?page=1&page_size=1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], json!(2));
        assert_eq!(body["page"], json!(1));
        assert_eq!(body["page_size"], json!(1));
        assert_eq!(body["total_pages"], json!(2));
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_paginated_rejects_out_of_range_params() {
        let (app, _) = setup_test_app().await;

        let response =
            app.clone().oneshot(get("/api/v1/converters/paginated?page=0")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            app.oneshot(get("/api/v1/converters/paginated?page_size=101")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_absent_converter_is_404() {
        let (app, _) = setup_test_app().await;
        let response = app.oneshot(delete("/api/v1/converters/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_each_level_independently() {
        let (app, _) = setup_test_app().await;
        seed(&app).await;

        // Leaf first: the unit referencing converter 1.
        let response = app.clone().oneshot(delete("/api/v1/converters/units/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!(true));

        let response = app.clone().oneshot(delete("/api/v1/converters/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Deleting the same converter again reports not found.
        let response = app.oneshot(delete("/api/v1/converters/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_all_empties_every_level() {
        let (app, _) = setup_test_app().await;
        seed(&app).await;

        let response = app.clone().oneshot(delete("/api/v1/converters/delete_all")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let result = body_json(response).await;
        assert_eq!(result["converters"], json!(true));
        assert_eq!(result["mill_shops"], json!(true));

        let listed = body_json(app.oneshot(get("/api/v1/converters")).await.unwrap()).await;
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_listing_is_an_empty_array() {
        let (app, _) = setup_test_app().await;
        let listed = body_json(app.oneshot(get("/api/v1/converters")).await.unwrap()).await;
        assert_eq!(listed, json!([]));
    }
}
