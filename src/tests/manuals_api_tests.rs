#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::tests::{bearer_for, body_json, get, get_authed, json_request, setup_test_app};

    #[tokio::test]
    async fn test_protected_endpoint_without_header_is_401() {
        let (app, _) = setup_test_app().await;
        let response = app.oneshot(get("/api/v1/manuals")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_protected_endpoint_with_garbage_token_is_401() {
        let (app, _) = setup_test_app().await;
        let response =
            app.oneshot(get_authed("/api/v1/manuals", "Bearer not.a.token")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_post_category_then_get_includes_it() {
        let (app, state) = setup_test_app().await;
        let bearer = bearer_for(&state, "Alice", "alice@example.com");

        let req = json_request(
            "POST",
            "/api/v1/manuals/category",
            Some(&bearer),
            json!({ "name": "Drives", "logo_url": "/x.png" }),
        );
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        let id = created["id"].as_i64().expect("generated id");
        assert_eq!(created["name"], "Drives");
        assert_eq!(created["logo_url"], "/x.png");

        let response =
            app.oneshot(get_authed("/api/v1/manuals/categories", &bearer)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        let found = listed
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["id"] == json!(id) && c["name"] == "Drives" && c["logo_url"] == "/x.png");
        assert!(found, "created category must appear in the listing: {}", listed);
    }

    #[tokio::test]
    async fn test_post_manual_without_cover_derives_it_from_file_url() {
        let (app, state) = setup_test_app().await;
        let bearer = bearer_for(&state, "Alice", "alice@example.com");

        let req = json_request(
            "POST",
            "/api/v1/manuals/category",
            Some(&bearer),
            json!({ "name": "Drives", "logo_url": "/x.png" }),
        );
        app.clone().oneshot(req).await.unwrap();
        let req = json_request(
            "POST",
            "/api/v1/manuals/group",
            Some(&bearer),
            json!({ "name": "Sinamics", "category_id": 1 }),
        );
        app.clone().oneshot(req).await.unwrap();

        let req = json_request(
            "POST",
            "/api/v1/manuals",
            Some(&bearer),
            json!({ "title": "G120 Manual", "file_url": "https://cdn.example/files/g120.pdf", "group_id": 1 }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["cover_image_url"], "/media/g120.png");
    }

    #[tokio::test]
    async fn test_post_manual_keeps_caller_supplied_cover() {
        let (app, state) = setup_test_app().await;
        let bearer = bearer_for(&state, "Alice", "alice@example.com");

        let req = json_request(
            "POST",
            "/api/v1/manuals/category",
            Some(&bearer),
            json!({ "name": "Drives", "logo_url": "/x.png" }),
        );
        app.clone().oneshot(req).await.unwrap();
        let req = json_request(
            "POST",
            "/api/v1/manuals/group",
            Some(&bearer),
            json!({ "name": "Sinamics", "category_id": 1 }),
        );
        app.clone().oneshot(req).await.unwrap();

        let req = json_request(
            "POST",
            "/api/v1/manuals",
            Some(&bearer),
            json!({
                "title": "G120 Manual",
                "file_url": "https://cdn.example/files/g120.pdf",
                "cover_image_url": "/media/custom.png",
                "group_id": 1
            }),
        );
        let created = body_json(app.oneshot(req).await.unwrap()).await;
        assert_eq!(created["cover_image_url"], "/media/custom.png");
    }

    #[tokio::test]
    async fn test_nested_keeps_category_with_zero_groups() {
        let (app, state) = setup_test_app().await;
        let bearer = bearer_for(&state, "Alice", "alice@example.com");

        let req = json_request(
            "POST",
            "/api/v1/manuals/category",
            Some(&bearer),
            json!({ "name": "Empty", "logo_url": "/e.png" }),
        );
        app.clone().oneshot(req).await.unwrap();

        // /nested is public
        let response = app.oneshot(get("/api/v1/manuals/nested")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let tree = body_json(response).await;
        let categories = tree.as_array().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0]["name"], "Empty");
        assert_eq!(categories[0]["groups"], json!([]));
    }

    #[tokio::test]
    async fn test_nested_assembles_three_levels() {
        let (app, state) = setup_test_app().await;
        let bearer = bearer_for(&state, "Alice", "alice@example.com");

        for (uri, body) in [
            ("/api/v1/manuals/category", json!({ "name": "Drives", "logo_url": "/x.png" })),
            ("/api/v1/manuals/group", json!({ "name": "Sinamics", "category_id": 1 })),
            ("/api/v1/manuals/group", json!({ "name": "ACS", "category_id": 1 })),
            (
                "/api/v1/manuals",
                json!({ "title": "G120", "file_url": "/files/g120.pdf", "group_id": 1 }),
            ),
        ] {
            let response =
                app.clone().oneshot(json_request("POST", uri, Some(&bearer), body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let tree = body_json(app.oneshot(get("/api/v1/manuals/nested")).await.unwrap()).await;
        let categories = tree.as_array().unwrap();
        assert_eq!(categories.len(), 1);
        let groups = categories[0]["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0]["manuals"].as_array().unwrap().len(), 1);
        assert_eq!(groups[0]["manuals"][0]["title"], "G120");
        // The second group exists with an empty manual list.
        assert_eq!(groups[1]["manuals"], json!([]));
    }

    #[tokio::test]
    async fn test_search_query_shorter_than_three_chars_is_rejected() {
        let (app, state) = setup_test_app().await;
        let bearer = bearer_for(&state, "Alice", "alice@example.com");

        for uri in [
            "/api/v1/manuals/search?q=ab",
            "/api/v1/manuals/search_groups?q=ab",
            "/api/v1/manuals/search_categories?q=ab",
        ] {
            let response = app.clone().oneshot(get_authed(uri, &bearer)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {}", uri);
        }
    }

    #[tokio::test]
    async fn test_search_finds_manual_by_title_substring() {
        let (app, state) = setup_test_app().await;
        let bearer = bearer_for(&state, "Alice", "alice@example.com");

        for (uri, body) in [
            ("/api/v1/manuals/category", json!({ "name": "Drives", "logo_url": "/x.png" })),
            ("/api/v1/manuals/group", json!({ "name": "Sinamics", "category_id": 1 })),
            (
                "/api/v1/manuals",
                json!({ "title": "G120 Operating Instructions", "file_url": "/files/g120.pdf", "group_id": 1 }),
            ),
        ] {
            app.clone().oneshot(json_request("POST", uri, Some(&bearer), body)).await.unwrap();
        }

        let response =
            app.oneshot(get_authed("/api/v1/manuals/search?q=operating", &bearer)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let hits = body_json(response).await;
        assert_eq!(hits.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_put_absent_manual_is_404() {
        let (app, state) = setup_test_app().await;
        let bearer = bearer_for(&state, "Alice", "alice@example.com");

        let req = json_request(
            "PUT",
            "/api/v1/manuals/999",
            Some(&bearer),
            json!({ "title": "Ghost", "file_url": "/files/ghost.pdf", "group_id": 1 }),
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_absent_manual_returns_false() {
        let (app, state) = setup_test_app().await;
        let bearer = bearer_for(&state, "Alice", "alice@example.com");

        let req = axum::http::Request::builder()
            .method("DELETE")
            .uri("/api/v1/manuals/999")
            .header("authorization", &bearer)
            .body(axum::body::Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!(false));
    }

    #[tokio::test]
    async fn test_upload_without_object_store_is_503() {
        let (app, state) = setup_test_app().await;
        let bearer = bearer_for(&state, "Alice", "alice@example.com");

        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/api/v1/manuals/upload")
            .header("authorization", &bearer)
            .header("content-type", "multipart/form-data; boundary=xyz")
            .body(axum::body::Body::from("--xyz--\r\n"))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_seed_categories_from_fixture() {
        let (app, state) = setup_test_app().await;
        let bearer = bearer_for(&state, "Alice", "alice@example.com");

        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/api/v1/manuals/add_categories")
            .header("authorization", &bearer)
            .body(axum::body::Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["added"], json!(3));

        let listed =
            body_json(app.oneshot(get_authed("/api/v1/manuals/categories", &bearer)).await.unwrap())
                .await;
        assert_eq!(listed.as_array().unwrap().len(), 3);
    }
}
