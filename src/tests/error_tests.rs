#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::error::{validation, AppError, OptionExt};
    use crate::tests::body_json;

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = AppError::NotFound("Manual not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Manual not found");
        assert_eq!(body["status"], 404);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_validation_error_carries_field_details() {
        let err = AppError::ValidationError {
            field: "q".to_string(),
            message: "Query must be at least 3 characters long".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["details"]["field"], "q");
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause_but_carries_error_id() {
        let err = AppError::Internal(anyhow::anyhow!("secret database path leaked"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "An internal server error occurred");
        assert!(body["error"]["details"]["error_id"].is_string());
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_option_ext_maps_none_to_not_found() {
        let missing: Option<i64> = None;
        let err = missing.ok_or_not_found("Manual").unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Manual not found"));
    }

    #[test]
    fn test_search_query_validation_boundary() {
        assert!(validation::validate_search_query("ab").is_err());
        assert!(validation::validate_search_query("abc").is_ok());
        // Length is measured in characters, not bytes.
        assert!(validation::validate_search_query("прг").is_ok());
    }

    #[test]
    fn test_pagination_validation() {
        assert!(validation::validate_pagination(0, 10).is_err());
        assert!(validation::validate_pagination(1, 0).is_err());
        assert!(validation::validate_pagination(1, 101).is_err());
        assert!(validation::validate_pagination(1, 100).is_ok());
    }
}
