use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Closed set of failure kinds shared by every layer.
///
/// The repository is the only place allowed to inspect datastore error
/// detail; layers above it match on these kinds and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("product not found")]
    NotFound,

    #[error("product code already exists")]
    Duplicated,

    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Collapse this error into `Internal`, keeping an existing detail
    /// string rather than re-wrapping it.
    pub fn into_internal(self) -> ProductError {
        match self {
            ProductError::Internal(detail) => ProductError::Internal(detail),
            other => ProductError::Internal(other.to_string()),
        }
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound => AppError::NotFound("product not found".to_string()),
            ProductError::Duplicated => {
                AppError::Conflict("product code already exists".to_string())
            }
            // The only error that names request content: the field is
            // exposed so the caller can fix the payload.
            ProductError::InvalidField(field) => {
                AppError::BadGateway(format!("invalid field: {}", field))
            }
            ProductError::Internal(detail) => AppError::InternalServerError(detail),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_http_status_mapping() {
        let cases = [
            (ProductError::NotFound, StatusCode::NOT_FOUND),
            (ProductError::Duplicated, StatusCode::CONFLICT),
            (ProductError::InvalidField("name"), StatusCode::BAD_GATEWAY),
            (
                ProductError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_into_internal_keeps_existing_detail() {
        let err = ProductError::Internal("db down".into()).into_internal();
        assert_eq!(err, ProductError::Internal("db down".into()));
    }

    #[test]
    fn test_into_internal_wraps_other_kinds() {
        let err = ProductError::Duplicated.into_internal();
        assert!(matches!(err, ProductError::Internal(_)));
    }
}
