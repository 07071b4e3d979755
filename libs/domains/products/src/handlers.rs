//! HTTP handlers for the products API

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{AppError, ErrorBody, IdPath};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::models::{NewProduct, Product, ProductPatch, REQUIRED_FIELDS};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            Product, NewProduct, ProductPatch,
            ProductData, ProductListData, MessageData, ErrorBody
        )
    ),
    tags(
        (name = "Products", description = "Product storage endpoints")
    )
)]
pub struct ApiDoc;

/// Item envelope: `{"data": {...}}`
#[derive(Serialize, ToSchema)]
pub struct ProductData {
    pub data: Product,
}

/// List envelope: `{"data": [...]}`
#[derive(Serialize, ToSchema)]
pub struct ProductListData {
    pub data: Vec<Product>,
}

/// Confirmation envelope with no payload
#[derive(Serialize, ToSchema)]
pub struct MessageData {
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = ProductListData),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<Json<ProductListData>, AppError> {
    let products = service.find_all().await?;
    Ok(Json(ProductListData { data: products }))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductData),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No such product", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> Result<Json<ProductData>, AppError> {
    let product = service.find_by_id(id).await?;
    Ok(Json(ProductData { data: product }))
}

/// Create a product
///
/// The body is parsed twice: first as a generic JSON object to verify all
/// six business keys are present (422 when one is missing), then strictly
/// into the typed payload (400 when a value is malformed).
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = ProductData),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 409, description = "Code value already exists", body = ErrorBody),
        (status = 422, description = "Missing required key", body = ErrorBody),
        (status = 502, description = "Invalid field value", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let raw: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("request body is not valid JSON".to_string()))?;

    let keys = raw
        .as_object()
        .ok_or_else(|| AppError::BadRequest("request body must be a JSON object".to_string()))?;

    for key in REQUIRED_FIELDS {
        if !keys.contains_key(key) {
            return Err(AppError::UnprocessableEntity(format!(
                "missing required key: {}",
                key
            )));
        }
    }

    let input: NewProduct = serde_json::from_value(raw)
        .map_err(|_| AppError::BadRequest("malformed product payload".to_string()))?;

    let product = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(ProductData { data: product })))
}

/// Update a product
///
/// Partial-update semantics: fields left at their zero value in the body
/// keep the persisted value. The body id must match the path id.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = ProductPatch,
    responses(
        (status = 201, description = "Product updated", body = ProductData),
        (status = 400, description = "Malformed body or id mismatch", body = ErrorBody),
        (status = 404, description = "No such product", body = ErrorBody),
        (status = 409, description = "Code value already exists", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let patch: ProductPatch = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("malformed product payload".to_string()))?;

    if patch.id != id {
        return Err(AppError::BadRequest(
            "id in url and body are different".to_string(),
        ));
    }

    let persisted = service.find_by_id(id).await?;
    let merged = patch.merge_into(persisted);

    service.update(merged.clone()).await?;

    Ok((StatusCode::CREATED, Json(ProductData { data: merged })))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageData),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No such product", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> Result<Json<MessageData>, AppError> {
    service.delete(id).await?;
    Ok(Json(MessageData {
        message: "product deleted successfully".to_string(),
        data: None,
    }))
}
