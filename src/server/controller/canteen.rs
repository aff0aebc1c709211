use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        canteen::{CanteenDto, CanteenListItemDto, CreateCanteenDto},
    },
    server::{
        error::AppError,
        model::canteen::Canteen,
        service::canteen::CanteenService,
        state::AppState,
        util::parse::parse_resource_id,
    },
};

/// Tag for grouping canteen endpoints in OpenAPI documentation
pub static CANTEEN_TAG: &str = "canteen";

/// List the canteens of a school.
///
/// # Returns
/// - `200 OK` - The school's canteens
/// - `404 Not Found` - Malformed or unknown school id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/schools/{id}/canteens",
    tag = CANTEEN_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "School canteens", body = Vec<CanteenListItemDto>),
        (status = 404, description = "School not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_canteens(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let school_id = parse_resource_id("school", &school_id)?;

    let canteens = CanteenService::new(&state.db).get_all(school_id).await?;

    let dtos: Vec<CanteenListItemDto> = canteens
        .into_iter()
        .map(Canteen::into_list_item_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a canteen of a school.
#[utoipa::path(
    get,
    path = "/schools/{id}/canteens/{id2}",
    tag = CANTEEN_TAG,
    params(
        ("id" = i32, Path, description = "School ID"),
        ("id2" = i32, Path, description = "Canteen ID")
    ),
    responses(
        (status = 200, description = "Canteen detail", body = CanteenDto),
        (status = 404, description = "School or canteen not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_canteen(
    State(state): State<AppState>,
    Path((school_id, canteen_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let school_id = parse_resource_id("school", &school_id)?;
    let canteen_id = parse_resource_id("canteen", &canteen_id)?;

    let canteen = CanteenService::new(&state.db)
        .get(school_id, canteen_id)
        .await?;

    Ok((StatusCode::OK, Json(canteen.into_dto())))
}

/// Add a canteen to a school.
///
/// Canteen names are unique within a school, ignoring case.
///
/// # Returns
/// - `201 Created` - The created canteen
/// - `400 Bad Request` - Invalid body, invalid field or duplicated name
/// - `404 Not Found` - Malformed or unknown school id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/schools/{id}/canteens",
    tag = CANTEEN_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    request_body = CreateCanteenDto,
    responses(
        (status = 201, description = "Successfully created canteen", body = CanteenDto),
        (status = 400, description = "Invalid canteen data", body = ErrorDto),
        (status = 404, description = "School not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_canteen(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
    payload: Result<Json<CreateCanteenDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let school_id = parse_resource_id("school", &school_id)?;
    let Json(payload) = payload?;
    let canteen = Canteen::try_from(payload)?;

    let canteen = CanteenService::new(&state.db)
        .create(school_id, canteen)
        .await?;

    Ok((StatusCode::CREATED, Json(canteen.into_dto())))
}
