use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        school::{CreateSchoolDto, SchoolDto, SchoolListItemDto},
    },
    server::{
        error::AppError,
        model::school::School,
        service::school::SchoolService,
        state::AppState,
        util::parse::parse_resource_id,
    },
};

/// Tag for grouping school endpoints in OpenAPI documentation
pub static SCHOOL_TAG: &str = "school";

/// List all schools.
///
/// # Returns
/// - `200 OK` - Every stored school
/// - `404 Not Found` - No school is stored
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/schools",
    tag = SCHOOL_TAG,
    responses(
        (status = 200, description = "Available schools", body = Vec<SchoolListItemDto>),
        (status = 404, description = "No schools available"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_schools(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let schools = SchoolService::new(&state.db).get_all().await?;

    let dtos: Vec<SchoolListItemDto> = schools
        .into_iter()
        .map(School::into_list_item_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a school with its canteens.
///
/// # Returns
/// - `200 OK` - School detail
/// - `404 Not Found` - Malformed or unknown school id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/schools/{id}",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "School detail", body = SchoolDto),
        (status = 404, description = "School not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id("school", &id)?;

    let school = SchoolService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(school.into_dto())))
}

/// Create a school together with its canteens.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - School acronym, name and at least one canteen
///
/// # Returns
/// - `201 Created` - The created school
/// - `400 Bad Request` - Invalid body, invalid field or duplicated acronym
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/schools",
    tag = SCHOOL_TAG,
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "Successfully created school", body = SchoolDto),
        (status = 400, description = "Invalid school data", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_school(
    State(state): State<AppState>,
    payload: Result<Json<CreateSchoolDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let school = School::try_from(payload)?;

    let school = SchoolService::new(&state.db).create(school).await?;

    Ok((StatusCode::CREATED, Json(school.into_dto())))
}

/// Delete a school with its canteens, menus and dishes.
///
/// # Returns
/// - `204 No Content` - School deleted
/// - `404 Not Found` - Malformed or unknown school id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/schools/{id}",
    tag = SCHOOL_TAG,
    params(
        ("id" = i32, Path, description = "School ID")
    ),
    responses(
        (status = 204, description = "School deleted"),
        (status = 404, description = "School not found"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn delete_school(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id("school", &id)?;

    SchoolService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
