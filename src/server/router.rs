use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        canteen::{CanteenDto, CanteenListItemDto, CreateCanteenDto, LocationDto},
        dish::{CreateDishDto, DishDto},
        menu::{CreateMenuDto, MenuDto, MenuListItemDto},
        school::{CreateSchoolDto, SchoolDto, SchoolListItemDto},
    },
    server::{
        controller::{
            canteen::{self, CANTEEN_TAG},
            dish::{self, DISH_TAG},
            menu::{self, MENU_TAG},
            school::{self, SCHOOL_TAG},
        },
        middleware::auth::require_api_key,
        state::AppState,
    },
};

/// OpenAPI document describing every endpoint, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ementa",
        description = "Daily canteen menus of schools"
    ),
    paths(
        school::get_schools,
        school::get_school,
        school::create_school,
        school::delete_school,
        canteen::get_canteens,
        canteen::get_canteen,
        canteen::create_canteen,
        menu::get_menus,
        menu::get_menu,
        menu::create_menu,
        dish::get_dishes,
        dish::get_dish,
    ),
    components(schemas(
        ErrorDto,
        CreateSchoolDto,
        SchoolDto,
        SchoolListItemDto,
        CreateCanteenDto,
        CanteenDto,
        CanteenListItemDto,
        LocationDto,
        CreateMenuDto,
        MenuDto,
        MenuListItemDto,
        CreateDishDto,
        DishDto,
    )),
    tags(
        (name = SCHOOL_TAG, description = "Schools and their canteens"),
        (name = CANTEEN_TAG, description = "Canteens of a school"),
        (name = MENU_TAG, description = "Daily menus of a canteen"),
        (name = DISH_TAG, description = "Dishes of a menu")
    )
)]
pub struct ApiDoc;

/// Builds the application router with every resource route, API documentation and
/// the key check, CORS and tracing layers.
///
/// The key check runs only on matched resource routes, so unknown paths stay 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/schools",
            get(school::get_schools).post(school::create_school),
        )
        .route(
            "/schools/{id}",
            get(school::get_school).delete(school::delete_school),
        )
        .route(
            "/schools/{id}/canteens",
            get(canteen::get_canteens).post(canteen::create_canteen),
        )
        .route("/schools/{id}/canteens/{id2}", get(canteen::get_canteen))
        .route(
            "/schools/{id}/canteens/{id2}/menus",
            get(menu::get_menus).post(menu::create_menu),
        )
        .route(
            "/schools/{id}/canteens/{id2}/menus/{id3}",
            get(menu::get_menu),
        )
        .route(
            "/schools/{id}/canteens/{id2}/menus/{id3}/dishes",
            get(dish::get_dishes),
        )
        .route(
            "/schools/{id}/canteens/{id2}/menus/{id3}/dishes/{id4}",
            get(dish::get_dish),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
