//! User directory handlers.

use axum::{
    extract::{Host, Path, Query, State},
    http::{header::LINK, HeaderMap, HeaderName, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::domain::{User, UserInput, UserUpdate};
use crate::errors::AppResult;
use crate::infra::UserFilter;
use crate::types::{PageLinks, PaginationParams};

/// Query parameters for the user list endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersQuery {
    /// 1-indexed page number
    #[serde(rename = "_page", default = "default_page")]
    pub page: u64,
    /// Page size
    #[serde(rename = "_limit", default = "default_limit")]
    pub limit: u64,
    /// Exact-match filter on name
    pub name: Option<String>,
    /// Exact-match filter on email
    pub email: Option<String>,
    /// Exact-match filter on username
    pub username: Option<String>,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// Create user directory routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List users with pagination and exact-match filters
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "One page of users; X-Total-Count and Link headers carry pagination metadata", body = [User]),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_token" = []))
)]
pub async fn list_users(
    State(state): State<AppState>,
    Host(host): Host,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<impl IntoResponse> {
    let params = PaginationParams::new(query.page, query.limit);
    let filter = UserFilter {
        name: query.name,
        email: query.email,
        username: query.username,
    };

    let (users, total) = state.user_service.list_users(&params, &filter).await?;

    let links = PageLinks::compute(params.page(), params.limit(), total);
    let base_url = format!("http://{}/users", host);

    let mut headers = HeaderMap::new();
    if let Ok(value) = total.to_string().parse() {
        headers.insert(HeaderName::from_static("x-total-count"), value);
    }
    if let Ok(value) = links.to_link_header(&base_url, params.limit()).parse() {
        headers.insert(LINK, value);
    }

    Ok((headers, Json(users)))
}

/// Get a user by id with address and company populated
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    ),
    security(("bearer_token" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Create a user with nested address and company
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_token" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Partially update a user; only provided fields overwrite
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found")
    ),
    security(("bearer_token" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UserUpdate>,
) -> AppResult<Json<User>> {
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Json(user))
}

/// Delete a user, cascading to its address and company
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_token" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
