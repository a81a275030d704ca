use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        module::{
            ChapterDto, CreateChapterDto, CreateModuleDto, CreateTopicDto, ModuleDto, TopicDto,
            UpdateModuleDto,
        },
    },
    server::{
        controller::param::{non_empty, ModuleListQuery},
        error::AppError,
        middleware::auth::AuthGuard,
        model::module::{
            CreateChapterParams, CreateModuleParams, CreateTopicParams, ListModulesParams,
            UpdateModuleParams,
        },
        service::module::ModuleService,
        state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static MODULE_TAG: &str = "module";

/// List active modules.
///
/// Returns active modules ordered by module code, each with its topic, enrollment and
/// study group counts. Supports an exact `university` filter and a case-insensitive
/// `search` over code, name and description.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Array of modules
/// - `400 Bad Request` - Malformed query string
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/modules",
    tag = MODULE_TAG,
    params(
        ("university" = Option<String>, Query, description = "Exact university match"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring of code, name or description"),
        ("limit" = Option<u64>, Query, description = "Maximum modules to return (default: 20, max: 100)"),
        ("offset" = Option<u64>, Query, description = "Modules to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved modules", body = Vec<ModuleDto>),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_modules(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ModuleListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Query(query) = query?;
    let params = ListModulesParams {
        limit: query.limit(),
        offset: query.offset.unwrap_or(0),
        university: non_empty(query.university),
        search: non_empty(query.search),
    };

    let modules = ModuleService::new(&state.db).list(params).await?;

    Ok((
        StatusCode::OK,
        Json(
            modules
                .into_iter()
                .map(|m| m.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get an active module by ID with its counts.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The module
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No active module with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/modules/{id}",
    tag = MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Module ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved module", body = ModuleDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_module_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Path(id) = id?;
    let module = ModuleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(module.into_dto())))
}

/// List the active topics of a module.
///
/// Topics are ordered by `order_sequence` then name and carry their chapter count.
///
/// # Returns
/// - `200 OK` - Array of topics
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No active module with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/modules/{id}/topics",
    tag = MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Module ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved topics", body = Vec<TopicDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_module_topics(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Path(id) = id?;
    let topics = ModuleService::new(&state.db).get_topics(id).await?;

    Ok((
        StatusCode::OK,
        Json(topics.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List the active chapters of a topic.
///
/// # Returns
/// - `200 OK` - Array of chapters
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No active topic with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/modules/topics/{id}/chapters",
    tag = MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved chapters", body = Vec<ChapterDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_topic_chapters(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Path(id) = id?;
    let chapters = ModuleService::new(&state.db).get_chapters(id).await?;

    Ok((
        StatusCode::OK,
        Json(
            chapters
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new module.
///
/// # Returns
/// - `201 Created` - The created module
/// - `400 Bad Request` - Missing code or name, or a duplicate module code
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/modules",
    tag = MODULE_TAG,
    request_body = CreateModuleDto,
    responses(
        (status = 201, description = "Successfully created module", body = ModuleDto),
        (status = 400, description = "Invalid module data or duplicate code", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_module(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateModuleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Json(payload) = payload?;
    let params = CreateModuleParams::from_dto(payload)?;

    let module = ModuleService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(module.into_dto())))
}

/// Create a topic under an active module.
///
/// `order_sequence` defaults to one past the module's current maximum.
///
/// # Returns
/// - `201 Created` - The created topic
/// - `400 Bad Request` - Missing topic name
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No active module with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/modules/{id}/topics",
    tag = MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Module ID")
    ),
    request_body = CreateTopicDto,
    responses(
        (status = 201, description = "Successfully created topic", body = TopicDto),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_topic(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateTopicDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Path(id) = id?;
    let Json(payload) = payload?;
    let params = CreateTopicParams::from_dto(id, payload)?;

    let topic = ModuleService::new(&state.db).create_topic(params).await?;

    Ok((StatusCode::CREATED, Json(topic.into_dto())))
}

/// Create a chapter under an active topic.
///
/// # Returns
/// - `201 Created` - The created chapter
/// - `400 Bad Request` - Missing chapter name
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No active topic with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/modules/topics/{id}/chapters",
    tag = MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    request_body = CreateChapterDto,
    responses(
        (status = 201, description = "Successfully created chapter", body = ChapterDto),
        (status = 400, description = "Invalid chapter data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_chapter(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateChapterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Path(id) = id?;
    let Json(payload) = payload?;
    let params = CreateChapterParams::from_dto(id, payload)?;

    let chapter = ModuleService::new(&state.db).create_chapter(params).await?;

    Ok((StatusCode::CREATED, Json(chapter.into_dto())))
}

/// Update an active module.
///
/// Only `module_name`, `description` and `university` can change; any other field in
/// the body is ignored.
///
/// # Returns
/// - `200 OK` - The updated module with counts
/// - `400 Bad Request` - No updatable field, or a blank module name
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No active module with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/modules/{id}",
    tag = MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Module ID")
    ),
    request_body = UpdateModuleDto,
    responses(
        (status = 200, description = "Successfully updated module", body = ModuleDto),
        (status = 400, description = "No valid fields to update", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_module(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateModuleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Path(id) = id?;
    let Json(payload) = payload?;
    let params = UpdateModuleParams::from_dto(payload)?;

    let module = ModuleService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(module.into_dto())))
}

/// Soft-delete a module.
///
/// # Returns
/// - `204 No Content` - Module is now inactive
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No active module with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/modules/{id}",
    tag = MODULE_TAG,
    params(
        ("id" = i32, Path, description = "Module ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted module"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_module(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Path(id) = id?;
    ModuleService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
