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
        api::{ErrorDto, NotifiedDto, UpdatedDto},
        notification::{
            CreateNotificationDto, GroupNotificationDto, MarkSentDto, NotificationCountsDto,
            NotificationDto,
        },
    },
    server::{
        controller::param::{non_empty, NotificationListQuery, PendingQuery},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notification::{
            parse_notification_type, CreateNotificationParams, GroupNotificationParams,
            ListNotificationsParams, Notification,
        },
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

fn into_dtos(notifications: Vec<Notification>) -> Vec<NotificationDto> {
    notifications.into_iter().map(|n| n.into_dto()).collect()
}

/// List the caller's notifications.
///
/// Returns the authenticated user's notifications newest first, optionally only the
/// unread ones and/or only one type.
///
/// # Access Control
/// - Any authenticated user, scoped to their own notifications
///
/// # Returns
/// - `200 OK` - Array of notifications
/// - `400 Bad Request` - Unknown notification type or malformed query string
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("unreadOnly" = Option<bool>, Query, description = "Only unread notifications: `true`/`false` or `1`/`0` (default: false)"),
        ("type" = Option<String>, Query, description = "Only notifications of this type"),
        ("limit" = Option<u64>, Query, description = "Maximum notifications to return (default: 20, max: 100)"),
        ("offset" = Option<u64>, Query, description = "Notifications to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = Vec<NotificationDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<NotificationListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Query(query) = query?;
    let notification_type = non_empty(query.notification_type.clone())
        .map(|t| parse_notification_type(&t))
        .transpose()?;
    let params = ListNotificationsParams {
        user_id: user.id,
        unread_only: query.unread_only,
        notification_type,
        limit: query.limit(),
        offset: query.offset.unwrap_or(0),
    };

    let notifications = NotificationService::new(&state.db).list(params).await?;

    Ok((StatusCode::OK, Json(into_dtos(notifications))))
}

/// Get the caller's notification counts.
///
/// # Returns
/// - `200 OK` - Total, unread and per-type unread counts
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/notifications/counts",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved counts", body = NotificationCountsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_notification_counts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let counts = NotificationService::new(&state.db).counts(user.id).await?;

    Ok((StatusCode::OK, Json(counts.into_dto())))
}

/// Mark one of the caller's notifications read.
///
/// Idempotent: marking an already-read notification returns it unchanged.
///
/// # Returns
/// - `200 OK` - The notification with `is_read = true`
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Notification absent or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Path(id) = id?;
    let notification = NotificationService::new(&state.db)
        .mark_read(id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// Mark all of the caller's notifications read.
///
/// # Returns
/// - `200 OK` - Number of notifications transitioned
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications marked read", body = UpdatedDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let updated = NotificationService::new(&state.db)
        .mark_all_read(user.id)
        .await?;

    Ok((StatusCode::OK, Json(UpdatedDto { updated })))
}

/// Delete one of the caller's notifications.
///
/// # Returns
/// - `204 No Content` - Notification deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Notification absent or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Path(id) = id?;
    NotificationService::new(&state.db)
        .delete(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create a notification for a user.
///
/// # Returns
/// - `201 Created` - The created notification
/// - `400 Bad Request` - Missing field or unknown type
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Recipient does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/notifications",
    tag = NOTIFICATION_TAG,
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Successfully created notification", body = NotificationDto),
        (status = 400, description = "Invalid notification data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateNotificationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Json(payload) = payload?;
    let params = CreateNotificationParams::from_dto(payload)?;

    let notification = NotificationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

/// Notify every member of a study group.
///
/// # Access Control
/// - The group's creator, or a member holding the group `admin` role
///
/// # Returns
/// - `201 Created` - Number of members notified
/// - `400 Bad Request` - Missing field or unknown type
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is neither creator nor group admin
/// - `404 Not Found` - Study group absent or inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/notifications/group/{groupId}/notify",
    tag = NOTIFICATION_TAG,
    params(
        ("groupId" = i32, Path, description = "Study group ID")
    ),
    request_body = GroupNotificationDto,
    responses(
        (status = 201, description = "Group members notified", body = NotifiedDto),
        (status = 400, description = "Invalid notification data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller may not notify this group", body = ErrorDto),
        (status = 404, description = "Study group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn notify_study_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    group_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<GroupNotificationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Path(group_id) = group_id?;
    let Json(payload) = payload?;
    let params = GroupNotificationParams::from_dto(group_id, user.id, payload)?;

    let notified = NotificationService::new(&state.db)
        .notify_group(params)
        .await?;

    Ok((StatusCode::CREATED, Json(NotifiedDto { notified })))
}

/// Get notifications due for push delivery.
///
/// Returns notifications whose `scheduled_for` has passed and which have no `sent_at`,
/// oldest first.
///
/// # Access Control
/// - `Admin` - Delivery workers authenticate as admins
///
/// # Returns
/// - `200 OK` - Array of due notifications
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/notifications/pending",
    tag = NOTIFICATION_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Maximum notifications to return (default: 100, max: 500)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved pending notifications", body = Vec<NotificationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_pending_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<PendingQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Query(query) = query?;
    let notifications = NotificationService::new(&state.db)
        .pending(query.limit())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(notifications))))
}

/// Record that notifications were pushed.
///
/// Stamps `sent_at` on the listed notifications that are not yet sent.
///
/// # Access Control
/// - `Admin` - Delivery workers authenticate as admins
///
/// # Returns
/// - `200 OK` - Number of notifications newly marked sent
/// - `400 Bad Request` - Missing or empty `notification_ids`
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/notifications/mark-sent",
    tag = NOTIFICATION_TAG,
    request_body = MarkSentDto,
    responses(
        (status = 200, description = "Notifications marked sent", body = UpdatedDto),
        (status = 400, description = "Missing notification IDs", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn mark_notifications_sent(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<MarkSentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let ids = payload.notification_ids.unwrap_or_default();

    let updated = NotificationService::new(&state.db).mark_sent(&ids).await?;

    Ok((StatusCode::OK, Json(UpdatedDto { updated })))
}
