use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        health::health,
        module::{
            create_chapter, create_module, create_topic, delete_module, get_module_by_id,
            get_module_topics, get_modules, get_topic_chapters, update_module,
        },
        notification::{
            create_notification, delete_notification, get_notification_counts,
            get_notifications, get_pending_notifications, mark_all_notifications_read,
            mark_notification_read, mark_notifications_sent, notify_study_group,
        },
    },
    doc::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(module_routes())
        .merge(notification_routes())
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
}

fn module_routes() -> Router<AppState> {
    Router::new()
        .route("/modules", get(get_modules).post(create_module))
        .route(
            "/modules/{id}",
            get(get_module_by_id)
                .put(update_module)
                .delete(delete_module),
        )
        .route(
            "/modules/{id}/topics",
            get(get_module_topics).post(create_topic),
        )
        .route(
            "/modules/topics/{id}/chapters",
            get(get_topic_chapters).post(create_chapter),
        )
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(get_notifications).post(create_notification),
        )
        .route("/notifications/counts", get(get_notification_counts))
        .route("/notifications/pending", get(get_pending_notifications))
        .route("/notifications/read-all", put(mark_all_notifications_read))
        .route("/notifications/mark-sent", put(mark_notifications_sent))
        .route("/notifications/{id}", delete(delete_notification))
        .route("/notifications/{id}/read", put(mark_notification_read))
        .route(
            "/notifications/group/{groupId}/notify",
            post(notify_study_group),
        )
}
