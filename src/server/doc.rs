//! OpenAPI documentation served at `/docs`.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::server::controller::{health, module, notification};

/// Registers the bearer token security scheme referenced by the endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "StudyHub API",
        description = "Module catalog and notification endpoints for study collaboration."
    ),
    paths(
        health::health,
        module::get_modules,
        module::get_module_by_id,
        module::get_module_topics,
        module::get_topic_chapters,
        module::create_module,
        module::create_topic,
        module::create_chapter,
        module::update_module,
        module::delete_module,
        notification::get_notifications,
        notification::get_notification_counts,
        notification::mark_notification_read,
        notification::mark_all_notifications_read,
        notification::delete_notification,
        notification::create_notification,
        notification::notify_study_group,
        notification::get_pending_notifications,
        notification::mark_notifications_sent,
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "module", description = "Module, topic and chapter catalog"),
        (name = "notification", description = "User notifications and delivery polling")
    )
)]
pub struct ApiDoc;
