use crate::models::*;
use crate::services::NotificationService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/notifications",
    tag = "notification",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Notifications, newest first", body = NotificationListResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_notifications(
    notification_service: web::Data<NotificationService>,
) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(notification_service.list().await)))
}

#[utoipa::path(
    post,
    path = "/notifications/{id}/read",
    tag = "notification",
    params(
        ("id" = Uuid, Path, description = "Notification id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Marked as read", body = Notification),
        (status = 404, description = "Notification not found")
    )
)]
pub async fn mark_read(
    notification_service: web::Data<NotificationService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match notification_service.mark_read(path.into_inner()).await {
        Ok(notification) => Ok(HttpResponse::Ok().json(ApiResponse::success(notification))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/notifications/read-all",
    tag = "notification",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All marked as read")
    )
)]
pub async fn mark_all_read(
    notification_service: web::Data<NotificationService>,
) -> Result<HttpResponse> {
    let updated = notification_service.mark_all_read().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        serde_json::json!({ "updated": updated }),
        "All notifications marked as read",
    )))
}

#[utoipa::path(
    delete,
    path = "/notifications/{id}",
    tag = "notification",
    params(
        ("id" = Uuid, Path, description = "Notification id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Notification not found")
    )
)]
pub async fn delete_notification(
    notification_service: web::Data<NotificationService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match notification_service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success(MessageResponse {
            message: "Notification deleted".to_string(),
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn notification_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notifications")
            .route("", web::get().to(get_notifications))
            .route("/read-all", web::post().to(mark_all_read))
            .route("/{id}/read", web::post().to(mark_read))
            .route("/{id}", web::delete().to(delete_notification)),
    );
}
