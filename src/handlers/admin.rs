use crate::middlewares::require_admin;
use crate::models::*;
use crate::services::AdminService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Totals and recent transactions", body = DashboardStats),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_dashboard(
    admin_service: web::Data<AdminService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }
    Ok(HttpResponse::Ok().json(ApiResponse::success(admin_service.dashboard().await)))
}

#[utoipa::path(
    get,
    path = "/admin/transactions",
    tag = "admin",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("per_page" = Option<u32>, Query, description = "Page size"),
        ("status" = Option<String>, Query, description = "completed, pending or all"),
        ("type" = Option<String>, Query, description = "bet, win, deposit, withdraw or all")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Filtered ledger, newest first"),
        (status = 400, description = "Unknown filter value"),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_transactions(
    admin_service: web::Data<AdminService>,
    req: HttpRequest,
    query: web::Query<AdminTransactionQuery>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }
    match admin_service.list_transactions(&query).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "admin",
    params(
        ("search" = Option<String>, Query, description = "Name or email fragment")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "User directory", body = [UserResponse]),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_users(
    admin_service: web::Data<AdminService>,
    req: HttpRequest,
    query: web::Query<AdminUserQuery>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }
    Ok(HttpResponse::Ok().json(ApiResponse::success(admin_service.list_users(&query).await)))
}

#[utoipa::path(
    post,
    path = "/admin/users/{id}/toggle-status",
    tag = "admin",
    params(
        ("id" = String, Path, description = "User id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Status flipped", body = UserResponse),
        (status = 400, description = "Admin accounts cannot be suspended"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "User not found")
    )
)]
pub async fn toggle_user_status(
    admin_service: web::Data<AdminService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }
    match admin_service.toggle_user_status(&path).await {
        Ok(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(user))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/admin/lucky-draw",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Catalog and recent draws", body = LuckyDrawOverview),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_lucky_draw_overview(
    admin_service: web::Data<AdminService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        admin_service.lucky_draw_overview().await,
    )))
}

#[utoipa::path(
    get,
    path = "/admin/jackpot",
    tag = "admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Recent tickets and match distribution", body = JackpotOverview),
        (status = 403, description = "Admin only")
    )
)]
pub async fn get_jackpot_overview(
    admin_service: web::Data<AdminService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    if let Err(e) = require_admin(&req) {
        return Ok(e.error_response());
    }
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        admin_service.jackpot_overview().await,
    )))
}

pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/dashboard", web::get().to(get_dashboard))
            .route("/transactions", web::get().to(get_transactions))
            .route("/users", web::get().to(get_users))
            .route("/users/{id}/toggle-status", web::post().to(toggle_user_status))
            .route("/lucky-draw", web::get().to(get_lucky_draw_overview))
            .route("/jackpot", web::get().to(get_jackpot_overview)),
    );
}
