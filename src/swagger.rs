use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::admin_login,
        handlers::auth::refresh,
        handlers::auth::forgot_password,
        handlers::auth::logout,
        handlers::jackpot::get_info,
        handlers::jackpot::purchase_ticket,
        handlers::jackpot::get_tickets,
        handlers::lucky_draw::get_items,
        handlers::lucky_draw::place_bet,
        handlers::lucky_draw::get_entries,
        handlers::wallet::get_wallet,
        handlers::wallet::deposit,
        handlers::wallet::withdraw,
        handlers::wallet::get_transactions,
        handlers::user::get_profile,
        handlers::notification::get_notifications,
        handlers::notification::mark_read,
        handlers::notification::mark_all_read,
        handlers::notification::delete_notification,
        handlers::admin::get_dashboard,
        handlers::admin::get_transactions,
        handlers::admin::get_users,
        handlers::admin::toggle_user_status,
        handlers::admin::get_lucky_draw_overview,
        handlers::admin::get_jackpot_overview,
    ),
    components(
        schemas(
            Outcome,
            ApiError,
            MessageResponse,
            HealthResponse,
            User,
            UserStatus,
            UserResponse,
            UserStatistics,
            ProfileResponse,
            LoginRequest,
            RegisterRequest,
            RefreshTokenRequest,
            ForgotPasswordRequest,
            AuthResponse,
            JackpotTicket,
            PurchaseTicketRequest,
            PurchaseTicketResponse,
            PayoutTier,
            JackpotInfoResponse,
            LuckyDrawEntry,
            LuckyItemResponse,
            PlaceBetRequest,
            PlaceBetResponse,
            LuckyDrawSummary,
            LuckyDrawHistoryResponse,
            Transaction,
            TransactionType,
            TransactionStatus,
            WalletAmountRequest,
            WalletResponse,
            WalletOperationResponse,
            Notification,
            NotificationKind,
            NotificationListResponse,
            DashboardStats,
            RecentDraw,
            LuckyDrawOverview,
            MatchBucket,
            JackpotOverview,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness"),
        (name = "auth", description = "Mock authentication API"),
        (name = "jackpot", description = "6/49 jackpot API"),
        (name = "lucky_draw", description = "Lucky draw API"),
        (name = "wallet", description = "Demo wallet API"),
        (name = "user", description = "Player profile API"),
        (name = "notification", description = "Notification API"),
        (name = "admin", description = "Operator dashboard API"),
    ),
    info(
        title = "BetBliss Backend API",
        version = "1.0.0",
        description = "BetBliss demo lottery REST API. Credits are play money."
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
