pub mod admin;
pub mod auth;
pub mod health;
pub mod jackpot;
pub mod lucky_draw;
pub mod notification;
pub mod user;
pub mod wallet;

pub use admin::admin_config;
pub use auth::auth_config;
pub use health::health_config;
pub use jackpot::jackpot_config;
pub use lucky_draw::lucky_draw_config;
pub use notification::notification_config;
pub use user::user_config;
pub use wallet::wallet_config;

use actix_web::web;

/// Every route under `/api/v1`.
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(health_config)
        .configure(auth_config)
        .configure(jackpot_config)
        .configure(lucky_draw_config)
        .configure(wallet_config)
        .configure(user_config)
        .configure(notification_config)
        .configure(admin_config);
}
