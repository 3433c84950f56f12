pub mod admin_service;
pub mod auth_service;
pub mod game_store;
pub mod jackpot_service;
pub mod lucky_draw_service;
pub mod notification_service;
pub mod user_service;
pub mod wallet_service;

pub use admin_service::*;
pub use auth_service::*;
pub use game_store::*;
pub use jackpot_service::*;
pub use lucky_draw_service::*;
pub use notification_service::*;
pub use user_service::*;
pub use wallet_service::*;
