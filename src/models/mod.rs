pub mod admin;
pub mod common;
pub mod jackpot;
pub mod lucky_draw;
pub mod notification;
pub mod pagination;
pub mod transaction;
pub mod user;
pub mod wallet;

pub use admin::*;
pub use common::*;
pub use jackpot::*;
pub use lucky_draw::*;
pub use notification::*;
pub use pagination::*;
pub use transaction::*;
pub use user::*;
pub use wallet::*;
