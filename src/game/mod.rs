//! Demo game rules: catalog, payout table, draws and the session state.

pub mod catalog;
pub mod draw;
pub mod payout;
pub mod state;

pub use catalog::*;
pub use draw::*;
pub use payout::*;
pub use state::*;
