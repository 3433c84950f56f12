use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{JackpotTicket, LuckyItemResponse, Transaction};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardStats {
    pub tickets_sold: usize,
    pub lucky_draw_entries: usize,
    pub total_wagered_cents: i64,
    pub total_paid_out_cents: i64,
    /// Wagered minus paid out
    pub gross_gaming_revenue_cents: i64,
    pub total_deposits_cents: i64,
    pub total_withdrawals_cents: i64,
    pub balance_cents: i64,
    pub registered_users: usize,
    pub recent_transactions: Vec<Transaction>,
}

/// `status` / `type` accept a value or "all".
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AdminTransactionQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AdminUserQuery {
    /// Matches name or email, case-insensitive
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecentDraw {
    pub drawn_at: DateTime<Utc>,
    pub winning_item: String,
    pub selected_item: String,
    pub won: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LuckyDrawOverview {
    pub entry_price_cents: i64,
    pub items: Vec<LuckyItemResponse>,
    pub recent_draws: Vec<RecentDraw>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MatchBucket {
    pub matches: u8,
    pub tickets: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JackpotOverview {
    pub tickets_sold: usize,
    pub winning_tickets: usize,
    /// One bucket per match count 0 through 6
    pub match_distribution: Vec<MatchBucket>,
    pub recent_tickets: Vec<JackpotTicket>,
}
