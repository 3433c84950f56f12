use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Outcome;

/// A purchased 6-number play and its drawn result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JackpotTicket {
    pub id: Uuid,
    /// Chosen numbers, ascending
    pub numbers: Vec<u8>,
    /// Drawn numbers, ascending
    pub winning_numbers: Vec<u8>,
    pub draw_date: NaiveDate,
    /// Base price times multiplier (cents)
    pub price_cents: i64,
    pub status: Outcome,
    pub match_count: u8,
    pub payout_cents: i64,
    pub purchased_at: DateTime<Utc>,
    pub multiplier: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PurchaseTicketRequest {
    /// Exactly 6 distinct numbers between 1 and 49
    #[schema(example = json!([3, 11, 19, 27, 38, 45]))]
    pub numbers: Vec<i64>,
    /// Stake and payout multiplier (default 1)
    #[schema(example = 2)]
    pub multiplier: Option<u32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PurchaseTicketResponse {
    pub ticket: JackpotTicket,
    pub is_winner: bool,
    /// Balance after the ticket settled (cents)
    pub balance_cents: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TicketQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Only tickets with this status
    pub status: Option<Outcome>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PayoutTier {
    pub matches: u8,
    pub payout_cents: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JackpotInfoResponse {
    pub base_price_cents: i64,
    pub numbers_per_ticket: usize,
    pub number_min: u8,
    pub number_max: u8,
    pub min_multiplier: u32,
    pub max_multiplier: u32,
    /// Base payouts for a 1x ticket
    pub payout_table: Vec<PayoutTier>,
    pub next_draw_at: DateTime<Utc>,
}
