use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Outcome, PaginatedResponse};
use crate::game::LuckyItem;

/// One single-item pick and the weighted draw it was settled against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LuckyDrawEntry {
    pub id: Uuid,
    /// Symbol the player picked
    pub selected_item: String,
    /// Symbol the draw produced
    pub winning_item: String,
    pub drawn_at: DateTime<Utc>,
    pub price_cents: i64,
    pub result: Outcome,
    pub payout_cents: i64,
    /// Label of the picked item, e.g. "4x"
    pub multiplier: String,
}

/// Catalog item as shown to players
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LuckyItemResponse {
    #[schema(example = "🍎")]
    pub symbol: String,
    #[schema(example = "Apple")]
    pub name: String,
    /// Draw probability weight
    pub weight: f64,
    #[schema(example = "4x")]
    pub multiplier: String,
    pub payout_cents: i64,
}

impl From<&LuckyItem> for LuckyItemResponse {
    fn from(item: &LuckyItem) -> Self {
        LuckyItemResponse {
            symbol: item.symbol.to_string(),
            name: item.name.to_string(),
            weight: item.weight,
            multiplier: item.multiplier.to_string(),
            payout_cents: item.payout_cents,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceBetRequest {
    #[schema(example = "🍎")]
    pub item: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlaceBetResponse {
    pub entry: LuckyDrawEntry,
    pub is_winner: bool,
    pub balance_cents: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LuckyDrawEntryQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub result: Option<Outcome>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LuckyDrawSummary {
    pub total_entries: usize,
    pub wins: usize,
    /// Whole percent, 0 when nothing was played
    pub win_rate: u32,
    pub total_payout_cents: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LuckyDrawHistoryResponse {
    pub entries: PaginatedResponse<LuckyDrawEntry>,
    pub summary: LuckyDrawSummary,
}
