use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Transaction;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WalletAmountRequest {
    /// Positive amount in cents
    #[schema(example = 10000)]
    pub amount_cents: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WalletResponse {
    pub balance_cents: i64,
    /// True while a play is waiting on its draw
    pub processing: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WalletOperationResponse {
    pub transaction: Transaction,
    pub balance_cents: i64,
}
