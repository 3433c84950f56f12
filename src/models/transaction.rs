use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Bet,
    Win,
    Deposit,
    Withdraw,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Bet => write!(f, "bet"),
            TransactionType::Win => write!(f, "win"),
            TransactionType::Deposit => write!(f, "deposit"),
            TransactionType::Withdraw => write!(f, "withdraw"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bet" => Ok(TransactionType::Bet),
            "win" => Ok(TransactionType::Win),
            "deposit" => Ok(TransactionType::Deposit),
            "withdraw" => Ok(TransactionType::Withdraw),
            other => Err(format!("Unknown transaction type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed" => Ok(TransactionStatus::Completed),
            "pending" => Ok(TransactionStatus::Pending),
            other => Err(format!("Unknown transaction status: {other}")),
        }
    }
}

/// Ledger row. Append-only; the balance is tracked separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount_cents: i64,
    pub description: String,
    pub date: DateTime<Utc>,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TransactionQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters_case_insensitively() {
        assert_eq!("Deposit".parse::<TransactionType>(), Ok(TransactionType::Deposit));
        assert_eq!(
            "COMPLETED".parse::<TransactionStatus>(),
            Ok(TransactionStatus::Completed)
        );
        assert!("refund".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_kind_serialized_as_type() {
        let tx = Transaction {
            id: Uuid::nil(),
            kind: TransactionType::Win,
            amount_cents: 1000,
            description: "Jackpot Win - 3 matches (1x)".to_string(),
            date: Utc::now(),
            status: TransactionStatus::Completed,
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "win");
        assert_eq!(value["status"], "completed");
    }
}
