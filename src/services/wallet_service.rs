use crate::error::{AppError, AppResult};
use crate::models::{
    NotificationKind, PaginatedResponse, PaginationParams, Transaction, TransactionQuery,
    TransactionType, WalletAmountRequest, WalletOperationResponse, WalletResponse,
};
use crate::services::{GameStore, NotificationService};

/// Largest single deposit or withdrawal: 1,000,000 credits.
const MAX_WALLET_AMOUNT_CENTS: i64 = 100_000_000;

#[derive(Clone)]
pub struct WalletService {
    store: GameStore,
    notifications: NotificationService,
}

impl WalletService {
    pub fn new(store: GameStore, notifications: NotificationService) -> Self {
        Self {
            store,
            notifications,
        }
    }

    pub async fn wallet(&self) -> WalletResponse {
        self.store
            .read(|state| WalletResponse {
                balance_cents: state.balance_cents,
                processing: state.processing,
            })
            .await
    }

    fn validate_amount(amount_cents: i64) -> AppResult<()> {
        if amount_cents <= 0 {
            return Err(AppError::ValidationError(
                "Amount must be greater than zero".to_string(),
            ));
        }
        if amount_cents > MAX_WALLET_AMOUNT_CENTS {
            return Err(AppError::ValidationError(
                "Amount exceeds the single transfer limit".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn deposit(&self, request: WalletAmountRequest) -> AppResult<WalletOperationResponse> {
        Self::validate_amount(request.amount_cents)?;

        let (transaction, balance_cents) = self
            .store
            .record_wallet_movement(TransactionType::Deposit, request.amount_cents, "Wallet Deposit")
            .await?;
        log::info!("Deposit of {} cents, balance={balance_cents}", request.amount_cents);

        self.notifications
            .push(
                NotificationKind::Transaction,
                "Deposit Confirmation",
                format!(
                    "Your deposit of ₵{:.2} has been added to your wallet.",
                    request.amount_cents as f64 / 100.0
                ),
            )
            .await;

        Ok(WalletOperationResponse {
            transaction,
            balance_cents,
        })
    }

    pub async fn withdraw(&self, request: WalletAmountRequest) -> AppResult<WalletOperationResponse> {
        Self::validate_amount(request.amount_cents)?;

        let (transaction, balance_cents) = self
            .store
            .record_wallet_movement(
                TransactionType::Withdraw,
                -request.amount_cents,
                "Wallet Withdrawal",
            )
            .await?;
        log::info!("Withdrawal of {} cents, balance={balance_cents}", request.amount_cents);

        self.notifications
            .push(
                NotificationKind::Transaction,
                "Withdrawal Processed",
                format!(
                    "₵{:.2} has been withdrawn from your wallet.",
                    request.amount_cents as f64 / 100.0
                ),
            )
            .await;

        Ok(WalletOperationResponse {
            transaction,
            balance_cents,
        })
    }

    /// Ledger, newest first.
    pub async fn list_transactions(&self, query: &TransactionQuery) -> PaginatedResponse<Transaction> {
        let params = PaginationParams::new(query.page, query.per_page);
        let rows: Vec<Transaction> = self
            .store
            .read(|state| {
                state
                    .transactions
                    .iter()
                    .rev()
                    .filter(|t| query.kind.is_none_or(|k| t.kind == k))
                    .cloned()
                    .collect()
            })
            .await;
        PaginatedResponse::paginate(rows, &params)
    }
}
