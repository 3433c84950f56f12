use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::game::{LUCKY_DRAW_ENTRY_PRICE_CENTS, LUCKY_DRAW_ITEMS, NUMBERS_PER_TICKET};
use crate::models::*;
use crate::services::{GameStore, UserService};

const RECENT_TRANSACTIONS: usize = 10;
const RECENT_DRAWS: usize = 20;
const RECENT_TICKETS: usize = 20;

/// Read-only operator views over the game store plus the user directory.
#[derive(Clone)]
pub struct AdminService {
    store: GameStore,
    user_service: UserService,
}

/// `None` and "all" mean no filter; anything else must parse.
fn parse_filter<T: FromStr<Err = String>>(value: Option<&str>) -> AppResult<Option<T>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse::<T>().map(Some).map_err(AppError::ValidationError),
    }
}

impl AdminService {
    pub fn new(store: GameStore, user_service: UserService) -> Self {
        Self {
            store,
            user_service,
        }
    }

    pub async fn dashboard(&self) -> DashboardStats {
        let registered_users = self.user_service.list(None).len();
        self.store
            .read(|state| {
                let total_wagered_cents = state.total_by_kind(TransactionType::Bet);
                let total_paid_out_cents = state.total_by_kind(TransactionType::Win);
                DashboardStats {
                    tickets_sold: state.jackpot_tickets.len(),
                    lucky_draw_entries: state.lucky_draw_entries.len(),
                    total_wagered_cents,
                    total_paid_out_cents,
                    gross_gaming_revenue_cents: total_wagered_cents - total_paid_out_cents,
                    total_deposits_cents: state.total_by_kind(TransactionType::Deposit),
                    total_withdrawals_cents: state.total_by_kind(TransactionType::Withdraw),
                    balance_cents: state.balance_cents,
                    registered_users,
                    recent_transactions: state
                        .transactions
                        .iter()
                        .rev()
                        .take(RECENT_TRANSACTIONS)
                        .cloned()
                        .collect(),
                }
            })
            .await
    }

    pub async fn list_transactions(
        &self,
        query: &AdminTransactionQuery,
    ) -> AppResult<PaginatedResponse<Transaction>> {
        let status: Option<TransactionStatus> = parse_filter(query.status.as_deref())?;
        let kind: Option<TransactionType> = parse_filter(query.kind.as_deref())?;
        let params = PaginationParams::new(query.page, query.per_page);

        let rows: Vec<Transaction> = self
            .store
            .read(|state| {
                state
                    .transactions
                    .iter()
                    .rev()
                    .filter(|t| status.is_none_or(|s| t.status == s))
                    .filter(|t| kind.is_none_or(|k| t.kind == k))
                    .cloned()
                    .collect()
            })
            .await;
        Ok(PaginatedResponse::paginate(rows, &params))
    }

    pub async fn list_users(&self, query: &AdminUserQuery) -> Vec<UserResponse> {
        let balance_cents = self.store.balance().await;
        self.user_service
            .list(query.search.as_deref())
            .into_iter()
            .map(|u| UserResponse::new(u, balance_cents))
            .collect()
    }

    pub async fn toggle_user_status(&self, id: &str) -> AppResult<UserResponse> {
        let user = self.user_service.toggle_status(id)?;
        Ok(self.user_service.to_response(user).await)
    }

    pub async fn lucky_draw_overview(&self) -> LuckyDrawOverview {
        let recent_draws = self
            .store
            .read(|state| {
                state
                    .lucky_draw_entries
                    .iter()
                    .rev()
                    .take(RECENT_DRAWS)
                    .map(|e| RecentDraw {
                        drawn_at: e.drawn_at,
                        winning_item: e.winning_item.clone(),
                        selected_item: e.selected_item.clone(),
                        won: e.result == Outcome::Won,
                    })
                    .collect()
            })
            .await;

        LuckyDrawOverview {
            entry_price_cents: LUCKY_DRAW_ENTRY_PRICE_CENTS,
            items: LUCKY_DRAW_ITEMS.iter().map(Into::into).collect(),
            recent_draws,
        }
    }

    pub async fn jackpot_overview(&self) -> JackpotOverview {
        self.store
            .read(|state| {
                let mut counts = [0usize; NUMBERS_PER_TICKET + 1];
                for ticket in &state.jackpot_tickets {
                    if let Some(slot) = counts.get_mut(usize::from(ticket.match_count)) {
                        *slot += 1;
                    }
                }

                JackpotOverview {
                    tickets_sold: state.jackpot_tickets.len(),
                    winning_tickets: state
                        .jackpot_tickets
                        .iter()
                        .filter(|t| t.status == Outcome::Won)
                        .count(),
                    match_distribution: counts
                        .iter()
                        .enumerate()
                        .map(|(matches, tickets)| MatchBucket {
                            matches: matches as u8,
                            tickets: *tickets,
                        })
                        .collect(),
                    recent_tickets: state
                        .jackpot_tickets
                        .iter()
                        .rev()
                        .take(RECENT_TICKETS)
                        .cloned()
                        .collect(),
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use crate::services::game_store::tests::store_with;
    use crate::utils::ScriptedRandom;

    fn service() -> AdminService {
        let store = store_with(ScriptedRandom::new(vec![1, 2, 3, 7, 8, 9], vec![0.0]));
        let users = UserService::new(store.clone(), &AuthConfig::default());
        AdminService::new(store, users)
    }

    fn query(status: Option<&str>, kind: Option<&str>) -> AdminTransactionQuery {
        AdminTransactionQuery {
            page: None,
            per_page: None,
            status: status.map(str::to_string),
            kind: kind.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_dashboard_totals() {
        let service = service();
        service.store.purchase_jackpot_ticket(&[1, 2, 3, 4, 5, 6], 1).await;
        service.store.place_lucky_draw_bet("🍌").await;
        service
            .store
            .record_wallet_movement(TransactionType::Deposit, 5_000, "Wallet Deposit")
            .await
            .unwrap();

        let stats = service.dashboard().await;
        assert_eq!(stats.tickets_sold, 1);
        assert_eq!(stats.lucky_draw_entries, 1);
        assert_eq!(stats.total_wagered_cents, 700);
        assert_eq!(stats.total_paid_out_cents, 1_000);
        assert_eq!(stats.gross_gaming_revenue_cents, -300);
        assert_eq!(stats.total_deposits_cents, 5_000);
        assert_eq!(stats.balance_cents, 105_300);
        assert_eq!(stats.registered_users, 2);
        assert_eq!(stats.recent_transactions[0].kind, TransactionType::Deposit);
    }

    #[tokio::test]
    async fn test_transaction_filters() {
        let service = service();
        service.store.purchase_jackpot_ticket(&[1, 2, 3, 4, 5, 6], 1).await;

        let all = service.list_transactions(&query(Some("all"), Some("all"))).await.unwrap();
        assert_eq!(all.total, 2);

        let wins = service.list_transactions(&query(None, Some("win"))).await.unwrap();
        assert_eq!(wins.total, 1);

        let completed = service
            .list_transactions(&query(Some("completed"), None))
            .await
            .unwrap();
        assert_eq!(completed.total, 2);

        assert!(matches!(
            service.list_transactions(&query(None, Some("refund"))).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_jackpot_distribution() {
        let service = service();
        service.store.purchase_jackpot_ticket(&[1, 2, 3, 4, 5, 6], 1).await;
        service.store.purchase_jackpot_ticket(&[40, 41, 42, 43, 44, 45], 1).await;

        let overview = service.jackpot_overview().await;
        assert_eq!(overview.tickets_sold, 2);
        assert_eq!(overview.winning_tickets, 1);
        assert_eq!(overview.match_distribution.len(), 7);
        assert_eq!(overview.match_distribution[3].tickets, 1);
        assert_eq!(overview.match_distribution[0].tickets, 1);
        assert_eq!(overview.recent_tickets[0].numbers, vec![40, 41, 42, 43, 44, 45]);
    }

    #[tokio::test]
    async fn test_lucky_draw_overview() {
        let service = service();
        service.store.place_lucky_draw_bet("🍎").await;
        let overview = service.lucky_draw_overview().await;
        assert_eq!(overview.entry_price_cents, 200);
        assert_eq!(overview.items.len(), 8);
        assert_eq!(overview.recent_draws.len(), 1);
        assert!(overview.recent_draws[0].won);
    }

    #[tokio::test]
    async fn test_users_and_toggle() {
        let service = service();
        let users = service
            .list_users(&AdminUserQuery {
                search: Some("john".to_string()),
            })
            .await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].balance_cents, 100_000);

        let toggled = service.toggle_user_status("1").await.unwrap();
        assert_eq!(toggled.status, UserStatus::Suspended);
    }
}
