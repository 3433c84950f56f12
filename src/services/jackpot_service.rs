use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

use crate::config::GameConfig;
use crate::error::{AppError, AppResult};
use crate::game::{
    JACKPOT_BASE_PRICE_CENTS, JACKPOT_PAYOUT_TABLE, MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET,
    ticket_price_cents,
};
use crate::models::{
    JackpotInfoResponse, JackpotTicket, NotificationKind, PaginatedResponse, PaginationParams,
    PayoutTier, PurchaseTicketRequest, PurchaseTicketResponse, TicketQuery,
};
use crate::services::{GameStore, NotificationService};

#[derive(Clone)]
pub struct JackpotService {
    store: GameStore,
    notifications: NotificationService,
    max_multiplier: u32,
    draw_interval_secs: i64,
    started_at: DateTime<Utc>,
}

impl JackpotService {
    pub fn new(store: GameStore, notifications: NotificationService, settings: &GameConfig) -> Self {
        Self {
            store,
            notifications,
            max_multiplier: settings.max_multiplier,
            draw_interval_secs: settings.next_draw_interval_secs.max(1),
            started_at: Utc::now(),
        }
    }

    /// Next boundary of the countdown that starts when the service starts.
    pub fn next_draw_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let elapsed = (now - self.started_at).num_seconds().max(0);
        let rounds = elapsed / self.draw_interval_secs + 1;
        self.started_at + Duration::seconds(rounds * self.draw_interval_secs)
    }

    pub fn info(&self) -> JackpotInfoResponse {
        JackpotInfoResponse {
            base_price_cents: JACKPOT_BASE_PRICE_CENTS,
            numbers_per_ticket: NUMBERS_PER_TICKET,
            number_min: MIN_NUMBER,
            number_max: MAX_NUMBER,
            min_multiplier: 1,
            max_multiplier: self.max_multiplier,
            payout_table: JACKPOT_PAYOUT_TABLE
                .iter()
                .map(|(matches, payout_cents)| PayoutTier {
                    matches: *matches,
                    payout_cents: *payout_cents,
                })
                .collect(),
            next_draw_at: self.next_draw_at(Utc::now()),
        }
    }

    /// Checks a number selection: exactly 6 distinct values in 1..=49.
    pub fn validate_numbers(numbers: &[i64]) -> AppResult<Vec<u8>> {
        if numbers.len() != NUMBERS_PER_TICKET {
            return Err(AppError::ValidationError(format!(
                "Please select exactly {NUMBERS_PER_TICKET} numbers"
            )));
        }
        let range = i64::from(MIN_NUMBER)..=i64::from(MAX_NUMBER);
        if let Some(bad) = numbers.iter().find(|n| !range.contains(n)) {
            return Err(AppError::ValidationError(format!(
                "Number {bad} is outside {MIN_NUMBER}-{MAX_NUMBER}"
            )));
        }
        let unique: HashSet<i64> = numbers.iter().copied().collect();
        if unique.len() != numbers.len() {
            return Err(AppError::ValidationError(
                "Numbers must not repeat".to_string(),
            ));
        }

        let mut chosen: Vec<u8> = numbers.iter().map(|n| *n as u8).collect();
        chosen.sort_unstable();
        Ok(chosen)
    }

    pub async fn purchase(&self, request: PurchaseTicketRequest) -> AppResult<PurchaseTicketResponse> {
        let numbers = Self::validate_numbers(&request.numbers)?;

        let multiplier = request.multiplier.unwrap_or(1);
        if multiplier < 1 || multiplier > self.max_multiplier {
            return Err(AppError::ValidationError(format!(
                "Multiplier must be between 1 and {}",
                self.max_multiplier
            )));
        }

        self.store
            .try_begin_play(ticket_price_cents(multiplier))
            .await?;
        let outcome = self.store.purchase_jackpot_ticket(&numbers, multiplier).await;
        let ticket = outcome.record;

        if outcome.is_winner {
            self.notifications
                .push(
                    NotificationKind::Win,
                    "Jackpot Winner! 🎉",
                    format!(
                        "You matched {} numbers and won ₵{:.2} ({}x).",
                        ticket.match_count,
                        ticket.payout_cents as f64 / 100.0,
                        ticket.multiplier
                    ),
                )
                .await;
        } else {
            self.notifications
                .push(
                    NotificationKind::Result,
                    "Jackpot Draw Result",
                    format!(
                        "Your ticket matched {} numbers. Better luck next time!",
                        ticket.match_count
                    ),
                )
                .await;
        }

        Ok(PurchaseTicketResponse {
            ticket,
            is_winner: outcome.is_winner,
            balance_cents: self.store.balance().await,
        })
    }

    /// Newest first.
    pub async fn list_tickets(&self, query: &TicketQuery) -> PaginatedResponse<JackpotTicket> {
        let params = PaginationParams::new(query.page, query.per_page);
        let tickets: Vec<JackpotTicket> = self
            .store
            .read(|state| {
                state
                    .jackpot_tickets
                    .iter()
                    .rev()
                    .filter(|t| query.status.is_none_or(|s| t.status == s))
                    .cloned()
                    .collect()
            })
            .await;
        PaginatedResponse::paginate(tickets, &params)
    }
}
