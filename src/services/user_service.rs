use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::GameStore;

pub const DEMO_USER_ID: &str = "1";
pub const ADMIN_USER_ID: &str = "admin";

/// Mock user directory: the demo player, the admin and whoever signed up
/// since the process started.
#[derive(Clone)]
pub struct UserService {
    users: Arc<RwLock<Vec<User>>>,
    store: GameStore,
}

impl UserService {
    pub fn new(store: GameStore, auth: &AuthConfig) -> Self {
        let users = vec![
            User::new(DEMO_USER_ID, "John Doe", "john@example.com", false),
            User::new(ADMIN_USER_ID, "Admin User", &auth.admin_email, true),
        ];
        Self {
            users: Arc::new(RwLock::new(users)),
            store,
        }
    }

    pub fn find(&self, id: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        users.iter().find(|u| u.id == id).cloned()
    }

    pub fn demo_user(&self) -> AppResult<User> {
        self.find(DEMO_USER_ID)
            .ok_or_else(|| AppError::InternalError("Demo user missing".to_string()))
    }

    pub fn admin_user(&self) -> AppResult<User> {
        self.find(ADMIN_USER_ID)
            .ok_or_else(|| AppError::InternalError("Admin user missing".to_string()))
    }

    /// Directory entry for a token identity, falling back to the identity
    /// itself for tokens issued before a restart.
    pub fn resolve(&self, user: &User) -> User {
        self.find(&user.id).unwrap_or_else(|| user.clone())
    }

    pub fn register_identity(&self, name: &str, email: &str) -> AppResult<User> {
        let email = email.trim().to_lowercase();
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&email)) {
            return Err(AppError::ValidationError(
                "Email is already registered".to_string(),
            ));
        }

        let user = User::new(&Uuid::new_v4().to_string(), name.trim(), &email, false);
        users.push(user.clone());
        log::info!("Registered user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Case-insensitive match on name or email.
    pub fn list(&self, search: Option<&str>) -> Vec<User> {
        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        users
            .iter()
            .filter(|u| {
                needle.as_ref().is_none_or(|n| {
                    u.name.to_lowercase().contains(n) || u.email.to_lowercase().contains(n)
                })
            })
            .cloned()
            .collect()
    }

    pub fn toggle_status(&self, id: &str) -> AppResult<User> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        if user.is_admin {
            return Err(AppError::ValidationError(
                "Admin accounts cannot be suspended".to_string(),
            ));
        }

        user.status = match user.status {
            UserStatus::Active => UserStatus::Suspended,
            UserStatus::Suspended => UserStatus::Active,
        };
        log::info!("User {} is now {:?}", user.id, user.status);
        Ok(user.clone())
    }

    pub async fn to_response(&self, user: User) -> UserResponse {
        UserResponse::new(user, self.store.balance().await)
    }

    /// Profile and play statistics. There is one wallet, so the statistics
    /// cover the whole game history.
    pub async fn get_user_profile(&self, user: &User) -> ProfileResponse {
        let user = self.resolve(user);
        let (statistics, balance_cents) = self
            .store
            .read(|state| {
                let statistics = UserStatistics {
                    tickets_bought: state.jackpot_tickets.len(),
                    tickets_won: state
                        .jackpot_tickets
                        .iter()
                        .filter(|t| t.status == Outcome::Won)
                        .count(),
                    entries_played: state.lucky_draw_entries.len(),
                    entries_won: state
                        .lucky_draw_entries
                        .iter()
                        .filter(|e| e.result == Outcome::Won)
                        .count(),
                    total_wagered_cents: state.total_by_kind(TransactionType::Bet),
                    total_won_cents: state.total_by_kind(TransactionType::Win),
                };
                (statistics, state.balance_cents)
            })
            .await;

        ProfileResponse {
            user: UserResponse::new(user, balance_cents),
            statistics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::game_store::tests::store_with;
    use crate::utils::ScriptedRandom;

    fn service() -> UserService {
        let auth = AuthConfig {
            admin_email: "admin@betbliss.com".to_string(),
            admin_password: "admin123".to_string(),
        };
        UserService::new(store_with(ScriptedRandom::units(vec![0.0])), &auth)
    }

    #[test]
    fn test_directory_seeded() {
        let service = service();
        assert_eq!(service.list(None).len(), 2);
        assert!(service.admin_user().unwrap().is_admin);
        assert_eq!(service.demo_user().unwrap().name, "John Doe");
    }

    #[test]
    fn test_register_and_search() {
        let service = service();
        let jane = service
            .register_identity(" Jane Roe ", "Jane@Example.com")
            .unwrap();
        assert_eq!(jane.name, "Jane Roe");
        assert_eq!(jane.email, "jane@example.com");
        assert!(!jane.is_admin);

        assert!(service.register_identity("Jane", "jane@example.com").is_err());
        assert_eq!(service.list(Some("JANE")).len(), 1);
        assert_eq!(service.list(Some("example.com")).len(), 2);
        assert_eq!(service.list(Some("   ")).len(), 3);
    }

    #[test]
    fn test_toggle_status() {
        let service = service();
        let suspended = service.toggle_status(DEMO_USER_ID).unwrap();
        assert_eq!(suspended.status, UserStatus::Suspended);
        assert!(!service.find(DEMO_USER_ID).unwrap().is_active());

        service.toggle_status(DEMO_USER_ID).unwrap();
        assert!(service.find(DEMO_USER_ID).unwrap().is_active());

        assert!(matches!(
            service.toggle_status(ADMIN_USER_ID),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            service.toggle_status("missing"),
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_profile_statistics() {
        let service = service();
        service.store.place_lucky_draw_bet("🍎").await;
        service.store.place_lucky_draw_bet("🍌").await;

        let profile = service.get_user_profile(&service.demo_user().unwrap()).await;
        assert_eq!(profile.statistics.entries_played, 2);
        assert_eq!(profile.statistics.entries_won, 1);
        assert_eq!(profile.statistics.total_wagered_cents, 400);
        assert_eq!(profile.statistics.total_won_cents, 800);
        assert_eq!(profile.user.balance_cents, 100_400);
    }
}
