use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Notification, NotificationKind, NotificationListResponse};

/// Session notifications. Kept in memory only; they are not part of the
/// persisted game state.
#[derive(Clone)]
pub struct NotificationService {
    items: Arc<RwLock<Vec<Notification>>>,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService {
    pub fn new() -> Self {
        let welcome = Notification {
            id: Uuid::new_v4(),
            title: "Welcome to BetBliss! 🎊".to_string(),
            message: "Your demo wallet is ready. Start playing and good luck!".to_string(),
            kind: NotificationKind::Welcome,
            unread: true,
            created_at: Utc::now(),
        };
        Self {
            items: Arc::new(RwLock::new(vec![welcome])),
        }
    }

    pub async fn push(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            kind,
            unread: true,
            created_at: Utc::now(),
        };
        self.items.write().await.push(notification.clone());
        notification
    }

    pub async fn list(&self) -> NotificationListResponse {
        let items = self.items.read().await;
        NotificationListResponse {
            items: items.iter().rev().cloned().collect(),
            unread_count: items.iter().filter(|n| n.unread).count(),
        }
    }

    pub async fn mark_read(&self, id: Uuid) -> AppResult<Notification> {
        let mut items = self.items.write().await;
        let notification = items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;
        notification.unread = false;
        Ok(notification.clone())
    }

    /// Returns how many were unread.
    pub async fn mark_all_read(&self) -> usize {
        let mut items = self.items.write().await;
        let mut changed = 0;
        for n in items.iter_mut().filter(|n| n.unread) {
            n.unread = false;
            changed += 1;
        }
        changed
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|n| n.id != id);
        if items.len() == before {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_with_welcome() {
        let service = NotificationService::new();
        let list = service.list().await;
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].kind, NotificationKind::Welcome);
        assert_eq!(list.unread_count, 1);
    }

    #[tokio::test]
    async fn test_newest_first_and_read_state() {
        let service = NotificationService::new();
        let win = service
            .push(NotificationKind::Win, "Lucky Draw Winner! 🎉", "You won")
            .await;
        let list = service.list().await;
        assert_eq!(list.items[0].id, win.id);
        assert_eq!(list.unread_count, 2);

        assert!(!service.mark_read(win.id).await.unwrap().unread);
        assert_eq!(service.list().await.unread_count, 1);
        assert_eq!(service.mark_all_read().await, 1);
        assert_eq!(service.list().await.unread_count, 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let service = NotificationService::new();
        let id = service.list().await.items[0].id;
        service.delete(id).await.unwrap();
        assert!(service.list().await.items.is_empty());
        assert!(matches!(
            service.delete(id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(service.mark_read(id).await.is_err());
    }
}
