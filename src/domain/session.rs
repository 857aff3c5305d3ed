//! Server-side login session.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A persisted login. Deleted on logout; useless once `expires_at` passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry() {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            user_id: 1,
            created_at: now,
            expires_at: now + Duration::hours(1),
        };
        assert!(session.is_active_at(now));
        assert!(!session.is_active_at(now + Duration::hours(2)));
    }
}
