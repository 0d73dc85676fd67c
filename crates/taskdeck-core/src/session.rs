use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const TOKEN_TTL_SECONDS: i64 = 86_400;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn begin(token: String, ttl_seconds: i64, now: DateTime<Utc>) -> Self {
        Self {
            token,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn valid_token(&self, now: DateTime<Utc>) -> Option<&str> {
        if self.is_expired(now) {
            None
        } else {
            Some(self.token.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn token_is_readable_until_expiry() {
        let start = Utc.with_ymd_and_hms(2026, 2, 16, 5, 0, 0).unwrap();
        let session = Session::begin("tok-123".to_string(), TOKEN_TTL_SECONDS, start);

        assert_eq!(session.valid_token(start), Some("tok-123"));

        let late = start + Duration::seconds(TOKEN_TTL_SECONDS - 1);
        assert_eq!(session.valid_token(late), Some("tok-123"));
    }

    #[test]
    fn token_disappears_at_the_expiry_instant() {
        let start = Utc.with_ymd_and_hms(2026, 2, 16, 5, 0, 0).unwrap();
        let session = Session::begin("tok-123".to_string(), TOKEN_TTL_SECONDS, start);

        let expiry = start + Duration::seconds(TOKEN_TTL_SECONDS);
        assert!(session.is_expired(expiry));
        assert_eq!(session.valid_token(expiry), None);
    }

    #[test]
    fn session_round_trips_through_json() {
        let start = Utc.with_ymd_and_hms(2026, 2, 16, 5, 0, 0).unwrap();
        let session = Session::begin("tok-123".to_string(), TOKEN_TTL_SECONDS, start);

        let raw = serde_json::to_string(&session).expect("encode session");
        let restored: Session = serde_json::from_str(&raw).expect("decode session");
        assert_eq!(restored, session);
    }
}
