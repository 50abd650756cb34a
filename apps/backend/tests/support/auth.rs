use std::time::{Duration, SystemTime};

use taskline_backend::auth::jwt::mint_access_token;
use taskline_backend::SecurityConfig;

pub fn mint_test_token(sub: &str, email: &str, sec: &SecurityConfig) -> String {
    mint_access_token(sub, email, SystemTime::now(), sec).expect("should mint token")
}

/// `Bearer <token>` for the given subject.
pub fn bearer_header(sub: &str, email: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(sub, email, sec))
}

/// Token whose `exp` is an hour in the past.
pub fn mint_expired_token(sub: &str, email: &str, sec: &SecurityConfig) -> String {
    let two_hours_ago = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
    mint_access_token(sub, email, two_hours_ago, sec).expect("should mint expired token")
}
