use crate::error::ApiError;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

pub type KeyedLimiter = DefaultKeyedRateLimiter<String>;

pub fn keyed(quota: Quota) -> KeyedLimiter {
    RateLimiter::keyed(quota)
}

/// Takes one cell from `key`'s bucket.
pub fn check(limiter: &KeyedLimiter, key: &str) -> Result<(), ApiError> {
    if limiter.check_key(&key.to_string()).is_err() {
        tracing::warn!(client = %key, "rate limit exceeded");
        return Err(ApiError::RateLimited);
    }
    Ok(())
}

/// Drops buckets that have fully refilled, so idle clients stop taking memory.
pub fn prune(limiter: &KeyedLimiter) {
    limiter.retain_recent();
    limiter.shrink_to_fit();
}

#[cfg(test)]
mod tests {
    use super::*;
    use nonzero_ext::nonzero;

    #[test]
    fn buckets_are_per_key() {
        let limiter = keyed(Quota::per_minute(nonzero!(2u32)));
        assert!(check(&limiter, "a").is_ok());
        assert!(check(&limiter, "a").is_ok());
        assert!(matches!(check(&limiter, "a"), Err(ApiError::RateLimited)));
        assert!(check(&limiter, "b").is_ok());
        assert_eq!(limiter.len(), 2);
    }

    #[test]
    fn pruning_keeps_buckets_that_are_still_draining() {
        let limiter = keyed(Quota::per_minute(nonzero!(2u32)));
        assert!(check(&limiter, "a").is_ok());
        assert!(check(&limiter, "a").is_ok());
        prune(&limiter);
        assert_eq!(limiter.len(), 1);
        assert!(matches!(check(&limiter, "a"), Err(ApiError::RateLimited)));
    }
}
