use std::{
    sync::Mutex,
    time::{Duration, Instant},
};

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

#[derive(Debug)]
struct BreakerState {
    state: CircuitState,
    consecutive_failures: u32,
    opened_at: Option<Instant>,
    trial_in_flight: bool,
}

/// Consecutive-failure circuit breaker shared by every service of a client.
#[derive(Debug)]
pub struct CircuitBreaker {
    failure_threshold: u32,
    open_duration: Duration,
    inner: Mutex<BreakerState>,
}

impl CircuitBreaker {
    pub fn new(failure_threshold: u32, open_duration: Duration) -> Self {
        Self {
            failure_threshold: failure_threshold.max(1),
            open_duration,
            inner: Mutex::new(BreakerState {
                state: CircuitState::Closed,
                consecutive_failures: 0,
                opened_at: None,
                trial_in_flight: false,
            }),
        }
    }

    pub fn state(&self) -> CircuitState {
        self.lock().state
    }

    /// Returns false when the call must fail fast.
    pub fn allow_request(&self) -> bool {
        self.allow_request_at(Instant::now())
    }

    pub fn record_success(&self) {
        let mut inner = self.lock();
        inner.state = CircuitState::Closed;
        inner.consecutive_failures = 0;
        inner.opened_at = None;
        inner.trial_in_flight = false;
    }

    pub fn record_failure(&self) {
        self.record_failure_at(Instant::now())
    }

    fn allow_request_at(&self, now: Instant) -> bool {
        let mut inner = self.lock();
        match inner.state {
            CircuitState::Closed => true,
            CircuitState::Open => {
                let elapsed = inner.opened_at.map(|t| now.duration_since(t)).unwrap_or_default();
                if elapsed >= self.open_duration {
                    inner.state = CircuitState::HalfOpen;
                    inner.trial_in_flight = true;
                    inner.opened_at = Some(now);
                    true
                } else {
                    false
                }
            }
            CircuitState::HalfOpen => {
                // a trial whose future was dropped never reports back
                let trial_age = inner.opened_at.map(|t| now.duration_since(t)).unwrap_or_default();
                if inner.trial_in_flight && trial_age < self.open_duration {
                    false
                } else {
                    inner.trial_in_flight = true;
                    inner.opened_at = Some(now);
                    true
                }
            }
        }
    }

    fn record_failure_at(&self, now: Instant) {
        let mut inner = self.lock();
        inner.consecutive_failures = inner.consecutive_failures.saturating_add(1);

        let should_open = match inner.state {
            CircuitState::HalfOpen => true,
            CircuitState::Closed => inner.consecutive_failures >= self.failure_threshold,
            CircuitState::Open => false,
        };

        if should_open {
            warn!(
                "Circuit breaker opened after {} consecutive failures, pausing requests for {:?}",
                inner.consecutive_failures, self.open_duration
            );
            inner.state = CircuitState::Open;
            inner.opened_at = Some(now);
            inner.trial_in_flight = false;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BreakerState> {
        // state stays consistent even if a holder panicked
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_after_threshold() {
        let breaker = CircuitBreaker::new(3, Duration::from_secs(30));

        breaker.record_failure();
        breaker.record_failure();
        assert_eq!(breaker.state(), CircuitState::Closed);
        assert!(breaker.allow_request());

        breaker.record_failure();
        assert_eq!(breaker.state(), CircuitState::Open);
        assert!(!breaker.allow_request());
    }

    #[test]
    fn test_success_resets_failure_count() {
        let breaker = CircuitBreaker::new(2, Duration::from_secs(30));

        breaker.record_failure();
        breaker.record_success();
        breaker.record_failure();

        assert_eq!(breaker.state(), CircuitState::Closed);
    }

    #[test]
    fn test_half_open_allows_single_trial() {
        let breaker = CircuitBreaker::new(1, Duration::from_secs(10));
        let start = Instant::now();

        breaker.record_failure_at(start);
        assert!(!breaker.allow_request_at(start + Duration::from_secs(5)));

        let later = start + Duration::from_secs(11);
        assert!(breaker.allow_request_at(later));
        assert_eq!(breaker.state(), CircuitState::HalfOpen);
        assert!(!breaker.allow_request_at(later));
    }

    #[test]
    fn test_half_open_failure_reopens() {
        let breaker = CircuitBreaker::new(1, Duration::from_secs(10));
        let start = Instant::now();

        breaker.record_failure_at(start);
        let later = start + Duration::from_secs(11);
        assert!(breaker.allow_request_at(later));

        breaker.record_failure_at(later);
        assert_eq!(breaker.state(), CircuitState::Open);
        assert!(!breaker.allow_request_at(later + Duration::from_secs(1)));
    }

    #[test]
    fn test_half_open_success_closes() {
        let breaker = CircuitBreaker::new(1, Duration::from_secs(10));
        let start = Instant::now();

        breaker.record_failure_at(start);
        assert!(breaker.allow_request_at(start + Duration::from_secs(10)));
        breaker.record_success();

        assert_eq!(breaker.state(), CircuitState::Closed);
        assert!(breaker.allow_request());
    }
}
