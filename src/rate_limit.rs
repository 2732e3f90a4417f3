use std::net::IpAddr;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Budget of contact messages one client may send within a fixed window.
pub struct ContactRateLimiter {
    limit: u32,
    window: Duration,
    /// client -> messages accepted in the window that opened at `Instant`
    windows: DashMap<IpAddr, (u32, Instant)>,
}

impl ContactRateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            windows: DashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Spend one message from `client`'s budget, or return the seconds until it refills.
    pub fn try_acquire(&self, client: IpAddr) -> Result<(), u64> {
        let now = Instant::now();
        let mut slot = self.windows.entry(client).or_insert((0, now));
        let (sent, opened) = slot.value_mut();

        let mut elapsed = now.saturating_duration_since(*opened);
        if elapsed >= self.window {
            *sent = 0;
            *opened = now;
            elapsed = Duration::ZERO;
        }

        if *sent >= self.limit {
            let remaining = self.window.saturating_sub(elapsed);
            // Round up so clients never retry a fraction of a second early
            return Err(remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0));
        }

        *sent += 1;
        Ok(())
    }

    /// Drop clients whose window has already closed.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.windows
            .retain(|_, (_, opened)| now.saturating_duration_since(*opened) < self.window);
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}
