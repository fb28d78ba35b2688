use std::sync::MutexGuard;
use std::sync::atomic::Ordering;
use std::time::Instant;

use futures_timer::Delay;
use log::debug;

use super::controller::{FormError, FormResult, FormValidator, write_lock};

pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// The armed auto-hide deadline. Re-arming replaces the pending timer, so at
/// most one deadline is live; a stale async waiter detects the replacement by
/// its generation and stands down.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HideTimer {
    pub(super) generation: u64,
    pub(super) deadline: Instant,
}

impl FormValidator {
    /// The success path of a valid submission. A document without a success
    /// element makes this a complete no-op: no banner, no scroll, and no
    /// reset either.
    pub fn show_success(&self) -> FormResult<()> {
        {
            let mut document = write_lock(&self.document, "showing success banner")?;
            if !document.show_success() {
                return Ok(());
            }
            document.reset();
            document.hide_all_error_messages();
        }

        let generation = self.hide_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let deadline = self.clock.now() + self.options.auto_hide_delay;
        let mut pending = self.lock_pending("arming auto-hide timer")?;
        *pending = Some(HideTimer {
            generation,
            deadline,
        });
        Ok(())
    }

    /// Deterministic driver: hide the banner once the clock has reached the
    /// armed deadline. Returns whether the banner was hidden by this call.
    pub fn poll_auto_hide(&self) -> FormResult<bool> {
        {
            let mut pending = self.lock_pending("polling auto-hide timer")?;
            match *pending {
                Some(timer) if self.clock.now() >= timer.deadline => {
                    *pending = None;
                }
                _ => return Ok(false),
            }
        }
        self.hide_banner()
    }

    /// Async driver: sleep until the armed deadline, then hide the banner if
    /// no newer one replaced it in the meantime.
    pub async fn run_auto_hide(&self) -> FormResult<bool> {
        let Some(armed) = *self.lock_pending("reading auto-hide timer")? else {
            return Ok(false);
        };

        let wait = armed.deadline.saturating_duration_since(self.clock.now());
        if !wait.is_zero() {
            Delay::new(wait).await;
        }

        {
            let mut pending = self.lock_pending("finishing auto-hide timer")?;
            match *pending {
                Some(current) if current.generation == armed.generation => {
                    *pending = None;
                }
                _ => return Ok(false),
            }
        }
        self.hide_banner()
    }

    pub fn auto_hide_pending(&self) -> FormResult<bool> {
        Ok(self.lock_pending("inspecting auto-hide timer")?.is_some())
    }

    fn hide_banner(&self) -> FormResult<bool> {
        let mut document = write_lock(&self.document, "hiding success banner")?;
        document.hide_success();
        debug!("success banner auto-hidden");
        Ok(true)
    }

    fn lock_pending(&self, context: &'static str) -> FormResult<MutexGuard<'_, Option<HideTimer>>> {
        self.pending_hide
            .lock()
            .map_err(|_| FormError::StatePoisoned(context))
    }
}
