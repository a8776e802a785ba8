//! Debounced scheduling on a tokio runtime
//!
//! A [`Debouncer`] holds at most one pending callback. Scheduling again
//! before it fires aborts the pending one, so a burst of triggers runs the
//! callback once, `delay` after the last trigger.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `fire` once `delay` has passed without another `schedule` call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.cancel() {
            log::trace!("debounce re-armed, pending callback dropped");
        }
        // Deadline is fixed now, not when the task is first polled.
        let deadline = Instant::now() + self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            fire();
        }));
    }

    /// Drop the pending callback, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn burst_fires_once_after_last_trigger() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(90));
        let start = Instant::now();

        // Five triggers, 10ms apart: last one at t=40ms.
        for i in 0..5 {
            let tx = tx.clone();
            debouncer.schedule(move || {
                let _ = tx.send((i, Instant::now()));
            });
            tokio::time::advance(Duration::from_millis(10)).await;
        }

        // t=129ms: still quiet.
        tokio::time::advance(Duration::from_millis(79)).await;
        assert!(rx.try_recv().is_err());
        assert!(debouncer.is_pending());

        let (which, fired_at) = rx.recv().await.expect("debounced callback");
        assert_eq!(which, 4);
        let elapsed = fired_at - start;
        assert!(elapsed >= Duration::from_millis(130), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(132), "{elapsed:?}");

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_callback() {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        let mut debouncer = Debouncer::new(Duration::from_millis(90));
        debouncer.schedule(move || {
            let _ = tx.send(());
        });
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_debouncer_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        {
            let mut debouncer = Debouncer::new(Duration::from_millis(20));
            debouncer.schedule(move || {
                let _ = tx.send(());
            });
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
    }
}
