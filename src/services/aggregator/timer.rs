use std::time::{Duration, Instant};

/// Logs the elapsed time of a scope when dropped, including on early `?` returns.
pub struct ScopedTimer {
    label: &'static str,
    started: Instant,
}

impl ScopedTimer {
    pub fn start(label: &'static str) -> Self {
        log::debug!("Starting '{label}'");
        Self {
            label,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        log::info!(
            "Finished '{}', took {:.3} s",
            self.label,
            self.elapsed().as_secs_f64()
        );
    }
}
