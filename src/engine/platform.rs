use crate::game::{GameController, GameState, Snapshot};

/// Carries a round across a host suspend/resume cycle.
#[derive(Debug)]
pub struct PlatformLayer {
    boot_timestamp: std::time::Instant,
    saved: Option<Snapshot>,
}

impl PlatformLayer {
    pub fn new() -> Self {
        Self {
            boot_timestamp: std::time::Instant::now(),
            saved: None,
        }
    }

    /// Stops the countdown and keeps score and time for [`resume`](Self::resume).
    /// Only a running round has anything worth keeping.
    pub fn suspend(&mut self, controller: &mut GameController) {
        controller.cancel_timer();
        if controller.state() != GameState::Running {
            tracing::info!(target: "engine", state = ?controller.state(), "suspended");
            return;
        }

        let snapshot = controller.snapshot();
        match ron::to_string(&snapshot) {
            Ok(saved) => tracing::info!(target: "engine", %saved, "suspended, saving round"),
            Err(err) => tracing::warn!(target: "engine", %err, ?snapshot, "suspended, saving round"),
        }
        self.saved = Some(snapshot);
    }

    /// Returns `true` when a saved round was restored.
    pub fn resume(&mut self, controller: &mut GameController) -> bool {
        match self.saved.take() {
            Some(snapshot) => {
                tracing::info!(target: "engine", ?snapshot, "resumed, restoring round");
                controller.restore_snapshot(&snapshot);
                true
            }
            None => {
                tracing::trace!(target: "engine", "resumed with nothing to restore");
                false
            }
        }
    }

    pub fn saved(&self) -> Option<&Snapshot> {
        self.saved.as_ref()
    }

    pub fn uptime(&self) -> std::time::Duration {
        self.boot_timestamp.elapsed()
    }
}

impl Default for PlatformLayer {
    fn default() -> Self {
        Self::new()
    }
}
