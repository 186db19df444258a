use std::time::Duration;

use super::config::GameConfig;
use super::countdown::Countdown;
use super::presenter::Presenter;
use super::snapshot::Snapshot;
use super::state::GameState;

/// Owns one round of score and countdown state.
///
/// Every entry point runs to completion on the caller's thread. Inputs are
/// never rejected: out-of-range values are clamped and taps after the round
/// has ended are dropped.
pub struct GameController {
    config: GameConfig,
    state: GameState,
    score: u32,
    time_remaining_ms: u64,
    countdown: Countdown,
    presenter: Box<dyn Presenter>,
}

impl GameController {
    pub fn new(config: GameConfig, presenter: impl Presenter + 'static) -> Self {
        let countdown = Countdown::new(config.tick_interval_ms);
        let mut controller = Self {
            time_remaining_ms: config.initial_duration_ms,
            config,
            state: GameState::Idle,
            score: 0,
            countdown,
            presenter: Box::new(presenter),
        };
        controller.reset();
        controller
    }

    /// Starts a fresh round. The presenter is not notified; call
    /// [`refresh`](Self::refresh) afterwards to redraw.
    pub fn reset(&mut self) {
        self.countdown.cancel();
        self.score = 0;
        self.time_remaining_ms = self.config.initial_duration_ms;
        self.state = GameState::Idle;
        tracing::debug!(target: "game", "round reset");
    }

    pub fn restore(&mut self, score: i64, time_remaining_ms: i64) {
        let limit = i64::try_from(self.config.initial_duration_ms).unwrap_or(i64::MAX);
        self.score = u32::try_from(score.max(0)).unwrap_or(u32::MAX);
        self.time_remaining_ms = time_remaining_ms.clamp(0, limit) as u64;

        tracing::info!(
            target: "game",
            score = self.score,
            time_remaining_ms = self.time_remaining_ms,
            "round restored"
        );
        self.presenter.score_changed(self.score);
        self.presenter.time_changed(self.seconds_remaining());

        if self.time_remaining_ms > 0 {
            self.state = GameState::Running;
            self.countdown.start(self.time_remaining_ms);
        } else {
            self.finish();
        }
    }

    pub fn restore_snapshot(&mut self, snapshot: &Snapshot) {
        self.restore(
            i64::from(snapshot.score),
            i64::try_from(snapshot.time_remaining_ms).unwrap_or(i64::MAX),
        );
    }

    pub fn on_tap(&mut self) -> u32 {
        if !self.state.accepts_taps() {
            tracing::trace!(target: "game", score = self.score, "tap ignored after round end");
            return self.score;
        }
        if self.state == GameState::Idle {
            self.start();
        }

        self.score = self.score.saturating_add(1);
        tracing::debug!(target: "game", score = self.score, "tap");
        self.presenter.score_changed(self.score);
        self.score
    }

    pub fn tick(&mut self, remaining_ms: i64) {
        if remaining_ms <= 0 {
            if self.state == GameState::Finished {
                tracing::trace!(target: "game", "tick ignored after round end");
                return;
            }
            self.time_remaining_ms = 0;
            self.presenter.time_changed(0);
            self.finish();
            return;
        }

        if self.state != GameState::Running {
            tracing::trace!(target: "game", state = ?self.state, remaining_ms, "tick ignored");
            return;
        }

        self.time_remaining_ms = remaining_ms as u64;
        self.countdown.resync(self.time_remaining_ms);
        tracing::debug!(target: "game", remaining_ms, "tick");
        self.presenter.time_changed(self.seconds_remaining());
    }

    /// Pauses the countdown, leaving score and state untouched so the
    /// caller can take a [`snapshot`](Self::snapshot).
    pub fn cancel_timer(&mut self) {
        self.countdown.cancel();
        tracing::debug!(
            target: "game",
            time_remaining_ms = self.time_remaining_ms,
            "countdown cancelled"
        );
    }

    /// Feeds elapsed wall time to the countdown and applies every tick it
    /// produced.
    pub fn advance(&mut self, delta: Duration) {
        for remaining_ms in self.countdown.advance(delta) {
            self.tick(remaining_ms);
        }
    }

    pub fn refresh(&mut self) {
        self.presenter.score_changed(self.score);
        self.presenter.time_changed(self.seconds_remaining());
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            time_remaining_ms: self.time_remaining_ms,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining_ms(&self) -> u64 {
        self.time_remaining_ms
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.time_remaining_ms / 1000
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_timer_active(&self) -> bool {
        self.countdown.is_active()
    }

    pub fn until_next_tick(&self) -> Option<Duration> {
        self.countdown.until_next_tick()
    }

    /// Begins the countdown of an idle round. Has no effect once the round
    /// is running or over.
    pub fn start(&mut self) {
        if self.state != GameState::Idle {
            tracing::trace!(target: "game", state = ?self.state, "start ignored");
            return;
        }
        self.state = GameState::Running;
        self.countdown.start(self.time_remaining_ms);
        tracing::info!(
            target: "game",
            duration_ms = self.time_remaining_ms,
            "round started"
        );
    }

    fn finish(&mut self) {
        self.countdown.cancel();
        self.state = GameState::Finished;
        tracing::info!(target: "game", final_score = self.score, "round finished");
        self.presenter.game_over(self.score);
    }
}
