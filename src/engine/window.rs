use std::sync::Arc;

use winit::window::Window;

use crate::game::presenter::{game_over_message, score_label, time_label};
use crate::game::{LogPresenter, Presenter};

/// Shows score, time, and the end-of-game message in the window title.
pub struct TitlePresenter {
    window: Arc<Window>,
    app_name: String,
    score: u32,
    seconds_remaining: u64,
    banner: Option<String>,
    log: LogPresenter,
}

impl TitlePresenter {
    pub fn new(window: Arc<Window>, app_name: impl Into<String>) -> Self {
        Self {
            window,
            app_name: app_name.into(),
            score: 0,
            seconds_remaining: 0,
            banner: None,
            log: LogPresenter,
        }
    }

    fn redraw(&self) {
        let mut title = format!(
            "{} | {} | {}",
            self.app_name,
            score_label(self.score),
            time_label(self.seconds_remaining)
        );
        if let Some(banner) = &self.banner {
            title.push_str(" | ");
            title.push_str(banner);
        }
        self.window.set_title(&title);
    }
}

impl Presenter for TitlePresenter {
    fn score_changed(&mut self, score: u32) {
        self.score = score;
        self.log.score_changed(score);
        self.redraw();
    }

    fn time_changed(&mut self, seconds_remaining: u64) {
        self.seconds_remaining = seconds_remaining;
        if seconds_remaining > 0 {
            self.banner = None;
        }
        self.log.time_changed(seconds_remaining);
        self.redraw();
    }

    fn game_over(&mut self, final_score: u32) {
        self.banner = Some(game_over_message(final_score));
        self.log.game_over(final_score);
        self.redraw();
    }
}
