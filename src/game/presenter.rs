/// Receives a notification after every change the controller makes.
pub trait Presenter {
    fn score_changed(&mut self, score: u32);
    fn time_changed(&mut self, seconds_remaining: u64);
    fn game_over(&mut self, final_score: u32);
}

pub fn score_label(score: u32) -> String {
    format!("Your Score: {score}")
}

pub fn time_label(seconds_remaining: u64) -> String {
    format!("Time Left: {seconds_remaining}")
}

pub fn game_over_message(final_score: u32) -> String {
    format!("Time's up! Your score was: {final_score}")
}

#[derive(Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn score_changed(&mut self, score: u32) {
        tracing::debug!(target: "game", score, "score changed");
    }

    fn time_changed(&mut self, seconds_remaining: u64) {
        tracing::debug!(target: "game", seconds_remaining, "time changed");
    }

    fn game_over(&mut self, final_score: u32) {
        tracing::info!(target: "game", final_score, "{}", game_over_message(final_score));
    }
}
