#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use timefighter::game::{GameConfig, GameController, Presenter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Score(u32),
    Time(u64),
    GameOver(u32),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingPresenter {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn game_overs(&self) -> Vec<u32> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|notice| match notice {
                Notice::GameOver(score) => Some(*score),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.notices.borrow_mut().clear();
    }
}

impl Presenter for RecordingPresenter {
    fn score_changed(&mut self, score: u32) {
        self.notices.borrow_mut().push(Notice::Score(score));
    }

    fn time_changed(&mut self, seconds_remaining: u64) {
        self.notices.borrow_mut().push(Notice::Time(seconds_remaining));
    }

    fn game_over(&mut self, final_score: u32) {
        self.notices.borrow_mut().push(Notice::GameOver(final_score));
    }
}

pub fn controller() -> (GameController, RecordingPresenter) {
    controller_with(GameConfig::default())
}

pub fn controller_with(config: GameConfig) -> (GameController, RecordingPresenter) {
    let presenter = RecordingPresenter::default();
    (GameController::new(config, presenter.clone()), presenter)
}
