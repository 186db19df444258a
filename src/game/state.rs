#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Idle,
    Running,
    Finished,
}

impl GameState {
    /// Taps only count before the round has ended.
    pub fn accepts_taps(self) -> bool {
        matches!(self, GameState::Idle | GameState::Running)
    }
}
