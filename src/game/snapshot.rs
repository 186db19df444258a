use serde::Serialize;

/// Score and time captured when the host suspends mid-round.
///
/// Lives only in memory across a single suspend/resume cycle and is handed
/// back to [`GameController::restore_snapshot`](super::GameController::restore_snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub score: u32,
    pub time_remaining_ms: u64,
}
