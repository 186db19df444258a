pub mod config;
pub mod controller;
pub mod countdown;
pub mod presenter;
pub mod snapshot;
pub mod state;

pub use config::GameConfig;
pub use controller::GameController;
pub use presenter::{LogPresenter, Presenter};
pub use snapshot::Snapshot;
pub use state::GameState;
