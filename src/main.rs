use std::path::PathBuf;

use anyhow::Result;
use timefighter::engine::core::EngineConfig;
use timefighter::engine::EngineApp;

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args_os().nth(1) {
        Some(path) => EngineConfig::load(PathBuf::from(path))?,
        None => EngineConfig::default(),
    };
    let app = EngineApp::new(config);
    app.run()
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
