pub mod core;
pub mod platform;
pub mod window;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use self::core::EngineConfig;
use self::platform::PlatformLayer;
use self::window::TitlePresenter;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use crate::game::{GameController, GameState};

pub struct EngineApp {
    config: EngineConfig,
    platform: PlatformLayer,
}

impl EngineApp {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            platform: PlatformLayer::new(),
            config,
        }
    }

    pub fn run(self) -> Result<()> {
        tracing::info!(
            target: "engine",
            app = %self.config.app_name,
            duration_ms = self.config.game.initial_duration_ms,
            tick_interval_ms = self.config.game.tick_interval_ms,
            "Engine starting"
        );

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(self.config.app_name.clone())
                .with_resizable(false)
                .with_inner_size(LogicalSize::new(
                    self.config.window_width as f64,
                    self.config.window_height as f64,
                ))
                .build(&event_loop)
                .context("failed to create window")?,
        );

        let presenter = TitlePresenter::new(window.clone(), self.config.app_name.clone());
        let controller = GameController::new(self.config.game.clone(), presenter);
        let mut round = RoundHost::new(controller, self.platform, Instant::now());
        round.controller.refresh();

        event_loop
            .run(move |event, target| match event {
                Event::Resumed => round.resume(Instant::now()),
                Event::Suspended => round.platform.suspend(&mut round.controller),
                Event::AboutToWait => {
                    let flow = match round.update(Instant::now()) {
                        Some(deadline) => ControlFlow::WaitUntil(deadline),
                        None => ControlFlow::Wait,
                    };
                    target.set_control_flow(flow);
                }
                Event::WindowEvent { window_id, event } if window_id == window.id() => {
                    match event {
                        WindowEvent::CloseRequested => {
                            tracing::info!(target: "engine", "window close requested");
                            target.exit();
                        }
                        WindowEvent::MouseInput {
                            state: ElementState::Pressed,
                            button: MouseButton::Left,
                            ..
                        } => round.tap(Instant::now()),
                        WindowEvent::KeyboardInput { event, .. }
                            if event.state == ElementState::Pressed && !event.repeat =>
                        {
                            round.key(&event.logical_key, target, Instant::now());
                        }
                        _ => {}
                    }
                }
                _ => {}
            })
            .map_err(|err| anyhow!(err))?;

        tracing::info!(target: "engine", "Engine shutdown complete");
        Ok(())
    }
}

/// Event-loop side of a round: feeds wall time to the controller and holds
/// the end-of-game message up before starting the next round.
struct RoundHost {
    controller: GameController,
    platform: PlatformLayer,
    hold: Duration,
    hold_until: Option<Instant>,
    last_frame: Instant,
}

impl RoundHost {
    fn new(controller: GameController, platform: PlatformLayer, now: Instant) -> Self {
        let hold = Duration::from_millis(controller.config().game_over_hold_ms);
        Self {
            controller,
            platform,
            hold,
            hold_until: None,
            last_frame: now,
        }
    }

    fn tap(&mut self, now: Instant) {
        // Idle time before the first tap is not part of the round.
        if !self.controller.is_timer_active() {
            self.last_frame = now;
        }
        self.controller.on_tap();
    }

    fn key(&mut self, key: &Key, target: &EventLoopWindowTarget<()>, now: Instant) {
        match key {
            Key::Named(NamedKey::Space | NamedKey::Enter) => self.tap(now),
            Key::Named(NamedKey::Escape) => {
                tracing::info!(target: "engine", "escape pressed");
                target.exit();
            }
            Key::Character(c) if c.as_str().eq_ignore_ascii_case("r") => self.new_round(),
            _ => {}
        }
    }

    fn resume(&mut self, now: Instant) {
        self.last_frame = now;
        self.platform.resume(&mut self.controller);
    }

    fn new_round(&mut self) {
        self.hold_until = None;
        self.controller.reset();
        self.controller.refresh();
    }

    /// Returns when the loop next needs to wake, if at all.
    fn update(&mut self, now: Instant) -> Option<Instant> {
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.controller.advance(delta);

        if self.controller.state() != GameState::Finished {
            return self.controller.until_next_tick().map(|wait| now + wait);
        }

        let hold = self.hold;
        let until = *self.hold_until.get_or_insert_with(|| now + hold);
        if now >= until {
            tracing::info!(
                target: "engine",
                uptime_s = self.platform.uptime().as_secs(),
                "starting next round"
            );
            self.new_round();
            None
        } else {
            Some(until)
        }
    }
}
