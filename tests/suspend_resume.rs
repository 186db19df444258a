mod common;

use std::time::Duration;

use common::{controller, Notice};
use timefighter::engine::platform::PlatformLayer;
use timefighter::game::{GameState, Snapshot};

#[test]
fn running_round_survives_suspend() {
    let (mut game, _presenter) = controller();
    let mut platform = PlatformLayer::new();
    for _ in 0..4 {
        game.on_tap();
    }
    game.advance(Duration::from_millis(54_000));

    platform.suspend(&mut game);

    assert!(!game.is_timer_active());
    assert_eq!(game.state(), GameState::Running);
    assert_eq!(
        platform.saved(),
        Some(&Snapshot {
            score: 4,
            time_remaining_ms: 6_000,
        })
    );
}

#[test]
fn restored_round_continues_in_a_new_controller() {
    let (mut game, _presenter) = controller();
    let mut platform = PlatformLayer::new();
    for _ in 0..5 {
        game.on_tap();
    }
    game.advance(Duration::from_millis(54_000));
    platform.suspend(&mut game);
    drop(game);

    let (mut recreated, presenter) = controller();
    assert!(platform.resume(&mut recreated));

    assert_eq!(recreated.state(), GameState::Running);
    assert_eq!(recreated.score(), 5);
    assert_eq!(recreated.time_remaining_ms(), 6_000);
    assert_eq!(presenter.notices(), vec![Notice::Score(5), Notice::Time(6)]);
    assert_eq!(recreated.on_tap(), 6);

    recreated.advance(Duration::from_secs(6));
    assert_eq!(presenter.game_overs(), vec![6]);
    assert!(platform.saved().is_none());
}

#[test]
fn idle_round_is_not_saved() {
    let (mut game, presenter) = controller();
    let mut platform = PlatformLayer::new();

    platform.suspend(&mut game);

    assert!(platform.saved().is_none());
    assert!(!platform.resume(&mut game));
    assert_eq!(game.state(), GameState::Idle);
    assert!(presenter.notices().is_empty());
}

#[test]
fn resume_restores_only_once() {
    let (mut game, _presenter) = controller();
    let mut platform = PlatformLayer::new();
    game.on_tap();
    platform.suspend(&mut game);

    assert!(platform.resume(&mut game));
    assert!(!platform.resume(&mut game));
}

#[test]
fn saved_round_renders_as_ron() {
    let snapshot = Snapshot {
        score: 4,
        time_remaining_ms: 6_000,
    };

    assert_eq!(
        ron::to_string(&snapshot).expect("snapshot serializes"),
        "(score:4,time_remaining_ms:6000)"
    );
}
