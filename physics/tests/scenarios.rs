mod support;

use physics::{
    Control, FIXED_TIMESTEP, FrameOutcome, InputState, LevelDef, LevelId, LevelSession,
    LevelState, LossCause, PhysicsTuning, SessionError, Vec3, evaluate,
};
use support::{Recorder, actor_at, init_tracing, run_frames};

const CORRIDOR: &str = r#"
name = "corridor"
traction = "grippy"
goal = { position = [0.0, -1.0, -10.0], size = [1.0, 1.0, 1.0] }

[[platforms]]
position = [0.0, -2.0, 0.0]
size = [4.0, 0.5, 40.0]
"#;

#[test]
fn spawn_falls_onto_the_first_ice_platform() {
    init_tracing();
    let mut session = LevelSession::builtin(LevelId::Ice);
    let mut ui = Recorder::default();
    let idle = InputState::new();

    for _ in 0..120 {
        session.step(&idle, &mut ui);
    }

    let actor = session.actor();
    assert_eq!(actor.body.bottom(), -1.75);
    assert_eq!(actor.velocity.y, 0.0);
    assert_eq!(session.last_step().ground, Some(0));
    assert_eq!(session.state(), LevelState::Running);
}

#[test]
fn below_death_altitude_is_game_over_whatever_the_velocity() {
    let goal = LevelId::Ice.def().goal.volume();

    for vy in [-1.0, 0.0, 0.5] {
        let mut actor = actor_at(Vec3::new(0.0, -36.0, 0.0));
        actor.velocity = Vec3::new(0.1, vy, -0.1);
        assert_eq!(
            evaluate(&actor, &[], &goal, -35.0),
            LevelState::GameOver(LossCause::Fell)
        );
    }
}

#[test]
fn lava_kills_even_while_standing_on_safe_ground() {
    init_tracing();
    let mut session = LevelSession::builtin(LevelId::Lava);
    let mut ui = Recorder::default();

    // Resting on platform 0 (top -1.75) inside lava pool 0.
    session
        .actor_mut()
        .body
        .set_center(Vec3::new(1.5, -1.25, -2.5));

    let state = session.step(&InputState::new(), &mut ui);

    assert_eq!(session.last_step().ground, Some(0));
    assert_eq!(state, LevelState::GameOver(LossCause::Hazard(0)));
    assert_eq!(ui.game_overs.len(), 1);
}

#[test]
fn grippy_level_stops_on_release() {
    let mut session = LevelSession::builtin(LevelId::Lava);
    let mut ui = Recorder::default();
    session.actor_mut().velocity.x = 0.37;

    session.step(&InputState::new(), &mut ui);

    assert_eq!(session.velocity().x, 0.0);
}

#[test]
fn respawn_replays_the_initial_tick_exactly() {
    init_tracing();
    let input = InputState::with(&[Control::Forward, Control::Left]);

    let mut fresh = LevelSession::builtin(LevelId::Ice);
    let mut ui = Recorder::default();
    fresh.step(&input, &mut ui);
    let first_tick = *fresh.actor();

    let mut replay = LevelSession::builtin(LevelId::Ice);
    for _ in 0..30 {
        replay.step(&input, &mut ui);
    }
    replay
        .actor_mut()
        .body
        .set_center(Vec3::new(4.0, -40.0, -20.0));
    replay.step(&InputState::new(), &mut ui);
    let token = ui.game_overs.pop().expect("game over token");

    replay.respawn(token).unwrap();
    assert_eq!(replay.position(), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(replay.velocity(), Vec3::zeros());

    replay.step(&input, &mut ui);
    assert_eq!(*replay.actor(), first_tick);
}

#[test]
fn walking_the_corridor_wins_once_and_stops_the_loop() {
    init_tracing();
    let def = LevelDef::from_toml_str(CORRIDOR).unwrap();
    let mut session = LevelSession::new(def, PhysicsTuning::default()).unwrap();
    let mut ui = Recorder::default();
    let handle = session.loop_handle().unwrap();
    let forward = InputState::with(&[Control::Forward]);

    let frames = run_frames(&mut session, &forward, &mut ui, 600);

    assert_eq!(session.state(), LevelState::Win);
    assert!(frames > 90 && frames < 120, "frames = {frames}");
    assert_eq!(ui.wins, 1);
    assert!(ui.game_overs.is_empty());
    assert!(session.loop_handle().is_none());

    // The old loop cannot be resumed and nothing is notified twice.
    let tick_count = session.tick_count();
    let out = session.advance(handle, FIXED_TIMESTEP * 10, &forward, &mut ui);
    assert_eq!(out, FrameOutcome::Cancelled);
    assert_eq!(session.tick_count(), tick_count);
    assert_eq!(ui.wins, 1);
}

#[test]
fn respawning_a_won_level_is_refused() {
    let def = LevelDef::from_toml_str(CORRIDOR).unwrap();
    let mut won = LevelSession::new(def.clone(), PhysicsTuning::default()).unwrap();
    let mut lost = LevelSession::new(def, PhysicsTuning::default()).unwrap();
    let mut ui = Recorder::default();

    lost.actor_mut().body.set_center(Vec3::new(0.0, -50.0, 0.0));
    lost.step(&InputState::new(), &mut ui);
    let token = ui.game_overs.pop().unwrap();

    won.actor_mut().body.set_center(Vec3::new(0.0, -1.0, -10.0));
    won.step(&InputState::new(), &mut ui);
    assert_eq!(won.state(), LevelState::Win);

    assert_eq!(won.respawn(token), Err(SessionError::AlreadyWon));
}

#[test]
fn custom_tuning_changes_the_fall() {
    let tuning = PhysicsTuning::from_toml_str("gravity = -0.01").unwrap();
    let mut session = LevelSession::new(LevelId::Ice.def(), tuning).unwrap();
    let mut ui = Recorder::default();

    session.step(&InputState::new(), &mut ui);
    session.step(&InputState::new(), &mut ui);

    assert!((session.velocity().y + 0.02).abs() < 1.0e-6);
}
