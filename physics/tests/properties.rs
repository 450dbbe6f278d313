mod support;

use physics::{
    Control, InputState, LevelState, PhysicsTuning, StaticSet, Traction, Vec3, Volume, evaluate,
    step_actor, update_velocity,
};
use proptest::prelude::*;
use support::actor_at;

// Wide floor with its top face at y = -1.75.
fn floor() -> StaticSet {
    StaticSet::new(vec![Volume::from_size(
        Vec3::new(0.0, -2.0, 0.0),
        Vec3::new(20.0, 0.5, 20.0),
    )])
}

fn tick(statics: &StaticSet, actor: &mut physics::Actor, input: &InputState, traction: Traction) {
    let tuning = PhysicsTuning::default();
    update_velocity(actor, input, traction, &tuning);
    step_actor(statics, actor, tuning.ground_snap_threshold);
}

fn traction() -> impl Strategy<Value = Traction> {
    prop_oneof![Just(Traction::Slippery), Just(Traction::Grippy)]
}

proptest! {
    #[test]
    fn resting_actor_stays_put(x in -8.0f32..8.0, z in -8.0f32..8.0, traction in traction()) {
        let statics = floor();
        let mut actor = actor_at(Vec3::new(x, -1.25, z));

        tick(&statics, &mut actor, &InputState::new(), traction);

        prop_assert_eq!(actor.velocity.y, 0.0);
        prop_assert_eq!(actor.position().y, -1.25);
        prop_assert_eq!(actor.body.bottom(), -1.75);
    }

    #[test]
    fn free_fall_adds_gravity_every_tick(
        x in -50.0f32..50.0,
        z in -50.0f32..50.0,
        ticks in 1usize..120,
    ) {
        // Floor far below the reachable range of this test.
        let statics = StaticSet::new(vec![Volume::from_size(
            Vec3::new(0.0, -500.0, 0.0),
            Vec3::new(4.0, 0.5, 4.0),
        )]);
        let mut actor = actor_at(Vec3::new(x, 10.0, z));

        for _ in 0..ticks {
            let before = actor.velocity.y;
            tick(&statics, &mut actor, &InputState::new(), Traction::Grippy);
            prop_assert_eq!(actor.velocity.y, before + actor.gravity);
            prop_assert!(actor.velocity.y < before);
        }
    }

    #[test]
    fn jump_ignored_unless_vertical_velocity_is_zero(
        vy in prop_oneof![-1.0f32..-1.0e-6, 1.0e-6f32..1.0],
        traction in traction(),
    ) {
        let mut actor = actor_at(Vec3::zeros());
        actor.velocity.y = vy;

        update_velocity(
            &mut actor,
            &InputState::with(&[Control::Jump]),
            traction,
            &PhysicsTuning::default(),
        );

        prop_assert_eq!(actor.velocity.y, vy);
    }

    #[test]
    fn grippy_clears_horizontal_velocity(vx in -5.0f32..5.0, vz in -5.0f32..5.0) {
        let mut actor = actor_at(Vec3::zeros());
        actor.velocity = Vec3::new(vx, 0.0, vz);

        update_velocity(&mut actor, &InputState::new(), Traction::Grippy, &PhysicsTuning::default());

        prop_assert_eq!(actor.velocity.x, 0.0);
        prop_assert_eq!(actor.velocity.z, 0.0);
    }

    #[test]
    fn outcome_is_stable_without_movement(
        x in -10.0f32..10.0,
        y in -40.0f32..5.0,
        z in -10.0f32..10.0,
    ) {
        let actor = actor_at(Vec3::new(x, y, z));
        let hazards = [Volume::from_size(Vec3::new(2.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0))];
        let goal = Volume::from_size(Vec3::new(-3.0, 0.0, -3.0), Vec3::new(1.0, 1.0, 1.0));

        let first = evaluate(&actor, &hazards, &goal, -35.0);
        let second = evaluate(&actor, &hazards, &goal, -35.0);

        prop_assert_eq!(first, second);
        if y < -35.0 {
            prop_assert!(matches!(first, LevelState::GameOver(_)));
        }
    }
}

#[test]
fn jump_right_after_landing_takes_off() {
    let statics = floor();
    let mut actor = actor_at(Vec3::new(0.0, -1.25, 0.0));
    actor.velocity.y = -0.05;

    // Landing tick clamps the fall to zero.
    tick(&statics, &mut actor, &InputState::new(), Traction::Grippy);
    assert_eq!(actor.velocity.y, 0.0);

    tick(&statics, &mut actor, &InputState::with(&[Control::Jump]), Traction::Grippy);
    assert_eq!(actor.velocity.y, 0.12);
    assert!(actor.body.bottom() > -1.75);
}
