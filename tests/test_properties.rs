use platformer::compute::*;
use platformer::controller::Controller;
use platformer::entities::*;
use platformer::tuning::*;
use proptest::prelude::*;

fn arb_box() -> impl Strategy<Value = (f32, f32, f32, f32)> {
    (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
}

fn arb_input() -> impl Strategy<Value = InputState> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(left, right, jump, throw)| InputState {
            left,
            right,
            jump,
            throw,
            quit: false,
        },
    )
}

proptest! {
    #[test]
    fn collision_is_symmetric((ax, ay, aw, ah) in arb_box(), (bx, by, bw, bh) in arb_box()) {
        let a = Entity::from(Obstacle::new(ax, ay, aw, ah));
        let b = Entity::from(Obstacle::new(bx, by, bw, bh));
        prop_assert_eq!(collides(&a, &b), collides(&b, &a));
        prop_assert!(!collides(&a, &a));
        prop_assert!(!collides(&b, &b));
    }

    #[test]
    fn collision_check_is_pure((ax, ay, aw, ah) in arb_box(), (bx, by, bw, bh) in arb_box()) {
        let a = Entity::from(Obstacle::new(ax, ay, aw, ah));
        let b = Entity::from(Obstacle::new(bx, by, bw, bh));
        let (a0, b0) = (a.clone(), b.clone());
        let first = collides(&a, &b);
        prop_assert_eq!(first, collides(&a, &b));
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }

    #[test]
    fn player_never_sinks_below_ground(inputs in proptest::collection::vec(arb_input(), 10..300)) {
        let mut controller = Controller::new();
        let mut state = init_state();
        for input in &inputs {
            state = controller.apply_input(&state, input);
            state = tick(&state);
            prop_assert!(
                state.player().y <= PLAYER_GROUND_Y,
                "player y={} below ground",
                state.player().y
            );
        }
        prop_assert_eq!(state.frame, inputs.len() as u64);
        prop_assert_eq!(state.entities()[0].kind(), EntityKind::Player);
    }

    #[test]
    fn enemies_only_ever_disappear(inputs in proptest::collection::vec(arb_input(), 10..300)) {
        let mut controller = Controller::new();
        let mut state = init_state();
        let mut enemies = state.enemies().count();
        for input in &inputs {
            state = controller.apply_input(&state, input);
            state = tick(&state);
            let now = state.enemies().count();
            prop_assert!(now <= enemies);
            prop_assert!(enemies - now <= 1, "more than one enemy removed in a tick");
            enemies = now;
        }
        prop_assert_eq!(state.obstacles().count(), TUBE_POSITIONS.len());
    }
}
