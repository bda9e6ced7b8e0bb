use proptest::prelude::*;
use windy_gridworld::{Cell, Env, EnvError, GridConfig, Space, WindyGridworldEnv};

fn any_cell() -> impl Strategy<Value = Cell> {
    (0usize..7, 0usize..10).prop_map(|(row, col)| Cell::new(row, col))
}

proptest! {
    // Any action sequence from any cell keeps the agent on the grid.
    #[test]
    fn agent_stays_in_bounds(start in any_cell(), actions in proptest::collection::vec(0i64..4, 1..200)) {
        let mut env = WindyGridworldEnv::new();
        env.set_state(start).unwrap();
        let space = env.observation_space();
        for a in actions {
            let s = env.step(a).unwrap();
            prop_assert!(s.observation.row <= 6);
            prop_assert!(s.observation.col <= 9);
            prop_assert!(space.contains(&s.observation.to_indices()));
        }
    }

    // Reward and termination depend only on whether the goal was hit.
    #[test]
    fn reward_matches_goal(start in any_cell(), action in 0i64..4) {
        let mut env = WindyGridworldEnv::new();
        env.set_state(start).unwrap();
        let s = env.step(action).unwrap();
        let at_goal = s.observation == GridConfig::TEXTBOOK.goal();
        prop_assert_eq!(s.terminated, at_goal);
        prop_assert_eq!(s.reward, if at_goal { 0 } else { -1 });
        prop_assert!(!s.truncated);
    }

    // The stateful step and the pure transition agree.
    #[test]
    fn step_matches_simulate_step(start in any_cell(), action in 0i64..4) {
        let mut env = WindyGridworldEnv::new();
        env.set_state(start).unwrap();
        let t = env.simulate_step(start, action).unwrap();
        prop_assert_eq!(env.state(), Some(start));
        let s = env.step(action).unwrap();
        prop_assert_eq!(s.observation, t.state);
        prop_assert_eq!(s.reward, t.reward);
        prop_assert_eq!(s.terminated, t.done);
    }

    // Out-of-range indices are rejected and leave the agent where it was.
    #[test]
    fn invalid_actions_rejected(start in any_cell(), bad in prop_oneof![i64::MIN..0i64, 4i64..i64::MAX]) {
        let mut env = WindyGridworldEnv::new();
        env.set_state(start).unwrap();
        prop_assert_eq!(env.step(bad), Err(EnvError::InvalidAction(bad)));
        prop_assert_eq!(env.state(), Some(start));
    }

    // Rendering never moves the agent.
    #[test]
    fn render_is_side_effect_free(start in any_cell()) {
        let mut env = WindyGridworldEnv::new();
        env.set_state(start).unwrap();
        let _ = env.render();
        let _ = env.render_pixels(8);
        prop_assert_eq!(env.state(), Some(start));
    }
}
