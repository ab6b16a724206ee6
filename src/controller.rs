/// Turns one tick's worth of held keys into state transitions.

use crate::compute::{jump, move_player_left, move_player_right, spawn_projectile, GameState};
use crate::entities::InputState;

/// Input state that outlives a single tick: the throw latch and whether
/// the player asked to quit.
#[derive(Clone, Debug)]
pub struct Controller {
    keep_going: bool,
    /// Set once a throw fires; cleared when the throw key is released.
    thrown: bool,
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            keep_going: true,
            thrown: false,
        }
    }

    pub fn keep_going(&self) -> bool {
        self.keep_going
    }

    pub fn apply_input(&mut self, state: &GameState, input: &InputState) -> GameState {
        if input.quit {
            self.keep_going = false;
        }

        let mut next = if input.left && !input.right {
            move_player_left(state)
        } else if input.right && !input.left {
            move_player_right(state)
        } else {
            state.clone()
        };

        if input.jump {
            next = jump(&next);
        }

        // Edge-triggered: one throw per press.
        if input.throw && !self.thrown {
            self.thrown = true;
            next = spawn_projectile(&next);
        } else if !input.throw {
            self.thrown = false;
        }

        next
    }
}

impl Default for Controller {
    fn default() -> Self {
        Controller::new()
    }
}
