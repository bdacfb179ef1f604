use super::{Ending, Event, GameState, NoSpaceError, Status};
use crate::consts;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Advance the game by one tick: move the snake one cell in its current
/// direction, then deal with whatever the head ran into.
///
/// Collisions are checked in the fixed order wall, self, food.  When the
/// snake collides it is left where it was, so the final length and food
/// count are those from before the fatal move.  Stepping a game that is
/// already over does nothing and repeats the event that ended it.
pub(crate) fn step<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Event {
    if let Status::GameOver(ending) = state.status {
        return Event::from(ending);
    }
    let candidate = state.snake.next_head();
    if !state.world.is_in_bounds(candidate) {
        return finish(state, Ending::WallCollision);
    }
    if state.snake.bites(candidate) {
        return finish(state, Ending::SelfCollision);
    }
    if state.world.food() == Some(candidate) {
        // Grow before advancing so that the tail stays put this tick.
        state.snake.grow(consts::SNAKE_GROWTH);
        state.snake.advance();
        state.food_eaten += 1;
        state.world.clear_food();
        let occupied = state
            .snake
            .segments()
            .iter()
            .copied()
            .collect::<HashSet<_>>();
        match state.world.place_food(&occupied, rng) {
            Ok(food) => {
                debug!(head = %candidate, %food, eaten = state.food_eaten, "Snake ate food");
                Event::FoodEaten
            }
            Err(NoSpaceError) => finish(state, Ending::BoardFilled),
        }
    } else {
        state.snake.advance();
        Event::Moved
    }
}

fn finish(state: &mut GameState, ending: Ending) -> Event {
    debug!(
        %ending,
        length = state.snake.len(),
        eaten = state.food_eaten,
        "Game over"
    );
    state.status = Status::GameOver(ending);
    Event::from(ending)
}
