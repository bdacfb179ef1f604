use super::{engine, GameState, Summary};
use crate::command::Key;
use crate::config::Settings;
use rand::Rng;
use std::io;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Source of keypresses for the game loop
pub(crate) trait InputSource {
    /// Return the key that counts for this tick, if any keys were pressed
    /// since the last call.  Must not block.
    fn poll(&mut self) -> io::Result<Option<Key>>;

    /// Block until a key is pressed and return it
    fn wait(&mut self) -> io::Result<Key>;
}

/// Display for the game
pub(crate) trait Renderer {
    /// Draw the playing field, snake, and food
    fn draw(&mut self, state: &GameState) -> io::Result<()>;

    /// Show the end-of-game summary.  Called exactly once per finished game.
    fn draw_game_over(&mut self, length: usize, food_eaten: u32) -> io::Result<()>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self) -> io::Result<Option<Key>> {
        (**self).poll()
    }

    fn wait(&mut self) -> io::Result<Key> {
        (**self).wait()
    }
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn draw(&mut self, state: &GameState) -> io::Result<()> {
        (**self).draw(state)
    }

    fn draw_game_over(&mut self, length: usize, food_eaten: u32) -> io::Result<()> {
        (**self).draw_game_over(length, food_eaten)
    }
}

/// The game loop.  Owns the game state and advances it at a fixed cadence,
/// feeding it keypresses and showing the results.
#[derive(Debug)]
pub(crate) struct Runner<I, D, R = rand::rngs::ThreadRng> {
    settings: Settings,
    input: I,
    renderer: D,
    rng: R,
}

impl<I: InputSource, D: Renderer, R: Rng> Runner<I, D, R> {
    pub(crate) fn new(settings: Settings, input: I, renderer: D, rng: R) -> Self {
        Runner {
            settings,
            input,
            renderer,
            rng,
        }
    }

    /// Play games until the player quits, and return the summary of the last
    /// one
    pub(crate) fn run(mut self) -> io::Result<Summary> {
        let mut state = GameState::new(&self.settings, &mut self.rng);
        info!(
            width = state.world().width(),
            height = state.world().height(),
            tick = ?self.settings.tick_interval(),
            "Starting game"
        );
        loop {
            if self.play(&mut state)? == Flow::Quit {
                info!("Player quit mid-game");
                return Ok(state.summary());
            }
            match self.await_decision()? {
                Key::Restart => {
                    info!("Restarting");
                    state = GameState::new(&self.settings, &mut self.rng);
                }
                _ => {
                    info!("Player quit after game over");
                    return Ok(state.summary());
                }
            }
        }
    }

    /// Run ticks until the game ends or the player quits
    fn play(&mut self, state: &mut GameState) -> io::Result<Flow> {
        let interval = self.settings.tick_interval();
        let mut tick_start = Instant::now();
        self.renderer.draw(state)?;
        loop {
            let elapsed = tick_start.elapsed();
            if elapsed > interval {
                debug!(
                    overrun = ?(elapsed - interval),
                    "Tick ran past its interval"
                );
            }
            thread::sleep(interval.saturating_sub(elapsed));
            tick_start = Instant::now();
            if let Some(flow) = self.tick(state)? {
                return Ok(flow);
            }
        }
    }

    fn tick(&mut self, state: &mut GameState) -> io::Result<Option<Flow>> {
        match self.input.poll()? {
            Some(Key::Quit) => return Ok(Some(Flow::Quit)),
            Some(key) => {
                if let Some(d) = key.direction() {
                    state.snake.set_direction(d);
                }
            }
            None => (),
        }
        let event = engine::step(state, &mut self.rng);
        trace!(
            ?event,
            head = %state.snake().head(),
            tail = %state.snake().tail(),
            growth = state.snake().pending_growth(),
            "Tick"
        );
        self.renderer.draw(state)?;
        if event.is_terminal() {
            let summary = state.summary();
            info!(
                ?event,
                length = summary.length,
                food_eaten = summary.food_eaten,
                "Game over"
            );
            self.renderer
                .draw_game_over(summary.length, summary.food_eaten)?;
            return Ok(Some(Flow::GameOver));
        }
        Ok(None)
    }

    /// After a game has ended, block until the player asks to either quit or
    /// play again, and return that key
    fn await_decision(&mut self) -> io::Result<Key> {
        loop {
            let key = self.input.wait()?;
            if matches!(key, Key::Quit | Key::Restart) {
                return Ok(key);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    GameOver,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameOptions;
    use crate::game::{Direction, Ending, Position, Status};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    /// Input that replays a script.  Once the polling script runs out, every
    /// poll reports a quit.
    #[derive(Debug, Default)]
    struct ScriptedInput {
        polls: VecDeque<Option<Key>>,
        waits: VecDeque<Key>,
    }

    impl ScriptedInput {
        fn new<P, W>(polls: P, waits: W) -> Self
        where
            P: IntoIterator<Item = Option<Key>>,
            W: IntoIterator<Item = Key>,
        {
            ScriptedInput {
                polls: polls.into_iter().collect(),
                waits: waits.into_iter().collect(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> io::Result<Option<Key>> {
            Ok(self.polls.pop_front().unwrap_or(Some(Key::Quit)))
        }

        fn wait(&mut self) -> io::Result<Key> {
            Ok(self.waits.pop_front().unwrap_or(Key::Quit))
        }
    }

    #[derive(Debug, Default)]
    struct Recorder {
        frames: Vec<GameState>,
        render_times: Vec<Instant>,
        game_overs: Vec<(usize, u32)>,
        /// Simulated rendering cost for each successive frame, cycled
        costs: Vec<Duration>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, state: &GameState) -> io::Result<()> {
            self.render_times.push(Instant::now());
            if !self.costs.is_empty() {
                thread::sleep(self.costs[self.frames.len() % self.costs.len()]);
            }
            self.frames.push(state.clone());
            Ok(())
        }

        fn draw_game_over(&mut self, length: usize, food_eaten: u32) -> io::Result<()> {
            self.game_overs.push((length, food_eaten));
            Ok(())
        }
    }

    fn settings(options: GameOptions) -> Settings {
        options.settings().unwrap()
    }

    fn fast() -> GameOptions {
        GameOptions {
            tick_interval_ms: 1,
            ..GameOptions::default()
        }
    }

    fn wall_bound() -> GameOptions {
        GameOptions {
            width: 5,
            height: 5,
            initial_position: Some(Position::new(0, 0)),
            initial_direction: Direction::Up,
            initial_length: 1,
            ..fast()
        }
    }

    #[test]
    fn hit_wall() {
        let mut input = ScriptedInput::new([None], []);
        let mut recorder = Recorder::default();
        let summary = Runner::new(
            settings(wall_bound()),
            &mut input,
            &mut recorder,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
        .run()
        .unwrap();
        assert_eq!(recorder.game_overs, [(1, 0)]);
        assert_eq!(recorder.frames.len(), 2);
        let last = recorder.frames.last().unwrap();
        assert_eq!(last.status(), Status::GameOver(Ending::WallCollision));
        assert_eq!(
            summary,
            Summary {
                length: 1,
                food_eaten: 0,
                ending: Some(Ending::WallCollision),
            }
        );
    }

    #[test]
    fn quit_immediately() {
        let mut input = ScriptedInput::new([Some(Key::Quit)], []);
        let mut recorder = Recorder::default();
        let summary = Runner::new(
            settings(fast()),
            &mut input,
            &mut recorder,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
        .run()
        .unwrap();
        assert_eq!(recorder.frames.len(), 1);
        assert!(recorder.game_overs.is_empty());
        assert_eq!(
            summary,
            Summary {
                length: 3,
                food_eaten: 0,
                ending: None,
            }
        );
    }

    #[test]
    fn steer() {
        let mut input = ScriptedInput::new([Some(Key::Down), Some(Key::Up), None], []);
        let mut recorder = Recorder::default();
        Runner::new(
            settings(fast()),
            &mut input,
            &mut recorder,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
        .run()
        .unwrap();
        let heads = recorder
            .frames
            .iter()
            .map(|st| st.snake().head())
            .collect::<Vec<_>>();
        // Starts at (5, 5) heading right; the attempt to reverse from down
        // to up is ignored.
        assert_eq!(
            heads,
            [
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(7, 5),
                Position::new(8, 5),
            ]
        );
    }

    #[test]
    fn restart_after_game_over() {
        let mut input = ScriptedInput::new([None, None], [Key::Left, Key::Restart, Key::Quit]);
        let mut recorder = Recorder::default();
        Runner::new(
            settings(wall_bound()),
            &mut input,
            &mut recorder,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
        .run()
        .unwrap();
        assert_eq!(recorder.game_overs, [(1, 0), (1, 0)]);
        assert_eq!(recorder.frames.len(), 4);
        assert!(recorder.frames[2].running());
        assert!(input.waits.is_empty());
    }

    #[test]
    fn game_over_drawn_when_board_filled() {
        let options = GameOptions {
            width: 3,
            height: 1,
            initial_position: Some(Position::new(0, 2)),
            initial_length: 3,
            ..fast()
        };
        let mut input = ScriptedInput::new([None], []);
        let mut recorder = Recorder::default();
        let summary = Runner::new(
            settings(options),
            &mut input,
            &mut recorder,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
        .run()
        .unwrap();
        assert_eq!(recorder.game_overs, [(3, 0)]);
        assert_eq!(summary.ending, Some(Ending::BoardFilled));
    }

    #[test]
    fn cadence_absorbs_render_cost() {
        const TICKS: usize = 25;
        let interval = Duration::from_millis(30);
        let options = GameOptions {
            width: 100,
            height: 1,
            initial_position: Some(Position::new(0, 0)),
            initial_length: 1,
            tick_interval_ms: 30,
            ..GameOptions::default()
        };
        let mut input = ScriptedInput::new(std::iter::repeat_n(None, TICKS), []);
        let mut recorder = Recorder {
            costs: vec![Duration::ZERO, Duration::from_millis(16)],
            ..Recorder::default()
        };
        Runner::new(
            settings(options),
            &mut input,
            &mut recorder,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
        .run()
        .unwrap();
        assert_eq!(recorder.render_times.len(), TICKS + 1);
        let first = recorder.render_times[0];
        let last = recorder.render_times[TICKS];
        let mean = (last - first) / u32::try_from(TICKS).unwrap();
        assert!(mean >= interval, "mean interval {mean:?} shorter than {interval:?}");
        assert!(
            mean < interval + Duration::from_millis(5),
            "mean interval {mean:?} drifted from {interval:?}"
        );
    }
}
