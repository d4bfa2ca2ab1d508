//! Simulation driver - owns the current generation and the run timer.
//!
//! The frontend calls [`LifeGame::tick`] once per frame with the elapsed time
//! and [`LifeGame::apply_action`] for each user action. The driver advances at
//! most one generation per tick, so a transition never overlaps another one.

use log::{debug, info, warn};

use crate::core::{
    gosper_glider_gun, parse_pattern, random_generation_with, GridError, GridState, SimpleRng,
};
use crate::render::Render;
use crate::types::{Cell, LifeAction, GENERATION_MS};

/// Borrowed view of the driver state for rendering.
#[derive(Debug, Clone, Copy)]
pub struct LifeSnapshot<'a> {
    pub grid: &'a GridState,
    pub generation: u64,
    pub population: usize,
    pub running: bool,
    pub interval_ms: u32,
}

/// Stateful Game of Life driver.
#[derive(Debug, Clone)]
pub struct LifeGame {
    current: GridState,
    running: bool,
    generation: u64,
    interval_ms: u32,
    timer_ms: u32,
    rng: SimpleRng,
}

impl LifeGame {
    /// Create a driver on a random `size x size` board.
    pub fn new(size: usize, seed: u32) -> Result<Self, GridError> {
        let mut rng = SimpleRng::new(seed);
        let current = random_generation_with(size, &mut rng)?;
        Ok(Self::from_parts(current, rng))
    }

    /// Create a driver starting from an existing board.
    pub fn with_grid(grid: GridState, seed: u32) -> Self {
        Self::from_parts(grid, SimpleRng::new(seed))
    }

    fn from_parts(current: GridState, rng: SimpleRng) -> Self {
        Self {
            current,
            running: false,
            generation: 0,
            interval_ms: GENERATION_MS,
            timer_ms: 0,
            rng,
        }
    }

    /// Set the interval between generations (clamped to at least 1ms).
    pub fn with_interval(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms.max(1);
        self
    }

    pub fn grid(&self) -> &GridState {
        &self.current
    }

    pub fn size(&self) -> usize {
        self.current.size()
    }

    /// Generations computed since the board was last replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Start the timer. Does nothing if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        debug!("timer started at generation {}", self.generation);
        self.running = true;
        self.timer_ms = 0;
    }

    /// Stop the timer. Does nothing if already stopped.
    ///
    /// Only the next scheduled transition is cancelled; a transition is never
    /// interrupted.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        debug!("timer stopped at generation {}", self.generation);
        self.running = false;
        self.timer_ms = 0;
    }

    /// Stop and replace the board with a fresh random generation.
    pub fn reset(&mut self) {
        self.stop();
        // Size was validated when the current board was built.
        match random_generation_with(self.size(), &mut self.rng) {
            Ok(grid) => {
                self.replace(grid);
                info!("board reset, population {}", self.population());
            }
            Err(err) => warn!("reset kept the current board: {err}"),
        }
    }

    /// Stop and kill every cell.
    pub fn clear(&mut self) {
        self.stop();
        match GridState::dead(self.size()) {
            Ok(grid) => {
                self.replace(grid);
                info!("board cleared");
            }
            Err(err) => warn!("clear kept the current board: {err}"),
        }
    }

    /// Stop and load pattern text sized for this board.
    ///
    /// On error the current board is kept (the timer is still stopped).
    pub fn load_pattern(&mut self, text: &str) -> Result<(), GridError> {
        self.stop();
        let grid = parse_pattern(self.size(), text)?;
        self.replace(grid);
        info!("pattern loaded, population {}", self.population());
        Ok(())
    }

    /// Stop and load the Gosper glider gun.
    pub fn load_gosper_gun(&mut self) -> Result<(), GridError> {
        self.stop();
        let grid = gosper_glider_gun(self.size())?;
        self.replace(grid);
        info!("gosper glider gun loaded");
        Ok(())
    }

    /// Write a single cell directly, bypassing the transition.
    pub fn set_cell(&mut self, index: usize, value: Cell) -> Result<(), GridError> {
        self.current.set(index, value)
    }

    /// Flip a single cell and return its new value.
    pub fn toggle_cell(&mut self, index: usize) -> Result<Cell, GridError> {
        self.current.toggle(index)
    }

    /// Advance exactly one generation.
    pub fn step(&mut self) {
        self.current = self.current.next_generation();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Advance the timer by `elapsed_ms`.
    ///
    /// Returns true when a generation was produced. At most one generation is
    /// computed per call; time beyond one interval is dropped rather than
    /// replayed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.running {
            return false;
        }

        self.timer_ms = self.timer_ms.saturating_add(elapsed_ms);
        if self.timer_ms < self.interval_ms {
            return false;
        }

        self.timer_ms = 0;
        self.step();
        true
    }

    /// Apply a frontend action.
    ///
    /// Returns whether the board or run state changed.
    pub fn apply_action(&mut self, action: LifeAction) -> Result<bool, GridError> {
        let changed = match action {
            LifeAction::Start => {
                let was = self.running;
                self.start();
                !was
            }
            LifeAction::Stop => {
                let was = self.running;
                self.stop();
                was
            }
            LifeAction::Reset => {
                self.reset();
                true
            }
            LifeAction::Clear => {
                self.clear();
                true
            }
            LifeAction::LoadGosperGun => {
                self.load_gosper_gun()?;
                true
            }
            LifeAction::Step => {
                self.step();
                true
            }
            LifeAction::ToggleCell(index) => {
                self.toggle_cell(index)?;
                true
            }
        };
        Ok(changed)
    }

    pub fn snapshot(&self) -> LifeSnapshot<'_> {
        LifeSnapshot {
            grid: &self.current,
            generation: self.generation,
            population: self.current.population(),
            running: self.running,
            interval_ms: self.interval_ms,
        }
    }

    /// Hand the current board to a renderer.
    pub fn present<R: Render>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.render(&self.current, self.generation)
    }

    fn replace(&mut self, grid: GridState) {
        self.current = grid;
        self.generation = 0;
        self.timer_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALIVE;

    fn dead_game(n: usize) -> LifeGame {
        LifeGame::with_grid(GridState::dead(n).unwrap(), 1)
    }

    #[test]
    fn new_game_is_stopped_at_generation_zero() {
        let game = LifeGame::new(10, 5).unwrap();
        assert!(!game.is_running());
        assert_eq!(game.generation(), 0);
        assert_eq!(game.grid().len(), 100);
        assert_eq!(game.interval_ms(), GENERATION_MS);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut game = dead_game(4);
        assert_eq!(game.apply_action(LifeAction::Start), Ok(true));
        assert_eq!(game.apply_action(LifeAction::Start), Ok(false));
        assert!(game.is_running());
        assert_eq!(game.apply_action(LifeAction::Stop), Ok(true));
        assert_eq!(game.apply_action(LifeAction::Stop), Ok(false));
        assert!(!game.is_running());
    }

    #[test]
    fn tick_does_nothing_while_stopped() {
        let mut game = dead_game(4);
        assert!(!game.tick(10_000));
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn tick_advances_once_per_interval() {
        let mut game = dead_game(4).with_interval(100);
        game.start();
        assert!(!game.tick(60));
        assert!(game.tick(40));
        assert_eq!(game.generation(), 1);
        // A long stall still yields a single generation.
        assert!(game.tick(1_000));
        assert_eq!(game.generation(), 2);
        assert!(!game.tick(99));
    }

    #[test]
    fn restarting_resets_the_interval() {
        let mut game = dead_game(4).with_interval(100);
        game.start();
        game.tick(90);
        game.stop();
        game.start();
        assert!(!game.tick(20));
    }

    #[test]
    fn board_replacing_actions_stop_and_reset_generation() {
        let mut game = dead_game(50);
        game.start();
        game.step();
        game.clear();
        assert!(!game.is_running());
        assert_eq!(game.generation(), 0);
        assert!(game.grid().is_extinct());

        game.start();
        game.load_gosper_gun().unwrap();
        assert!(!game.is_running());
        assert_eq!(game.population(), 36);

        game.start();
        game.reset();
        assert!(!game.is_running());
        assert_eq!(game.size(), 50);
    }

    #[test]
    fn reset_and_clear_replace_the_board_in_place() {
        let mut game = LifeGame::new(12, 3).unwrap();
        game.step();

        let before = game.grid().clone();
        game.reset();
        assert_ne!(game.grid(), &before);
        assert_eq!(game.size(), 12);
        assert_eq!(game.generation(), 0);

        game.step();
        game.clear();
        assert_eq!(game.grid(), &GridState::dead(12).unwrap());
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn failed_pattern_load_keeps_board() {
        let mut game = dead_game(3);
        game.toggle_cell(4).unwrap();
        let before = game.grid().clone();
        assert!(game.load_pattern("01\n101\n010").is_err());
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn toggle_through_action() {
        let mut game = dead_game(3);
        assert_eq!(game.apply_action(LifeAction::ToggleCell(8)), Ok(true));
        assert_eq!(game.grid().get(8), Some(ALIVE));
        assert!(matches!(
            game.apply_action(LifeAction::ToggleCell(9)),
            Err(GridError::CellOutOfBounds { .. })
        ));
    }

    #[test]
    fn gosper_gun_on_small_board_fails() {
        let mut game = dead_game(10);
        assert!(matches!(
            game.apply_action(LifeAction::LoadGosperGun),
            Err(GridError::PatternDoesNotFit { .. })
        ));
    }

    #[test]
    fn present_passes_current_board() {
        let mut game = dead_game(3);
        game.set_cell(0, ALIVE).unwrap();
        let mut seen = None;
        game.present(&mut |grid: &GridState, generation: u64| {
            seen = Some((grid.population(), generation));
        })
        .unwrap();
        assert_eq!(seen, Some((1, 0)));
    }
}
