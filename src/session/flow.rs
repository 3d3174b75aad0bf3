//! Screen flow: menu, playing, and the commands that move between them.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::clock::{format_elapsed, Clock, SystemClock};
use super::menu::Menu;
use crate::core::{ClickOutcome, PuzzleConfig, PuzzleError, PuzzleState};
use crate::interaction::{BoardLayout, InteractionController, LayoutConfig, Point};

/// Session configuration: menu presets and board geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Disk counts offered on the menu, top to bottom.
    pub presets: Vec<usize>,

    /// Board geometry for the playing screen.
    pub layout: LayoutConfig,

    /// Menu button size in pixels.
    pub button_size: (i32, i32),

    /// Y coordinate of the first menu button.
    pub first_button_y: i32,

    /// Vertical distance between menu button tops.
    pub button_spacing: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            presets: vec![3, 5, 8],
            layout: LayoutConfig::default(),
            button_size: (200, 60),
            first_button_y: 200,
            button_spacing: 80,
        }
    }
}

impl SessionConfig {
    /// Set the menu presets.
    #[must_use]
    pub fn with_presets(mut self, presets: Vec<usize>) -> Self {
        self.presets = presets;
        self
    }

    /// Set the board geometry.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Check every preset is a valid disk count.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        self.presets
            .iter()
            .try_for_each(|&n| PuzzleConfig::new(n).validate())
    }
}

/// Keyboard commands available while playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCommand {
    /// Abandon the game and show the menu.
    BackToMenu,
    /// Start the same puzzle over.
    Restart,
}

/// Input delivered to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Click(Point),
    Key(KeyCommand),
}

/// What a session event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionUpdate {
    /// Nothing changed.
    Unchanged,
    /// A new game started from the menu.
    GameStarted { disk_count: usize },
    /// The current game started over.
    Restarted,
    /// The game was left for the menu.
    ReturnedToMenu,
    /// A click reached the puzzle.
    Puzzle(ClickOutcome),
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    puzzle: PuzzleState,
    controller: InteractionController<BoardLayout>,
    started_at: Duration,
}

impl Game {
    fn new(disk_count: usize, layout: LayoutConfig, started_at: Duration) -> Result<Self, PuzzleError> {
        let puzzle = PuzzleState::with_disks(disk_count)?;
        let controller = InteractionController::new(BoardLayout::new(layout, disk_count)?);
        Ok(Self {
            puzzle,
            controller,
            started_at,
        })
    }

    /// The puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }

    /// Board geometry for this game.
    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        self.controller.hit_test()
    }

    /// Clock reading when the game (re)started.
    #[must_use]
    pub fn started_at(&self) -> Duration {
        self.started_at
    }
}

/// Which screen is showing.
#[derive(Clone, Debug)]
pub enum Screen {
    Menu,
    Playing(Game),
}

/// Top-level interactive session.
///
/// Owns at most one game. Presentation layers deliver `SessionEvent`s and
/// redraw from `screen()` between events.
///
/// ## Usage
///
/// ```
/// use rust_hanoi::interaction::Point;
/// use rust_hanoi::session::{KeyCommand, ManualClock, Session, SessionConfig, SessionEvent, SessionUpdate};
///
/// let mut session = Session::new(SessionConfig::default(), ManualClock::new()).unwrap();
///
/// // The first menu button starts a three-disk game
/// let update = session.handle(SessionEvent::Click(Point::new(400, 230))).unwrap();
/// assert_eq!(update, SessionUpdate::GameStarted { disk_count: 3 });
///
/// let update = session.handle(SessionEvent::Key(KeyCommand::BackToMenu)).unwrap();
/// assert_eq!(update, SessionUpdate::ReturnedToMenu);
/// ```
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    config: SessionConfig,
    menu: Menu,
    screen: Screen,
    clock: C,
}

impl<C: Clock> Session<C> {
    /// Create a session showing the menu.
    pub fn new(config: SessionConfig, clock: C) -> Result<Self, PuzzleError> {
        config.validate()?;

        let menu = Menu::new(
            &config.presets,
            config.layout.board_width / 2,
            config.first_button_y,
            config.button_size,
            config.button_spacing,
        );

        Ok(Self {
            config,
            menu,
            screen: Screen::Menu,
            clock,
        })
    }

    /// Process one input event.
    pub fn handle(&mut self, event: SessionEvent) -> Result<SessionUpdate, PuzzleError> {
        let game = match &mut self.screen {
            Screen::Menu => return self.handle_menu(event),
            Screen::Playing(game) => game,
        };

        match event {
            SessionEvent::Key(KeyCommand::Restart) => {
                game.puzzle.restart()?;
                game.started_at = self.clock.now();
                Ok(SessionUpdate::Restarted)
            }
            SessionEvent::Click(point) if !game.puzzle.is_solved() => {
                let outcome = game.controller.on_click(&mut game.puzzle, point)?;
                Ok(outcome.map_or(SessionUpdate::Unchanged, SessionUpdate::Puzzle))
            }
            // A click on a solved board dismisses it
            SessionEvent::Key(KeyCommand::BackToMenu) | SessionEvent::Click(_) => {
                self.return_to_menu();
                Ok(SessionUpdate::ReturnedToMenu)
            }
        }
    }

    fn handle_menu(&mut self, event: SessionEvent) -> Result<SessionUpdate, PuzzleError> {
        let SessionEvent::Click(point) = event else {
            return Ok(SessionUpdate::Unchanged);
        };

        match self.menu.disk_count_at(point) {
            Some(disk_count) => {
                self.start_game(disk_count)?;
                Ok(SessionUpdate::GameStarted { disk_count })
            }
            None => Ok(SessionUpdate::Unchanged),
        }
    }

    /// Start a game with any valid disk count, bypassing the menu.
    pub fn start_game(&mut self, disk_count: usize) -> Result<(), PuzzleError> {
        let game = Game::new(disk_count, self.config.layout.clone(), self.clock.now())?;
        self.screen = Screen::Playing(game);
        info!(disk_count, "game started");
        Ok(())
    }

    fn return_to_menu(&mut self) {
        self.screen = Screen::Menu;
        info!("returned to menu");
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The menu layout.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// The current screen.
    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The game in progress, if any.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        match &self.screen {
            Screen::Playing(game) => Some(game),
            Screen::Menu => None,
        }
    }

    /// Get the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Time since the current game (re)started.
    ///
    /// Keeps running after the puzzle is solved.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.game()
            .map(|game| self.clock.now().saturating_sub(game.started_at))
    }

    /// `elapsed` formatted as `MM:SS`.
    #[must_use]
    pub fn elapsed_label(&self) -> Option<String> {
        self.elapsed().map(format_elapsed)
    }
}
