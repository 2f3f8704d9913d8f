//! Game session
//!
//! Glues an engine to a render sink: every start and tick is followed by a
//! render, and the outcome reaches the sink once per game. The owner only
//! has to call `tick` on its clock and forward keys.

use crate::platform::input::{KeyCommand, command_for_key};
use crate::renderer::RenderSink;
use crate::sim::{GameEngine, GameEvent, GamePhase, Outcome};

pub struct Session<R: RenderSink> {
    engine: GameEngine,
    sink: R,
    paused: bool,
}

impl<R: RenderSink> Session<R> {
    pub fn new(engine: GameEngine, sink: R) -> Self {
        Self {
            engine,
            sink,
            paused: false,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> GamePhase {
        self.engine.phase()
    }

    /// Start (or restart) a game and draw the first frame
    pub fn start(&mut self) {
        self.paused = false;
        self.engine.start();
        self.sink.render(&self.engine.snapshot());
    }

    /// One clock tick. Ignored while paused or when no game is running.
    pub fn tick(&mut self) -> Option<Outcome> {
        if self.paused || !self.engine.phase().is_running() {
            return None;
        }

        let outcome = self.engine.tick();
        let snapshot = self.engine.snapshot();
        self.sink.render(&snapshot);
        if let Some(outcome) = outcome {
            self.sink.game_over(outcome, &snapshot);
        }
        outcome
    }

    /// Forward a raw key name; returns whether it changed anything
    pub fn handle_key(&mut self, key: &str) -> bool {
        match command_for_key(key) {
            Some(KeyCommand::Turn(dir)) if !self.paused => self.engine.request_direction(dir),
            Some(KeyCommand::Pause) => self.toggle_pause(),
            _ => false,
        }
    }

    /// Pause or resume a running game
    pub fn toggle_pause(&mut self) -> bool {
        if !self.engine.phase().is_running() {
            return false;
        }
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
        true
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.engine.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::{Collision, Direction, Snake, Snapshot, StartLayout};
    use glam::IVec2;

    /// Records what the session asked it to draw
    #[derive(Default)]
    struct Recorder {
        heads: Vec<IVec2>,
        outcomes: Vec<Outcome>,
    }

    impl RenderSink for Recorder {
        fn render(&mut self, snapshot: &Snapshot<'_>) {
            self.heads.push(snapshot.head());
        }

        fn game_over(&mut self, outcome: Outcome, _snapshot: &Snapshot<'_>) {
            self.outcomes.push(outcome);
        }
    }

    fn session() -> Session<Recorder> {
        Session::new(GameEngine::new(GameConfig::default(), 21), Recorder::default())
    }

    #[test]
    fn test_start_renders_first_frame() {
        let mut session = session();
        session.start();
        assert_eq!(session.sink().heads, vec![IVec2::new(10, 10)]);
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_ticks_render_and_outcome_once() {
        let mut session = session();
        session.start();
        // Ten cells to the right wall from x = 10
        let mut outcome = None;
        for _ in 0..15 {
            if let Some(o) = session.tick() {
                outcome = Some(o);
            }
        }
        assert_eq!(outcome, Some(Outcome::Lost(Collision::Wall)));
        assert_eq!(session.sink().outcomes, vec![Outcome::Lost(Collision::Wall)]);
        // 1 start frame + 9 moves + the fatal tick
        assert_eq!(session.sink().heads.len(), 11);
        assert_eq!(*session.sink().heads.last().unwrap(), IVec2::new(19, 10));
    }

    #[test]
    fn test_keys_and_pause() {
        let mut session = session();
        session.start();
        assert!(!session.handle_key("ArrowRight"));
        assert!(session.handle_key("ArrowUp"));
        assert!(!session.handle_key("w"));
        assert!(!session.handle_key("ArrowDown"));
        assert!(!session.handle_key("Enter"));

        assert!(session.handle_key("Escape"));
        assert!(session.is_paused());
        assert!(!session.handle_key("ArrowLeft"));
        assert_eq!(session.tick(), None);
        assert_eq!(session.sink().heads.len(), 1);

        assert!(session.handle_key("Escape"));
        session.tick();
        assert_eq!(session.sink().heads.last(), Some(&IVec2::new(10, 9)));
    }

    #[test]
    fn test_restart_mid_game() {
        let mut session = session();
        session.start();
        session.tick();
        session.handle_key("Escape");
        session.start();
        assert!(!session.is_paused());
        assert_eq!(session.engine().snapshot().head(), IVec2::new(10, 10));
        let events = session.drain_events();
        assert_eq!(events[0], GameEvent::Started);
    }

    #[test]
    fn test_pause_ignored_when_over() {
        let mut session = session();
        session.start();
        session.engine.start_with(StartLayout {
            snake: Snake::new(IVec2::new(0, 0)),
            heading: Some(Direction::Up),
            food: None,
        }).unwrap();
        assert!(session.tick().is_some());
        assert!(!session.toggle_pause());
        assert!(!session.is_paused());
    }
}
