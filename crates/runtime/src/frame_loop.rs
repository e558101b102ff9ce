//! Fixed-rate frame loop.
//!
//! Each cycle drains pending platform events without blocking, feeds every click
//! on the board to the [`SelectionController`] in arrival order, renders one frame,
//! and presents it. [`FrameLoop::run`] then sleeps away whatever is left of the
//! frame budget.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::config::AppConfig;
use crate::core::{ClickOutcome, MoveVerdict, RulesEngine, SelectionController};
use crate::platform::{Platform, PlatformEvent};
use crate::term::{BoardRenderer, PixelFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Continue,
    Quit,
}

pub struct FrameLoop<E> {
    engine: E,
    selection: SelectionController,
    renderer: BoardRenderer,
    frame: PixelFrame,
    frame_budget: Duration,
    events: Vec<PlatformEvent>,
    last_outcome: Option<ClickOutcome>,
}

impl<E: RulesEngine> FrameLoop<E> {
    pub fn new(engine: E, renderer: BoardRenderer, config: &AppConfig) -> Self {
        Self {
            engine,
            selection: SelectionController::new(),
            renderer,
            frame: PixelFrame::new(config.frame_width, config.frame_height),
            frame_budget: config.frame_budget(),
            events: Vec::new(),
            last_outcome: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &PixelFrame {
        &self.frame
    }

    pub fn last_outcome(&self) -> Option<ClickOutcome> {
        self.last_outcome
    }

    /// Run until the platform asks to quit.
    pub fn run<P: Platform + ?Sized>(&mut self, platform: &mut P) -> Result<()> {
        tracing::info!(budget_ms = self.frame_budget.as_millis() as u64, "frame loop started");
        loop {
            let started = Instant::now();
            if self.run_cycle(platform)? == CycleOutcome::Quit {
                tracing::info!("quit requested");
                return Ok(());
            }
            if let Some(rest) = self.frame_budget.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    /// One drain, update, render, present pass.
    ///
    /// A quit event stops the cycle after the clicks queued ahead of it have been
    /// applied; nothing is presented in that case.
    pub fn run_cycle<P: Platform + ?Sized>(&mut self, platform: &mut P) -> Result<CycleOutcome> {
        let mut events = std::mem::take(&mut self.events);
        events.clear();
        let drained = platform.drain_events(&mut events);

        let mut outcome = CycleOutcome::Continue;
        for event in &events {
            match *event {
                PlatformEvent::PointerDown { x, y } => self.pointer_down(x, y),
                PlatformEvent::Quit => {
                    outcome = CycleOutcome::Quit;
                    break;
                }
            }
        }
        self.events = events;
        drained?;

        if outcome == CycleOutcome::Quit {
            return Ok(outcome);
        }

        self.renderer.render(
            &mut self.frame,
            &self.engine,
            self.selection.destinations(),
            self.selection.state(),
        );
        platform.present(&self.frame, &self.status_line())?;
        Ok(outcome)
    }

    /// Text shown under the board.
    pub fn status_line(&self) -> String {
        let turn = self.engine.whose_turn().as_str();
        match self.last_outcome {
            Some(ClickOutcome::MoveSubmitted {
                verdict: MoveVerdict::Rejected,
                ..
            }) => format!("illegal move, {turn} to move"),
            _ => format!("{turn} to move"),
        }
    }

    fn pointer_down(&mut self, x: u32, y: u32) {
        let Some(at) = self.renderer.geometry().coordinate_at(x, y) else {
            tracing::trace!(x, y, "click outside the board ignored");
            return;
        };
        let outcome = self.selection.click(&mut self.engine, at);
        if let ClickOutcome::MoveSubmitted { from, to, verdict } = outcome {
            tracing::debug!(%from, %to, ?verdict, "move submitted");
        }
        self.last_outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crate::assets::{AssetStore, Sprite};
    use crate::core::{
        BoardGeometry, BoardSnapshot, LegalDestinations, Placement, SelectionState,
    };
    use crate::term::BoardPalette;
    use crate::types::{BoardCoordinate, PieceKind, Player, Rgb, Rgba, Square};

    /// Pieces step one square towards the opponent, onto empty squares only.
    struct StepEngine {
        board: Placement,
    }

    impl StepEngine {
        fn new() -> Self {
            Self {
                board: Placement::empty(Player::One)
                    .with(6, 0, Player::One, PieceKind::Pawn)
                    .with(1, 7, Player::Two, PieceKind::Pawn),
            }
        }
    }

    impl BoardSnapshot for StepEngine {
        fn piece_at(&self, at: BoardCoordinate) -> Square {
            self.board.get(at)
        }

        fn whose_turn(&self) -> Player {
            self.board.turn()
        }
    }

    impl RulesEngine for StepEngine {
        fn is_selectable_piece(&self, at: BoardCoordinate) -> bool {
            self.board.get(at).is_some()
        }

        fn valid_moves(&self, from: BoardCoordinate) -> LegalDestinations {
            let mut out = LegalDestinations::new();
            let Some(piece) = self.board.get(from) else {
                return out;
            };
            if piece.owner != self.board.turn() {
                return out;
            }
            if let Some(to) = from.offset(piece.owner.forward(), 0) {
                if self.board.get(to).is_none() {
                    out.push(to);
                }
            }
            out
        }

        fn move_piece(&mut self, from: BoardCoordinate, to: BoardCoordinate) -> MoveVerdict {
            if !self.valid_moves(from).contains(&to) {
                return MoveVerdict::Rejected;
            }
            let piece = self.board.take(from);
            self.board.set(to, piece);
            self.board.set_turn(self.board.turn().opponent());
            MoveVerdict::Applied
        }
    }

    #[derive(Default)]
    struct ScriptedPlatform {
        batches: VecDeque<Vec<PlatformEvent>>,
        presented: Vec<String>,
    }

    impl ScriptedPlatform {
        fn with_batches(batches: Vec<Vec<PlatformEvent>>) -> Self {
            Self {
                batches: batches.into(),
                presented: Vec::new(),
            }
        }
    }

    impl Platform for ScriptedPlatform {
        fn drain_events(&mut self, out: &mut Vec<PlatformEvent>) -> Result<()> {
            out.extend(self.batches.pop_front().unwrap_or_default());
            Ok(())
        }

        fn present(&mut self, _frame: &PixelFrame, status: &str) -> Result<()> {
            self.presented.push(status.to_string());
            Ok(())
        }
    }

    fn frame_loop() -> FrameLoop<StepEngine> {
        let config = AppConfig::default();
        let assets = AssetStore::from_fn(config.square_px(), |_| Sprite::solid(1, 1, Rgba::TRANSPARENT));
        let renderer = BoardRenderer::new(assets, config.geometry());
        FrameLoop::new(StepEngine::new(), renderer, &config)
    }

    fn centre_of(row: u8, col: u8) -> PlatformEvent {
        let rect = BoardGeometry::default().square_rect(BoardCoordinate::new(row, col).unwrap());
        PlatformEvent::PointerDown {
            x: rect.x + rect.w / 2,
            y: rect.y + rect.h / 2,
        }
    }

    #[test]
    fn idle_cycle_renders_and_presents_once() {
        let mut lp = frame_loop();
        let mut platform = ScriptedPlatform::default();
        assert_eq!(lp.run_cycle(&mut platform).unwrap(), CycleOutcome::Continue);
        assert_eq!(platform.presented, vec!["white to move".to_string()]);
        // Square (0, 0) is light.
        assert_eq!(lp.frame().get(5, 5), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn clicks_in_one_batch_apply_in_order() {
        let mut lp = frame_loop();
        let mut platform = ScriptedPlatform::with_batches(vec![vec![centre_of(6, 0), centre_of(5, 0)]]);
        lp.run_cycle(&mut platform).unwrap();

        let a3 = BoardCoordinate::new(5, 0).unwrap();
        assert_eq!(lp.engine().piece_at(a3).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(lp.selection().state(), SelectionState::Empty);
        assert_eq!(platform.presented, vec!["black to move".to_string()]);
    }

    #[test]
    fn selection_survives_across_cycles_and_is_highlighted() {
        let mut lp = frame_loop();
        let mut platform = ScriptedPlatform::with_batches(vec![vec![centre_of(6, 0)]]);
        lp.run_cycle(&mut platform).unwrap();

        let selected = BoardCoordinate::new(6, 0).unwrap();
        assert_eq!(lp.selection().state(), SelectionState::OneSquareSelected(selected));

        // (6, 0) is light, (5, 0) is dark; both get tinted.
        let palette = BoardPalette::default();
        let tinted_source = palette.light.blend(palette.selected, palette.highlight_alpha);
        let tinted_dest = palette.dark.blend(palette.destination, palette.highlight_alpha);
        assert_eq!(lp.frame().get(10, 6 * 64 + 10), Some(tinted_source));
        assert_eq!(lp.frame().get(10, 5 * 64 + 10), Some(tinted_dest));

        // Nothing new arrives; the highlight stays.
        lp.run_cycle(&mut platform).unwrap();
        assert_eq!(lp.frame().get(10, 6 * 64 + 10), Some(tinted_source));
    }

    #[test]
    fn rejected_move_is_reported_and_selection_resets() {
        let mut lp = frame_loop();
        let mut platform = ScriptedPlatform::with_batches(vec![vec![centre_of(6, 0), centre_of(2, 3)]]);
        lp.run_cycle(&mut platform).unwrap();

        assert!(matches!(
            lp.last_outcome(),
            Some(ClickOutcome::MoveSubmitted {
                verdict: MoveVerdict::Rejected,
                ..
            })
        ));
        assert_eq!(lp.selection().state(), SelectionState::Empty);
        assert_eq!(platform.presented, vec!["illegal move, white to move".to_string()]);
    }

    #[test]
    fn clicks_off_the_board_are_dropped() {
        let mut lp = frame_loop();
        let mut platform = ScriptedPlatform::with_batches(vec![vec![PlatformEvent::PointerDown { x: 600, y: 10 }]]);
        lp.run_cycle(&mut platform).unwrap();
        assert_eq!(lp.selection().state(), SelectionState::Empty);
        assert_eq!(lp.last_outcome(), None);
    }

    #[test]
    fn quit_stops_after_earlier_clicks_without_presenting() {
        let mut lp = frame_loop();
        let mut platform = ScriptedPlatform::with_batches(vec![vec![
            centre_of(6, 0),
            PlatformEvent::Quit,
            centre_of(5, 0),
        ]]);
        assert_eq!(lp.run_cycle(&mut platform).unwrap(), CycleOutcome::Quit);
        assert!(platform.presented.is_empty());
        assert!(lp.selection().state().selected().is_some());
    }

    #[test]
    fn run_returns_on_quit() {
        let mut lp = frame_loop();
        let mut platform = ScriptedPlatform::with_batches(vec![vec![], vec![], vec![PlatformEvent::Quit]]);
        lp.run(&mut platform).unwrap();
        assert_eq!(platform.presented.len(), 2);
    }

}
