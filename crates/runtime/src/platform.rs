//! Platform boundary: where pointer events come from and where frames go.

use std::time::Duration;

use anyhow::Result;
use crossterm::{event, terminal};

use click_chess_input::{map_event, RawInput};

use crate::term::{present_into, BoardLayout, FrameBuffer, PixelFrame, TerminalRenderer, Viewport};

/// One input event, already translated into frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    PointerDown { x: u32, y: u32 },
    Quit,
}

pub trait Platform {
    /// Append every event queued since the last call. Must not block.
    fn drain_events(&mut self, out: &mut Vec<PlatformEvent>) -> Result<()>;

    /// Show a finished frame with a one-line status text.
    fn present(&mut self, frame: &PixelFrame, status: &str) -> Result<()>;
}

/// Crossterm-backed platform: half-block presentation plus mouse capture.
///
/// Pointer presses are mapped through the layout of the last presented frame, so a
/// click always lands on the square the user actually saw under the cursor.
pub struct TerminalPlatform {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    layout: Option<BoardLayout>,
    board_px: u32,
}

impl TerminalPlatform {
    pub fn new(board_px: u32) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
            layout: None,
            board_px,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn translate(&self, input: RawInput) -> Option<PlatformEvent> {
        match input {
            RawInput::PointerDown { column, row } => {
                let pixel = self
                    .layout
                    .and_then(|layout| layout.cell_to_pixel(column, row));
                match pixel {
                    Some((x, y)) => Some(PlatformEvent::PointerDown { x, y }),
                    None => {
                        tracing::trace!(column, row, "click outside the board ignored");
                        None
                    }
                }
            }
            RawInput::Quit => Some(PlatformEvent::Quit),
            RawInput::Resize { .. } => None,
        }
    }
}

impl Platform for TerminalPlatform {
    fn drain_events(&mut self, out: &mut Vec<PlatformEvent>) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            let Some(input) = map_event(&event::read()?) else {
                continue;
            };
            if let RawInput::Resize { width, height } = input {
                tracing::debug!(width, height, "terminal resized");
                // Clicks until the next present would use a stale layout.
                self.layout = None;
                self.renderer.invalidate();
                continue;
            }
            out.extend(self.translate(input));
        }
        Ok(())
    }

    fn present(&mut self, frame: &PixelFrame, status: &str) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        self.layout = present_into(frame, self.board_px, status, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}
