//! BoardRenderer: paints one board frame onto a [`FrameTarget`].
//!
//! Draw order is squares, then highlights, then pieces, so sprites stay on top of
//! the tint. The renderer keeps no per-frame state; the same inputs always produce
//! the same pixels.

use crate::assets::AssetStore;
use crate::core::{BoardGeometry, BoardSnapshot, SelectionState};
use crate::pixels::FrameTarget;
use crate::types::{BoardCoordinate, Rgb, HIGHLIGHT_ALPHA};

/// Board colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPalette {
    pub light: Rgb,
    pub dark: Rgb,
    pub selected: Rgb,
    pub destination: Rgb,
    pub highlight_alpha: u8,
}

impl Default for BoardPalette {
    fn default() -> Self {
        Self {
            light: Rgb::new(255, 255, 255),
            dark: Rgb::new(190, 190, 190),
            selected: Rgb::new(0, 0, 255),
            destination: Rgb::new(0, 255, 0),
            highlight_alpha: HIGHLIGHT_ALPHA,
        }
    }
}

pub struct BoardRenderer {
    assets: AssetStore,
    geometry: BoardGeometry,
    palette: BoardPalette,
}

impl BoardRenderer {
    pub fn new(assets: AssetStore, geometry: BoardGeometry) -> Self {
        Self {
            assets,
            geometry,
            palette: BoardPalette::default(),
        }
    }

    pub fn with_palette(mut self, palette: BoardPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    pub fn palette(&self) -> &BoardPalette {
        &self.palette
    }

    /// Paint a full frame.
    pub fn render<T, S>(
        &self,
        target: &mut T,
        snapshot: &S,
        destinations: &[BoardCoordinate],
        selection: SelectionState,
    ) where
        T: FrameTarget + ?Sized,
        S: BoardSnapshot + ?Sized,
    {
        self.draw_squares(target);
        self.draw_highlights(target, snapshot, destinations, selection);
        self.draw_pieces(target, snapshot);
    }

    fn draw_squares<T: FrameTarget + ?Sized>(&self, target: &mut T) {
        for at in BoardCoordinate::all() {
            let color = if at.is_light() {
                self.palette.light
            } else {
                self.palette.dark
            };
            target.fill_rect(self.geometry.square_rect(at), color);
        }
    }

    fn draw_highlights<T, S>(
        &self,
        target: &mut T,
        snapshot: &S,
        destinations: &[BoardCoordinate],
        selection: SelectionState,
    ) where
        T: FrameTarget + ?Sized,
        S: BoardSnapshot + ?Sized,
    {
        let Some(at) = selection.selected() else {
            return;
        };
        // Only the side to move gets highlights.
        let owned_by_mover = snapshot
            .piece_at(at)
            .is_some_and(|p| p.owner == snapshot.whose_turn());
        if !owned_by_mover {
            return;
        }

        let alpha = self.palette.highlight_alpha;
        target.tint_rect(self.geometry.square_rect(at), self.palette.selected, alpha);
        for &dest in destinations {
            target.tint_rect(self.geometry.square_rect(dest), self.palette.destination, alpha);
        }
    }

    fn draw_pieces<T, S>(&self, target: &mut T, snapshot: &S)
    where
        T: FrameTarget + ?Sized,
        S: BoardSnapshot + ?Sized,
    {
        for at in BoardCoordinate::all() {
            if let Some(piece) = snapshot.piece_at(at) {
                target.blit(self.geometry.square_rect(at), self.assets.sprite(piece));
            }
        }
    }
}
