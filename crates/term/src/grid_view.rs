//! GridView: maps a `LifeSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Two layouts are used depending on the viewport:
//! - **Full**: each cell is 2 columns x 1 row, which looks roughly square.
//! - **Compact**: each cell is 1 column x half a row, two board rows packed
//!   into one terminal line with half-block glyphs.

use crate::engine::LifeSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::ALIVE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Frontend state drawn on top of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay<'a> {
    /// Flat index of the keyboard cursor.
    pub cursor: Option<usize>,
    /// One-line status message (e.g. the last error).
    pub message: Option<&'a str>,
}

/// Where the board lands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border.
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Terminal columns per cell.
    pub cell_w: u16,
    /// Board rows per terminal line (1 = full, 2 = compact).
    pub rows_per_line: u16,
    pub size: usize,
}

impl BoardLayout {
    pub fn is_compact(&self) -> bool {
        self.rows_per_line == 2
    }

    /// Flat cell index under terminal position `(x, y)`.
    ///
    /// In compact layout a line holds two board rows; the upper one is returned.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<usize> {
        let inner_x = x.checked_sub(self.start_x + 1)?;
        let inner_y = y.checked_sub(self.start_y + 1)?;
        let col = (inner_x / self.cell_w) as usize;
        let row = (inner_y * self.rows_per_line) as usize;
        (col < self.size && row < self.size).then(|| row * self.size + col)
    }
}

const PANEL_MIN_W: u16 = 16;
const BOARD_BG: Rgb = Rgb::new(20, 24, 28);
const CURSOR_BG: Rgb = Rgb::new(90, 80, 30);
const LIVE_FG: Rgb = Rgb::new(110, 230, 130);

/// A lightweight terminal renderer for the Life board.
pub struct GridView {
    anchor_y: AnchorY,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GridView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Pick the board layout for a `size x size` board in `viewport`.
    ///
    /// Full layout is preferred; compact is used when only it fits. When
    /// neither fits the full layout is clipped.
    pub fn layout(&self, size: usize, viewport: Viewport) -> BoardLayout {
        let n = size.min(u16::MAX as usize / 2 - 2) as u16;
        let full = (n * 2 + 2, n + 2, 2, 1);
        let compact = (n + 2, n.div_ceil(2) + 2, 1, 2);

        let fits = |(w, h, _, _): (u16, u16, u16, u16)| w <= viewport.width && h <= viewport.height;
        let (frame_w, frame_h, cell_w, rows_per_line) = if fits(full) || !fits(compact) {
            full
        } else {
            compact
        };

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            start_x,
            start_y,
            frame_w,
            frame_h,
            cell_w,
            rows_per_line,
            size,
        }
    }

    /// Flat cell index under terminal position `(x, y)`, for mouse input.
    pub fn hit_test(&self, size: usize, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        self.layout(size, viewport).cell_at(x, y)
    }

    /// Render the board into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &LifeSnapshot<'_>,
        overlay: &Overlay<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap.grid.size(), viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, &layout, border);

        if layout.is_compact() {
            self.draw_compact_cells(fb, snap, overlay, &layout);
        } else {
            self.draw_full_cells(fb, snap, overlay, &layout);
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.generation > 0 && snap.population == 0 {
            self.draw_overlay_text(fb, &layout, "EXTINCT");
        }

        if let Some(msg) = overlay.message {
            let y = layout.start_y.saturating_add(layout.frame_h);
            if y < viewport.height {
                let style = CellStyle::new(Rgb::new(240, 120, 100), Rgb::new(0, 0, 0));
                fb.put_str(layout.start_x, y, msg, style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &LifeSnapshot<'_>,
        overlay: &Overlay<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
        let (x, y, w, h) = (layout.start_x, layout.start_y, layout.frame_w, layout.frame_h);
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_full_cells(
        &self,
        fb: &mut FrameBuffer,
        snap: &LifeSnapshot<'_>,
        overlay: &Overlay<'_>,
        layout: &BoardLayout,
    ) {
        let n = layout.size;
        let live = CellStyle::new(LIVE_FG, BOARD_BG).bold();
        let dead = CellStyle::new(Rgb::new(70, 75, 85), BOARD_BG).dim();

        for (i, &cell) in snap.grid.cells().iter().enumerate() {
            let (row, col) = ((i / n) as u16, (i % n) as u16);
            let (ch, mut style) = if cell == ALIVE { ('█', live) } else { ('·', dead) };
            if overlay.cursor == Some(i) {
                style.bg = CURSOR_BG;
            }
            let px = layout.start_x + 1 + col * layout.cell_w;
            let py = layout.start_y + 1 + row;
            fb.fill_rect(px, py, layout.cell_w, 1, ch, style);
        }
    }

    fn draw_compact_cells(
        &self,
        fb: &mut FrameBuffer,
        snap: &LifeSnapshot<'_>,
        overlay: &Overlay<'_>,
        layout: &BoardLayout,
    ) {
        let n = layout.size;
        let grid = snap.grid;
        let base = CellStyle::new(LIVE_FG, BOARD_BG);

        for line in 0..n.div_ceil(2) {
            let top = 2 * line;
            let bottom = top + 1;
            for col in 0..n {
                let upper = grid.get_at(top, col) == Some(ALIVE);
                let lower = grid.get_at(bottom, col) == Some(ALIVE);
                let ch = match (upper, lower) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                };

                let mut style = base;
                let cursor_here = overlay
                    .cursor
                    .is_some_and(|c| c == top * n + col || (bottom < n && c == bottom * n + col));
                if cursor_here {
                    style.bg = CURSOR_BG;
                }

                let px = layout.start_x + 1 + col as u16;
                let py = layout.start_y + 1 + line as u16;
                fb.put_char(px, py, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &LifeSnapshot<'_>,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = value.dim();

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "GENERATION", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.generation, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "POPULATION", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.population as u64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        if snap.running {
            let running = CellStyle::new(LIVE_FG, Rgb::new(0, 0, 0)).bold();
            fb.put_str(panel_x, y, "RUNNING", running);
        } else {
            fb.put_str(panel_x, y, "STOPPED", value);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BOARD", label);
        y = y.saturating_add(1);
        let x = fb.put_u64(panel_x, y, snap.grid.size() as u64, value);
        let x = fb.put_str(x, y, "x", value);
        let x = fb.put_u64(x, y, snap.grid.size() as u64, value);
        let x = fb.put_str(x + 1, y, "@", dim);
        let x = fb.put_u64(x, y, snap.interval_ms as u64, dim);
        fb.put_str(x, y, "ms", dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in [
            "s start  p stop",
            "n step   r reset",
            "c clear  g gun",
            "spc/click toggle",
            "arrows   move",
            "q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout
            .start_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
