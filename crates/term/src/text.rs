//! Plain-text renderer for headless runs.
//!
//! Each presented generation is written as a header line followed by the
//! board in pattern-text form (`1` alive, `0` dead), so any block of output
//! can be cut out and loaded again with `LIFE_PATTERN_PATH`.

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::GridState;
use crate::engine::Render;

pub struct TextRender<W: Write> {
    out: W,
}

impl<W: Write> TextRender<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TextRender<W> {
    type Error = anyhow::Error;

    fn render(&mut self, grid: &GridState, generation: u64) -> Result<()> {
        writeln!(
            self.out,
            "# generation {generation} population {} size {}",
            grid.population(),
            grid.size()
        )
        .context("writing generation header")?;
        writeln!(self.out, "{}", grid.to_pattern_text()).context("writing board")?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_pattern;

    #[test]
    fn writes_header_and_rows() {
        let grid = parse_pattern(3, "010\n010\n010").unwrap();
        let mut render = TextRender::new(Vec::new());
        render.render(&grid, 4).unwrap();

        let out = String::from_utf8(render.into_inner()).unwrap();
        assert_eq!(out, "# generation 4 population 3 size 3\n010\n010\n010\n\n");
    }
}
