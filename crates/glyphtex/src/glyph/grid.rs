/// One sample cell after glyph and color selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphCell {
    pub ch: char,
    /// Band color encoded as RGB bytes.
    pub color: [u8; 3],
    /// False when the cell's brightness fell at or below the skip
    /// threshold; the output keeps the background there.
    pub drawn: bool,
}

impl GlyphCell {
    pub fn background() -> Self {
        Self { ch: ' ', color: [0; 3], drawn: false }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    columns: u32,
    rows: u32,
    cells: Vec<GlyphCell>,
}

impl GlyphGrid {
    pub fn new(columns: u32, rows: u32, cells: Vec<GlyphCell>) -> Self {
        assert_eq!(columns as usize * rows as usize, cells.len());
        Self { columns, rows, cells }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cells(&self) -> &[GlyphCell] {
        &self.cells
    }

    pub fn cell(&self, column: u32, row: u32) -> &GlyphCell {
        &self.cells[row as usize * self.columns as usize + column as usize]
    }

    /// Text rows for terminal preview; undrawn cells print as spaces.
    pub fn text_rows(&self) -> impl Iterator<Item = String> + '_ {
        let columns = self.columns as usize;
        self.cells.chunks(columns).map(|row| {
            row.iter().map(|cell| if cell.drawn { cell.ch } else { ' ' }).collect::<String>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rows_blank_undrawn_cells() {
        let cells = vec![
            GlyphCell { ch: '#', color: [255; 3], drawn: true },
            GlyphCell::background(),
            GlyphCell::background(),
            GlyphCell { ch: '@', color: [255; 3], drawn: true },
        ];
        let grid = GlyphGrid::new(2, 2, cells);
        let rows: Vec<String> = grid.text_rows().collect();
        assert_eq!(rows, vec!["# ".to_string(), " @".to_string()]);
    }

    #[test]
    fn cell_lookup_is_row_major() {
        let cells = vec![
            GlyphCell { ch: 'a', color: [0; 3], drawn: true },
            GlyphCell { ch: 'b', color: [0; 3], drawn: true },
            GlyphCell { ch: 'c', color: [0; 3], drawn: true },
            GlyphCell { ch: 'd', color: [0; 3], drawn: true },
        ];
        let grid = GlyphGrid::new(2, 2, cells);
        assert_eq!(grid.cell(1, 0).ch, 'b');
        assert_eq!(grid.cell(0, 1).ch, 'c');
    }
}
