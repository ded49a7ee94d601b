//! Miss marks left in the sand.
//!
//! A scene-sized grid stored as a ring of rows. Scrolling down rotates the
//! ring by one row and blanks the row that wrapped around, so anything that
//! leaves the bottom edge is gone for good.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecalCanvas {
    width: usize,
    height: usize,
    rows: Vec<Vec<bool>>,
    /// Storage index of the visible top row.
    top: usize,
}

impl DecalCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![false; width]; height],
            top: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn storage_row(&self, row: usize) -> usize {
        (self.top + row) % self.height
    }

    fn cell_index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let column = usize::try_from(x).ok().filter(|&c| c < self.width)?;
        let row = usize::try_from(y).ok().filter(|&r| r < self.height)?;
        Some((row, column))
    }

    /// Whether a mark sits at the given scene pixel.
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cell_index(x, y)
            .map(|(row, column)| self.rows[self.storage_row(row)][column])
            .unwrap_or(false)
    }

    /// Stamp a mark. Points outside the canvas are clipped; returns whether
    /// anything was stamped.
    pub fn bake(&mut self, x: i32, y: i32) -> bool {
        let Some((row, column)) = self.cell_index(x, y) else {
            return false;
        };
        let storage = self.storage_row(row);
        self.rows[storage][column] = true;
        true
    }

    /// Move everything one row down. The bottom row falls off and the new
    /// top row is empty.
    pub fn scroll_down(&mut self) {
        if self.height == 0 {
            return;
        }
        self.top = (self.top + self.height - 1) % self.height;
        let top = self.top;
        self.rows[top].fill(false);
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(false);
        }
        self.top = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(|&cell| !cell))
    }

    /// All marks as scene pixels, top row first.
    pub fn marks(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.height).flat_map(move |row| {
            let storage = self.storage_row(row);
            self.rows[storage]
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell)
                .map(move |(column, _)| (column as i32, row as i32))
        })
    }

    pub fn mark_count(&self) -> usize {
        self.marks().count()
    }
}
