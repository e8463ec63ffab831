use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    CellOutside {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    BoundsMismatch {
        grid_size: usize,
        data_size: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutside {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "cell at row:{}, col:{} outside of {}x{} grid",
                    row, col, cols, rows
                )
            }
            Self::BoundsMismatch {
                grid_size,
                data_size,
            } => {
                write!(
                    f,
                    "grid size {} does not match data size {}",
                    grid_size, data_size
                )
            }
        }
    }
}

impl Error for GridError {}

/// Row-major storage with one value per terminal cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    cols: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![T::default(); cols * rows],
        }
    }

    pub fn from_data(cols: usize, rows: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if cells.len() != cols * rows {
            return Err(GridError::BoundsMismatch {
                grid_size: cols * rows,
                data_size: cells.len(),
            });
        }

        Ok(Self { cols, rows, cells })
    }

    /// Resets every cell to the default value.
    pub fn clear(&mut self) {
        self.cells.fill(T::default());
    }

    /// Reallocates to the new dimensions. Contents are discarded.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.cells.clear();
        self.cells.resize(cols * rows, T::default());
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.index_of(row, col).ok().map(|index| self.cells[index])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, GridError> {
        let index = self.index_of(row, col)?;
        Ok(&mut self.cells[index])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Iterates rows top to bottom as slices.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        // chunks() rejects a zero size
        self.cells.chunks(self.cols.max(1))
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::CellOutside {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(row * self.cols + col)
    }
}
