//! Row/column and line counters.
//!
//! The grid counters are scoped per table through a save/restore stack, so a
//! table nested inside a cell counts from (0, 0) without disturbing its host.
//! The line counter is flat: it only ever goes up, whatever the nesting.

/// Saved (row, column) pair of an enclosing table.
#[derive(Debug, Clone, Copy)]
struct TableScope {
    row: usize,
    column: usize,
}

/// Row/column state of the innermost open table.
///
/// The asymmetry is deliberate and load-bearing for consumers: the column is
/// read-then-incremented per cell, while the row is read as-is and only
/// advances when a row closes.
#[derive(Debug, Default)]
pub(crate) struct TableGrid {
    row: usize,
    column: usize,
    saved: Vec<TableScope>,
}

impl TableGrid {
    /// Saves the current counters and starts a fresh (0, 0) scope.
    pub(crate) fn enter_table(&mut self) {
        self.saved.push(TableScope {
            row: self.row,
            column: self.column,
        });
        self.row = 0;
        self.column = 0;
    }

    /// Restores the counters of the enclosing table.
    pub(crate) fn exit_table(&mut self) {
        let scope = self
            .saved
            .pop()
            .expect("table scope underflow: exit_table without matching enter_table");
        self.row = scope.row;
        self.column = scope.column;
    }

    /// The current row, unchanged.
    pub(crate) const fn row(&self) -> usize {
        self.row
    }

    /// The current column, then advances it.
    pub(crate) const fn next_column(&mut self) -> usize {
        let column = self.column;
        self.column += 1;
        column
    }

    /// Closes a row: next row index, column back to 0.
    pub(crate) const fn end_row(&mut self) {
        self.row += 1;
        self.column = 0;
    }
}

/// Document-wide line counter.
#[derive(Debug, Default)]
pub(crate) struct LineCounter(usize);

impl LineCounter {
    /// The next line index; increments on every call.
    pub(crate) const fn next(&mut self) -> usize {
        let line = self.0;
        self.0 += 1;
        line
    }
}
