//! Human-readable grid rendering.

use std::fmt::Write as _;

use collapsar_core::{Cell, Grid};

fn cell_symbol(grid: &Grid, cell: Cell) -> char {
    grid.digit(cell)
        .map_or('.', |digit| char::from(b'0' + digit.value()))
}

/// Renders the 9×9 grid with box rules, digits for collapsed cells and `.`
/// for open ones.
#[must_use]
pub fn pretty(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..9 {
        for col in 0..9 {
            let _ = write!(out, "{}", cell_symbol(grid, Cell::at(row, col)));
            if col == 2 || col == 5 {
                out.push_str(" | ");
            } else if col < 8 {
                out.push(' ');
            }
        }
        out.push('\n');
        if row == 2 || row == 5 {
            out.push_str("------+-------+------\n");
        }
    }
    out
}

/// Renders the candidate view: one 9-wide field per cell.
///
/// Collapsed cells show their digit followed by `+` for a given or `.` for a
/// derived value; open cells list their remaining candidates.
#[must_use]
pub fn candidates(grid: &Grid) -> String {
    let mut out = String::new();
    let band_rule = format!("{0}-+-{0}-+-{0}\n", "-".repeat(29));

    for row in 0..9 {
        for col in 0..9 {
            let cell = Cell::at(row, col);
            let field = match grid.digit(cell) {
                Some(digit) => {
                    let marker = if grid.is_given(cell) { '+' } else { '.' };
                    format!("{digit}{marker}")
                }
                None => grid
                    .candidates(cell)
                    .iter()
                    .fold(String::new(), |mut field, digit| {
                        let _ = write!(field, "{digit}");
                        field
                    }),
            };
            let _ = write!(out, "{field:<9}");
            if col == 2 || col == 5 {
                out.push_str(" | ");
            } else if col < 8 {
                out.push(' ');
            }
        }
        out.push('\n');
        if row == 2 || row == 5 {
            out.push_str(&band_rule);
        }
    }
    out
}
