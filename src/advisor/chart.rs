//! Range chart rendering and export.
//!
//! Renders a position's range as the conventional 13x13 hand grid (pairs
//! on the diagonal, suited hands above it, offsuit below) and exports the
//! whole table as JSON.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

use super::RangeTable;
use crate::position::Position;

/// Rank characters in grid order (A at top-left).
const GRID_RANKS: [char; 13] = ['A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Canonical notation for a grid cell.
///
/// Diagonal cells are pairs; above the diagonal (row < col) is suited,
/// below is offsuit, always higher rank first.
pub fn grid_notation(row: usize, col: usize) -> String {
    debug_assert!(row < 13 && col < 13);
    if row == col {
        format!("{}{}", GRID_RANKS[row], GRID_RANKS[col])
    } else if row < col {
        format!("{}{}s", GRID_RANKS[row], GRID_RANKS[col])
    } else {
        format!("{}{}o", GRID_RANKS[col], GRID_RANKS[row])
    }
}

/// One position's range in export form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionChart {
    /// Seat label.
    pub position: String,
    /// Number of in-range hand classes.
    pub hand_count: usize,
    /// In-range hands in grid order.
    pub hands: Vec<String>,
}

impl PositionChart {
    /// Build the chart for one position of a table.
    pub fn new(table: &RangeTable, position: Position) -> Self {
        let mut hands = Vec::new();
        for row in 0..13 {
            for col in 0..13 {
                let notation = grid_notation(row, col);
                if table.contains(position, &notation) {
                    hands.push(notation);
                }
            }
        }
        Self {
            position: position.name().to_string(),
            hand_count: hands.len(),
            hands,
        }
    }

    /// Print the range as a colored text grid.
    pub fn print_grid(&self) {
        println!("\n=== {} opening range ({} hands) ===\n", self.position, self.hand_count);

        print!("    ");
        for c in GRID_RANKS {
            print!("{:>4}", c);
        }
        println!();

        for row in 0..13 {
            print!("{:>2}  ", GRID_RANKS[row]);
            for col in 0..13 {
                let notation = grid_notation(row, col);
                if self.hands.contains(&notation) {
                    print!("\x1b[42m{:>4}\x1b[0m", notation); // Green
                } else {
                    print!("{:>4}", "-");
                }
            }
            println!();
        }
    }
}

/// Complete chart export for a range table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartOutput {
    /// One chart per position with a defined range, in action order.
    pub positions: Vec<PositionChart>,
}

impl ChartOutput {
    /// Build charts for every position the table defines.
    pub fn from_table(table: &RangeTable) -> Self {
        Self {
            positions: table
                .positions()
                .into_iter()
                .map(|position| PositionChart::new(table, position))
                .collect(),
        }
    }

    /// Save the charts as pretty-printed JSON.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
