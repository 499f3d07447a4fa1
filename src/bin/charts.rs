//! Range chart printer
//!
//! Prints the standard opening range for every position as a 13x13 grid
//! and saves the whole table as human-readable JSON.

use holdem_trainer::advisor::{ChartOutput, RangeTable};

fn main() {
    println!("=== Standard Opening Ranges ===");

    let table = RangeTable::standard();
    let output = ChartOutput::from_table(table);

    for chart in &output.positions {
        chart.print_grid();
    }

    let json_path = "ranges.json";
    match output.save_json(json_path) {
        Ok(_) => println!("\nSaved JSON: {}", json_path),
        Err(e) => eprintln!("\nError saving JSON: {}", e),
    }
}
