#![cfg(feature = "std")]

use crate::{board::BattleBoard, heatmap::Heatmap};

fn print_column_header(cols: usize, width: usize) {
    std::print!("   ");
    for c in 0..cols {
        std::print!("{:>width$}", c, width = width);
    }
    std::println!();
}

/// Print a board with column and row labels, one glyph per cell.
pub fn print_board(title: &str, board: &BattleBoard) {
    std::println!("\n{}:", title);
    print_column_header(board.cols(), 2);
    for y in 0..board.rows() {
        std::print!("{:2} ", y);
        for x in 0..board.cols() {
            std::print!(" {}", board.cell(x as i32, y as i32));
        }
        std::println!();
    }
}

/// Print raw heat values with column and row labels.
pub fn print_heatmap(heatmap: &Heatmap) {
    let grid = heatmap.grid();
    std::println!("\nHeatmap (total {}):", heatmap.total());
    print_column_header(grid.cols(), 5);
    for y in 0..grid.rows() {
        std::print!("{:2} ", y);
        for x in 0..grid.cols() {
            std::print!("{:>5}", heatmap.heat(x as i32, y as i32));
        }
        std::println!();
    }
}
