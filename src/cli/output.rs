//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    export::{PolicyGrid, ValueGrid},
    grid::CellKind,
};

/// Create a progress bar for long-running tasks
pub fn create_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a learned value grid as a text table.
///
/// Wall cells are masked, terminal cells carry a `*` marker next to their
/// value.
pub fn print_value_grid(grid: &ValueGrid) {
    for (values, kinds) in grid.values.iter().zip(grid.kinds.iter()) {
        let row: Vec<String> = values
            .iter()
            .zip(kinds.iter())
            .map(|(&value, &kind)| match kind {
                CellKind::Wall => format!("{:>8}", "#####"),
                CellKind::Terminal => format!("{:>7.2}*", value),
                CellKind::Open => format!("{:>8.2}", value),
            })
            .collect();
        println!("{}", row.join(" "));
    }
}

/// Render a best-direction field as arrows.
///
/// Rows are printed bottom-up so the output matches display coordinate
/// systems whose y axis points upward. Walls render as `#`, terminals as `*`.
pub fn print_policy_grid(policy: &PolicyGrid, grid: &ValueGrid) {
    let flipped_dirs = policy.flipped_rows();
    let flipped_kinds: Vec<_> = grid.kinds.iter().rev().collect();

    for (dir_row, kind_row) in flipped_dirs.iter().zip(flipped_kinds) {
        let row: Vec<String> = dir_row
            .iter()
            .zip(kind_row.iter())
            .map(|(dir, &kind)| match (dir, kind) {
                (Some(d), _) => d.to_arrow().to_string(),
                (None, CellKind::Wall) => "#".to_string(),
                (None, CellKind::Terminal) => "*".to_string(),
                (None, CellKind::Open) => " ".to_string(),
            })
            .collect();
        println!("{}", row.join(" "));
    }
}
