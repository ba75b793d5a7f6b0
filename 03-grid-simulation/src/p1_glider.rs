// Pattern 1: Glider on a Toroidal Grid
//
// Run with: cargo run --bin p1_glider
use grid_simulation::{seed_glider, Grid};

const GENERATIONS: usize = 4;

fn main() {
    let mut grid = Grid::new(5, 9);
    seed_glider(&mut grid);

    println!("=== generation 0 ===");
    print!("{}", grid);

    // Each pass reads the current grid and builds a fresh one, so the
    // update order of individual cells can never matter
    for generation in 1..=GENERATIONS {
        grid = grid.advance();
        println!("\n=== generation {} ===", generation);
        print!("{}", grid);
    }

    println!(
        "\nAfter {} generations the glider has moved one cell down and right,",
        GENERATIONS
    );
    println!("wrapping at the edges as it goes.");
}
