//! Minimal example: build a curve, then map an index to a cell and back.

use std::error::Error;

use hilbertwalk::HilbertCurve;

fn main() -> Result<(), Box<dyn Error>> {
    // Hilbert curve on an 8x8 grid (order 3)
    let curve = HilbertCurve::new(3)?;
    println!(
        "order {} curve: {}x{} grid, {} cells",
        curve.order(),
        curve.width(),
        curve.width(),
        curve.size()
    );

    let index = 10;
    let cell = curve.coordinate_at(index)?;
    println!("Cell at index {index}: {cell:?}");

    let round_trip = curve.index_at(cell.x, cell.y)?;
    println!("Index for {cell:?}: {round_trip}");

    assert_eq!(round_trip, index);

    // The first few cells of the walk, in visiting order.
    for (i, cell) in curve.iter().take(8).enumerate() {
        println!("{i}: ({}, {})", cell.x, cell.y);
    }

    Ok(())
}
