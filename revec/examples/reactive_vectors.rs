//! Demonstrates dirty-bit invalidation and the lazy nested view

use revec::{Expression, Order, Orientation, RevecError, VectorCore};

fn main() -> Result<(), RevecError> {
    let v = VectorCore::from_values(Order::RowMajor, Orientation::Row, vec![3.0, 4.0])?;
    println!("vector:      {v}");
    println!("norm:        {}", v.size());

    // A derived expression that re-reads the vector's alignment lazily.
    let order = Order::RowMajor;
    println!("\nstorage order: {order}, orientation: {}", v.orientation());
    println!("aligned:     {}", v.is_aligned());
    println!("nested view: {} line(s)", v.data2().len());

    println!("\ntransposing...");
    v.transpose();
    println!("orientation: {}", v.orientation());
    println!("aligned:     {}", v.is_aligned());
    println!("nested view: {} line(s)", v.data2().len());

    // Expressions memoize until an upstream cell changes.
    let cell = v.element(0)?.clone();
    let reader = cell.clone();
    let doubled = Expression::new(move || reader.peek() * 2.0);
    doubled.depends_on(&cell);
    println!("\ndoubled x:   {}", doubled.get());
    println!("evaluated:   {}", doubled.is_evaluated());

    cell.set_value(10.0);
    println!("after set_value(10), evaluated: {}", doubled.is_evaluated());
    println!("doubled x recomputes on read: {}", doubled.get());

    Ok(())
}
