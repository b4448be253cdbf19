//! Demonstrates homogeneous points, directions, and affine transforms

use revec::{
    HomogeneousKind, HomogeneousVector, Order, Orientation, RevecError, SquareMatrix, VectorCore,
};

fn main() -> Result<(), RevecError> {
    let point = HomogeneousVector::new(
        HomogeneousKind::Absolute,
        Order::RowMajor,
        Orientation::Row,
        vec![1.0, 2.0],
    )?;
    let direction = HomogeneousVector::new(
        HomogeneousKind::Relative,
        Order::RowMajor,
        Orientation::Row,
        vec![0.5, -1.0],
    )?;

    println!("point:     {point} (trailing {})", point.trailing());
    println!("direction: {direction} (trailing {})", direction.trailing());

    // Points are not scalable; directions are.
    match point.scale(&2.0) {
        Err(e) => println!("\nscaling the point fails: {e}"),
        Ok(()) => unreachable!(),
    }
    direction.scale(&2.0)?;
    println!("direction scaled: {direction}");

    // Adding a direction moves the point without touching its class.
    point.add(&direction)?;
    println!("point + direction: {point}");

    // Affine translation through the full matrix product.
    let translate = SquareMatrix::translation(&[10.0, 20.0])?;
    point.pre_transform(&translate)?;
    println!("translated point: {point}");

    // Translation by a projected-size vector goes through the live view.
    let offset = VectorCore::from_values(Order::RowMajor, Orientation::Row, vec![-1.0, -2.0])?;
    point.translate(&offset)?;
    println!("nudged point:     {point}");

    Ok(())
}
