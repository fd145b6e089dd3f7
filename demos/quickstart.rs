//! numvec Quick Start Example
//!
//! This example demonstrates the core features of numvec in a single file.
//! Run with: cargo run --example quickstart

use numvec::{arithmetic, create_vector, Vector, VectorError};

fn main() -> Result<(), VectorError> {
    println!("=== numvec Quick Start ===\n");

    // 1. Statistics
    println!("1. Statistics");
    println!("   ----------");

    let v = create_vector([1_i32, 5, 3, 9, 2])?;
    println!("   v         = {:?}", v.as_slice());
    println!("   sum       = {}", v.sum());
    println!("   mean      = {:.2}", v.mean()?);
    println!("   max, min  = {}, {}", v.max()?, v.min()?);
    println!("   argmax    = {:?}", v.argmax());
    println!("   std dev   = {:.4}", v.std_dev());
    println!();

    // 2. Transforms
    println!("2. Transforms");
    println!("   ----------");

    let series = create_vector([1_i64, 2, 3, 4])?;
    println!("   cumsum    = {:?}", series.cumsum().as_slice());
    println!("   diff      = {:?}", series.cumsum().diff().as_slice());
    println!("   scale(10) = {:?}", series.scale(10).as_slice());
    println!("   unit      = {:?}", series.normalize()?.as_slice());

    let mut sorted = create_vector([3.5_f64, -1.0, 2.0])?;
    sorted.sort();
    println!("   sorted    = {:?}", sorted.as_slice());
    println!();

    // 3. Arithmetic
    println!("3. Arithmetic");
    println!("   ----------");

    let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let b = Vector::from_slice(&[4.0, 6.0, 8.0]);
    println!("   a + b     = {:?}", arithmetic::add(&[&a, &b])?.as_slice());
    println!("   a · b     = {}", arithmetic::dot_product(&a, &b)?);
    println!("   |a - b|   = {:.4}", arithmetic::euclidean_distance(&a, &b)?);
    println!("   cos(a, b) = {:.4}", arithmetic::cosine_similarity(&a, &b)?);
    println!();

    // 4. Errors are values
    println!("4. Errors");
    println!("   ------");

    let zeros = Vector::from_slice(&[0.0, 0.0]);
    match arithmetic::div(&a, &Vector::from_slice(&[1.0, 0.0, 2.0])) {
        Ok(q) => println!("   quotient  = {:?}", q.as_slice()),
        Err(e) => println!("   div       -> {e}"),
    }
    if let Err(e) = zeros.normalize() {
        println!("   normalize -> {e}");
    }
    if let Err(e) = create_vector(Vec::<u8>::new()) {
        println!("   create    -> {e}");
    }

    Ok(())
}
