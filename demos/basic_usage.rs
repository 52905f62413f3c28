// ============================================================================
// Basic Usage Example
// ============================================================================

use qfixed::bits::count_leading_zeros;
use qfixed::prelude::*;

type Q8 = FixedPoint<i32, 8>;

fn main() -> Result<(), NumericError> {
    // Rejected inputs are reported at debug/trace level
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fixed-Point Example ===\n");

    let price = I16F16::from_f64(2.5)?;
    let qty = I16F16::from_int(4);
    println!("{} * {} = {}", price, qty, price * qty);
    println!("{} / {} = {}", I16F16::from_int(10), qty, I16F16::from_int(10) / qty);
    println!("1 / 3 = {:.6}", I16F16::one() / I16F16::from_int(3));
    println!("-3 == 3 * -1: {}", I16F16::from_int(-3) == I16F16::from_int(3) * I16F16::from_int(-1));

    // Mixed scales: the result keeps the left operand's format
    println!("\n=== Mixed Scales ===");
    let coarse = Q8::from_f64(2.25)?;
    let fine = I16F16::from_f64(1.5)?;
    println!("{:?} * {:?} = {:?}", fine, coarse, fine * coarse);
    println!("{:?} + {:?} = {:?}", coarse, fine, coarse + fine);
    println!("1.5 at 8 bits == 1.5 at 16 bits: {}", Q8::from_f64(1.5)? == fine);

    // Wraparound instead of saturation
    println!("\n=== Overflow ===");
    println!("MAX + DELTA = {}", I16F16::MAX + I16F16::DELTA);
    println!("U16F16: 0 - 1 = {}", U16F16::ZERO - U16F16::one());

    // Decimal text at the boundaries
    println!("\n=== Parsing ===");
    let parsed: I48F16 = "-1234.5678".parse()?;
    println!("parsed {} (raw {})", parsed, parsed.raw_value());
    println!("integer part {}, to_f64 {}", parsed.integer_part(), parsed.to_f64());

    // Errors
    println!("\n=== Errors ===");
    if let Err(e) = I16F16::one().checked_div(I16F16::ZERO) {
        println!("1 / 0: {}", e);
    }
    if let Err(e) = I16F16::from_f64(f64::NAN) {
        println!("from_f64(NaN): {}", e);
    }
    println!("count_leading_zeros(0x0000_8000) = {}", count_leading_zeros(0x0000_8000u32));

    Ok(())
}
