// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_decimal::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Fixed Decimal Example ===\n");

    // Doubles drift, fixed decimals do not
    let naive: f64 = (0..10).map(|_| 0.1).sum();
    let step = FixedDecimal::from_display_number(0.1)?;
    let exact = FixedDecimal::checked_sum(std::iter::repeat_n(step, 10))?;
    println!("0.1 summed ten times as f64: {}", naive);
    println!("0.1 summed ten times fixed:  {}\n", exact);

    // Floor rounding at the third digit
    let up = FixedDecimal::from_display_number(1.2345)?;
    let down = FixedDecimal::from_display_number(-1.2345)?;
    println!("1.2345  -> {}", up);
    println!("-1.2345 -> {}\n", down);

    // Scores kept in stored form, shown in display form
    let scores: Vec<Score> = ["87.65", "92.125", "78.3"]
        .iter()
        .map(|s| s.parse())
        .collect::<Result<_, _>>()?;
    let total = FixedDecimal::checked_sum(scores.iter().copied())?;
    let average = total.divide(FixedDecimal::from_display_number(scores.len() as f64)?)?;
    println!("Total score:   {}", total);
    println!("Average score: {}\n", average);

    let record = average.to_stored().serialize();
    println!("Stored record: {}", serde_json::to_string(&record)?);

    let restored: FixedDecimal = serde_json::from_str(&serde_json::to_string(&record)?)?;
    println!("Restored:      {:?}\n", restored);

    // Rejections are reported as errors and logged at debug level
    if let Err(err) = FixedDecimal::from_display_number(1e10) {
        println!("1e10 rejected: {}", err);
    }
    if let Err(err) = average.divide(FixedDecimal::zero()) {
        println!("Division rejected: {}", err);
    }

    Ok(())
}
