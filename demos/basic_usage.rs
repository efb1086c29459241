// ============================================================================
// Basic Usage
// A simple moving average written once for any Num representation
// ============================================================================

use ta_num::prelude::*;

/// Simple moving average over the last `window` values.
///
/// Windows that are not full yet, or that contain a NaN bar, produce NaN.
/// The check is explicit: folding over NaN would silently drop the bar.
fn sma(values: &[Num], window: usize) -> Vec<Num> {
    let divisor = |n: Num| n.function()(Number::Int(window as i64));

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return NAN;
            }
            let slice = &values[i + 1 - window..=i];
            if slice.iter().any(|v| v.is_nan()) {
                return NAN;
            }
            let sum = slice[1..].iter().fold(slice[0], |acc, &v| acc.plus(v));
            sum.divided_by(divisor(sum))
        })
        .collect()
}

fn main() {
    // The fourth bar is missing
    let closes = [101.5, 102.25, 101.75, f64::NAN, 104.5, 103.25, 102.0];

    for config in [NumConfig::decimal(), NumConfig::double()] {
        if let Err(e) = config.validate() {
            eprintln!("invalid configuration: {}", e);
            continue;
        }

        let series: Vec<Num> = closes.iter().map(|&c| config.num(c)).collect();
        let averages = sma(&series, 3);

        println!("=== {:?} ===", config.kind);
        for (close, avg) in series.iter().zip(averages.iter()) {
            println!("close {:>8}  sma(3) {:>8}", close, avg);
        }

        let highest = series.iter().fold(NAN, |acc, &c| acc.max(c));
        println!("highest close: {} ({})", highest, highest.name());
        println!();
    }

    // NaN has no integer representation
    match NAN.to_i64() {
        Ok(v) => println!("unexpected integer: {}", v),
        Err(e) => println!("NaN.to_i64(): {}", e),
    }
}
