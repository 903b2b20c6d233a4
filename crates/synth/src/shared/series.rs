use contracts::shared::{Sample, Series, TimeWindow};
use rand::Rng;

/// Independent uniform noise around `base`, one sample per window step.
///
/// `timestamp[i] = end - (point_count - i) * step` and every value lies in
/// `[base - volatility / 2, base + volatility / 2]`. There is no trend or
/// autocorrelation. A negative or non-finite volatility yields a flat series.
pub fn synthesize<R: Rng>(rng: &mut R, base: f64, volatility: f64, window: &TimeWindow) -> Series {
    let volatility = if volatility.is_finite() && volatility > 0.0 {
        volatility
    } else {
        0.0
    };
    let step = window.step();
    let points = window.point_count;

    (0..points)
        .map(|i| Sample {
            timestamp: window.end - step * ((points - i) as i32),
            value: base + rng.gen::<f64>() * volatility - volatility / 2.0,
        })
        .collect()
}
