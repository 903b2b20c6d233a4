use chrono::{DateTime, Duration, Utc};
use contracts::enums::Categorical;
use contracts::shared::{Series, TimeWindow};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::series::synthesize;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Random source plus a frozen clock for one assembler invocation.
///
/// Everything generated during a call reads `now` from here, so a seeded
/// context reproduces a dataset exactly.
pub struct GenContext<R: Rng> {
    rng: R,
    now: DateTime<Utc>,
}

impl<R: Rng> GenContext<R> {
    pub fn new(rng: R, now: DateTime<Utc>) -> Self {
        Self { rng, now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Uniform draw from `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// `base + U[0, spread)`.
    pub fn spread(&mut self, base: f64, spread: f64) -> f64 {
        base + self.unit() * spread
    }

    /// `floor(base + U[0, spread))`.
    pub fn whole(&mut self, base: f64, spread: f64) -> f64 {
        self.spread(base, spread).floor()
    }

    /// Integer variant of [`GenContext::whole`]: `base + floor(U[0, spread))`.
    pub fn count(&mut self, base: u32, spread: u32) -> u32 {
        base + (self.unit() * f64::from(spread)) as u32
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Uniform pick from a category table.
    pub fn pick<T: Categorical>(&mut self) -> T {
        T::ALL[self.rng.gen_range(0..T::ALL.len())]
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// `now - U[0, max_days)` days, with sub-day precision.
    pub fn ago(&mut self, max_days: f64) -> DateTime<Utc> {
        let offset = fractional_days(self.unit() * max_days);
        self.now - offset
    }

    /// `now - floor(U[0, max_days))` whole days.
    pub fn whole_days_ago(&mut self, max_days: u32) -> DateTime<Utc> {
        let days = self.count(0, max_days);
        self.now - Duration::days(i64::from(days))
    }

    /// `now + U[0, max_days)` days.
    pub fn ahead(&mut self, max_days: f64) -> DateTime<Utc> {
        let offset = fractional_days(self.unit() * max_days);
        self.now + offset
    }

    pub fn series(&mut self, base: f64, volatility: f64, window: &TimeWindow) -> Series {
        synthesize(&mut self.rng, base, volatility, window)
    }
}

impl GenContext<StdRng> {
    pub fn seeded(seed: u64, now: DateTime<Utc>) -> Self {
        Self::new(StdRng::seed_from_u64(seed), now)
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), Utc::now())
    }
}

pub fn fractional_days(days: f64) -> Duration {
    Duration::milliseconds((days * MILLIS_PER_DAY).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixed_now, seeded};
    use contracts::domain::a002_order::ProductCategory;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = seeded(7);
        let mut b = seeded(7);
        for _ in 0..20 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn test_count_stays_in_range() {
        let mut ctx = seeded(1);
        for _ in 0..1000 {
            let n = ctx.count(5, 20);
            assert!((5..25).contains(&n));
        }
    }

    #[test]
    fn test_pick_only_returns_table_values() {
        let mut ctx = seeded(2);
        for _ in 0..200 {
            let category: ProductCategory = ctx.pick();
            assert!(ProductCategory::ALL.contains(&category));
        }
    }

    #[test]
    fn test_dates_relative_to_frozen_now() {
        let mut ctx = seeded(3);
        for _ in 0..200 {
            let past = ctx.ago(7.0);
            assert!(past <= fixed_now() && past >= fixed_now() - Duration::days(7));
            let whole = ctx.whole_days_ago(30);
            assert!(whole <= fixed_now() && whole > fixed_now() - Duration::days(30));
            assert!(ctx.ahead(30.0) >= fixed_now());
        }
    }

    #[test]
    fn test_choose_from_empty_is_none() {
        let mut ctx = seeded(4);
        let empty: [u8; 0] = [];
        assert!(ctx.choose(&empty).is_none());
    }
}
