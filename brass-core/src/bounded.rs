use serde::Serialize;

/// A value clamped to an integer range.
/// Used for: the income track (-10 to +30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoundedInt {
    value: i32,
    min: i32,
    max: i32,
}

impl BoundedInt {
    pub const fn new(value: i32, min: i32, max: i32) -> Self {
        let value = if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        };
        Self { value, min, max }
    }

    pub fn get(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn add(&mut self, delta: i32) {
        self.value = (self.value + delta).clamp(self.min, self.max);
    }

    pub fn set(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }
}

/// The income track, starting at the initial level.
pub const fn new_income() -> BoundedInt {
    use brass_data::defines::economy;
    BoundedInt::new(
        economy::INITIAL_INCOME,
        economy::MIN_INCOME,
        economy::MAX_INCOME,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_int_clamps() {
        let mut b = BoundedInt::new(0, -5, 5);

        b.add(3);
        assert_eq!(b.get(), 3);

        b.add(10); // Should clamp to 5
        assert_eq!(b.get(), 5);

        b.add(-20); // Should clamp to -5
        assert_eq!(b.get(), -5);
    }

    #[test]
    fn income_track_bounds() {
        let mut income = new_income();
        assert_eq!(income.get(), 10);

        income.add(100);
        assert_eq!(income.get(), 30);

        income.add(-100);
        assert_eq!(income.get(), -10);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_bounded_updates_stay_within_bounds(
            initial in -100..100i32,
            updates in proptest::collection::vec(-50..50i32, 1..20)
        ) {
            let mut b = BoundedInt::new(initial, -10, 30);

            for update in updates {
                b.add(update);
                prop_assert!(b.get() >= b.min());
                prop_assert!(b.get() <= b.max());
            }
        }
    }
}
