use crate::enums::star_unit::StarUnit;

pub const STAR_UNITS: usize = 10;

/// A rating split into full, half and empty star units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: usize,
    pub half: bool,
    pub empty: usize,
}

impl StarRating {
    /// `full = floor(r)`, a half star iff `r` has a fractional part,
    /// `empty = 10 - ceil(r)`. Ratings outside [0, 10] are not validated;
    /// the counts only saturate so they cannot underflow.
    pub fn from_rating(rating: f64) -> Self {
        let full = rating.floor().clamp(0.0, STAR_UNITS as f64) as usize;
        let half = rating % 1.0 != 0.0 && full < STAR_UNITS;
        let empty = (STAR_UNITS as f64 - rating.ceil()).clamp(0.0, STAR_UNITS as f64) as usize;

        Self { full, half, empty }
    }

    pub fn units(&self) -> Vec<StarUnit> {
        let mut units = Vec::with_capacity(STAR_UNITS);
        units.extend(std::iter::repeat(StarUnit::Full).take(self.full));
        if self.half {
            units.push(StarUnit::Half);
        }
        units.extend(std::iter::repeat(StarUnit::Empty).take(self.empty));
        units
    }

    pub fn total_units(&self) -> usize {
        self.full + usize::from(self.half) + self.empty
    }
}
