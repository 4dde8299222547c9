use serde::Serialize;

/// Vertex label (1..n by convention)
pub type VertexId = u32;

/// Identity of one edge among parallel edges between the same ordered pair
pub type EdgeId = u32;

/// Non-negative weight of a multigraph edge, or an accumulated path distance.
///
/// Negative weights are a caller error; nothing here checks for them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    /// Distance of a vertex that has not been reached
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order used by the shortest-path heap. NaN sorts last.
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(f64::from(weight))
    }
}

/// Whole numbers keep one decimal place (`2.0`), everything else prints as-is.
impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_addition() {
        let sum = Weight::new(1.5) + Weight::new(2.5);
        assert_eq!(sum.value(), 4.0);
    }

    #[test]
    fn test_weight_sum() {
        let total: Weight = [1.0, 2.0, 0.5].into_iter().map(Weight::new).sum();
        assert_eq!(total, Weight::new(3.5));
    }

    #[test]
    fn test_weight_infinity() {
        assert!(!Weight::INFINITY.is_finite());
        assert!(Weight::new(1e300) < Weight::INFINITY);
        assert_eq!((Weight::INFINITY + Weight::new(1.0)), Weight::INFINITY);
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(Weight::new(2.0).to_string(), "2.0");
        assert_eq!(Weight::new(2.5).to_string(), "2.5");
        assert_eq!(Weight::from(3u32).to_string(), "3.0");
        assert_eq!(Weight::INFINITY.to_string(), "inf");
    }

    #[test]
    fn test_weight_total_cmp() {
        use std::cmp::Ordering;
        assert_eq!(Weight::new(1.0).total_cmp(&Weight::new(2.0)), Ordering::Less);
        assert_eq!(Weight::ZERO.total_cmp(&Weight::ZERO), Ordering::Equal);
    }

    #[test]
    fn test_weight_serializes_as_number() {
        let json = serde_json::to_string(&Weight::new(1.5)).unwrap();
        assert_eq!(json, "1.5");
    }
}
