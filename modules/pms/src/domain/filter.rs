//! Pure filter/aggregate helpers shared by the collection screens.
//!
//! Nothing here mutates its input: filters borrow the base collection and
//! return references in the original order.

use std::cmp::Ordering;
use std::str::FromStr;

/// Categorical filter with an "all" sentinel that disables it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl Choice<String> {
    pub fn admits_str(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

/// `"all"` disables the filter; anything else must parse as `T`.
impl<T: FromStr> FromStr for Choice<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Choice::All)
        } else {
            s.parse().map(Choice::Only)
        }
    }
}

/// Case-insensitive substring search; the empty needle matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSearch {
    needle: String,
}

impl TextSearch {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True when any of `fields` contains the needle.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        self.is_empty()
            || fields
                .iter()
                .any(|f| f.to_lowercase().contains(&self.needle))
    }
}

type Predicate<'p, R> = Box<dyn Fn(&R) -> bool + 'p>;

/// Conjunction of predicates over one record type.
pub struct Filter<'p, R> {
    predicates: Vec<Predicate<'p, R>>,
}

impl<R> Default for Filter<'_, R> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<'p, R> Filter<'p, R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, predicate: impl Fn(&R) -> bool + 'p) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn matches(&self, record: &R) -> bool {
        self.predicates.iter().all(|p| p(record))
    }

    pub fn apply<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn count(&self, records: &[R]) -> usize {
        records.iter().filter(|r| self.matches(r)).count()
    }
}

/// Round half away from zero to one decimal.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Arithmetic mean without rounding; 0 for the empty set.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Mean rounded to one decimal; 0 for the empty set.
pub fn mean_one_decimal(values: impl IntoIterator<Item = f64>) -> f64 {
    round1(mean(values))
}

/// Whole-number percentage of `part` in `whole`; 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        (part as f64 / whole as f64 * 100.0).round() as u32
    }
}

/// Descending by score; equal scores keep their input order.
///
/// Decorates each record with its input index and uses it as the tiebreak,
/// so the result does not depend on the sort's own stability.
pub fn rank_desc_by<'a, R>(records: &'a [R], score: impl Fn(&R) -> f64) -> Vec<&'a R> {
    let mut decorated: Vec<(usize, f64, &R)> = records
        .iter()
        .enumerate()
        .map(|(i, r)| (i, score(r), r))
        .collect();

    decorated.sort_by(|(ia, sa, _), (ib, sb, _)| {
        sb.partial_cmp(sa)
            .unwrap_or(Ordering::Equal)
            .then_with(|| ia.cmp(ib))
    });

    decorated.into_iter().map(|(_, _, r)| r).collect()
}
