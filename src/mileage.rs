//! Static per-leg mileage table.

/// Per-leg distances in whole miles with their running totals.
///
/// `leg_miles[i]` is the distance from stop `i - 1` to stop `i`; `leg_miles[0]`
/// is the distance to the first stop and is 0 for any validated route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegMileageTable {
  leg_miles: Vec<u32>,
  cumulative: Vec<u32>,
}

impl LegMileageTable {
  pub fn new(leg_miles: Vec<u32>) -> Self {
    let cumulative = leg_miles
      .iter()
      .scan(0u32, |acc, leg| {
        *acc = acc.saturating_add(*leg);
        Some(*acc)
      })
      .collect();
    Self {
      leg_miles,
      cumulative,
    }
  }

  pub fn leg_miles(&self) -> &[u32] {
    &self.leg_miles
  }

  /// Miles from the first stop to each stop, non-decreasing.
  pub fn cumulative_miles(&self) -> &[u32] {
    &self.cumulative
  }

  pub fn miles_at(&self, stop_index: usize) -> u32 {
    self.cumulative[stop_index]
  }

  pub fn total_miles(&self) -> u32 {
    self.cumulative.last().copied().unwrap_or(0)
  }

  pub fn len(&self) -> usize {
    self.leg_miles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.leg_miles.is_empty()
  }
}
