/// Multiples of 3 or 5 below a limit, in ascending order, with their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplesReport {
    limit: u64,
    multiples: Vec<u64>,
    total: u128,
}

impl MultiplesReport {
    pub(crate) fn new(limit: u64, multiples: Vec<u64>, total: u128) -> Self {
        Self {
            limit,
            multiples,
            total,
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn multiples(&self) -> &[u64] {
        &self.multiples
    }

    pub fn total(&self) -> u128 {
        self.total
    }

    pub fn count(&self) -> usize {
        self.multiples.len()
    }

    /// The first `len` multiples, or all of them when there are fewer.
    pub fn preview(&self, len: usize) -> &[u64] {
        &self.multiples[..len.min(self.multiples.len())]
    }

    pub fn into_parts(self) -> (Vec<u64>, u128) {
        (self.multiples, self.total)
    }
}

/// One worked addition of two reversed digit sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversedSumExample {
    pub first: Vec<u32>,
    pub second: Vec<u32>,
    pub first_value: u128,
    pub second_value: u128,
    pub sum: u128,
    pub result: Vec<u32>,
}
