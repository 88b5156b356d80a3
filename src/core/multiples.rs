use crate::domain::model::MultiplesReport;

pub fn is_multiple_of_3_or_5(n: u64) -> bool {
    n % 3 == 0 || n % 5 == 0
}

/// Collects every natural number below `limit` divisible by 3 or 5, and their sum.
///
/// A `limit` of 0 or 1 leaves nothing to collect: the report is empty with a total of 0.
pub fn find_multiples_and_sum(limit: u64) -> MultiplesReport {
    let multiples: Vec<u64> = (1..limit).filter(|&n| is_multiple_of_3_or_5(n)).collect();
    let total = multiples.iter().map(|&n| u128::from(n)).sum();

    tracing::debug!(limit, count = multiples.len(), total = %total, "Collected multiples");

    MultiplesReport::new(limit, multiples, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate() {
        assert!(is_multiple_of_3_or_5(3));
        assert!(is_multiple_of_3_or_5(5));
        assert!(is_multiple_of_3_or_5(15));
        assert!(!is_multiple_of_3_or_5(1));
        assert!(!is_multiple_of_3_or_5(7));
    }

    #[test]
    fn test_empty_below_two() {
        for limit in [0, 1] {
            let report = find_multiples_and_sum(limit);
            assert!(report.multiples().is_empty());
            assert_eq!(report.total(), 0);
        }
    }

    #[test]
    fn test_limit_is_exclusive() {
        let report = find_multiples_and_sum(4);
        assert_eq!(report.multiples(), &[3]);
        assert_eq!(report.total(), 3);

        let report = find_multiples_and_sum(3);
        assert!(report.multiples().is_empty());
    }

    #[test]
    fn test_below_ten() {
        let report = find_multiples_and_sum(10);
        assert_eq!(report.multiples(), &[3, 5, 6, 9]);
        assert_eq!(report.total(), 23);
        assert_eq!(report.preview(10), &[3, 5, 6, 9]);
    }
}
