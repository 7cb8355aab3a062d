use itertools::Itertools;

/// integerizes non-negative real values so that they sum to `target` using the
/// largest remainder (Hamilton) method.
///
/// every value is floored, then the `target - sum(floors)` entries with the largest
/// fractional remainder receive one more unit. the shortfall is clamped to
/// `0..=values.len()`. equal remainders are broken by ascending key. the result is
/// aligned with `values`.
pub fn largest_remainder<K: Ord>(values: &[(K, f64)], target: i64) -> Vec<i64> {
    let mut result = values
        .iter()
        .map(|(_, v)| v.floor() as i64)
        .collect_vec();
    let floor_sum: i64 = result.iter().sum();
    let deficit = (target - floor_sum).clamp(0, values.len() as i64) as usize;

    let by_remainder = (0..values.len()).sorted_by(|a, b| {
        let (key_a, value_a) = &values[*a];
        let (key_b, value_b) = &values[*b];
        let rem_a = value_a - value_a.floor();
        let rem_b = value_b - value_b.floor();
        rem_b.total_cmp(&rem_a).then_with(|| key_a.cmp(key_b))
    });
    for idx in by_remainder.take(deficit) {
        result[idx] += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::largest_remainder;

    #[test]
    fn test_integral_values_untouched() {
        let values = vec![("a", 10.0), ("b", 10.0), ("c", 2.0)];
        assert_eq!(largest_remainder(&values, 22), vec![10, 10, 2]);
    }

    #[test]
    fn test_largest_remainders_rounded_up() {
        let values = vec![("a", 1.2), ("b", 2.7), ("c", 3.1)];
        assert_eq!(largest_remainder(&values, 7), vec![1, 3, 3]);
    }

    #[test]
    fn test_ties_broken_by_key() {
        let values = vec![("c", 0.5), ("a", 0.5), ("b", 0.5), ("d", 1.5)];
        assert_eq!(largest_remainder(&values, 3), vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_deficit_clamped() {
        let values = vec![("a", 1.5), ("b", 1.5)];
        assert_eq!(largest_remainder(&values, 100), vec![2, 2]);
        assert_eq!(largest_remainder(&values, 0), vec![1, 1]);
    }

    #[test]
    fn test_empty() {
        let values: Vec<(&str, f64)> = vec![];
        assert!(largest_remainder(&values, 5).is_empty());
    }
}
