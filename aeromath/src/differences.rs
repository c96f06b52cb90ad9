//! Forward sum/difference/ratio over an ordered sequence. An input of length
//! `N` produces an output of length `N - 1`, one value per adjacent pair.

use crate::type_aliases::Float;

pub fn forward_sum(values: &[Float]) -> Vec<Float> {
    values.windows(2).map(|w| w[0] + w[1]).collect()
}

pub fn forward_difference(values: &[Float]) -> Vec<Float> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

pub fn forward_ratio(values: &[Float]) -> Vec<Float> {
    values.windows(2).map(|w| w[1] / w[0]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_difference_shrinks_by_one() {
        let values = vec![1.0, 3.0, 6.0, 10.0];
        let diffs = forward_difference(&values);

        assert_eq!(diffs, vec![2.0, 3.0, 4.0]);
    }
}
