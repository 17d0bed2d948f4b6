//! Path downsampling into sparse waypoints.

use crate::error::{PathError, Result};

/// Stride used when no other is given.
pub const DEFAULT_SAMPLE_STEP: usize = 3;

/// Keep roughly every `step`-th element of `path`, always including the
/// first and last.
///
/// When `len % step == 1` a plain stride from index 0 already ends on the
/// last element. Otherwise the strided run starts at half the remainder
/// (a remainder of 0 counts as `step`) so that the uneven gap is split
/// between both ends, and the last element is appended explicitly.
///
/// ```
/// use waygrid_paths::sample_path;
///
/// let idx: Vec<usize> = (0..9).collect();
/// assert_eq!(sample_path(&idx, 3).unwrap(), vec![0, 1, 4, 7, 8]);
/// ```
pub fn sample_path<T: Copy>(path: &[T], step: usize) -> Result<Vec<T>> {
    if step == 0 {
        return Err(PathError::ZeroStep);
    }
    let n = path.len();
    if n <= 1 {
        return Ok(path.to_vec());
    }

    let remainder = n % step;
    if remainder == 1 {
        return Ok(path.iter().step_by(step).copied().collect());
    }

    let remainder = if remainder == 0 { step } else { remainder };
    let mut sampled = Vec::with_capacity(n / step + 2);
    sampled.push(path[0]);
    // Index 0 is already in; with step 1 the stride would start there again.
    let first = (remainder / 2).max(1);
    sampled.extend(path[..n - 1].iter().skip(first).step_by(step).copied());
    sampled.push(path[n - 1]);
    Ok(sampled)
}

/// Waypoint sampler with a fixed stride.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathSampler {
    step: usize,
}

impl Default for PathSampler {
    fn default() -> Self {
        Self {
            step: DEFAULT_SAMPLE_STEP,
        }
    }
}

impl PathSampler {
    /// Create a sampler, rejecting a zero stride.
    pub fn new(step: usize) -> Result<Self> {
        if step == 0 {
            return Err(PathError::ZeroStep);
        }
        Ok(Self { step })
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn sample<T: Copy>(&self, path: &[T]) -> Vec<T> {
        // The stride was validated on construction.
        sample_path(path, self.step).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygrid_core::Point;

    fn indices(n: usize, step: usize) -> Vec<usize> {
        let path: Vec<usize> = (0..n).collect();
        sample_path(&path, step).unwrap()
    }

    fn is_subsequence(sub: &[usize], full: &[usize]) -> bool {
        let mut it = full.iter();
        sub.iter().all(|s| it.any(|f| f == s))
    }

    #[test]
    fn remainder_one_is_a_plain_stride() {
        assert_eq!(indices(10, 3), vec![0, 3, 6, 9]);
        assert_eq!(indices(7, 3), vec![0, 3, 6]);
        assert_eq!(indices(9, 4), vec![0, 4, 8]);
    }

    #[test]
    fn zero_remainder_is_centered() {
        assert_eq!(indices(9, 3), vec![0, 1, 4, 7, 8]);
        assert_eq!(indices(6, 3), vec![0, 1, 4, 5]);
    }

    #[test]
    fn other_remainders_are_centered() {
        // n = 11, remainder 2: start at 1.
        assert_eq!(indices(11, 3), vec![0, 1, 4, 7, 10]);
        // n = 8, remainder 3 with step 5: start at 1.
        assert_eq!(indices(8, 5), vec![0, 1, 6, 7]);
        // n = 14, remainder 4 with step 5: start at 2.
        assert_eq!(indices(14, 5), vec![0, 2, 7, 12, 13]);
    }

    #[test]
    fn short_paths() {
        assert!(indices(0, 3).is_empty());
        assert_eq!(indices(1, 3), vec![0]);
        assert_eq!(indices(2, 3), vec![0, 1]);
        assert_eq!(indices(3, 3), vec![0, 1, 2]);
    }

    #[test]
    fn unit_step_keeps_everything_once() {
        assert_eq!(indices(5, 1), vec![0, 1, 2, 3, 4]);
        assert_eq!(indices(1, 1), vec![0]);
    }

    #[test]
    fn zero_step_is_rejected() {
        assert_eq!(sample_path(&[1, 2, 3], 0), Err(PathError::ZeroStep));
        assert_eq!(PathSampler::new(0), Err(PathError::ZeroStep));
    }

    #[test]
    fn endpoints_kept_and_order_preserved() {
        for n in 1..40 {
            let full: Vec<usize> = (0..n).collect();
            for step in 1..8 {
                let s = indices(n, step);
                assert_eq!(s.first(), Some(&0), "n={n} step={step}");
                assert_eq!(s.last(), Some(&(n - 1)), "n={n} step={step}");
                assert!(s.windows(2).all(|w| w[0] < w[1]), "n={n} step={step}: {s:?}");
                assert!(is_subsequence(&s, &full));
            }
        }
    }

    #[test]
    fn sampler_defaults_to_three() {
        let sampler = PathSampler::default();
        assert_eq!(sampler.step(), 3);
        let path: Vec<Point> = (0..10).map(|x| Point::new(x, 0)).collect();
        assert_eq!(
            sampler.sample(&path),
            vec![
                Point::new(0, 0),
                Point::new(3, 0),
                Point::new(6, 0),
                Point::new(9, 0)
            ]
        );
        assert_eq!(PathSampler::new(4).unwrap().sample(&path).len(), 4);
    }
}
