use crate::RealScalar;

/// Full linear convolution of two coefficient lists.
///
/// The output has `input.len() + kernel.len()` slots, one more than needed,
/// so the last slot is always zero and left for the caller to trim.
pub(crate) fn convolve_1d<T: RealScalar>(input: &[T], kernel: &[T]) -> Vec<T> {
    let mut output = vec![T::zero(); input.len() + kernel.len()];

    for (i, &a) in input.iter().enumerate() {
        for (j, &b) in kernel.iter().enumerate() {
            output[i + j] = output[i + j] + a * b;
        }
    }
    output
}

#[cfg(test)]
mod test {
    use super::convolve_1d;

    #[test]
    fn convolve() {
        assert_eq!(
            convolve_1d(&[1.0, 2.0], &[3.0, 4.0]),
            vec![3.0, 10.0, 8.0, 0.0]
        );
    }

    #[test]
    fn convolve_empty() {
        assert_eq!(convolve_1d::<f64>(&[], &[]), Vec::<f64>::new());
        assert_eq!(convolve_1d(&[], &[1.0, 2.0]), vec![0.0, 0.0]);
    }
}
