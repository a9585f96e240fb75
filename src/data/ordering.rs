use super::model::{Dataset, Sample};

// ---------------------------------------------------------------------------
// Ordering by angle
// ---------------------------------------------------------------------------

/// Pair angles with reflectances and sort the pairs by angle, ascending.
///
/// The sort is stable: samples sharing an angle keep their input order.
/// Inputs are only read; the sorted pairs live in a new [`Dataset`].
/// Both slices are expected to have the same length (the validator
/// guarantees it); any surplus in the longer one is dropped.
pub fn order_by_angle(angles: &[f64], reflectances: &[f64]) -> Dataset {
    debug_assert_eq!(angles.len(), reflectances.len());

    let mut samples: Vec<Sample> = angles
        .iter()
        .zip(reflectances.iter())
        .map(|(&a, &r)| Sample::new(a, r))
        .collect();

    // Stable: equal angles keep input order.
    samples.sort_by(|a, b| a.angle_degrees.total_cmp(&b.angle_degrees));

    let moved = samples
        .iter()
        .zip(angles.iter())
        .filter(|(s, a)| s.angle_degrees.to_bits() != a.to_bits())
        .count();
    log::debug!("Ordered {} samples by angle ({moved} changed position)", samples.len());

    Dataset::from_samples(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angles_of(ds: &Dataset) -> Vec<f64> {
        ds.angles().collect()
    }

    #[test]
    fn sorts_and_keeps_pairs_together() {
        let angles = [10.0, 60.0, 40.0, 50.0, 30.0, 20.0];
        let refl = [5.0, 0.1, 2.0, 1.0, 3.0, 4.0];
        let ds = order_by_angle(&angles, &refl);

        assert_eq!(angles_of(&ds), vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        assert_eq!(
            ds.reflectances().collect::<Vec<_>>(),
            vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.1]
        );
    }

    #[test]
    fn output_is_a_permutation_of_the_input_pairs() {
        let angles = [33.0, 12.5, 80.0, 12.5, 0.0, 57.0, 33.0];
        let refl = [0.3, 0.9, 0.4, 0.8, 1.0, 0.05, 0.2];
        let ds = order_by_angle(&angles, &refl);

        assert_eq!(ds.len(), angles.len());
        assert!(ds
            .samples()
            .windows(2)
            .all(|w| w[0].angle_degrees <= w[1].angle_degrees));

        let key = |s: &Sample| (s.angle_degrees.to_bits(), s.reflectance.to_bits());
        let mut expected: Vec<_> = angles
            .iter()
            .zip(refl.iter())
            .map(|(&a, &r)| key(&Sample::new(a, r)))
            .collect();
        let mut got: Vec<_> = ds.samples().iter().map(key).collect();
        expected.sort_unstable();
        got.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn equal_angles_keep_input_order() {
        let angles = [50.0, 40.0, 50.0, 40.0, 50.0];
        let refl = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ds = order_by_angle(&angles, &refl);

        assert_eq!(
            ds.samples(),
            &[
                Sample::new(40.0, 2.0),
                Sample::new(40.0, 4.0),
                Sample::new(50.0, 1.0),
                Sample::new(50.0, 3.0),
                Sample::new(50.0, 5.0),
            ]
        );
    }

    #[test]
    fn inputs_are_left_untouched() {
        let angles = vec![3.0, 1.0, 2.0];
        let refl = vec![0.3, 0.1, 0.2];
        let _ = order_by_angle(&angles, &refl);
        assert_eq!(angles, vec![3.0, 1.0, 2.0]);
        assert_eq!(refl, vec![0.3, 0.1, 0.2]);
    }

    #[test]
    fn single_and_empty_inputs() {
        let one = order_by_angle(&[45.0], &[0.02]);
        assert_eq!(one.samples(), &[Sample::new(45.0, 0.02)]);
        assert!(order_by_angle(&[], &[]).is_empty());
    }
}
