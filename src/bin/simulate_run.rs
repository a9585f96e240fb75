//! Prints a synthetic Brewster's-angle run in the order the analyzer asks
//! for it, e.g. `simulate_run | brewster-lab`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use anyhow::{Context, Result};
use rand_distr::{Distribution, Normal, NormalError};

/// Refractive index of the simulated crown-glass sample.
const GLASS_INDEX: f64 = 1.52;
const ANGLE_LEAST_COUNT: f64 = 0.5;
const REFLECTANCE_LEAST_COUNT: f64 = 0.001;

/// Fresnel reflectance of p-polarised light entering a medium of index `n`
/// from air.
fn reflectance_p(theta_i_deg: f64, n: f64) -> f64 {
    let theta_i = theta_i_deg.to_radians();
    let sin_t = theta_i.sin() / n;
    let cos_t = (1.0 - sin_t * sin_t).sqrt();
    let cos_i = theta_i.cos();
    let r = (n * cos_i - cos_t) / (n * cos_i + cos_t);
    r * r
}

/// Detector noise, in units of the reflectance least count.
const NOISE_IN_LEAST_COUNTS: f64 = 1.5;

/// Seeded Gaussian read-out noise of the detector.
struct DetectorNoise {
    rng: StdRng,
    normal: Normal<f64>,
}

impl DetectorNoise {
    fn new(seed: u64, least_count: f64) -> Result<Self, NormalError> {
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            normal: Normal::new(0.0, NOISE_IN_LEAST_COUNTS * least_count)?,
        })
    }

    /// A noisy, non-negative reading of `true_value`.
    fn read(&mut self, true_value: f64) -> f64 {
        (true_value + self.normal.sample(&mut self.rng)).max(0.0)
    }
}

/// Readings quantised to the instrument's least count, as an operator would
/// write them down.
fn quantise(value: f64, least_count: f64) -> f64 {
    (value / least_count).round() * least_count
}

fn join(values: &[f64], decimals: usize) -> String {
    values
        .iter()
        .map(|v| format!("{v:.decimals$}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    let mut noise =
        DetectorNoise::new(42, REFLECTANCE_LEAST_COUNT).context("configuring detector noise")?;

    // Goniometer sweep 30° → 80°, step 2°, finer around the expected minimum.
    let mut angles: Vec<f64> = (15..=40).map(|i| i as f64 * 2.0).collect();
    angles.extend([55.5, 56.0, 56.5, 57.0, 57.5]);
    angles.sort_by(f64::total_cmp);
    angles.dedup();

    let reflectances: Vec<f64> = angles
        .iter()
        .map(|&a| quantise(noise.read(reflectance_p(a, GLASS_INDEX)), REFLECTANCE_LEAST_COUNT))
        .collect();

    println!("{ANGLE_LEAST_COUNT}");
    println!("{REFLECTANCE_LEAST_COUNT}");
    println!("{}", join(&angles, 1));
    println!("{}", join(&reflectances, 3));

    eprintln!(
        "Simulated {} readings for n = {GLASS_INDEX} (Brewster angle {:.2}°)",
        angles.len(),
        GLASS_INDEX.atan().to_degrees()
    );
    Ok(())
}
