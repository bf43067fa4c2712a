//! Random sample generators for the sort tests and benchmarks.

use rand::Rng;
use rand::distr::Uniform;
use rand_distr::{Distribution, LogNormal, StandardNormal};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SampleDistribution {
    /// Normal with mean 0 and standard deviation 1.
    StdNormal,
    /// Log-normal with mu 0 and sigma 2.
    LogNormal,
    /// Uniform over [-100, 500).
    UniformReal,
}

pub const ALL_DISTRIBUTIONS: [SampleDistribution; 3] = [
    SampleDistribution::StdNormal,
    SampleDistribution::LogNormal,
    SampleDistribution::UniformReal,
];

const LOG_NORMAL_MU: f64 = 0.0;
const LOG_NORMAL_SIGMA: f64 = 2.0;
const UNIFORM_LOW: f64 = -100.0;
const UNIFORM_HIGH: f64 = 500.0;

impl SampleDistribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::StdNormal => "std_normal",
            Self::LogNormal => "log_normal",
            Self::UniformReal => "uniform_real",
        }
    }
}

pub fn generate_f64<R: Rng + ?Sized>(
    dist: SampleDistribution,
    size: usize,
    rng: &mut R,
) -> Vec<f64> {
    match dist {
        SampleDistribution::StdNormal => sample(&StandardNormal, size, rng),
        SampleDistribution::LogNormal => {
            let d = LogNormal::new(LOG_NORMAL_MU, LOG_NORMAL_SIGMA)
                .expect("log-normal parameters are valid");
            sample(&d, size, rng)
        }
        SampleDistribution::UniformReal => {
            let d = Uniform::new(UNIFORM_LOW, UNIFORM_HIGH).expect("uniform bounds are ordered");
            sample(&d, size, rng)
        }
    }
}

/// Same distributions, rounded to single precision.
pub fn generate_f32<R: Rng + ?Sized>(
    dist: SampleDistribution,
    size: usize,
    rng: &mut R,
) -> Vec<f32> {
    generate_f64(dist, size, rng)
        .into_iter()
        .map(|x| x as f32)
        .collect()
}

fn sample<D, R>(dist: &D, size: usize, rng: &mut R) -> Vec<f64>
where
    D: Distribution<f64>,
    R: Rng + ?Sized,
{
    (0..size).map(|_| dist.sample(rng)).collect()
}
