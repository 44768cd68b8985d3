//! Gaussian kernel density estimation.
//!
//! The smoothing bandwidth is not chosen adaptively: it is a fixed factor of
//! the sample standard deviation, passed explicitly by the caller.

use statrs::distribution::{Continuous, Normal};
use statrs::statistics::Statistics;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KdeError {
    #[error("Density estimation requires at least 2 observations, got {0}")]
    TooFewObservations(usize),
    #[error("Bandwidth factor must be a positive finite number, got {0}")]
    InvalidFactor(f64),
    #[error(
        "Degenerate input: sample standard deviation must be positive and finite, got {0}"
    )]
    DegenerateBandwidth(f64),
}

/// Gaussian kernel density estimate over a one-dimensional sample.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    observations: Vec<f64>,
    kernel: Normal,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fit an estimator with `bandwidth = bandwidth_factor * sample std dev`.
    ///
    /// Fails on fewer than two observations, a non-positive factor, or data
    /// whose standard deviation is zero or not finite (identical values, NaN).
    pub fn fit(values: &[f64], bandwidth_factor: f64) -> Result<Self, KdeError> {
        if !bandwidth_factor.is_finite() || bandwidth_factor <= 0.0 {
            return Err(KdeError::InvalidFactor(bandwidth_factor));
        }
        if values.len() < 2 {
            return Err(KdeError::TooFewObservations(values.len()));
        }

        let std_dev = values.std_dev();
        let bandwidth = bandwidth_factor * std_dev;
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(KdeError::DegenerateBandwidth(std_dev));
        }

        let kernel =
            Normal::new(0.0, bandwidth).map_err(|_| KdeError::DegenerateBandwidth(std_dev))?;

        Ok(Self {
            observations: values.to_vec(),
            kernel,
            bandwidth,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Estimated density at `x`: the mean of the kernel pdf centered at each
    /// observation.
    pub fn density(&self, x: f64) -> f64 {
        let sum: f64 = self
            .observations
            .iter()
            .map(|&obs| self.kernel.pdf(x - obs))
            .sum();
        sum / self.observations.len() as f64
    }

    /// Evaluate the density on `points` evenly spaced values across
    /// `[start, stop]`, both endpoints included.
    pub fn sample(&self, start: f64, stop: f64, points: usize) -> Vec<(f64, f64)> {
        match points {
            0 => Vec::new(),
            1 => vec![(start, self.density(start))],
            _ => {
                let step = (stop - start) / (points - 1) as f64;
                (0..points)
                    .map(|i| {
                        let x = start + step * i as f64;
                        (x, self.density(x))
                    })
                    .collect()
            }
        }
    }
}
