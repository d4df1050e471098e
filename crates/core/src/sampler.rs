//! Rejection sampling of in-gamut sRGB colors.
//!
//! Random LAB points are drawn from the configured box, pushed through
//! `Lab -> Xyz -> LinearRgb`, and kept only if the linear color is inside
//! the sRGB gamut. Accepted colors are gamma encoded and collected in the
//! order they were found.

use crate::color::{lab_to_xyz, linear_to_srgb, xyz_to_linear, Lab, LinearRgb, Srgb};
use crate::config::SearchConfig;
use crate::error::SamplerError;
use crate::gamut::is_in_gamut;
use crate::prng::UniformSource;
use serde::{Deserialize, Serialize};

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Accepted colors in discovery order.
    pub colors: Vec<Srgb>,
    /// Total cycles run, accepted or not. Always `>= colors.len()`.
    pub attempts: u64,
}

impl SearchOutcome {
    /// Fraction of attempts that were accepted.
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.colors.len() as f64 / self.attempts as f64
        }
    }
}

/// Drives a random source through the conversion pipeline until enough
/// in-gamut colors are found.
#[derive(Debug)]
pub struct RejectionSampler<R> {
    config: SearchConfig,
    rng: R,
}

impl<R: UniformSource> RejectionSampler<R> {
    /// Creates a sampler. Returns `InvalidConfiguration` if `config` fails
    /// [`SearchConfig::validate`].
    pub fn new(config: SearchConfig, rng: R) -> Result<Self, SamplerError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Gives back the random source, e.g. to continue its stream elsewhere.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Draws L*, then a*, then b*.
    fn draw_lab(&mut self) -> Lab {
        let SearchConfig {
            lightness, chroma, ..
        } = self.config;
        Lab {
            l: self.rng.uniform(lightness.min, lightness.max),
            a: self.rng.uniform(chroma.min, chroma.max),
            b: self.rng.uniform(chroma.min, chroma.max),
        }
    }

    /// One sampling cycle: returns the linear color if it is in gamut.
    fn trial(&mut self) -> Option<LinearRgb> {
        let lab = self.draw_lab();
        let linear = xyz_to_linear(lab_to_xyz(lab));
        is_in_gamut(linear).then_some(linear)
    }

    /// Runs one search.
    ///
    /// Every cycle counts as an attempt. With a cap set, the search fails
    /// with `BoundedSearchExhausted` once the cap is spent; no partial
    /// result is returned.
    pub fn run(&mut self) -> Result<SearchOutcome, SamplerError> {
        let requested = self.config.count;
        let cap = self.config.max_attempts;
        let mut colors = Vec::with_capacity(requested);
        let mut attempts: u64 = 0;

        while colors.len() < requested {
            if cap.is_some_and(|cap| attempts >= cap) {
                log::warn!(
                    "attempt cap of {attempts} reached with {} of {requested} colors",
                    colors.len()
                );
                return Err(SamplerError::BoundedSearchExhausted {
                    attempts,
                    found: colors.len(),
                    requested,
                });
            }
            attempts += 1;

            if let Some(linear) = self.trial() {
                let srgb = linear_to_srgb(linear);
                colors.push(srgb);
                log::debug!(
                    "color {} found at attempt {attempts}: {:?}",
                    colors.len(),
                    srgb.to_rgb8()
                );
            }
        }

        let outcome = SearchOutcome { colors, attempts };
        log::info!(
            "found {requested} colors in {attempts} attempts ({:.1}% accepted)",
            outcome.acceptance_rate() * 100.0
        );
        Ok(outcome)
    }
}

/// Validates `config` and runs one search with `rng`.
pub fn find_in_gamut_colors<R: UniformSource>(
    config: SearchConfig,
    rng: R,
) -> Result<SearchOutcome, SamplerError> {
    RejectionSampler::new(config, rng)?.run()
}
