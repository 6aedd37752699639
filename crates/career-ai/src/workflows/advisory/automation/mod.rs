//! Monte Carlo automation-risk estimator.
//!
//! A single base rate (role lookup times industry modifier) is perturbed
//! over N independent noisy trials; the mean of the trials is the point
//! estimate and the 5th/95th percentiles form the confidence interval.
//! The loop is pure and synchronous; callers wanting progress reporting
//! or cancellation wrap it themselves.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::domain::CareerProfile;
use super::scoring::{industry_modifier_table, role_risk_table};

/// Dials for the sampling loop. Defaults reproduce the published
/// estimator behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationRiskConfig {
    /// Number of independent trials per estimate.
    pub trials: usize,
    /// Half-width of the uniform noise added per trial.
    pub noise_amplitude: f64,
    /// Risk reduction per year of experience, applied multiplicatively.
    pub experience_damping: f64,
    /// Per-trial lower clamp.
    pub floor: f64,
    /// Per-trial upper clamp.
    pub ceiling: f64,
    /// Cap on the pre-sampling base risk.
    pub base_risk_cap: f64,
}

impl Default for AutomationRiskConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            noise_amplitude: 0.15,
            experience_damping: 0.05,
            floor: 0.05,
            ceiling: 0.95,
            base_risk_cap: 0.95,
        }
    }
}

/// Result of one estimator run, on the [0,1] scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    pub point_estimate: f64,
    /// 5th and 95th percentile of the sampled trials.
    pub confidence_interval: (f64, f64),
    pub trials: usize,
}

/// Stateless estimator applying the sampling configuration to a profile.
#[derive(Debug, Clone)]
pub struct AutomationRiskEstimator {
    config: AutomationRiskConfig,
}

impl Default for AutomationRiskEstimator {
    fn default() -> Self {
        Self::new(AutomationRiskConfig::default())
    }
}

impl AutomationRiskEstimator {
    pub fn new(config: AutomationRiskConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AutomationRiskConfig {
        &self.config
    }

    /// Deterministic pre-noise base rate: role base times industry
    /// modifier, capped. Unknown roles and industries use the table
    /// fallbacks (0.5 and 1.0).
    pub fn base_risk(&self, profile: &CareerProfile) -> f64 {
        let role = role_risk_table().score_for(&profile.role) as f64;
        let industry = industry_modifier_table().score_for(&profile.industry) as f64;
        (role * industry).clamp(0.0, self.config.base_risk_cap)
    }

    /// Run the sampling loop with the supplied random source. Seeding the
    /// RNG makes the estimate reproducible.
    pub fn estimate<R: Rng>(&self, profile: &CareerProfile, rng: &mut R) -> RiskEstimate {
        let trials = self.config.trials.max(1);
        let amplitude = self.config.noise_amplitude.abs();

        // Experience damps the base rate; the multiplier bottoms out at
        // zero so long careers cannot flip the sign of the pre-noise term.
        let damping = (1.0 - self.config.experience_damping * profile.experience_years as f64)
            .clamp(0.0, 1.0);
        let centered = self.base_risk(profile) * damping;

        let mut samples = Vec::with_capacity(trials);
        for _ in 0..trials {
            let noise = if amplitude > 0.0 {
                rng.gen_range(-amplitude..=amplitude)
            } else {
                0.0
            };
            samples.push((centered + noise).clamp(self.config.floor, self.config.ceiling));
        }

        samples.sort_by(f64::total_cmp);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;

        RiskEstimate {
            point_estimate: mean,
            confidence_interval: (percentile(&samples, 0.05), percentile(&samples, 0.95)),
            trials,
        }
    }
}

/// Nearest-rank percentile over an already-sorted sample.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let last = sorted.len() - 1;
    let index = (p.clamp(0.0, 1.0) * last as f64).round() as usize;
    sorted[index.min(last)]
}
