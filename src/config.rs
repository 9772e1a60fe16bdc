// =============================================================================
// Engine Configuration — validated tunables with JSON load/save
// =============================================================================
//
// Every tunable parameter of the two pipelines lives here.  Options may be
// changed between observations; out-of-range values are rejected at
// configuration time so the streaming path never has to guard against them.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.  All fields carry `#[serde(default)]` so that adding new fields
// never breaks loading an older config file.
// =============================================================================

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Valid ranges
// =============================================================================

/// Smallest allowed lookback capacity.
pub const LOOKBACK_MIN: usize = 50;
/// Largest allowed lookback capacity.
pub const LOOKBACK_MAX: usize = 10_000;
/// Smallest allowed neutral zone width.
pub const NEUTRAL_ZONE_MIN: f64 = 0.0;
/// Largest allowed neutral zone width.
pub const NEUTRAL_ZONE_MAX: f64 = 0.5;
/// Smallest allowed recency decay rate.
pub const ALPHA_MIN: f64 = 0.001;
/// Largest allowed recency decay rate.
pub const ALPHA_MAX: f64 = 0.5;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_lookback() -> usize {
    2000
}

fn default_neutral_zone() -> f64 {
    0.0
}

fn default_alpha() -> f64 {
    0.05
}

// =============================================================================
// EngineConfig
// =============================================================================

/// Tunable parameters for the percentile-rank pipelines.
///
/// Every field has a serde default so that older JSON files missing new
/// fields will still deserialise correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of imbalance samples retained in the sliding window.
    #[serde(default = "default_lookback")]
    pub lookback: usize,

    /// Width of the no-signal band centred at rank 0.5 (coloring variant
    /// only).  0.0 disables the band apart from the exact midpoint.
    #[serde(default = "default_neutral_zone")]
    pub neutral_zone: f64,

    /// Exponential decay rate for recency weighting (weighted variant only).
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lookback: default_lookback(),
            neutral_zone: default_neutral_zone(),
            alpha: default_alpha(),
        }
    }
}

impl EngineConfig {
    /// Check every option against its valid range.
    ///
    /// Called by the engine constructors and runtime setters; the streaming
    /// path itself never re-validates.
    pub fn validate(&self) -> Result<()> {
        validate_lookback(self.lookback)?;
        validate_neutral_zone(self.neutral_zone)?;
        validate_alpha(self.alpha)?;
        Ok(())
    }

    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.  The loaded values are validated
    /// before being returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read engine config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse engine config from {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("invalid engine config in {}", path.display()))?;

        info!(
            path = %path.display(),
            lookback = config.lookback,
            neutral_zone = config.neutral_zone,
            alpha = config.alpha,
            "engine config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    ///
    /// This prevents corruption if the process crashes mid-write.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise engine config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "engine config saved (atomic)");
        Ok(())
    }
}

// =============================================================================
// Per-option validators (shared with the engines' runtime setters)
// =============================================================================

/// Validate a lookback capacity against [`LOOKBACK_MIN`]..=[`LOOKBACK_MAX`].
pub fn validate_lookback(lookback: usize) -> Result<()> {
    if !(LOOKBACK_MIN..=LOOKBACK_MAX).contains(&lookback) {
        bail!("lookback {lookback} outside valid range {LOOKBACK_MIN}..={LOOKBACK_MAX}");
    }
    Ok(())
}

/// Validate a neutral zone width against
/// [`NEUTRAL_ZONE_MIN`]..=[`NEUTRAL_ZONE_MAX`].
pub fn validate_neutral_zone(neutral_zone: f64) -> Result<()> {
    if !neutral_zone.is_finite()
        || !(NEUTRAL_ZONE_MIN..=NEUTRAL_ZONE_MAX).contains(&neutral_zone)
    {
        bail!(
            "neutral zone {neutral_zone} outside valid range \
             {NEUTRAL_ZONE_MIN}..={NEUTRAL_ZONE_MAX}"
        );
    }
    Ok(())
}

/// Validate a recency decay rate against [`ALPHA_MIN`]..=[`ALPHA_MAX`].
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if !alpha.is_finite() || !(ALPHA_MIN..=ALPHA_MAX).contains(&alpha) {
        bail!("alpha {alpha} outside valid range {ALPHA_MIN}..={ALPHA_MAX}");
    }
    Ok(())
}
