// =============================================================================
// Pipeline Drivers — one engine per output variant
// =============================================================================
//
// Each engine owns its own sliding window and processes exactly one
// observation at a time, synchronously:
//
//   normalize -> push/evict -> rank -> map
//
// A zero-volume observation (data gap) never touches the window and
// short-circuits to the sentinel output; an observation arriving before the
// minimum history has accumulated is pushed but also answered with the
// sentinel.  No streaming operation can fail — only configuration is
// fallible, and only at configuration time.
//
// The engines hold no locks and share no state.  Track multiple series by
// constructing one engine per series; hosts calling from several threads
// must serialize access themselves.
// =============================================================================

use anyhow::Result;
use tracing::debug;

use crate::config::{self, EngineConfig};
use crate::imbalance::imbalance;
use crate::rank;
use crate::signal::{color_for_rank, level_for_rank, Color};
use crate::window::ImbalanceWindow;

// =============================================================================
// PercentileColorEngine — uniform rank, zone-colored output
// =============================================================================

/// Colors each observation by the uniform percentile rank of its imbalance
/// within the trailing window.
#[derive(Debug)]
pub struct PercentileColorEngine {
    window: ImbalanceWindow,
    neutral_zone: f64,
}

impl PercentileColorEngine {
    /// Build an engine from a validated configuration.
    ///
    /// Returns an error when any option is outside its valid range; the
    /// `alpha` field is ignored by this variant but still validated so that
    /// one config file can drive both engines.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            window: ImbalanceWindow::new(config.lookback),
            neutral_zone: config.neutral_zone,
        })
    }

    /// Process one observation and return its color.
    ///
    /// Sentinel cases (both return [`Color::NEUTRAL`]):
    /// - data gap: `bid_volume + ask_volume <= 0` — the window is untouched;
    /// - insufficient history: fewer than the minimum samples — the new
    ///   sample is still recorded so history keeps accumulating.
    pub fn observe(&mut self, bid_volume: f64, ask_volume: f64) -> Color {
        let Some(imb) = imbalance(bid_volume, ask_volume) else {
            debug!(bid_volume, ask_volume, "zero-volume observation, neutral output");
            return Color::NEUTRAL;
        };

        self.window.push(imb);

        if !self.window.has_min_history() {
            debug!(history = self.window.len(), "insufficient history, neutral output");
            return Color::NEUTRAL;
        }

        let Some(rank) = rank::uniform(self.window.contents(), imb) else {
            return Color::NEUTRAL;
        };

        color_for_rank(rank, self.neutral_zone)
    }

    /// Number of samples currently in the window.
    pub fn history_len(&self) -> usize {
        self.window.len()
    }

    /// Change the lookback capacity between observations.  Shrinking below
    /// the current history length evicts the oldest samples immediately.
    pub fn set_lookback(&mut self, lookback: usize) -> Result<()> {
        config::validate_lookback(lookback)?;
        self.window.set_capacity(lookback);
        Ok(())
    }

    /// Change the neutral zone width between observations.
    pub fn set_neutral_zone(&mut self, neutral_zone: f64) -> Result<()> {
        config::validate_neutral_zone(neutral_zone)?;
        self.neutral_zone = neutral_zone;
        Ok(())
    }
}

// =============================================================================
// WeightedLevelEngine — recency-weighted rank, quantized signed output
// =============================================================================

/// Quantizes each observation's recency-weighted percentile rank into a
/// signed level in [-4, 4].
#[derive(Debug)]
pub struct WeightedLevelEngine {
    window: ImbalanceWindow,
    alpha: f64,
}

impl WeightedLevelEngine {
    /// Build an engine from a validated configuration.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            window: ImbalanceWindow::new(config.lookback),
            alpha: config.alpha,
        })
    }

    /// Process one observation and return its level.
    ///
    /// Sentinel cases (both return 0):
    /// - data gap: the window is untouched;
    /// - insufficient history: the new sample is still recorded.
    pub fn observe(&mut self, bid_volume: f64, ask_volume: f64) -> i32 {
        let Some(imb) = imbalance(bid_volume, ask_volume) else {
            debug!(bid_volume, ask_volume, "zero-volume observation, level 0");
            return 0;
        };

        self.window.push(imb);

        if !self.window.has_min_history() {
            debug!(history = self.window.len(), "insufficient history, level 0");
            return 0;
        }

        let Some(rank) = rank::weighted(self.window.contents(), imb, self.alpha) else {
            return 0;
        };

        level_for_rank(rank)
    }

    /// Number of samples currently in the window.
    pub fn history_len(&self) -> usize {
        self.window.len()
    }

    /// Change the lookback capacity between observations.  Shrinking below
    /// the current history length evicts the oldest samples immediately.
    pub fn set_lookback(&mut self, lookback: usize) -> Result<()> {
        config::validate_lookback(lookback)?;
        self.window.set_capacity(lookback);
        Ok(())
    }

    /// Change the recency decay rate between observations.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        config::validate_alpha(alpha)?;
        self.alpha = alpha;
        Ok(())
    }
}
