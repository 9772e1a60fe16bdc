// =============================================================================
// flowrank — streaming percentile-rank engine for order-flow imbalance
// =============================================================================
//
// Computes, for every new observation of a live sample stream, the percentile
// rank of the current bid/ask imbalance within a bounded trailing window, and
// maps that rank to an output signal.  Two pipelines share the same skeleton:
//
//   normalize -> sliding window push/evict -> rank -> map
//
// - `PercentileColorEngine`: uniform weighting, three-zone red/gray/green
//   color output.
// - `WeightedLevelEngine`: exponential recency weighting, quantized signed
//   level output in [-4, 4].
//
// Processing is strictly synchronous and single-threaded: one sample in, one
// signal out, no batching, no lookahead.  Data gaps (zero total volume) and
// insufficient history never error — they short-circuit to a defined neutral
// output so a transient gap can never halt the stream.  Each engine owns its
// own window; track independent series with independent engine instances.

pub mod config;
pub mod engine;
pub mod imbalance;
pub mod rank;
pub mod signal;
pub mod window;

pub use config::EngineConfig;
pub use engine::{PercentileColorEngine, WeightedLevelEngine};
pub use imbalance::imbalance;
pub use signal::{color_for_rank, level_for_rank, Color};
pub use window::{ImbalanceWindow, MIN_SAMPLES};
