// crates/context-gauge-core/src/core/params.rs
// ============================================================================
// Module: Context Gauge Model Parameters
// Description: Modeling constants for token, latency, and accuracy models.
// Purpose: Make every modeled constant explicit, overridable, and validated.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! All modeling constants live in [`ModelConfig`], passed explicitly into
//! every model function. There is no global state: a test harness overrides
//! any subset of fields and probes boundary behavior per configuration.
//!
//! Defaults are heuristic, illustrative values carried over from informal
//! benchmarks. They are starting points for what-if analysis, not measured
//! truths.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Token Parameters
// ============================================================================

/// Token-count constants shared by the three strategies.
///
/// # Invariants
/// - Every field is non-negative after [`ModelConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenParams {
    /// Base system-prompt overhead in tokens.
    pub base_prompt: f64,
    /// Average tokens per tool schema definition.
    pub per_tool_schema: f64,
    /// Average tokens per serialized database entity.
    pub per_entity: f64,
    /// Entities preloaded per entity type in the full-context strategy.
    pub entities_per_type: f64,
    /// Number of entity types in the backing schema.
    pub entity_types: f64,
    /// Tokens for the fixed meta-tool set (search, describe, execute).
    pub meta_tools: f64,
    /// Tokens for discovery results per query in the dynamic strategy.
    pub discovery_overhead: f64,
    /// Average number of tool schemas actually loaded per dynamic query.
    pub schemas_loaded_per_query: f64,
    /// Entities fetched per type by a typical exploratory tool query.
    pub sampled_entities_per_type: f64,
    /// Fraction of the sampled payload counted for the static strategy.
    pub static_data_fraction: f64,
    /// Fraction of the sampled payload counted for the dynamic strategy.
    pub dynamic_data_fraction: f64,
}

impl Default for TokenParams {
    fn default() -> Self {
        Self {
            base_prompt: 500.0,
            per_tool_schema: 100.0,
            per_entity: 72.0,
            entities_per_type: 100.0,
            entity_types: 5.0,
            meta_tools: 150.0,
            discovery_overhead: 75.0,
            schemas_loaded_per_query: 2.5,
            sampled_entities_per_type: 10.0,
            static_data_fraction: 0.5,
            dynamic_data_fraction: 0.3,
        }
    }
}

// ============================================================================
// SECTION: Latency Parameters
// ============================================================================

/// Latency constants in milliseconds.
///
/// # Invariants
/// - Every field is non-negative after [`ModelConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyParams {
    /// Base inference time for a single model call.
    pub base_inference_ms: f64,
    /// Additional inference time per 1000 input tokens.
    pub per_1k_tokens_ms: f64,
    /// Round-trip time per tool call.
    pub tool_round_trip_ms: f64,
    /// Average tool calls issued per query in the static strategy.
    pub static_tool_calls: f64,
}

impl Default for LatencyParams {
    fn default() -> Self {
        Self {
            base_inference_ms: 800.0,
            per_1k_tokens_ms: 50.0,
            tool_round_trip_ms: 200.0,
            static_tool_calls: 3.0,
        }
    }
}

// ============================================================================
// SECTION: Accuracy Parameters
// ============================================================================

/// Accuracy-degradation constants.
///
/// # Invariants
/// - Rates and thresholds are non-negative after [`ModelConfig::validate`].
/// - Base accuracies and loss caps lie in `[0, 1]` after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccuracyParams {
    /// Token count above which the lost-in-the-middle penalty applies.
    pub context_token_threshold: f64,
    /// Accuracy loss per token above the context threshold.
    pub context_decay_per_token: f64,
    /// Cap on the lost-in-the-middle penalty.
    pub max_context_loss: f64,
    /// Fixed accuracy loss from irrelevant data diluting the signal.
    pub data_noise_loss: f64,
    /// Base success probability for the static-tools strategy.
    pub static_base: f64,
    /// Tool count above which selection confusion applies.
    pub tool_confusion_threshold: f64,
    /// Accuracy loss per tool above the confusion threshold.
    pub tool_confusion_decay: f64,
    /// Cap on the selection-confusion penalty.
    pub max_tool_confusion_loss: f64,
    /// Base success probability for the dynamic-toolset strategy.
    pub dynamic_base: f64,
    /// Base probability of failing to discover the right tool at all.
    pub discovery_failure_rate: f64,
    /// Compounding per-cycle error probability during discovery.
    pub cycle_error_rate: f64,
    /// Coefficient of the log10 catalog-size discoverability penalty.
    pub tool_scaling_coefficient: f64,
}

impl Default for AccuracyParams {
    fn default() -> Self {
        Self {
            context_token_threshold: 20_000.0,
            context_decay_per_token: 0.000_02,
            max_context_loss: 0.15,
            data_noise_loss: 0.02,
            static_base: 0.98,
            tool_confusion_threshold: 15.0,
            tool_confusion_decay: 0.003,
            max_tool_confusion_loss: 0.20,
            dynamic_base: 0.97,
            discovery_failure_rate: 0.02,
            cycle_error_rate: 0.015,
            tool_scaling_coefficient: 0.01,
        }
    }
}

// ============================================================================
// SECTION: Cycle Bounds
// ============================================================================

/// Discovery-cycle bounds for the dynamic strategy.
///
/// # Invariants
/// - `1 <= min <= avg <= max` after [`ModelConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleBounds {
    /// Best case: a simple query resolved in few cycles.
    pub min: u32,
    /// Average case used for single-value comparisons.
    pub avg: u32,
    /// Worst case: a complex multi-tool query.
    pub max: u32,
}

impl Default for CycleBounds {
    fn default() -> Self {
        Self { min: 2, avg: 3, max: 6 }
    }
}

impl CycleBounds {
    /// Clamps a requested cycle count into the configured range.
    #[must_use]
    pub const fn clamp(&self, cycles: u32) -> u32 {
        if cycles < self.min {
            self.min
        } else if cycles > self.max {
            self.max
        } else {
            cycles
        }
    }
}

// ============================================================================
// SECTION: Model Configuration
// ============================================================================

/// Complete configuration for the trade-off model.
///
/// # Invariants
/// - [`ModelConfig::validate`] must pass before any model evaluation; the
///   runtime enforces this at every entry point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Token-count constants.
    pub tokens: TokenParams,
    /// Latency constants.
    pub latency: LatencyParams,
    /// Accuracy-degradation constants.
    pub accuracy: AccuracyParams,
    /// Discovery-cycle bounds.
    pub cycles: CycleBounds,
}

impl ModelConfig {
    /// Validates every constant against the model invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a rate or threshold is negative or not
    /// finite, a probability lies outside `[0, 1]`, or the cycle bounds are
    /// not ordered as `1 <= min <= avg <= max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("tokens.base_prompt", self.tokens.base_prompt),
            ("tokens.per_tool_schema", self.tokens.per_tool_schema),
            ("tokens.per_entity", self.tokens.per_entity),
            ("tokens.entities_per_type", self.tokens.entities_per_type),
            ("tokens.entity_types", self.tokens.entity_types),
            ("tokens.meta_tools", self.tokens.meta_tools),
            ("tokens.discovery_overhead", self.tokens.discovery_overhead),
            ("tokens.schemas_loaded_per_query", self.tokens.schemas_loaded_per_query),
            ("tokens.sampled_entities_per_type", self.tokens.sampled_entities_per_type),
            ("latency.base_inference_ms", self.latency.base_inference_ms),
            ("latency.per_1k_tokens_ms", self.latency.per_1k_tokens_ms),
            ("latency.tool_round_trip_ms", self.latency.tool_round_trip_ms),
            ("latency.static_tool_calls", self.latency.static_tool_calls),
            ("accuracy.context_token_threshold", self.accuracy.context_token_threshold),
            ("accuracy.context_decay_per_token", self.accuracy.context_decay_per_token),
            ("accuracy.tool_confusion_threshold", self.accuracy.tool_confusion_threshold),
            ("accuracy.tool_confusion_decay", self.accuracy.tool_confusion_decay),
            ("accuracy.tool_scaling_coefficient", self.accuracy.tool_scaling_coefficient),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeConstant { name, value });
            }
        }

        let unit_interval = [
            ("tokens.static_data_fraction", self.tokens.static_data_fraction),
            ("tokens.dynamic_data_fraction", self.tokens.dynamic_data_fraction),
            ("accuracy.max_context_loss", self.accuracy.max_context_loss),
            ("accuracy.data_noise_loss", self.accuracy.data_noise_loss),
            ("accuracy.static_base", self.accuracy.static_base),
            ("accuracy.max_tool_confusion_loss", self.accuracy.max_tool_confusion_loss),
            ("accuracy.dynamic_base", self.accuracy.dynamic_base),
            ("accuracy.discovery_failure_rate", self.accuracy.discovery_failure_rate),
            ("accuracy.cycle_error_rate", self.accuracy.cycle_error_rate),
        ];
        for (name, value) in unit_interval {
            if !value.is_finite() || !(0.0 ..= 1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }

        let bounds = self.cycles;
        if bounds.min == 0 || bounds.min > bounds.avg || bounds.avg > bounds.max {
            return Err(ConfigError::InvalidCycleBounds {
                min: bounds.min,
                avg: bounds.avg,
                max: bounds.max,
            });
        }

        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A rate or threshold constant is negative or not finite.
    #[error("constant must be finite and non-negative: {name} = {value}")]
    NegativeConstant {
        /// Dotted path of the offending field.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A probability or fraction constant lies outside `[0, 1]`.
    #[error("constant must lie in [0, 1]: {name} = {value}")]
    ProbabilityOutOfRange {
        /// Dotted path of the offending field.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Cycle bounds violate `1 <= min <= avg <= max`.
    #[error("cycle bounds must satisfy 1 <= min <= avg <= max: min={min} avg={avg} max={max}")]
    InvalidCycleBounds {
        /// Configured minimum cycle count.
        min: u32,
        /// Configured average cycle count.
        avg: u32,
        /// Configured maximum cycle count.
        max: u32,
    },
}
