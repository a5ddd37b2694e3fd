// crates/context-gauge-bench/src/measure.rs
// ============================================================================
// Module: Context Gauge Empirical Measurement
// Description: Token measurements over serialized mock entity payloads.
// Purpose: Compare full-context and tool-call payload sizes empirically.
// Dependencies: serde_json, thiserror, tiktoken-rs
// ============================================================================

//! ## Overview
//! Empirical counterpart to the analytical model: instead of estimating
//! token counts from per-entity constants, these measurements serialize the
//! mock dataset the way each strategy would actually ship it to the model
//! and tokenize the result with `cl100k_base`. The numbers are an
//! independent sanity check and never feed back into the analytical model.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use thiserror::Error;
use tiktoken_rs::CoreBPE;

use crate::dataset::MockDataset;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Empirical measurement errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Loading the tokenizer vocabulary failed.
    #[error("failed to load tokenizer: {message}")]
    Tokenizer {
        /// Underlying loader error description.
        message: String,
    },
    /// Serializing a payload failed.
    #[error("failed to serialize payload")]
    Serialize(#[from] serde_json::Error),
}

// ============================================================================
// SECTION: Token Estimator
// ============================================================================

/// Token counter backed by the `cl100k_base` tokenizer.
pub struct TokenEstimator {
    /// Loaded byte-pair encoder.
    bpe: CoreBPE,
}

impl TokenEstimator {
    /// Loads the `cl100k_base` vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Tokenizer`] when the vocabulary cannot be
    /// loaded.
    pub fn new() -> Result<Self, BenchError> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|error| BenchError::Tokenizer { message: error.to_string() })?;
        Ok(Self { bpe })
    }

    /// Counts tokens in a text.
    #[must_use]
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

impl std::fmt::Debug for TokenEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEstimator").finish_non_exhaustive()
    }
}

// ============================================================================
// SECTION: Sample Records
// ============================================================================

/// Entities shipped to the model, broken down by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    /// Users included in the payload.
    pub users: usize,
    /// Categories included in the payload.
    pub categories: usize,
    /// Products included in the payload.
    pub products: usize,
    /// Orders included in the payload.
    pub orders: usize,
    /// Reviews included in the payload.
    pub reviews: usize,
}

impl EntityCounts {
    /// Total entities across all types.
    #[must_use]
    pub const fn total(self) -> usize {
        self.users + self.categories + self.products + self.orders + self.reviews
    }
}

/// One simulated tool invocation and the size of its response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCallSample {
    /// Invoked tool name.
    pub tool: String,
    /// Response payload size in characters.
    pub chars: usize,
    /// Response payload size in tokens.
    pub tokens: usize,
}

/// One measured strategy: payload sizes, entity counts, and call volume.
///
/// # Invariants
/// - `tool_calls` is empty for the full-context measurement.
/// - `chars` and `tokens` are the sums over all shipped payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmpiricalSample {
    /// Strategy label for display.
    pub approach: &'static str,
    /// Total payload size in characters.
    pub chars: usize,
    /// Total payload size in tokens.
    pub tokens: usize,
    /// Entities shipped, by type.
    pub entities: EntityCounts,
    /// Simulated tool invocations, in call order.
    pub tool_calls: Vec<ToolCallSample>,
    /// Database queries issued to assemble the payloads.
    pub db_queries: usize,
}

impl EmpiricalSample {
    /// Average tokens per shipped entity, or `None` for an empty payload.
    #[must_use]
    pub fn tokens_per_entity(&self) -> Option<f64> {
        let total = self.entities.total();
        if total == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss, reason = "payload sizes are far below 2^52")]
        Some(self.tokens as f64 / total as f64)
    }
}

// ============================================================================
// SECTION: Measurements
// ============================================================================

/// Measures the full-context strategy: the entire dataset serialized as one
/// pretty-printed document, one database query per entity type, no tool
/// calls.
///
/// # Errors
///
/// Returns [`BenchError::Serialize`] when the dataset cannot be serialized.
pub fn measure_full_context(
    estimator: &TokenEstimator,
    dataset: &MockDataset,
) -> Result<EmpiricalSample, BenchError> {
    let payload = serde_json::to_string_pretty(dataset)?;
    Ok(EmpiricalSample {
        approach: "context_loading",
        chars: payload.len(),
        tokens: estimator.count(&payload),
        entities: EntityCounts {
            users: dataset.users.len(),
            categories: dataset.categories.len(),
            products: dataset.products.len(),
            orders: dataset.orders.len(),
            reviews: dataset.reviews.len(),
        },
        tool_calls: Vec::new(),
        db_queries: 5,
    })
}

/// Measures the tool-calling strategy: one list call per entity type, each
/// returning at most `limit` compactly serialized rows.
///
/// # Errors
///
/// Returns [`BenchError::Serialize`] when a payload cannot be serialized.
pub fn measure_tool_calling(
    estimator: &TokenEstimator,
    dataset: &MockDataset,
    limit: usize,
) -> Result<EmpiricalSample, BenchError> {
    let entities = EntityCounts {
        users: dataset.users.len().min(limit),
        categories: dataset.categories.len().min(limit),
        products: dataset.products.len().min(limit),
        orders: dataset.orders.len().min(limit),
        reviews: dataset.reviews.len().min(limit),
    };
    let tool_calls = vec![
        measure_call(estimator, "list_users", &dataset.users, limit)?,
        measure_call(estimator, "list_products", &dataset.products, limit)?,
        measure_call(estimator, "list_categories", &dataset.categories, limit)?,
        measure_call(estimator, "list_orders", &dataset.orders, limit)?,
        measure_call(estimator, "list_reviews", &dataset.reviews, limit)?,
    ];
    let chars = tool_calls.iter().map(|call| call.chars).sum();
    let tokens = tool_calls.iter().map(|call| call.tokens).sum();
    let db_queries = tool_calls.len();
    Ok(EmpiricalSample {
        approach: "tool_calling",
        chars,
        tokens,
        entities,
        tool_calls,
        db_queries,
    })
}

/// Serializes one bounded list response and measures it.
fn measure_call<T: Serialize>(
    estimator: &TokenEstimator,
    tool: &str,
    rows: &[T],
    limit: usize,
) -> Result<ToolCallSample, BenchError> {
    let subset = &rows[..rows.len().min(limit)];
    let payload = serde_json::to_string(subset)?;
    Ok(ToolCallSample {
        tool: tool.to_string(),
        chars: payload.len(),
        tokens: estimator.count(&payload),
    })
}

// ============================================================================
// SECTION: Comparison
// ============================================================================

/// Both measurements side by side with their headline reductions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchComparison {
    /// Full-context measurement.
    pub full_context: EmpiricalSample,
    /// Tool-calling measurement.
    pub tool_calling: EmpiricalSample,
    /// Token reduction of tool calling relative to full context, percent.
    pub token_reduction_pct: Option<f64>,
    /// Entity reduction of tool calling relative to full context, percent.
    pub entity_reduction_pct: Option<f64>,
}

/// Runs both measurements over one dataset.
///
/// # Errors
///
/// Returns [`BenchError`] when serialization fails.
pub fn compare(
    estimator: &TokenEstimator,
    dataset: &MockDataset,
    limit: usize,
) -> Result<BenchComparison, BenchError> {
    let full_context = measure_full_context(estimator, dataset)?;
    let tool_calling = measure_tool_calling(estimator, dataset, limit)?;
    let token_reduction_pct = reduction_pct(full_context.tokens, tool_calling.tokens);
    let entity_reduction_pct =
        reduction_pct(full_context.entities.total(), tool_calling.entities.total());
    Ok(BenchComparison { full_context, tool_calling, token_reduction_pct, entity_reduction_pct })
}

/// Percentage by which `reduced` undercuts `baseline`, or `None` when the
/// baseline is zero.
fn reduction_pct(baseline: usize, reduced: usize) -> Option<f64> {
    if baseline == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss, reason = "payload sizes are far below 2^52")]
    Some((1.0 - reduced as f64 / baseline as f64) * 100.0)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
