/// Credits every wallet starts with, before any donation history is summed.
pub const BASE_CREDITS: i32 = 50;

/// Store key holding the serialized donation history.
pub const DONATIONS_STORE_KEY: &str = "donations";

/// Lower bound of the evaluation credit contract (model-side, not enforced).
pub const MIN_EVALUATION_CREDITS: i32 = 10;

/// Upper bound of the evaluation credit contract (model-side, not enforced).
pub const MAX_EVALUATION_CREDITS: i32 = 100;
