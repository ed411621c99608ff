//! Shared primitive types used across the entire simulation core.

/// Gold, in whole coins. Signed so delta arithmetic stays simple;
/// the ledger itself never goes negative.
pub type Gold = i64;

/// Hearts, the secondary currency.
pub type Hearts = i64;
