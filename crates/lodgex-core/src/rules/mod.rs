//! Validation rules and store-wide invariants
//!
//! - `validation`: field-level validators shared by model constructors and
//!   setters, so both paths apply exactly the same rules
//! - `invariants`: scans over a whole `Store` that detect referential
//!   integrity violations; used by tests and diagnostics

pub mod invariants;
pub mod validation;
