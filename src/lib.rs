//! Landing Page Core - Content Derivation and Static Export
//!
//! # The Rules
//! 1. Form Input Is Truth
//! 2. Goal Templates Are Contracts
//! 3. Validation Runs Before Derivation
//! 4. Deterministic Output (the copyright year is injected, never read)
//! 5. Exports Are Self-Contained

pub mod form;
pub mod templates;
pub mod content;
pub mod validation;
pub mod config;
pub mod export;
pub mod hashing;
pub mod pipeline;

pub use form::{FormInput, PageGoal};
pub use templates::GoalTemplate;
pub use content::{derive_content, parse_features, DerivedContent};
pub use validation::{ValidationResult, ValidationRule, ValidationViolation, ViolationSeverity};
pub use config::{ConfigError, ExportConfig};
pub use export::{export_document, html_escape};
pub use hashing::{canonical_json, compute_document_hash, compute_job_hash, sha256_hex};
pub use pipeline::{BuilderSession, ExportedPage, PipelineError};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
