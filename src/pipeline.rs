//! Builder Pipeline - Explicit State Transitions
//!
//! input updated -> generate (validate, then derive) -> content replaced
//! -> export. `generate` MUST call validate internally. No bypass.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::ExportConfig;
use crate::content::{derive_content, DerivedContent};
use crate::export::export_document;
use crate::form::FormInput;
use crate::hashing::{compute_document_hash, compute_job_hash};
use crate::validation::{ValidationResult, Validator};
use crate::ENGINE_VERSION;

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static VALIDATION_CALL_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_validation_call_count() -> u32 {
    VALIDATION_CALL_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_validation_call_count() {
    VALIDATION_CALL_COUNT.store(0, Ordering::SeqCst);
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("No content to export: generate content first")]
    NoContent,

    #[error("Refusing to write outside the output directory: {0}")]
    UnsafeFilename(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// A finished export, ready for clipboard or download
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedPage {
    pub id: String,
    pub filename: String,
    pub year: i32,
    pub engine_version: String,
    pub created_at: DateTime<Utc>,
    pub document_hash: String,
    pub job_hash: String,
    pub html: String,
}

impl ExportedPage {
    /// Write the document to `dir/filename`, returning the full path
    ///
    /// The filename must be a single path component.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, PipelineError> {
        let name = Path::new(&self.filename);
        if name.file_name() != Some(name.as_os_str()) {
            return Err(PipelineError::UnsafeFilename(self.filename.clone()));
        }

        let path = dir.join(name);
        fs::write(&path, &self.html).map_err(|source| PipelineError::Write {
            path: path.clone(),
            source,
        })?;
        info!("wrote {} ({} bytes)", path.display(), self.html.len());
        Ok(path)
    }
}

/// Form state plus the most recent generation.
pub struct BuilderSession {
    input: FormInput,
    content: Option<DerivedContent>,
    stale: bool,
    validator: Validator,
    config: ExportConfig,
}

impl BuilderSession {
    pub fn new(config: ExportConfig) -> Self {
        Self::with_input(FormInput::default(), config)
    }

    pub fn with_input(input: FormInput, config: ExportConfig) -> Self {
        Self {
            input,
            content: None,
            stale: false,
            validator: Validator::new(),
            config,
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn content(&self) -> Option<&DerivedContent> {
        self.content.as_ref()
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// True when the input changed after the last generation
    pub fn is_stale(&self) -> bool {
        self.content.is_some() && self.stale
    }

    /// Replace the form input. Existing content is kept but marked stale.
    pub fn update_input(&mut self, input: FormInput) {
        if input != self.input {
            self.stale = true;
        }
        self.input = input;
    }

    /// Validate the current input
    ///
    /// This is the ONLY validation entry point.
    pub fn validate(&self) -> ValidationResult {
        #[cfg(feature = "test-hooks")]
        VALIDATION_CALL_COUNT.fetch_add(1, Ordering::SeqCst);

        let result = self.validator.validate(&self.input);
        for v in result.warnings() {
            warn!("{} ({}): {}", v.rule, v.field, v.message);
        }
        result
    }

    /// Derive fresh content, replacing any previous generation
    ///
    /// CRITICAL: This ALWAYS calls validate internally. No bypass possible.
    pub fn generate(&mut self) -> Result<&DerivedContent, PipelineError> {
        let validation = self.validate();

        if validation.has_errors() {
            let messages: Vec<_> = validation.errors()
                .map(|v| format!("{}: {}", v.rule, v.message))
                .collect();
            return Err(PipelineError::ValidationFailed(messages.join("; ")));
        }

        debug!("generating content for '{}'", self.input.product_name);
        self.stale = false;
        Ok(self.content.insert(derive_content(&self.input)))
    }

    /// Export the current input with the last generated content
    pub fn export(&self, year: i32) -> Result<ExportedPage, PipelineError> {
        let content = self.content.as_ref().ok_or(PipelineError::NoContent)?;

        let html = export_document(&self.input, content, year, &self.config);
        let document_hash = compute_document_hash(&html);
        let job_hash = compute_job_hash(&self.input, content, year, ENGINE_VERSION)?;

        let page = ExportedPage {
            id: Uuid::new_v4().to_string(),
            filename: self.input.download_filename(),
            year,
            engine_version: ENGINE_VERSION.to_string(),
            created_at: Utc::now(),
            document_hash,
            job_hash,
            html,
        };

        info!("exported {} ({})", page.filename, page.document_hash);
        Ok(page)
    }

    /// Export using the current UTC year for the footer
    pub fn export_now(&self) -> Result<ExportedPage, PipelineError> {
        self.export(Utc::now().year())
    }
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::new(ExportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::PageGoal;

    fn filled() -> FormInput {
        FormInput {
            product_name: "FitTrack Pro".to_string(),
            target_audience: "busy professionals".to_string(),
            key_features: "tracks steps, monitors sleep".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_update_marks_content_stale() {
        let mut session = BuilderSession::with_input(filled(), ExportConfig::default());
        assert!(!session.is_stale());

        session.generate().unwrap();
        assert!(!session.is_stale());

        let mut changed = filled();
        changed.page_goal = PageGoal::Booking;
        session.update_input(changed);
        assert!(session.is_stale());
        assert_eq!(session.content().unwrap().cta_text, "Buy Now");

        session.generate().unwrap();
        assert!(!session.is_stale());
        assert_eq!(session.content().unwrap().cta_text, "Book Now");
    }

    #[test]
    fn test_same_input_is_not_stale() {
        let mut session = BuilderSession::with_input(filled(), ExportConfig::default());
        session.generate().unwrap();
        session.update_input(filled());
        assert!(!session.is_stale());
    }

    #[test]
    fn test_failed_generation_keeps_previous_content() {
        let mut session = BuilderSession::with_input(filled(), ExportConfig::default());
        session.generate().unwrap();

        session.update_input(FormInput::default());
        assert!(session.generate().is_err());
        assert!(session.content().is_some());
    }

    #[test]
    fn test_write_rejects_multi_component_filename() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = BuilderSession::with_input(filled(), ExportConfig::default());
        session.generate().unwrap();

        for filename in ["../escape.html", "nested/page.html", "/abs.html", ".."] {
            let mut page = session.export(2025).unwrap();
            page.filename = filename.to_string();
            assert!(
                matches!(page.write_to(dir.path()), Err(PipelineError::UnsafeFilename(_))),
                "filename: {}",
                filename
            );
        }
    }

    #[test]
    fn test_export_now_uses_current_year() {
        let mut session = BuilderSession::with_input(filled(), ExportConfig::default());
        session.generate().unwrap();
        let page = session.export_now().unwrap();
        assert_eq!(page.year, page.created_at.year());
        assert!(page.html.contains(&format!("&copy; {} FitTrack Pro", page.year)));
    }
}
