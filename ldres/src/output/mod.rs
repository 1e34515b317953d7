//! Output formatting for resolution results.
//!
//! This module renders resolution reports, resolved entries and path lists
//! either as human-readable text or as JSON.

mod formatters;

use serde::Serialize;

use crate::locale::LocaleId;
use crate::path::Path;
use crate::view::{Origin, ResolvedEntry, ResolvingView, TraceStep};
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter};

/// Everything known about one resolved path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    /// The locale of the view.
    pub locale: LocaleId,
    /// The identity path that was asked for.
    pub query: Path,
    /// The value that applies, if any.
    pub value: Option<String>,
    /// Where the value came from.
    pub origin: Origin,
    /// The identity path where the value was found.
    pub found_at: Path,
    /// The query carrying the decorative attributes of the value.
    pub decorated: Option<Path>,
    /// The value that would apply without the locale's own entry.
    pub inherited_value: Option<String>,
    /// The steps taken, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceStep>>,
}

impl ResolutionReport {
    /// Resolves `query` in `view` and collects the report.
    ///
    /// # Errors
    ///
    /// Returns any resolution error from the view.
    pub fn build(view: &ResolvingView, query: &Path, with_trace: bool) -> Result<Self> {
        let query = query.identity();
        let location = view.resolve(&query)?;

        Ok(Self {
            locale: view.locale().clone(),
            value: view.value(&query)?,
            origin: location.origin().clone(),
            found_at: location.path().clone(),
            decorated: view.decorated_path(&query)?,
            inherited_value: view.inherited_value(&query)?,
            trace: if with_trace {
                Some(view.trace(&query)?)
            } else {
                None
            },
            query,
        })
    }
}

/// Trait for rendering resolution results.
pub trait OutputFormatter {
    /// Format a single resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_resolution(&self, report: &ResolutionReport) -> Result<String>;

    /// Format resolved entries.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_entries(&self, entries: &[ResolvedEntry]) -> Result<String>;

    /// Format a list of paths.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_paths(&self, paths: &[Path]) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
