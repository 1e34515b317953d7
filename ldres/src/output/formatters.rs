//! Output formatter implementations.

use serde::Serialize;

use crate::path::Path;
use crate::view::{ResolvedEntry, TraceReason};
use crate::{Error, Result};

use super::{OutputFormatter, ResolutionReport};

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Validation {
        field: "json_output".to_string(),
        message: format!("failed to serialize to JSON: {e}"),
    })
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_resolution(&self, report: &ResolutionReport) -> Result<String> {
        to_json(report)
    }

    fn format_entries(&self, entries: &[ResolvedEntry]) -> Result<String> {
        to_json(entries)
    }

    fn format_paths(&self, paths: &[Path]) -> Result<String> {
        to_json(paths)
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_resolution(&self, report: &ResolutionReport) -> Result<String> {
        let mut lines = vec![
            format!("path:      {}", report.query),
            format!(
                "value:     {}",
                report.value.as_deref().unwrap_or("(none)")
            ),
            format!("origin:    {}", report.origin),
        ];

        if report.found_at != report.query {
            lines.push(format!("found at:  {}", report.found_at));
        }
        if let Some(decorated) = &report.decorated {
            if !decorated.same_decoration(&report.query) {
                lines.push(format!("decorated: {decorated}"));
            }
        }
        if let Some(inherited) = &report.inherited_value {
            lines.push(format!("inherited: {inherited}"));
        }

        if let Some(trace) = &report.trace {
            lines.push("trace:".to_string());
            for step in trace {
                let who = step
                    .locale
                    .as_ref()
                    .map_or_else(|| "-".to_string(), ToString::to_string);
                lines.push(format!(
                    "  {:<18} {:<10} {}",
                    reason_label(step.reason),
                    who,
                    step.path
                ));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format_entries(&self, entries: &[ResolvedEntry]) -> Result<String> {
        if entries.is_empty() {
            return Ok("No values.".to_string());
        }

        let lines: Vec<String> = entries
            .iter()
            .map(|entry| {
                let mut line = format!("{} = {}", entry.decorated, entry.value);
                if let Some(comment) = &entry.comment {
                    line.push_str(&format!("  # {comment}"));
                }
                line
            })
            .collect();
        Ok(lines.join("\n"))
    }

    fn format_paths(&self, paths: &[Path]) -> Result<String> {
        if paths.is_empty() {
            return Ok("No paths.".to_string());
        }
        Ok(paths
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

fn reason_label(reason: TraceReason) -> &'static str {
    match reason {
        TraceReason::Value => "value",
        TraceReason::InheritanceMarker => "inheritance-marker",
        TraceReason::Absent => "absent",
        TraceReason::Alias => "alias",
        TraceReason::RemovedAlt => "removed-alt",
        TraceReason::ChangedCount => "changed-count",
        TraceReason::Fallback => "code-fallback",
    }
}
