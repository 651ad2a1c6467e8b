//! Plain-text rendering of view models.

use std::io::{self, Write};

use inkwell_core::domain::Field;
use inkwell_core::editor::{FieldErrors, ValidationError};
use inkwell_shared::{DraftView, PostSummary};

pub fn post_list(out: &mut impl Write, summaries: &[PostSummary]) -> io::Result<()> {
    if summaries.is_empty() {
        return writeln!(out, "No posts yet.");
    }
    for summary in summaries {
        post(out, summary)?;
    }
    Ok(())
}

pub fn post(out: &mut impl Write, summary: &PostSummary) -> io::Result<()> {
    writeln!(out, "[{}] {}", summary.position, summary.title)?;

    let mut meta = format!("    By {}", summary.author);
    if let Some(date) = &summary.date {
        meta.push_str(&format!(" | {date}"));
    }
    meta.push_str(&format!(" | {} min read", summary.read_time_minutes));
    writeln!(out, "{meta}")?;

    writeln!(out, "    {}", summary.body)?;
    if summary.truncated {
        writeln!(out, "    (show {} to read more)", summary.position)?;
    }
    writeln!(out, "    Category: {}", summary.category.label())?;
    if !summary.tags.is_empty() {
        writeln!(out, "    Tags: {}", summary.tags.join(", "))?;
    }
    writeln!(out)
}

pub fn draft(out: &mut impl Write, view: &DraftView) -> io::Result<()> {
    for field in &view.fields {
        let marker = if field.touched { "*" } else { " " };
        writeln!(out, "{marker} {:<9} {}", field.field, field.value)?;
        if let Some(error) = &field.error {
            writeln!(out, "    ! {error}")?;
        }
    }
    Ok(())
}

/// Status line after a field interaction.
pub fn field_status(
    out: &mut impl Write,
    field: Field,
    error: Option<ValidationError>,
) -> io::Result<()> {
    match error {
        Some(error) => writeln!(out, "{field}: {error}"),
        None => writeln!(out, "{field}: ok"),
    }
}

pub fn rejection(out: &mut impl Write, errors: &FieldErrors) -> io::Result<()> {
    writeln!(out, "Cannot publish yet:")?;
    for (field, error) in errors.failures() {
        writeln!(out, "    {field}: {error}")?;
    }
    Ok(())
}
