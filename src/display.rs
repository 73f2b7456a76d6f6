use crate::results::PageResult;
use crate::utils::truncate_chars;
use std::io::{self, Write};

/// Characters of the description shown in text output
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Write results as human-readable text
///
/// Fetched pages with a non-empty title are listed in order; URLs that
/// failed are collected in a trailing section.
pub fn write_text<W: Write>(out: &mut W, results: &[PageResult]) -> io::Result<()> {
    for result in results.iter().filter(|r| has_title(r)) {
        writeln!(out)?;
        writeln!(out, "URL: {}", result.url)?;
        writeln!(out, "Title: {}", result.title.as_deref().unwrap_or_default())?;
        writeln!(
            out,
            "Description: {}...",
            truncate_chars(
                result.description.as_deref().unwrap_or_default(),
                DESCRIPTION_PREVIEW_CHARS
            )
        )?;

        if !result.links.is_empty() {
            writeln!(out, "Top Links:")?;
            for (i, link) in result.links.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, link)?;
            }
        }
        writeln!(out, "---")?;
    }

    let failed: Vec<_> = results.iter().filter(|r| !r.is_fetched()).collect();
    if !failed.is_empty() {
        writeln!(out)?;
        writeln!(out, "Failed:")?;
        for result in failed {
            writeln!(out, "  {}", result.url)?;
        }
    }

    Ok(())
}

fn has_title(result: &PageResult) -> bool {
    result.title.as_deref().is_some_and(|title| !title.is_empty())
}

/// Write results as a pretty-printed JSON array
pub fn write_json<W: Write>(out: &mut W, results: &[PageResult]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)
}
