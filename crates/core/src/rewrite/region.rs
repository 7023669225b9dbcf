use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::interfaces::Logger;

/// Half-open byte span `[start, end)` strictly between two markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionRegion {
    pub start: usize,
    pub end: usize,
}

impl SubstitutionRegion {
    /// Locate the span after the first `start_marker` and before the first
    /// `end_marker` that follows it.
    pub fn locate(text: &str, start_marker: &str, end_marker: &str) -> Result<Self> {
        let start = text
            .find(start_marker)
            .map(|index| index + start_marker.len())
            .ok_or_else(|| Error::MarkerNotFound {
                marker: start_marker.to_string(),
            })?;

        let end = text[start..]
            .find(end_marker)
            .map(|index| start + index)
            .ok_or_else(|| Error::MarkerNotFound {
                marker: end_marker.to_string(),
            })?;

        Ok(Self { start, end })
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Replace the text between `start_marker` and `end_marker`.
///
/// Both markers and everything outside the region are kept byte for byte.
/// Fails with [`Error::MarkerNotFound`] instead of guessing an offset.
pub fn replace_region(
    text: &str,
    start_marker: &str,
    end_marker: &str,
    replacement: &str,
) -> Result<String> {
    let region = SubstitutionRegion::locate(text, start_marker, end_marker)?;

    let mut result = String::with_capacity(text.len() - region.len() + replacement.len());
    result.push_str(&text[..region.start]);
    result.push_str(replacement);
    result.push_str(&text[region.end..]);
    Ok(result)
}

/// Whole-file read, substitute, write. The file is left untouched when a
/// marker is missing.
pub fn rewrite_file(
    path: &Path,
    start_marker: &str,
    end_marker: &str,
    replacement: &str,
    logger: &dyn Logger,
) -> Result<()> {
    let text = fs::read_to_string(path)?;
    let rewritten = replace_region(&text, start_marker, end_marker, replacement)?;
    fs::write(path, rewritten)?;

    logger.info(
        "namespace rewritten",
        &[
            ("file", path.display().to_string().as_str()),
            ("value", replacement),
        ],
    );
    Ok(())
}
