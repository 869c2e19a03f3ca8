//! CSV export of ideal, discovered and missing pages

use crate::crawler::PageRecord;
use crate::ideal::IdealPage;
use crate::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// File name of the ideal sitemap export
pub const IDEAL_SITEMAP_CSV: &str = "ideal_sitemap.csv";

/// File name of the discovered pages export
pub const DISCOVERED_PAGES_CSV: &str = "discovered_pages.csv";

/// File name of the missing pages export
pub const MISSING_PAGES_CSV: &str = "missing_pages.csv";

/// Writes rows as CSV with a header row
///
/// Column order follows the field order of the row type.
pub fn write_csv<W, T>(writer: W, rows: &[T]) -> Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes ideal pages (`label,path,type,priority,reason`) to a file
pub fn write_ideal_csv<'a>(
    path: &Path,
    pages: impl IntoIterator<Item = &'a IdealPage>,
) -> Result<()> {
    let rows: Vec<&IdealPage> = pages.into_iter().collect();
    if rows.is_empty() {
        return write_header_only(path, "label,path,type,priority,reason");
    }
    write_csv(std::fs::File::create(path)?, &rows)
}

/// Writes discovered pages (`url,title`) to a file
pub fn write_pages_csv(path: &Path, pages: &[PageRecord]) -> Result<()> {
    if pages.is_empty() {
        return write_header_only(path, "url,title");
    }
    write_csv(std::fs::File::create(path)?, pages)
}

// csv only emits headers alongside the first serialized record
fn write_header_only(path: &Path, header: &str) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{}", header)?;
    Ok(())
}
