// Result persistence and console summary

use crate::results::ResultSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Render the result set as the JSON artifact: 2-space indentation,
/// trailing newline.
pub fn render_json(results: &ResultSet) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(results)?;
    json.push('\n');
    Ok(json)
}

/// Write the categorized results to `path`, overwriting any existing file.
pub fn save_results(results: &ResultSet, path: &Path) -> io::Result<()> {
    let content = render_json(results).map_err(io::Error::other)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Read a previously persisted result set back.
pub fn load_results(path: &Path) -> io::Result<ResultSet> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(io::Error::other)
}

/// Per-category count table, one line per non-empty category.
pub fn generate_summary(results: &ResultSet) -> String {
    let mut summary = String::new();
    for (category, count) in results.counts() {
        if count > 0 {
            summary.push_str(&format!(
                "  {:<10}: {} URLs\n",
                category.as_str().to_uppercase(),
                count
            ));
        }
    }
    summary
}
