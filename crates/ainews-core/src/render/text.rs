use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::feed::NewsItem;
use crate::Result;

const RULE_WIDTH: usize = 60;

/// Render the plain-text report for a sorted item list.
///
/// Pure function of its inputs; an empty list renders the header with no
/// entry blocks.
pub fn render_text(items: &[NewsItem], generated_at: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "AI News Digest ({})\n",
        generated_at.format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    for (idx, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, item.title));
        out.push_str(&format!("   Published: {}\n", item.published));
        out.push_str(&format!("   Link: {}\n", item.link));
        out.push_str(&format!("   Summary: {}\n\n", item.summary));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push_str("\n\n");
    }

    out
}

/// Write the report under `output_dir` as `ai_news_YYYYMMDD.txt`
pub fn write_text_report(
    items: &[NewsItem],
    output_dir: &Path,
    generated_at: DateTime<Local>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let path = output_dir.join(format!("ai_news_{}.txt", generated_at.format("%Y%m%d")));
    std::fs::write(&path, render_text(items, generated_at))?;

    Ok(path)
}
