use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::feed::NewsItem;
use crate::Result;

/// Render the self-contained static page for a sorted item list.
///
/// Pure function of its inputs; an empty list renders a well-formed page
/// shell with zero cards. All interpolated text is escaped.
pub fn render_html(items: &[NewsItem], generated_at: DateTime<Local>) -> String {
    let mut cards = String::new();
    for item in items {
        cards.push_str(&format!(
            concat!(
                "    <div class=\"news-item\">\n",
                "      <h3><a href=\"{link}\" target=\"_blank\" rel=\"noopener\">{title}</a></h3>\n",
                "      <div class=\"meta\">{published}</div>\n",
                "      <p class=\"summary\">{summary}</p>\n",
                "    </div>\n"
            ),
            link = escape_html(&item.link),
            title = escape_html(&item.title),
            published = escape_html(&item.published),
            summary = escape_html(&item.summary),
        ));
    }

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"UTF-8\">\n",
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            "  <title>AI News Digest - {date}</title>\n",
            "  <style>\n",
            "    body {{ max-width: 48rem; margin: 0 auto; padding: 1rem; font-family: sans-serif; }}\n",
            "    .news-item {{ padding: 1rem 0; border-bottom: 1px solid #ddd; }}\n",
            "    .news-item h3 {{ margin: 0 0 0.25rem; }}\n",
            "    .meta {{ color: #666; font-size: 0.85rem; }}\n",
            "    .summary {{ color: #333; line-height: 1.5; }}\n",
            "  </style>\n",
            "</head>\n",
            "<body>\n",
            "  <h1>AI News Digest</h1>\n",
            "  <p class=\"meta\">Updated {updated}</p>\n",
            "{cards}",
            "</body>\n",
            "</html>\n"
        ),
        date = generated_at.format("%Y-%m-%d"),
        updated = generated_at.format("%Y-%m-%d %H:%M"),
        cards = cards,
    )
}

/// Write the page under `output_dir` as `index.html`
pub fn write_html_page(
    items: &[NewsItem],
    output_dir: &Path,
    generated_at: DateTime<Local>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let path = output_dir.join("index.html");
    std::fs::write(&path, render_html(items, generated_at))?;

    Ok(path)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
