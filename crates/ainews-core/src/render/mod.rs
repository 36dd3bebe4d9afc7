mod html;
mod text;

pub use html::{render_html, write_html_page};
pub use text::{render_text, write_text_report};
