pub mod file_utils;
pub mod url_utils;

pub use file_utils::{report_filename, save_html, save_report};
pub use url_utils::{hostname_slug, normalize_url};
