#[cfg(debug_assertions)]
pub fn get_content_base_url() -> &'static str {
    "http://localhost:3001/content"  // Local content server during development
}

#[cfg(not(debug_assertions))]
pub fn get_content_base_url() -> &'static str {
    "/content"  // Served next to the app in production
}

pub fn get_content_url(file_name: &str) -> String {
    format!("{}/{}", get_content_base_url(), file_name)
}

pub const SITE_NAME: &str = "Futura";

// Quiet period after the last keystroke before the search box filters.
pub const SEARCH_DEBOUNCE_MS: u32 = 150;

pub const HOME_PREVIEW_LIMIT: usize = 3;
pub const RELATED_LIMIT: usize = 3;
