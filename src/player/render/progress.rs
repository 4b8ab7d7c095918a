//! Progress indicator for the player.

/// Format the 1-indexed progress text.
///
/// # Arguments
/// * `current_index` - 0-indexed current page
/// * `page_count` - Number of pages in the story
///
/// # Returns
/// A string of the form `"{current_index + 1} / {page_count}"`
pub fn format_progress(current_index: usize, page_count: usize) -> String {
    format!("{} / {}", current_index + 1, page_count)
}
