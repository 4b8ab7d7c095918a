//! Page view construction for the player overlay.

use crate::document::PlayerView;
use crate::model::StoryDetail;
use crate::player::render::format_progress;

/// Build the view of page `index` of `story`.
///
/// Returns `None` if `index` is out of range.
pub fn build_player_view(story: &StoryDetail, index: usize) -> Option<PlayerView> {
    let page = story.pages.get(index)?;
    let page_count = story.page_count();

    Some(PlayerView {
        story_id: story.id,
        title: story.title.clone(),
        page_kind: page.kind.clone(),
        media_url: page.media_url.clone(),
        caption: page.caption.clone().filter(|caption| !caption.is_empty()),
        progress: format_progress(index, page_count),
        show_previous: index > 0,
        show_next: index + 1 < page_count,
    })
}
