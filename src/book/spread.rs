use crate::config::Album;

/// One photo placed on a page: which catalog entry it is, where its file is
/// served from, and the caption cycled onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePhoto {
    pub image_index: usize,
    pub src: String,
    pub caption: String,
}

/// Everything one open spread shows. The left slot is filled whenever the
/// page is in range; an empty right slot marks the end of the book when the
/// catalog has an odd number of photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadView {
    pub page: usize,
    pub left: Option<PagePhoto>,
    pub right: Option<PagePhoto>,
}

impl SpreadView {
    /// The right page shows the end-of-book marker instead of a photo.
    pub fn shows_end_marker(&self) -> bool {
        self.right.is_none()
    }
}

fn photo_at(album: &Album, image_index: usize) -> Option<PagePhoto> {
    album.image_src(image_index).map(|src| PagePhoto {
        image_index,
        src,
        caption: album.caption_for(image_index).to_string(),
    })
}

/// Lay out spread `page`: photos `2 * page` on the left and `2 * page + 1`
/// on the right. Pure over its inputs; out-of-range pages produce two empty
/// slots rather than failing.
pub fn spread_for_page(album: &Album, page: usize) -> SpreadView {
    SpreadView {
        page,
        left: photo_at(album, 2 * page),
        right: photo_at(album, 2 * page + 1),
    }
}
