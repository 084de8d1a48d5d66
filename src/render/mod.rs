//! Result tiling: pagination of sweep results and page rendering.
//!
//! Results are split into fixed-size pages ([`paginate`]); each page is then
//! drawn independently as a 3×4 grid of captioned mask thumbnails
//! ([`render_page`]). Pages never depend on one another, so re-rendering a
//! sweep always yields identical output.

pub mod caption;
pub mod glyphs;
pub mod page;
pub mod paginate;

pub use caption::caption_lines;
pub use page::{
    render_page, render_pages, RenderStyle, MAX_CAPTION_SCALE, MAX_MARGIN, MAX_PANEL_SIZE,
};
pub use paginate::{page_count, paginate, Page, PageLayout, PAGE_SIZE};
