//! Pager math: page counts and the ellipsis-collapsed window of page links
//!
//! The window is only used to render links; it never determines what is
//! fetched.

/// One entry of the rendered pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

/// Largest page count rendered without collapsing
const FULL_WINDOW: u32 = 7;

/// Number of pages needed for `total_items` at `per_page` items per page
pub fn total_pages(total_items: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page links to render for `current` (1-based) out of `total` pages
pub fn window(current: u32, total: u32) -> Vec<PageLink> {
    if total <= FULL_WINDOW {
        return (1..=total).map(PageLink::Page).collect();
    }

    let mut links = Vec::with_capacity(FULL_WINDOW as usize);
    if current < 4 {
        links.extend((1..=5).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total));
    } else if current >= total - 2 {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((total - 4..=total).map(PageLink::Page));
    } else {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((current - 1..=current + 1).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total));
    }
    links
}

/// Current position within a paged result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total: u32,
}

impl Pager {
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            current: current.max(1),
            total,
        }
    }

    pub fn links(&self) -> Vec<PageLink> {
        window(self.current, self.total)
    }

    /// Page to go to from "previous", `None` when already on the first page
    pub fn previous(&self) -> Option<u32> {
        if self.current > 1 {
            Some((self.current - 1).min(self.total.max(1)))
        } else {
            None
        }
    }

    /// Page to go to from "next", `None` when on (or past) the last page
    pub fn next(&self) -> Option<u32> {
        if self.current < self.total {
            Some(self.current + 1)
        } else {
            None
        }
    }
}
