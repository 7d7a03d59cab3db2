use serde::Serialize;

use crate::shared::core::config::PageLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Pages are 1-indexed. Missing or zero values fall back to the defaults and
    /// oversized pages are capped.
    pub fn normalize(page: Option<u64>, page_size: Option<u64>, limits: PageLimits) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(1);
        let page_size = match page_size {
            Some(size) if size >= 1 => size.min(limits.max_page_size),
            _ => limits.default_page_size,
        };
        Self { page, page_size }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub has_next: bool,
}

pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let start = (request.page - 1).saturating_mul(request.page_size);
    let end = start.saturating_add(request.page_size).min(total);
    let items = if start >= total {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(start as usize)
            .take((end - start) as usize)
            .collect()
    };
    Page {
        items,
        total,
        page: request.page,
        page_size: request.page_size,
        has_next: end < total,
    }
}
