//! # Request Extractors
//!
//! Query-parameter types shared by the paged list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use kanban_store::{PageRequest, DEFAULT_PAGE_SIZE};

/// `?page=&size=` pagination parameters, zero-based.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(default)]
pub struct PageParams {
    /// Zero-based page index.
    pub page: u32,
    /// Page size; clamped server-side.
    pub size: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        PageRequest::new(params.page, params.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page, 0);
        assert_eq!(params.size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_conversion_clamps_size() {
        let request: PageRequest = PageParams { page: 2, size: 0 }.into();
        assert_eq!(request.page, 2);
        assert_eq!(request.size, 1);
    }
}
