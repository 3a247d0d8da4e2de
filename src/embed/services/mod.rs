//! Application services for the embed page.

mod page;

pub use page::{EmbedPageService, EmbedPageServiceError, EmbedPageServiceResult};
