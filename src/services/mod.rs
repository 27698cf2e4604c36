pub mod codec;
pub mod preview;
pub mod preview_cache;

pub use preview::{PreviewService, PREVIEW_RESOLUTION};
pub use preview_cache::{slot_key, PreviewCache, DEFAULT_CACHE_CAPACITY};
