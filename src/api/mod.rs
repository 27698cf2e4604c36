pub mod commit;
pub mod params;
pub mod preview;

pub use commit::{handle_commit, CommitRequest, CommitResponse, __path_handle_commit};
pub use params::AdjustmentFields;
pub use preview::{handle_preview, PreviewQuery, PreviewResponse, __path_handle_preview};
