pub mod notice;
pub mod reconciler;

pub use notice::{Notice, NoticeLevel};
pub use reconciler::Reconciler;
