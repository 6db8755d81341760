pub mod common;
pub mod lazy_view;

pub use common::{ErrorMessage, LoadingText, PageFrame};
pub use lazy_view::LazyView;
