pub mod frame_view;
pub mod popup;
pub mod scrollbar;

pub use frame_view::FrameView;
