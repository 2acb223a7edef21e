pub mod filter_bar;
pub mod view_toggle;

pub use filter_bar::{FilterBar, MetricsStrip};
pub use view_toggle::{ViewMode, ViewToggle};
