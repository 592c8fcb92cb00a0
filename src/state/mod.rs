pub mod content;
pub mod history;
pub mod navigation;
pub mod ui;

pub use content::ContentState;
pub use history::RouteHistory;
pub use navigation::{NavRow, NavigationState};
pub use ui::UIState;
