pub mod code;
pub mod content;
pub mod header;
pub mod markdown;
pub mod sidebar;

pub use code::CodeHighlighter;

/// Navigation requested while rendering, applied once the frame's panels are drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Go(String),
    Back,
    Forward,
    /// Ask the backend again for the current route
    Reload,
}
