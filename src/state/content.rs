// Content state - what the viewport shows for the current route
use crate::io::PageContent;

#[derive(Clone, Debug, PartialEq)]
pub enum ContentState {
    /// The page needs nothing from the backend
    Static,
    Loading { route: String },
    Loaded { route: String, content: PageContent },
    Failed { route: String, message: String },
}

impl ContentState {
    /// Accepts a worker result only if it answers the request still in flight.
    /// Returns false for late answers to routes the user already left.
    pub fn apply(&mut self, route: String, result: Result<PageContent, String>) -> bool {
        let awaited = matches!(self, ContentState::Loading { route: pending } if *pending == route);
        if !awaited {
            return false;
        }

        *self = match result {
            Ok(content) => ContentState::Loaded { route, content },
            Err(message) => ContentState::Failed { route, message },
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ContentState::Loading { .. })
    }
}
