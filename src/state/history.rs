// Route history - back/forward over visited routes

pub struct RouteHistory {
    pub current_route: String,
    pub history: Vec<String>,
    pub history_index: usize,
}

impl RouteHistory {
    pub fn new(start_route: impl Into<String>) -> Self {
        let start_route = start_route.into();
        Self {
            current_route: start_route.clone(),
            history: vec![start_route],
            history_index: 0,
        }
    }

    pub fn push(&mut self, route: String) {
        if route == self.current_route {
            return;
        }
        // Remove any forward history when navigating to a new route
        self.history.truncate(self.history_index + 1);
        self.history.push(route.clone());
        self.history_index += 1;
        self.current_route = route;
    }

    pub fn go_back(&mut self) -> Option<String> {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.current_route = self.history[self.history_index].clone();
            Some(self.current_route.clone())
        } else {
            None
        }
    }

    pub fn go_forward(&mut self) -> Option<String> {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.current_route = self.history[self.history_index].clone();
            Some(self.current_route.clone())
        } else {
            None
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_and_forward() {
        let mut history = RouteHistory::new("/");
        history.push("/algorithms".into());
        history.push("/algorithms/greedy".into());

        assert_eq!(history.go_back().as_deref(), Some("/algorithms"));
        assert_eq!(history.go_back().as_deref(), Some("/"));
        assert_eq!(history.go_back(), None);
        assert_eq!(history.current_route, "/");

        assert_eq!(history.go_forward().as_deref(), Some("/algorithms"));
        assert_eq!(history.go_forward().as_deref(), Some("/algorithms/greedy"));
        assert_eq!(history.go_forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_history() {
        let mut history = RouteHistory::new("/");
        history.push("/data-structures".into());
        history.push("/data-structures/heaps".into());
        history.go_back();
        history.push("/data-structures/trees".into());

        assert!(!history.can_go_forward());
        assert_eq!(history.history, vec!["/", "/data-structures", "/data-structures/trees"]);
    }

    #[test]
    fn test_push_same_route_is_ignored() {
        let mut history = RouteHistory::new("/");
        history.push("/".into());
        assert!(!history.can_go_back());
        assert_eq!(history.history.len(), 1);
    }
}
