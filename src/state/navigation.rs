// Navigation tree state - which sections and items are expanded
use crate::registry::{IconRef, Registry};
use std::collections::HashSet;

/// Expand/collapse state for the side navigation.
///
/// Sections are keyed by title and start expanded; items with children are
/// keyed by slug and start collapsed. Toggling a key that is not in the
/// registry still flips it in the set, it just never shows up in the rows.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub expanded_sections: HashSet<String>,
    pub expanded_items: HashSet<String>,
}

/// One visible line of the navigation tree.
#[derive(Clone, Debug, PartialEq)]
pub enum NavRow<'a> {
    Section {
        title: &'a str,
        expanded: bool,
    },
    Item {
        title: &'a str,
        slug: &'a str,
        icon: &'a IconRef,
        href: String,
        active: bool,
        expandable: bool,
        expanded: bool,
    },
    Child {
        title: &'a str,
        icon: &'a IconRef,
        href: String,
        active: bool,
    },
}

impl<'a> NavRow<'a> {
    pub fn is_active(&self) -> bool {
        match self {
            NavRow::Section { .. } => false,
            NavRow::Item { active, .. } | NavRow::Child { active, .. } => *active,
        }
    }
}

impl NavigationState {
    pub fn new(registry: &Registry) -> Self {
        Self {
            expanded_sections: registry
                .sections()
                .iter()
                .map(|s| s.title.clone())
                .collect(),
            expanded_items: HashSet::new(),
        }
    }

    pub fn toggle_section(&mut self, title: &str) {
        if !self.expanded_sections.remove(title) {
            self.expanded_sections.insert(title.to_string());
        }
    }

    pub fn toggle_item(&mut self, slug: &str) {
        if !self.expanded_items.remove(slug) {
            self.expanded_items.insert(slug.to_string());
        }
    }

    pub fn is_section_expanded(&self, title: &str) -> bool {
        self.expanded_sections.contains(title)
    }

    pub fn is_item_expanded(&self, slug: &str) -> bool {
        self.expanded_items.contains(slug)
    }

    /// Visible rows in registry order. An entry is active only when its href
    /// equals `current_route` exactly.
    pub fn rows<'a>(&self, registry: &'a Registry, current_route: &str) -> Vec<NavRow<'a>> {
        let mut rows = Vec::new();

        for section in registry.sections() {
            let expanded = self.is_section_expanded(&section.title);
            rows.push(NavRow::Section {
                title: &section.title,
                expanded,
            });
            if !expanded {
                continue;
            }

            for item in &section.items {
                let href = section.href(&item.slug);
                let item_expanded = self.is_item_expanded(&item.slug);
                rows.push(NavRow::Item {
                    title: &item.title,
                    slug: &item.slug,
                    icon: &item.icon,
                    active: href == current_route,
                    href,
                    expandable: item.has_children(),
                    expanded: item_expanded,
                });

                if item.has_children() && item_expanded {
                    for child in &item.children {
                        let href = section.href(&child.slug);
                        rows.push(NavRow::Child {
                            title: &child.title,
                            icon: &child.icon,
                            active: href == current_route,
                            href,
                        });
                    }
                }
            }
        }

        rows
    }
}
