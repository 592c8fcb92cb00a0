// Content registry - the static navigation tree of sections, items and children

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const REFERENCE_REGISTRY: &str = include_str!("../assets/registry.toml");

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read registry {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse registry: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("registry has no sections")]
    Empty,
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("duplicate section title `{0}`")]
    DuplicateSection(String),
    #[error("duplicate base path `{0}`")]
    DuplicateBasePath(String),
    #[error("malformed base path `{0}`")]
    MalformedBasePath(String),
    #[error("slug `{0}` is used more than once")]
    DuplicateSlug(String),
    #[error("malformed slug `{0}`")]
    MalformedSlug(String),
}

/// Symbolic icon name. Not behaviorally significant, only mapped to a glyph when drawn.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn glyph(&self) -> &'static str {
        match self.0.as_str() {
            "table" => "▦",
            "link" => "🔗",
            "layers" => "☰",
            "list" => "≡",
            "git-branch" => "🌳",
            "network" => "🕸",
            "hash" => "#",
            "triangle" => "△",
            "arrow-up-down" => "⇅",
            "search" => "🔍",
            "zap" => "⚡",
            "target" => "🎯",
            "share-2" => "🔀",
            _ => "•",
        }
    }
}

/// Leaf entry under an item. Has no children of its own.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavChild {
    pub title: String,
    pub slug: String,
    pub icon: IconRef,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub title: String,
    pub slug: String,
    pub icon: IconRef,
    #[serde(default)]
    pub children: Vec<NavChild>,
}

impl NavItem {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Which backend collection fills the topic pages of a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Examples,
    Algorithms,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavSection {
    pub title: String,
    pub base_path: String,
    #[serde(default)]
    pub content: Option<ContentSource>,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl NavSection {
    /// Route of the section index page, e.g. `/algorithms`.
    pub fn path(&self) -> String {
        format!("/{}", self.base_path)
    }

    /// Fully-qualified route of an entry in this section.
    pub fn href(&self, slug: &str) -> String {
        format!("/{}/{}", self.base_path, slug)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    sections: Vec<NavSection>,
}

/// A registry entry addressed by a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic {
    pub base_path: String,
    pub slug: String,
    pub title: String,
    pub content: Option<ContentSource>,
}

/// What a route points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Section(usize),
    Topic(Topic),
    NotFound,
}

#[derive(Clone, Debug)]
pub struct Registry {
    sections: Vec<NavSection>,
}

impl Registry {
    /// The registry shipped with the application.
    pub fn reference() -> Result<Self, RegistryError> {
        Self::from_toml_str(REFERENCE_REGISTRY)
    }

    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(contents)?;
        Self::from_sections(file.sections)
    }

    pub fn from_sections(sections: Vec<NavSection>) -> Result<Self, RegistryError> {
        let registry = Self { sections };
        registry.validate()?;
        Ok(registry)
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&NavSection> {
        self.sections.get(index)
    }

    pub fn find_item(&self, base_path: &str, slug: &str) -> Option<&NavItem> {
        self.sections
            .iter()
            .find(|s| s.base_path == base_path)?
            .items
            .iter()
            .find(|item| item.slug == slug)
    }

    /// Exact-match route lookup. `/algorithms/sorting/` is not `/algorithms/sorting`.
    pub fn resolve(&self, path: &str) -> Page {
        if path.is_empty() || path == "/" {
            return Page::Home;
        }

        for (index, section) in self.sections.iter().enumerate() {
            if path == section.path() {
                return Page::Section(index);
            }

            for item in &section.items {
                if path == section.href(&item.slug) {
                    return Page::Topic(Topic {
                        base_path: section.base_path.clone(),
                        slug: item.slug.clone(),
                        title: item.title.clone(),
                        content: section.content,
                    });
                }
                for child in &item.children {
                    if path == section.href(&child.slug) {
                        return Page::Topic(Topic {
                            base_path: section.base_path.clone(),
                            slug: child.slug.clone(),
                            title: child.title.clone(),
                            content: section.content,
                        });
                    }
                }
            }
        }

        Page::NotFound
    }

    // Slugs key the expand state, so they must be unique across every section,
    // not only among siblings.
    fn validate(&self) -> Result<(), RegistryError> {
        if self.sections.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut titles = HashSet::new();
        let mut base_paths = HashSet::new();
        let mut slugs = HashSet::new();

        for section in &self.sections {
            if section.title.trim().is_empty() {
                return Err(RegistryError::EmptyField("section title"));
            }
            if !is_valid_segment(&section.base_path) {
                return Err(RegistryError::MalformedBasePath(section.base_path.clone()));
            }
            if !titles.insert(section.title.as_str()) {
                return Err(RegistryError::DuplicateSection(section.title.clone()));
            }
            if !base_paths.insert(section.base_path.as_str()) {
                return Err(RegistryError::DuplicateBasePath(section.base_path.clone()));
            }

            for item in &section.items {
                check_entry(&item.title, &item.slug, &mut slugs)?;
                for child in &item.children {
                    check_entry(&child.title, &child.slug, &mut slugs)?;
                }
            }
        }

        Ok(())
    }
}

fn check_entry<'a>(
    title: &str,
    slug: &'a str,
    seen: &mut HashSet<&'a str>,
) -> Result<(), RegistryError> {
    if title.trim().is_empty() {
        return Err(RegistryError::EmptyField("entry title"));
    }
    if !slug.split('/').all(is_valid_segment) {
        return Err(RegistryError::MalformedSlug(slug.to_string()));
    }
    if !seen.insert(slug) {
        return Err(RegistryError::DuplicateSlug(slug.to_string()));
    }
    Ok(())
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains('/') && !segment.chars().any(char::is_whitespace)
}
