// Records returned by the content backend

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    DataStructure,
    Algorithm,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: CategoryType,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub category_id: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub time_complexity: Option<String>,
    #[serde(default)]
    pub space_complexity: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub code_example: Option<String>,
    #[serde(default)]
    pub visualization_data: Option<String>,
    #[serde(default)]
    pub use_cases: Option<String>,
    #[serde(default)]
    pub pros: Option<String>,
    #[serde(default)]
    pub cons: Option<String>,
}

impl Example {
    pub fn use_case_list(&self) -> Vec<String> {
        string_list(self.use_cases.as_deref())
    }

    pub fn pro_list(&self) -> Vec<String> {
        string_list(self.pros.as_deref())
    }

    pub fn con_list(&self) -> Vec<String> {
        string_list(self.cons.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Algorithm {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub pseudocode: Option<String>,
    #[serde(default)]
    pub python_code: Option<String>,
    #[serde(default)]
    pub javascript_code: Option<String>,
    #[serde(default)]
    pub time_complexity_best: Option<String>,
    #[serde(default)]
    pub time_complexity_average: Option<String>,
    #[serde(default)]
    pub time_complexity_worst: Option<String>,
    #[serde(default)]
    pub space_complexity: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub use_cases: Option<String>,
    #[serde(default)]
    pub visualization_data: Option<String>,
}

impl Algorithm {
    pub fn use_case_list(&self) -> Vec<String> {
        string_list(self.use_cases.as_deref())
    }
}

// List fields are stored by the backend as JSON-encoded string arrays.
// Anything that is not one is treated as an empty list.
fn string_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|text| serde_json::from_str::<Vec<String>>(text).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_category() {
        let json = r#"{
            "id": 1, "name": "Arrays", "slug": "arrays",
            "description": "Linear data structure", "type": "data_structure",
            "icon": "table", "order": 1
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.kind, CategoryType::DataStructure);
        assert_eq!(category.icon.as_deref(), Some("table"));
    }

    #[test]
    fn test_decode_example_with_list_fields() {
        let json = r#"{
            "id": 1, "title": "Dynamic Array (List)", "slug": "dynamic-array",
            "category_id": 1, "difficulty": "beginner",
            "time_complexity": "O(1) average for append",
            "pros": "[\"Fast random access O(1)\", \"Cache-friendly\"]",
            "cons": "not json",
            "use_cases": null
        }"#;
        let example: Example = serde_json::from_str(json).unwrap();
        assert_eq!(example.pro_list(), vec!["Fast random access O(1)", "Cache-friendly"]);
        assert!(example.con_list().is_empty());
        assert!(example.use_case_list().is_empty());
        assert_eq!(example.difficulty, Difficulty::Beginner);
    }

    #[test]
    fn test_decode_algorithm_defaults() {
        let json = r#"{"id": 7, "name": "Quick Sort", "slug": "quick-sort", "category": "sorting"}"#;
        let algorithm: Algorithm = serde_json::from_str(json).unwrap();
        assert_eq!(algorithm.difficulty, Difficulty::Beginner);
        assert!(algorithm.python_code.is_none());
        assert_eq!(Difficulty::Intermediate.label(), "Intermediate");
    }

    #[test]
    fn test_unknown_category_type_is_rejected() {
        let json = r#"{"id": 1, "name": "X", "slug": "x", "type": "widget"}"#;
        assert!(serde_json::from_str::<Category>(json).is_err());
    }
}
