//! Career Catalog — the static, read-only dataset every profile is scored against.
//!
//! Loaded once at startup and shared as `Arc<Catalog>`. Nothing mutates it afterwards.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::career::CareerEntry;

const BUILTIN_CATALOG: &str = include_str!("../../data/careers.json");

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CareerEntry>,
}

impl Catalog {
    /// Parses the catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("Built-in career catalog is malformed")
    }

    /// Loads an operator-supplied catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read career catalog at {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Career catalog at {} is malformed", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: Vec<CareerEntry> = serde_json::from_str(raw)?;
        Self::new(entries)
    }

    pub fn new(entries: Vec<CareerEntry>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.career.trim().is_empty() {
                bail!("Catalog entry {i} has an empty career name");
            }
            if entry.category.trim().is_empty() {
                bail!("Catalog entry '{}' has an empty category", entry.career);
            }
            if entry.min_math > 100 {
                bail!(
                    "Catalog entry '{}' has min_math {} (must be 0-100)",
                    entry.career,
                    entry.min_math
                );
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CareerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(&entry.category);
            }
        }
        seen
    }

    pub fn in_category(&self, category: &str) -> Vec<&CareerEntry> {
        self.entries
            .iter()
            .filter(|e| e.category.eq_ignore_ascii_case(category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ONE_ENTRY: &str = r#"[{
        "career": "Welder",
        "category": "Technical",
        "interests": ["machines"],
        "aptitude": ["mechanical"],
        "personality": [],
        "min_math": 30,
        "education_cost": "low",
        "growth": "medium",
        "rural_friendly": true
    }]"#;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() >= 20);
    }

    #[test]
    fn test_builtin_catalog_covers_scheme_categories() {
        let catalog = Catalog::builtin().unwrap();
        let categories = catalog.categories();
        for required in ["Agriculture", "Government", "Defense", "IT", "Technical"] {
            assert!(
                categories.contains(&required),
                "missing category {required}"
            );
        }
    }

    #[test]
    fn test_categories_are_distinct() {
        let catalog = Catalog::builtin().unwrap();
        let categories = catalog.categories();
        let unique: std::collections::HashSet<&str> = categories.iter().copied().collect();
        assert_eq!(categories.len(), unique.len());
        assert!(categories.len() < catalog.len());
    }

    #[test]
    fn test_in_category_is_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.in_category("agriculture").is_empty());
        assert!(catalog.in_category("Astrology").is_empty());
    }

    #[test]
    fn test_from_path_loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ONE_ENTRY.as_bytes()).unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].career, "Welder");
    }

    #[test]
    fn test_from_path_missing_file_errors() {
        let err = Catalog::from_path(Path::new("/nonexistent/careers.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read career catalog"));
    }

    #[test]
    fn test_rejects_empty_category() {
        let raw = ONE_ENTRY.replace("\"Technical\"", "\"  \"");
        assert!(Catalog::from_json(&raw).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_min_math() {
        let raw = ONE_ENTRY.replace("30", "130");
        assert!(Catalog::from_json(&raw).is_err());
    }

    #[test]
    fn test_rejects_unknown_education_cost() {
        let raw = ONE_ENTRY.replace("\"low\"", "\"free\"");
        assert!(Catalog::from_json(&raw).is_err());
    }
}
