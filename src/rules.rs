//! Keyword rules for inferring a posting's category from its title.
//!
//! The mapping is an ordered rule table rather than embedded
//! conditionals so it can be tested and extended on its own, and
//! replaced wholesale from a YAML file when the defaults drift.

use crate::types::Category;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One rule: if any keyword appears in the lowercased title, the
/// rule's category applies.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

const PRODUCT_KEYWORDS: &[&str] = &[
    "product manager",
    "apm",
    "product management",
    "pm intern",
    "product intern",
];

const DATA_KEYWORDS: &[&str] = &[
    "data analyst",
    "analytics",
    "business analyst",
    "data analysis",
];

// " ml" and "ml " are space-padded on purpose: a bare "ml" substring
// would also match inside words like "html".
const ML_KEYWORDS: &[&str] = &[
    "machine learning",
    " ml",
    "ml ",
    " ai",
    "artificial intelligence",
    "deep learning",
    "research scientist",
];

const SWE_KEYWORDS: &[&str] = &[
    "software engineer",
    "swe",
    "backend",
    "front end",
    "frontend",
    "full stack",
    "mobile",
    "android",
    "ios",
];

/// Built-in rule table, checked in order; first match wins.
pub fn default_rules() -> Vec<CategoryRule> {
    vec![
        rule(Category::ProductManagement, PRODUCT_KEYWORDS),
        rule(Category::DataAnalysis, DATA_KEYWORDS),
        rule(Category::MlAi, ML_KEYWORDS),
        rule(Category::Swe, SWE_KEYWORDS),
    ]
}

fn rule(category: Category, keywords: &[&str]) -> CategoryRule {
    CategoryRule {
        category,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Infer a category from a posting title. Rules are evaluated in
/// table order against the lowercased title; `default` applies when
/// nothing matches.
pub fn infer_category(rules: &[CategoryRule], title: &str, default: Category) -> Category {
    let title = title.to_lowercase();
    for rule in rules {
        if rule.keywords.iter().any(|k| title.contains(k.as_str())) {
            return rule.category;
        }
    }
    default
}

#[derive(Debug, Deserialize)]
struct RulesDoc {
    rules: Vec<CategoryRule>,
}

/// Load a replacement rule table from a YAML file of the form
/// `rules: [{category: Swe, keywords: [...]}, ...]`.
pub fn load_rules(path: &Path) -> Result<Vec<CategoryRule>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read category rules from {:?}", path))?;

    let doc: RulesDoc =
        serde_yaml::from_str(&content).with_context(|| "Failed to parse category rules YAML")?;

    Ok(doc.rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_infer_product_management() {
        let rules = default_rules();
        assert_eq!(
            infer_category(&rules, "Product Manager Intern", Category::Unknown),
            Category::ProductManagement
        );
        assert_eq!(
            infer_category(&rules, "APM Program 2026", Category::Unknown),
            Category::ProductManagement
        );
    }

    #[test]
    fn test_infer_data_analysis() {
        let rules = default_rules();
        assert_eq!(
            infer_category(&rules, "Business Analyst Intern", Category::Unknown),
            Category::DataAnalysis
        );
    }

    #[test]
    fn test_infer_ml_ai() {
        let rules = default_rules();
        assert_eq!(
            infer_category(&rules, "Machine Learning Intern", Category::Unknown),
            Category::MlAi
        );
        assert_eq!(
            infer_category(&rules, "Deep Learning Research Intern", Category::Unknown),
            Category::MlAi
        );
    }

    #[test]
    fn test_infer_swe() {
        let rules = default_rules();
        assert_eq!(
            infer_category(&rules, "Backend Engineering Intern", Category::Unknown),
            Category::Swe
        );
    }

    #[test]
    fn test_infer_default_when_no_match() {
        let rules = default_rules();
        assert_eq!(
            infer_category(&rules, "Marketing Intern", Category::Swe),
            Category::Swe
        );
        assert_eq!(
            infer_category(&rules, "Marketing Intern", Category::Unknown),
            Category::Unknown
        );
    }

    #[test]
    fn test_first_match_wins() {
        // "Product Manager, Machine Learning" matches both the PM and
        // ML tables; PM sits earlier so it wins.
        let rules = default_rules();
        assert_eq!(
            infer_category(&rules, "Product Manager, Machine Learning", Category::Unknown),
            Category::ProductManagement
        );
    }

    #[test]
    fn test_load_rules_override() {
        let yaml = r#"
rules:
  - category: MlAi
    keywords: ["quant", "research"]
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(
            infer_category(&rules, "Quant Research Intern", Category::Unknown),
            Category::MlAi
        );
        // Defaults are replaced, not merged.
        assert_eq!(
            infer_category(&rules, "Backend Engineering Intern", Category::Unknown),
            Category::Unknown
        );
    }

    #[test]
    fn test_load_rules_missing_file() {
        assert!(load_rules(Path::new("no/such/rules.yaml")).is_err());
    }
}
