use serde::Deserialize;
use std::collections::BTreeMap;

pub type Points = i64;

pub const COMPANY_SIZE: &str = "companySize";
pub const ANNUAL_BUDGET: &str = "annualBudget";
pub const INDUSTRY: &str = "industry";
pub const URGENCY: &str = "urgency";

/// Value→points table for one category. `default` is awarded when the
/// submitted value is not a recognized key; a recognized value mapped to 0
/// still awards 0.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTable {
    #[serde(default)]
    pub values: BTreeMap<String, Points>,
    #[serde(default)]
    pub default: Points,
}

impl CategoryTable {
    pub fn award(&self, value: &str) -> Points {
        self.values.get(value).copied().unwrap_or(self.default)
    }

    /// Shallow merge: mentioned values override or insert, unmentioned values
    /// persist, `default` changes only when the update carries one.
    pub fn merge(&mut self, updates: &CategoryUpdate) {
        for (value, points) in &updates.values {
            self.values.insert(value.clone(), *points);
        }
        if let Some(default) = updates.default {
            self.default = default;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub values: BTreeMap<String, Points>,
    pub default: Option<Points>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CriteriaTable {
    categories: BTreeMap<String, CategoryTable>,
}

impl CriteriaTable {
    pub fn category(&self, name: &str) -> Option<&CategoryTable> {
        self.categories.get(name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut CategoryTable> {
        self.categories.get_mut(name)
    }
}

impl Default for CriteriaTable {
    fn default() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            COMPANY_SIZE.to_string(),
            category(
                &[
                    ("1-50 employees", 10),
                    ("51-200 employees", 20),
                    ("201-1000 employees", 30),
                    ("1000+ employees", 40),
                ],
                0,
            ),
        );
        categories.insert(
            ANNUAL_BUDGET.to_string(),
            category(
                &[
                    ("Less than $10,000", 5),
                    ("$10,000 - $50,000", 15),
                    ("$50,001 - $100,000", 25),
                    ("More than $100,000", 40),
                ],
                0,
            ),
        );
        categories.insert(
            INDUSTRY.to_string(),
            category(
                &[
                    ("Technology", 30),
                    ("Finance", 20),
                    ("Healthcare", 15),
                    ("Retail", 10),
                ],
                5,
            ),
        );
        categories.insert(
            URGENCY.to_string(),
            category(
                &[
                    ("Immediate (within 1 month)", 40),
                    ("Short-term (1-3 months)", 30),
                    ("Medium-term (3-6 months)", 20),
                    ("Long-term (6+ months)", 10),
                ],
                0,
            ),
        );
        Self { categories }
    }
}

fn category(entries: &[(&str, Points)], default: Points) -> CategoryTable {
    CategoryTable {
        values: entries
            .iter()
            .map(|(value, points)| ((*value).to_string(), *points))
            .collect(),
        default,
    }
}
