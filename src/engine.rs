use crate::criteria::{CategoryUpdate, CriteriaTable, Points};
use crate::error::{Result, ScoreError, ScoreFault};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One lead record: category name → submitted value.
pub type LeadInput = BTreeMap<String, String>;

pub const HOT_THRESHOLD: Points = 120;
pub const WARM_THRESHOLD: Points = 80;
pub const COOL_THRESHOLD: Points = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Hot,
    Warm,
    Cool,
    Cold,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Hot => "Hot",
            Classification::Warm => "Warm",
            Classification::Cool => "Cool",
            Classification::Cold => "Cold",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threshold tiers, first match wins.
pub fn classify_lead(total_score: Points) -> Classification {
    if total_score >= HOT_THRESHOLD {
        return Classification::Hot;
    }
    if total_score >= WARM_THRESHOLD {
        return Classification::Warm;
    }
    if total_score >= COOL_THRESHOLD {
        return Classification::Cool;
    }
    Classification::Cold
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub lead_score: Points,
    pub breakdown: BTreeMap<String, Points>,
    pub classification: Classification,
}

/// Evaluates lead records against a criteria table owned by this instance.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    criteria: CriteriaTable,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self {
            criteria: CriteriaTable::default(),
        }
    }

    pub fn with_criteria(criteria: CriteriaTable) -> Self {
        Self { criteria }
    }

    /// Scores one lead: sums the awarded points per category, recomputes the
    /// breakdown, classifies the total. Unknown categories contribute 0 and
    /// are warned about; they never fail the call.
    pub fn calculate_score(&self, lead: &LeadInput) -> Result<ScoreResult> {
        let lead_score = match self.sum_points(lead) {
            Ok(total) => total,
            Err(fault) => {
                tracing::error!("error calculating lead score: {fault}");
                return Err(ScoreError::ScoringFailure(fault));
            }
        };

        Ok(ScoreResult {
            lead_score,
            breakdown: self.score_breakdown(lead),
            classification: classify_lead(lead_score),
        })
    }

    fn sum_points(&self, lead: &LeadInput) -> std::result::Result<Points, ScoreFault> {
        let mut total: Points = 0;
        for (category, value) in lead {
            match self.criteria.category(category) {
                Some(table) => {
                    total = total.checked_add(table.award(value)).ok_or_else(|| {
                        ScoreFault::TotalOverflow {
                            category: category.clone(),
                        }
                    })?;
                }
                None => tracing::warn!("unknown category: {category}"),
            }
        }
        Ok(total)
    }

    /// Per-category awarded points, recomputed independently of the summation
    /// pass. Unknown categories are skipped without a warning here.
    pub fn score_breakdown(&self, lead: &LeadInput) -> BTreeMap<String, Points> {
        lead.iter()
            .filter_map(|(category, value)| {
                self.criteria
                    .category(category)
                    .map(|table| (category.clone(), table.award(value)))
            })
            .collect()
    }

    /// Merges `updates` into an existing category's table. Refuses unknown
    /// categories without touching the criteria.
    #[allow(dead_code)]
    pub fn update_criteria(&mut self, category: &str, updates: &CategoryUpdate) -> Result<()> {
        match self.criteria.category_mut(category) {
            Some(table) => {
                table.merge(updates);
                Ok(())
            }
            None => Err(ScoreError::InvalidCategory(category.to_string())),
        }
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}
