use crate::criteria::{ANNUAL_BUDGET, COMPANY_SIZE, INDUSTRY, Points, URGENCY};
use crate::engine::{Classification, LeadInput, ScoreEngine};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One lead record as the Zapier integration posts it. Fields it does not
/// send stay `None` and are not submitted as categories.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZapierLead {
    pub company_size: Option<String>,
    pub annual_budget: Option<String>,
    pub industry: Option<String>,
    pub urgency: Option<String>,
}

/// Boundary shape returned to the integration, exact key names.
#[derive(Debug, Clone, Serialize)]
pub struct ZapierScoreResult {
    pub lead_score: Points,
    pub score_breakdown: BTreeMap<String, Points>,
    pub classification: Classification,
}

/// Maps the integration's field names onto internal categories, scores the
/// lead against a fresh engine with default criteria, and reshapes the result.
pub fn process_zapier_lead(input: &ZapierLead) -> Result<ZapierScoreResult> {
    let engine = ScoreEngine::new();

    let mut lead = LeadInput::new();
    submit(&mut lead, COMPANY_SIZE, &input.company_size);
    submit(&mut lead, ANNUAL_BUDGET, &input.annual_budget);
    submit(&mut lead, INDUSTRY, &input.industry);
    submit(&mut lead, URGENCY, &input.urgency);

    let result = engine.calculate_score(&lead)?;
    Ok(ZapierScoreResult {
        lead_score: result.lead_score,
        score_breakdown: result.breakdown,
        classification: result.classification,
    })
}

fn submit(lead: &mut LeadInput, category: &str, value: &Option<String>) {
    if let Some(value) = value {
        lead.insert(category.to_string(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zapier_fields_map_to_internal_categories() {
        let input: ZapierLead = serde_json::from_str(
            r#"{
                "company_size": "1000+ employees",
                "annual_budget": "More than $100,000",
                "industry": "Technology",
                "urgency": "Immediate (within 1 month)"
            }"#,
        )
        .expect("zapier record should parse");

        let result = process_zapier_lead(&input).expect("zapier lead should score");
        assert_eq!(result.lead_score, 150);
        assert_eq!(result.classification, Classification::Hot);
        assert_eq!(result.score_breakdown["companySize"], 40);
        assert_eq!(result.score_breakdown["annualBudget"], 40);
        assert_eq!(result.score_breakdown["industry"], 30);
        assert_eq!(result.score_breakdown["urgency"], 40);
    }

    #[test]
    fn absent_fields_are_not_submitted_as_categories() {
        let input: ZapierLead = serde_json::from_str(r#"{ "industry": "Healthcare" }"#)
            .expect("zapier record should parse");

        let result = process_zapier_lead(&input).expect("zapier lead should score");
        assert_eq!(result.lead_score, 15);
        assert_eq!(result.score_breakdown.len(), 1);
        assert!(!result.score_breakdown.contains_key("companySize"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let input: ZapierLead =
            serde_json::from_str(r#"{ "industry": "Retail", "zap_id": "12345" }"#)
                .expect("zapier record should parse");
        let result = process_zapier_lead(&input).expect("zapier lead should score");
        assert_eq!(result.lead_score, 10);
    }

    #[test]
    fn result_serializes_with_boundary_key_names() {
        let input = ZapierLead {
            industry: Some("Finance".to_string()),
            ..ZapierLead::default()
        };
        let result = process_zapier_lead(&input).expect("zapier lead should score");
        let value = serde_json::to_value(&result).expect("result should serialize");

        assert_eq!(value["lead_score"], 20);
        assert_eq!(value["score_breakdown"]["industry"], 20);
        assert_eq!(value["classification"], "Cold");
    }
}
