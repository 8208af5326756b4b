use crate::engine::ScoreResult;

pub fn to_markdown(result: &ScoreResult) -> String {
    let mut output = String::new();
    output.push_str("# Lead Score Report\n\n");
    output.push_str(&format!("Lead score: {}\n", result.lead_score));
    output.push_str(&format!("Classification: {}\n\n", result.classification));

    output.push_str("## Breakdown\n\n");
    if result.breakdown.is_empty() {
        output.push_str("- none\n");
    } else {
        for (category, points) in &result.breakdown {
            output.push_str(&format!("- {category}: {points}\n"));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::classify_lead;
    use std::collections::BTreeMap;

    #[test]
    fn markdown_report_contains_sections() {
        let result = ScoreResult {
            lead_score: 45,
            breakdown: BTreeMap::from([
                ("industry".to_string(), 15),
                ("urgency".to_string(), 30),
            ]),
            classification: classify_lead(45),
        };

        let rendered = to_markdown(&result);
        assert!(rendered.contains("# Lead Score Report"));
        assert!(rendered.contains("Lead score: 45"));
        assert!(rendered.contains("Classification: Cool"));
        assert!(rendered.contains("- industry: 15"));
        assert!(rendered.contains("- urgency: 30"));
    }

    #[test]
    fn markdown_report_marks_empty_breakdown() {
        let result = ScoreResult {
            lead_score: 0,
            breakdown: BTreeMap::new(),
            classification: classify_lead(0),
        };

        let rendered = to_markdown(&result);
        assert!(rendered.contains("## Breakdown"));
        assert!(rendered.contains("- none"));
    }
}
