use crate::engine::ScoreResult;

pub fn to_json(result: &ScoreResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
