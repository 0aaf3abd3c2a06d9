#[cfg(test)]
#[path = "match_result_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

/// One ranked candidate returned by the matching service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub name: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_foods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_cuisines: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_hits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_reason: Option<String>,
}

fn joined(values: &Option<Vec<String>>) -> Option<String> {
    if let Some(values) = values {
        if !values.is_empty() {
            return Some(values.join(", "));
        }
    }

    return None;
}

impl MatchResult {
    pub fn score_label(&self) -> String {
        return format!("{}%", self.score);
    }

    /// Labelled supporting evidence in display order. Empty lists and blank
    /// reasons are left out.
    pub fn evidence(&self) -> Vec<(&'static str, String)> {
        let mut res = vec![];
        if let Some(shared) = joined(&self.shared_foods) {
            res.push(("Shared dishes", shared));
        }
        if let Some(cuisines) = joined(&self.matched_cuisines) {
            res.push(("Matched cuisines", cuisines));
        }
        if let Some(keywords) = joined(&self.keyword_hits) {
            res.push(("Similar tastes", keywords));
        }
        if let Some(reason) = &self.llm_reason {
            if !reason.trim().is_empty() {
                res.push(("AI Analysis", reason.trim().to_string()));
            }
        }

        return res;
    }
}
