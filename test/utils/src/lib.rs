/// A `/calculate-matches` body as served by the Food-Friend API, ranked best
/// first, with every optional evidence field exercised at least once.
pub fn matches_fixture() -> &'static str {
    return r#"
{
  "success": true,
  "matches": [
    {
      "name": "Priya",
      "score": 92,
      "sharedFoods": ["ramen", "pad thai"],
      "matchedCuisines": ["japanese", "thai"],
      "keywordHits": ["spicy", "noodles"],
      "llmReason": "Both of you gravitate towards spicy noodle dishes from East and Southeast Asia."
    },
    {
      "name": "Marco",
      "score": 67.5,
      "sharedFoods": ["pizza"],
      "matchedCuisines": [],
      "keywordHits": ["cheese"]
    },
    {
      "name": "Lena",
      "score": 12
    }
  ]
}
"#
    .trim();
}

pub fn login_fixture() -> &'static str {
    return r#"
{
  "success": true,
  "isNew": false,
  "user": {
    "name": "Sam",
    "foodChoices": ["sushi", "tacos", "sushi"],
    "createdAt": "2024-03-01T10:00:00",
    "lastUpdated": "2024-03-02T12:30:00"
  }
}
"#
    .trim();
}
