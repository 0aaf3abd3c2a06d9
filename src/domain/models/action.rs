/// Tags a remote request so that only the answer to the latest one is applied.
pub type RequestId = u64;

/// Work the UI hands to the actions service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Login(RequestId, String),
    /// Full replacement of a user's food choices, never a delta.
    UpdateFoods(String, Vec<String>),
    CalculateMatches(RequestId, String),
    ExtractFoods(RequestId, String),
}
