/// Verdict of a remote call once transport errors have been folded in.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    /// The service answered but refused, optionally explaining why.
    Rejected(Option<String>),
    /// The request never produced a readable answer.
    Unreachable,
}

impl<T> Outcome<T> {
    pub fn from_reply(success: bool, error: Option<String>, value: T) -> Outcome<T> {
        if success {
            return Outcome::Success(value);
        }

        return Outcome::Rejected(error.filter(|e| return !e.trim().is_empty()));
    }

    pub fn is_success(&self) -> bool {
        return matches!(self, Outcome::Success(_));
    }
}
