#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

/// Identity of the person currently using the client. A logged in session
/// always carries a non-empty name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user_name: String,
    is_logged_in: bool,
    is_new: bool,
}

impl Session {
    pub fn logged_in(user_name: &str, is_new: bool) -> Option<Session> {
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return None;
        }

        return Some(Session {
            user_name: user_name.to_string(),
            is_logged_in: true,
            is_new,
        });
    }

    pub fn user_name(&self) -> &str {
        return &self.user_name;
    }

    pub fn is_logged_in(&self) -> bool {
        return self.is_logged_in;
    }

    /// True when the remote created the profile during this login.
    pub fn is_new(&self) -> bool {
        return self.is_new;
    }
}
