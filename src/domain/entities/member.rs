use std::fmt;

/// A profile stored in a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub display_name: String,
    pub profile_link: String,
    pub user_id: String,
}

impl Member {
    pub fn new(
        display_name: impl Into<String>,
        profile_link: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            profile_link: profile_link.into(),
            user_id: user_id.into(),
        }
    }
}

/// Renders the listing line used by `show_directory` and `show_online_users`
impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- Username: {}, Profile Link: {}", self.display_name, self.profile_link)
    }
}
