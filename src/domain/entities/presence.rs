/// Presence code the bot treats as "online" (in game)
pub const ONLINE_PRESENCE_TYPE: i64 = 2;

/// Outcome of a presence lookup.
///
/// `Unknown` covers every failed lookup. Callers that only need a yes/no
/// answer use [`PresenceStatus::is_online`], which treats it as offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStatus {
    Online,
    Offline,
    Unknown,
}

impl PresenceStatus {
    /// Map a `userPresenceType` code reported by the presence service
    pub fn from_code(code: i64) -> Self {
        if code == ONLINE_PRESENCE_TYPE {
            PresenceStatus::Online
        } else {
            PresenceStatus::Offline
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, PresenceStatus::Online)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_in_game_code_is_online() {
        assert!(PresenceStatus::from_code(2).is_online());
        for code in [0, 1, 3, 4, 99] {
            assert!(!PresenceStatus::from_code(code).is_online(), "code {}", code);
        }
    }

    #[test]
    fn test_unknown_is_not_online() {
        assert!(!PresenceStatus::Unknown.is_online());
    }
}
