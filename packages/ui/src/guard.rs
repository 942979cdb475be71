//! Route guard decisions.
//!
//! Two tiers: the entry gate only needs the entry password to have been
//! accepted; the auth gate additionally needs a bearer token. The entry check
//! always comes first, so a user with a token but no entry flag is sent back
//! to the entry page.

/// Which gate a route sits behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardLevel {
    Entry,
    Auth,
}

/// What a guard should do with the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Allow,
    RedirectToEntry,
    RedirectToLogin,
}

pub fn gate(level: GuardLevel, entry_verified: bool, token: Option<&str>) -> Gate {
    if !entry_verified {
        return Gate::RedirectToEntry;
    }
    match level {
        GuardLevel::Entry => Gate::Allow,
        GuardLevel::Auth if token.is_some_and(|t| !t.is_empty()) => Gate::Allow,
        GuardLevel::Auth => Gate::RedirectToLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_gate_redirects_without_flag() {
        assert_eq!(gate(GuardLevel::Entry, false, None), Gate::RedirectToEntry);
        assert_eq!(gate(GuardLevel::Entry, false, Some("tok")), Gate::RedirectToEntry);
    }

    #[test]
    fn test_entry_gate_ignores_token() {
        assert_eq!(gate(GuardLevel::Entry, true, None), Gate::Allow);
    }

    #[test]
    fn test_auth_gate_checks_entry_first() {
        assert_eq!(gate(GuardLevel::Auth, false, Some("tok")), Gate::RedirectToEntry);
    }

    #[test]
    fn test_auth_gate_needs_token() {
        assert_eq!(gate(GuardLevel::Auth, true, None), Gate::RedirectToLogin);
        assert_eq!(gate(GuardLevel::Auth, true, Some("")), Gate::RedirectToLogin);
        assert_eq!(gate(GuardLevel::Auth, true, Some("tok")), Gate::Allow);
    }
}
