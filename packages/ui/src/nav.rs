//! Navbar entries and the tiers allowed to see them.

use api::{Permissions, RoleTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub roles: &'static [RoleTier],
}

const EVERY_TIER: &[RoleTier] = &RoleTier::ALL;

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Report",
        href: "/protected-home",
        roles: EVERY_TIER,
    },
    NavItem {
        name: "Vote",
        href: "/vote",
        roles: EVERY_TIER,
    },
    NavItem {
        name: "Hall of Fame",
        href: "/hall_of_fame",
        roles: EVERY_TIER,
    },
    NavItem {
        name: "Invite",
        href: "/invite",
        roles: &[RoleTier::GoldMason, RoleTier::Architect],
    },
    NavItem {
        name: "Broadcast Emails",
        href: "/broadcast",
        roles: &[RoleTier::Architect],
    },
    NavItem {
        name: "Download/Upload",
        href: "/records",
        roles: &[RoleTier::Architect],
    },
];

/// Entries the given permissions may see, in navbar order.
pub fn visible_items(permissions: &Permissions) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| permissions.has_any(item.roles))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(roles: &[&str]) -> Vec<&'static str> {
        visible_items(&Permissions::from_roles(roles))
            .into_iter()
            .map(|item| item.name)
            .collect()
    }

    #[test]
    fn test_no_role_sees_nothing() {
        assert!(names(&[]).is_empty());
    }

    #[test]
    fn test_mason_sees_common_items() {
        assert_eq!(names(&["Mason"]), vec!["Report", "Vote", "Hall of Fame"]);
    }

    #[test]
    fn test_gold_mason_can_invite() {
        assert_eq!(
            names(&["GoldMason"]),
            vec!["Report", "Vote", "Hall of Fame", "Invite"]
        );
    }

    #[test]
    fn test_architect_sees_everything() {
        assert_eq!(names(&["Architect"]).len(), NAV_ITEMS.len());
    }
}
