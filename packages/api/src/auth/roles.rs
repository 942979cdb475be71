//! Role tiers and what each tier may do in the UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordinal user classification, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoleTier {
    Mason,
    SilverMason,
    GoldMason,
    Architect,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role tier: {0}")]
pub struct UnknownRole(pub String);

impl RoleTier {
    pub const ALL: [RoleTier; 4] = [
        RoleTier::Mason,
        RoleTier::SilverMason,
        RoleTier::GoldMason,
        RoleTier::Architect,
    ];

    /// Tiers a broadcast can be addressed to, in display order.
    pub const BROADCAST_AUDIENCE: [RoleTier; 3] = [
        RoleTier::GoldMason,
        RoleTier::SilverMason,
        RoleTier::Mason,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleTier::Mason => "Mason",
            RoleTier::SilverMason => "SilverMason",
            RoleTier::GoldMason => "GoldMason",
            RoleTier::Architect => "Architect",
        }
    }
}

impl fmt::Display for RoleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleTier {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// What the current role list allows the UI to offer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permissions {
    tiers: Vec<RoleTier>,
    /// The token named some role, known tier or not.
    signed_in: bool,
}

impl Permissions {
    /// Build from raw role strings; names that are not tiers are ignored.
    pub fn from_roles<S: AsRef<str>>(roles: &[S]) -> Self {
        let mut tiers: Vec<RoleTier> = roles
            .iter()
            .filter_map(|role| role.as_ref().parse().ok())
            .collect();
        tiers.sort();
        tiers.dedup();
        let signed_in = roles.iter().any(|role| !role.as_ref().trim().is_empty());
        Self { tiers, signed_in }
    }

    pub fn tiers(&self) -> &[RoleTier] {
        &self.tiers
    }

    pub fn highest(&self) -> Option<RoleTier> {
        self.tiers.last().copied()
    }

    pub fn has(&self, tier: RoleTier) -> bool {
        self.tiers.contains(&tier)
    }

    pub fn has_any(&self, allowed: &[RoleTier]) -> bool {
        allowed.iter().any(|tier| self.has(*tier))
    }

    /// Anyone with a role may pin new records on the map, even one that is
    /// not a known tier.
    pub fn can_create_records(&self) -> bool {
        self.signed_in
    }

    pub fn can_erase_records(&self) -> bool {
        self.has(RoleTier::Architect)
    }

    pub fn can_invite(&self) -> bool {
        self.has_any(&[RoleTier::GoldMason, RoleTier::Architect])
    }

    pub fn can_broadcast(&self) -> bool {
        self.has(RoleTier::Architect)
    }

    pub fn can_manage_snapshots(&self) -> bool {
        self.has(RoleTier::Architect)
    }
}
