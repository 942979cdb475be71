use serde::{Deserialize, Serialize};

use crate::auth::RoleTier;

/// An architect listed in the hall of fame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Architect {
    pub id: i64,
    #[serde(default)]
    pub username: String,
}

/// A message addressed to one architect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HallOfFameMessage {
    pub architect_id: i64,
    pub message: String,
}

/// A broadcast email to every member of the chosen tiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Broadcast {
    pub tiers: Vec<RoleTier>,
    pub topic: String,
    pub text: String,
}

impl Broadcast {
    /// All of tiers, topic and text are needed before sending.
    pub fn is_complete(&self) -> bool {
        !self.tiers.is_empty() && !self.topic.trim().is_empty() && !self.text.trim().is_empty()
    }

    /// Add the tier if absent, remove it if present.
    pub fn toggle_tier(&mut self, tier: RoleTier) {
        if let Some(pos) = self.tiers.iter().position(|t| *t == tier) {
            self.tiers.remove(pos);
        } else {
            self.tiers.push(tier);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_tier() {
        let mut broadcast = Broadcast::default();
        broadcast.toggle_tier(RoleTier::Mason);
        broadcast.toggle_tier(RoleTier::GoldMason);
        assert_eq!(broadcast.tiers, vec![RoleTier::Mason, RoleTier::GoldMason]);

        broadcast.toggle_tier(RoleTier::Mason);
        assert_eq!(broadcast.tiers, vec![RoleTier::GoldMason]);
    }

    #[test]
    fn test_broadcast_needs_every_field() {
        let mut broadcast = Broadcast {
            tiers: vec![RoleTier::Mason],
            topic: "Meeting".to_string(),
            text: String::new(),
        };
        assert!(!broadcast.is_complete());

        broadcast.text = "Friday at noon".to_string();
        assert!(broadcast.is_complete());

        broadcast.tiers.clear();
        assert!(!broadcast.is_complete());
    }

    #[test]
    fn test_broadcast_serializes_tier_names() {
        let broadcast = Broadcast {
            tiers: vec![RoleTier::SilverMason],
            topic: "t".to_string(),
            text: "x".to_string(),
        };
        let json = serde_json::to_value(&broadcast).unwrap();
        assert_eq!(json["tiers"], serde_json::json!(["SilverMason"]));
    }
}
