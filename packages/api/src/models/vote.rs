//! Votes, ballots and ban candidates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An open vote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    /// Share of users who have voted so far.
    #[serde(default)]
    pub percent: Option<f64>,
    /// What the vote is about (promotion, ban, ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// The current user's choice, if already cast.
    #[serde(default)]
    pub choice: Option<VoteChoice>,
}

impl Vote {
    /// Percentage for display, e.g. `"42%"`, or `"-"` when unknown.
    pub fn percent_label(&self) -> String {
        match self.percent {
            Some(p) if p.fract() == 0.0 => format!("{}%", p as i64),
            Some(p) => format!("{p:.1}%"),
            None => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteChoice {
    Agree,
    Disagree,
}

impl VoteChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteChoice::Agree => "AGREE",
            VoteChoice::Disagree => "DISAGREE",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a vote submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ballot {
    pub id: i64,
    pub name: String,
    pub choice: VoteChoice,
}

impl Ballot {
    pub fn new(vote: &Vote, choice: VoteChoice) -> Self {
        Self {
            id: vote.id,
            name: vote.name.clone(),
            choice,
        }
    }
}

/// A user the current user may start a ban vote against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BanCandidate {
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ballot_serializes_uppercase_choice() {
        let vote = Vote {
            id: 5,
            name: "Promote alice".to_string(),
            ..Vote::default()
        };
        let json = serde_json::to_value(Ballot::new(&vote, VoteChoice::Disagree)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 5, "name": "Promote alice", "choice": "DISAGREE"})
        );
    }

    #[test]
    fn test_vote_decodes_type_and_choice() {
        let vote: Vote = serde_json::from_str(
            r#"{"id":1,"name":"Vote 1","percent":37.5,"type":"BAN","choice":"AGREE"}"#,
        )
        .unwrap();
        assert_eq!(vote.kind.as_deref(), Some("BAN"));
        assert_eq!(vote.choice, Some(VoteChoice::Agree));
        assert_eq!(vote.percent_label(), "37.5%");
    }

    #[test]
    fn test_percent_label() {
        let mut vote = Vote::default();
        assert_eq!(vote.percent_label(), "-");
        vote.percent = Some(40.0);
        assert_eq!(vote.percent_label(), "40%");
    }
}
