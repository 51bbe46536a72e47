use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    error::{
        WrapResultError,
        general_error,
    },
    teams::MonData,
};

/// Maximum number of combatants on a team.
pub const MAX_TEAM_SIZE: usize = 6;

/// A single team for a battle, made up of one or more combatants.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamData {
    /// Members of the team. The first member leads.
    pub members: Vec<MonData>,
}

impl TeamData {
    /// Validates the team and all of its members.
    pub fn validate(&self) -> Result<()> {
        if self.members.is_empty() {
            return Err(general_error("team has no members"));
        }
        if self.members.len() > MAX_TEAM_SIZE {
            return Err(general_error(format!(
                "team has more than {MAX_TEAM_SIZE} members"
            )));
        }
        for (i, member) in self.members.iter().enumerate() {
            member
                .validate()
                .wrap_error_with_format(format_args!("invalid team member {i}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod team_data_test {
    use crate::teams::{
        MonData,
        TeamData,
    };

    #[test]
    fn empty_team_is_invalid() {
        assert_eq!(
            TeamData::default().validate().unwrap_err().to_string(),
            "team has no members"
        );
    }

    #[test]
    fn invalid_member_is_reported_with_index() {
        let team: TeamData = serde_json::from_str(
            r#"{
                "members": [
                    { "species": "Mudkip", "moves": ["Tackle"] },
                    { "species": "Pikachu", "moves": [] }
                ]
            }"#,
        )
        .unwrap();
        let error = team.validate().unwrap_err();
        assert_eq!(
            format!("{error:#}"),
            "invalid team member 1: Pikachu has no moves"
        );
    }

    #[test]
    fn rejects_oversized_team() {
        let team = TeamData {
            members: Vec::from_iter((0..7).map(|_| MonData {
                species: "Mudkip".to_owned(),
                moves: Vec::from(["Tackle".to_owned()]),
                ..Default::default()
            })),
        };
        assert_eq!(
            team.validate().unwrap_err().to_string(),
            "team has more than 6 members"
        );
    }
}
