#[cfg(test)]
mod protocol_test {
    use anyhow::Result;
    use prism::{
        Battle,
        Decision,
        TeamData,
        TurnPhase,
        data::{
            DataStore,
            InMemoryDataStore,
        },
    };
    use prism_test_utils::{
        TestBattleBuilder,
        assert_error_message,
        assert_error_message_contains,
        team_from_json,
    };

    fn team() -> Result<TeamData> {
        team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Snorlax",
                        "moves": ["Tackle", "Growl"]
                    }
                ]
            }"#,
        )
    }

    fn make_battle(data: &dyn DataStore) -> Result<Battle> {
        TestBattleBuilder::new()
            .with_team_1(team()?)
            .with_team_2(team()?)
            .build(data)
    }

    #[test]
    fn cannot_advance_before_both_sides_decide() {
        let data = InMemoryDataStore::sample().unwrap();
        let mut battle = make_battle(&data).unwrap();
        assert_error_message(
            battle.run_turn(),
            "protocol violation: both sides must decide before the turn can advance",
        );
        // Pending narration is still displayed.
        assert_matches::assert_matches!(battle.advance(), Ok(true));
        assert_matches::assert_matches!(battle.advance(), Ok(true));
        assert_error_message(
            battle.advance(),
            "protocol violation: both sides must decide before the turn can advance",
        );

        assert_matches::assert_matches!(battle.submit_decision(0, Decision::Move(0)), Ok(()));
        assert_error_message(
            battle.advance(),
            "protocol violation: both sides must decide before the turn can advance",
        );
    }

    #[test]
    fn rejects_second_decision_for_the_same_side() {
        let data = InMemoryDataStore::sample().unwrap();
        let mut battle = make_battle(&data).unwrap();
        assert_matches::assert_matches!(battle.submit_decision(0, Decision::Move(0)), Ok(()));
        assert_error_message(
            battle.submit_decision(0, Decision::Move(1)),
            "protocol violation: side 0 already submitted a decision",
        );
    }

    #[test]
    fn rejects_decisions_mid_turn() {
        let data = InMemoryDataStore::sample().unwrap();
        let mut battle = make_battle(&data).unwrap();
        assert_matches::assert_matches!(battle.submit_decision(0, Decision::Move(0)), Ok(()));
        assert_matches::assert_matches!(battle.submit_decision(1, Decision::Move(0)), Ok(()));
        assert_eq!(battle.phase(), TurnPhase::DeterminingOrder);
        assert_error_message(
            battle.submit_decision(0, Decision::Move(1)),
            "protocol violation: decisions can only be submitted between turns",
        );

        assert_matches::assert_matches!(battle.run_turn(), Ok(()));
        assert_eq!(battle.phase(), TurnPhase::AwaitingDecisions);
        assert_matches::assert_matches!(battle.submit_decision(0, Decision::Move(1)), Ok(()));
    }

    #[test]
    fn rejects_invalid_choices() {
        let data = InMemoryDataStore::sample().unwrap();
        let mut battle = make_battle(&data).unwrap();
        assert_error_message(
            battle.submit_choice(0, "move 4"),
            "protocol violation: invalid move slot 4",
        );
        assert_error_message_contains(battle.submit_choice(0, "dance"), "invalid choice: dance");
        assert_error_message_contains(
            battle.submit_choice(0, "move first"),
            "invalid move slot \"first\"",
        );
        assert_error_message(
            battle.submit_decision(2, Decision::Move(0)),
            "protocol violation: side 2 does not exist",
        );
    }

    #[test]
    fn pass_is_a_valid_decision() {
        let data = InMemoryDataStore::sample().unwrap();
        let mut battle = make_battle(&data).unwrap();
        battle.new_narration();
        assert_matches::assert_matches!(battle.submit_choice(0, "pass"), Ok(()));
        assert_matches::assert_matches!(battle.submit_choice(1, "move 1"), Ok(()));
        assert_matches::assert_matches!(battle.run_turn(), Ok(()));
        let narration = battle.new_narration();
        assert_eq!(narration[0], "Snorlax used Growl!");
        assert_eq!(narration.last().unwrap(), "Snorlax has no usable action!");
    }

    #[test]
    fn rejects_invalid_teams() {
        let data = InMemoryDataStore::sample().unwrap();
        assert_error_message_contains(
            TestBattleBuilder::new()
                .with_team_1(team().unwrap())
                .build(&data),
            "Side 2 has an invalid team: team has no members",
        );

        let unknown_species = team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Missingno",
                        "moves": ["Tackle"]
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_error_message_contains(
            TestBattleBuilder::new()
                .with_team_1(team().unwrap())
                .with_team_2(unknown_species)
                .build(&data),
            "species Missingno not found",
        );

        let unknown_move = team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Snorlax",
                        "moves": ["Hyper Beam"]
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_error_message_contains(
            TestBattleBuilder::new()
                .with_team_1(unknown_move)
                .with_team_2(team().unwrap())
                .build(&data),
            "move Hyper Beam not found",
        );
    }
}
