#[cfg(test)]
mod immunity_test {
    use prism::data::InMemoryDataStore;
    use prism_test_utils::{
        TestBattleBuilder,
        assert_new_narration_eq,
        team_from_json,
    };

    #[test]
    fn normal_move_does_not_affect_ghost() {
        let data = InMemoryDataStore::sample().unwrap();
        let snorlax = team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Snorlax",
                        "moves": ["Double-Edge"]
                    }
                ]
            }"#,
        )
        .unwrap();
        let misdreavus = team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Misdreavus",
                        "moves": ["Double Team"]
                    }
                ]
            }"#,
        )
        .unwrap();
        let mut battle = TestBattleBuilder::new()
            .with_team_1(snorlax)
            .with_team_2(misdreavus)
            .build(&data)
            .unwrap();
        battle.new_narration();

        for _ in 0..3 {
            assert_matches::assert_matches!(battle.submit_choice(0, "move 0"), Ok(()));
            assert_matches::assert_matches!(battle.submit_choice(1, "move 0"), Ok(()));
            assert_matches::assert_matches!(battle.run_turn(), Ok(()));
        }
        assert_new_narration_eq(
            &mut battle,
            &[
                "Misdreavus used Double Team!",
                "Misdreavus's evasiveness has been raised by 1!",
                "Snorlax used Double-Edge!",
                "It doesn't affect Misdreavus...",
                "Misdreavus used Double Team!",
                "Misdreavus's evasiveness has been raised by 1!",
                "Snorlax used Double-Edge!",
                "It doesn't affect Misdreavus...",
                "Misdreavus used Double Team!",
                "Misdreavus's evasiveness has been raised by 1!",
                "Snorlax used Double-Edge!",
                "It doesn't affect Misdreavus...",
            ],
        );
        let misdreavus = battle.combatant(1).unwrap();
        assert_eq!(misdreavus.hp(), misdreavus.max_hp());
        let snorlax = battle.combatant(0).unwrap();
        assert_eq!(snorlax.hp(), snorlax.max_hp());
    }

    #[test]
    fn levitate_grants_ground_immunity() {
        let data = InMemoryDataStore::sample().unwrap();
        let garchomp = team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Garchomp",
                        "moves": ["Earthquake"]
                    }
                ]
            }"#,
        )
        .unwrap();
        let mismagius = team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Mismagius",
                        "moves": ["Double Team"]
                    }
                ]
            }"#,
        )
        .unwrap();
        let mut battle = TestBattleBuilder::new()
            .with_team_1(garchomp)
            .with_team_2(mismagius)
            .build(&data)
            .unwrap();
        battle.new_narration();

        assert_matches::assert_matches!(battle.submit_choice(0, "move 0"), Ok(()));
        assert_matches::assert_matches!(battle.submit_choice(1, "move 0"), Ok(()));
        assert_matches::assert_matches!(battle.run_turn(), Ok(()));
        assert_new_narration_eq(
            &mut battle,
            &[
                "Mismagius used Double Team!",
                "Mismagius's evasiveness has been raised by 1!",
                "Garchomp used Earthquake!",
                "It doesn't affect Mismagius...",
            ],
        );
    }
}
