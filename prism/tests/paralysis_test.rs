#[cfg(test)]
mod paralysis_test {
    use anyhow::Result;
    use prism::{
        Battle,
        MajorStatus,
        data::{
            DataStore,
            InMemoryDataStore,
        },
    };
    use prism_test_utils::{
        TestBattleBuilder,
        team_from_json,
    };

    fn make_battle(data: &dyn DataStore) -> Result<Battle> {
        let skarmory = team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Skarmory",
                        "moves": ["Double Team"]
                    }
                ]
            }"#,
        )?;
        let snorlax = team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Snorlax",
                        "moves": ["Swords Dance"]
                    }
                ]
            }"#,
        )?;
        TestBattleBuilder::new()
            .with_seed(1234567)
            .with_team_1(skarmory)
            .with_team_2(snorlax)
            .build(data)
    }

    fn refill_pp(battle: &mut Battle) {
        for side in 0..2 {
            let active = battle.side_mut(side).unwrap().active_mut();
            for learned in &mut active.moves {
                learned.pp = learned.max_pp();
            }
        }
    }

    #[test]
    fn paralysis_fails_about_a_quarter_of_turns() {
        let data = InMemoryDataStore::sample().unwrap();
        let mut battle = make_battle(&data).unwrap();
        battle.side_mut(0).unwrap().active_mut().conditions.major = Some(MajorStatus::Paralysis);
        battle.new_narration();

        let mut failed = 0;
        for _ in 0..1000 {
            refill_pp(&mut battle);
            assert_matches::assert_matches!(battle.submit_choice(0, "move 0"), Ok(()));
            assert_matches::assert_matches!(battle.submit_choice(1, "move 0"), Ok(()));
            assert_matches::assert_matches!(battle.run_turn(), Ok(()));
            let narration = battle.new_narration();
            if narration
                .iter()
                .any(|message| message == "Skarmory is paralyzed! It can't move!")
            {
                failed += 1;
                assert!(!narration.iter().any(|message| message == "Skarmory used Double Team!"));
            }
        }
        assert!((200..=300).contains(&failed), "failed {failed} times");
        assert_eq!(battle.turn(), 1001);
    }

    #[test]
    fn paralysis_halves_speed() {
        let data = InMemoryDataStore::sample().unwrap();
        let mut battle = make_battle(&data).unwrap();
        assert_eq!(battle.combatant(0).unwrap().speed(), 75);
        battle.side_mut(0).unwrap().active_mut().conditions.major = Some(MajorStatus::Paralysis);
        assert_eq!(battle.combatant(0).unwrap().speed(), 37);
    }
}
