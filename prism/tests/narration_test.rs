#[cfg(test)]
mod narration_test {
    use anyhow::Result;
    use prism::{
        Battle,
        RandomizeBaseDamage,
        SpeedSortTieResolution,
        TeamData,
        data::{
            DataStore,
            InMemoryDataStore,
        },
    };
    use prism_test_utils::{
        TestBattleBuilder,
        assert_new_narration_eq,
        get_controlled_rng_for_battle,
        setup_test_environment,
        team_from_json,
    };

    fn pikachu() -> Result<TeamData> {
        team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Pikachu",
                        "moves": ["Tackle", "Thunder Wave"]
                    }
                ]
            }"#,
        )
    }

    fn snorlax() -> Result<TeamData> {
        team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Snorlax",
                        "moves": ["Tackle"]
                    }
                ]
            }"#,
        )
    }

    fn mudkip() -> Result<TeamData> {
        team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Mudkip",
                        "moves": ["Water Gun"]
                    }
                ]
            }"#,
        )
    }

    fn charizard() -> Result<TeamData> {
        team_from_json(
            r#"{
                "members": [
                    {
                        "species": "Charizard",
                        "moves": ["Growl"]
                    }
                ]
            }"#,
        )
    }

    fn make_battle(
        data: &dyn DataStore,
        team_1: TeamData,
        team_2: TeamData,
        hit_details: bool,
    ) -> Result<Battle> {
        TestBattleBuilder::new()
            .with_seed(48205749111)
            .with_controlled_rng(true)
            .with_base_damage_randomization(RandomizeBaseDamage::Max)
            .with_speed_sort_tie_resolution(SpeedSortTieResolution::Keep)
            .with_hit_details(hit_details)
            .with_team_1(team_1)
            .with_team_2(team_2)
            .build(data)
    }

    fn play_turn(battle: &mut Battle, side_1: &str, side_2: &str) {
        assert_matches::assert_matches!(battle.submit_choice(0, side_1), Ok(()));
        assert_matches::assert_matches!(battle.submit_choice(1, side_2), Ok(()));
        assert_matches::assert_matches!(battle.run_turn(), Ok(()));
    }

    #[test]
    fn narrates_damage_status_and_critical_hits() {
        setup_test_environment();
        let data = InMemoryDataStore::sample().unwrap();
        let mut battle = make_battle(&data, pikachu().unwrap(), snorlax().unwrap(), true).unwrap();
        assert_new_narration_eq(
            &mut battle,
            &["Side 1 sent out Pikachu!", "Side 2 sent out Snorlax!"],
        );

        // Accuracy and critical hit rolls for both moves.
        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 1), (2, 1), (3, 1), (4, 1)]);
        play_turn(&mut battle, "move 0", "move 0");
        assert_new_narration_eq(
            &mut battle,
            &[
                "Pikachu used Tackle!",
                "Against Snorlax, Pikachu's Tackle deals 3 damage!",
                "Snorlax has 217/220 HP!",
                "Snorlax used Tackle!",
                "Against Pikachu, Snorlax's Tackle deals 6 damage!",
                "Pikachu has 89/95 HP!",
            ],
        );
        assert_eq!(battle.turn(), 2);

        // Accuracy, status roll, then a full paralysis roll.
        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 0), (2, 0), (3, 0)]);
        play_turn(&mut battle, "move 1", "move 0");
        assert_new_narration_eq(
            &mut battle,
            &[
                "Pikachu used Thunder Wave!",
                "Snorlax was paralyzed!",
                "Snorlax is paralyzed! It can't move!",
            ],
        );

        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([
                (1, 1),
                (2, 1),
                (3, 99),
                (4, 1),
                (5, 0),
            ]);
        play_turn(&mut battle, "move 0", "move 0");
        assert_new_narration_eq(
            &mut battle,
            &[
                "Pikachu used Tackle!",
                "Against Snorlax, Pikachu's Tackle deals 3 damage!",
                "Snorlax has 214/220 HP!",
                "Snorlax used Tackle!",
                "Against Pikachu, Snorlax's Tackle deals 9 damage!",
                "A critical hit!",
                "Pikachu has 80/95 HP!",
            ],
        );
    }

    #[test]
    fn narrates_effectiveness_and_stat_drops() {
        let data = InMemoryDataStore::sample().unwrap();
        let mut battle =
            make_battle(&data, mudkip().unwrap(), charizard().unwrap(), true).unwrap();
        battle.new_narration();

        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 0), (2, 0), (3, 1)]);
        play_turn(&mut battle, "move 0", "move 0");
        assert_new_narration_eq(
            &mut battle,
            &[
                "Charizard used Growl!",
                "Mudkip's Attack has been lowered by 1!",
                "Mudkip used Water Gun!",
                "Against Charizard, Mudkip's Water Gun deals 4 damage!",
                "It's super effective!",
                "Charizard has 134/138 HP!",
            ],
        );
    }

    #[test]
    fn hit_details_can_be_silenced() {
        let data = InMemoryDataStore::sample().unwrap();
        let mut battle =
            make_battle(&data, mudkip().unwrap(), charizard().unwrap(), false).unwrap();
        battle.new_narration();

        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 0), (2, 0), (3, 1)]);
        play_turn(&mut battle, "move 0", "move 0");
        assert_new_narration_eq(
            &mut battle,
            &[
                "Charizard used Growl!",
                "Mudkip's Attack has been lowered by 1!",
                "Mudkip used Water Gun!",
                "Against Charizard, Mudkip's Water Gun deals 4 damage!",
                "Charizard has 134/138 HP!",
            ],
        );
    }

    #[test]
    fn advance_displays_one_message_at_a_time() {
        let data = InMemoryDataStore::sample().unwrap();
        let mut battle = make_battle(&data, pikachu().unwrap(), snorlax().unwrap(), true).unwrap();

        assert_matches::assert_matches!(battle.advance(), Ok(true));
        assert_eq!(battle.current_message(), Some("Side 1 sent out Pikachu!"));
        assert_matches::assert_matches!(battle.advance(), Ok(true));
        assert_eq!(battle.current_message(), Some("Side 2 sent out Snorlax!"));
        assert!(battle.is_turn_complete());

        get_controlled_rng_for_battle(&mut battle)
            .unwrap()
            .insert_fake_values_relative_to_sequence_count([(1, 1), (2, 1), (3, 1), (4, 1)]);
        assert_matches::assert_matches!(battle.submit_choice(0, "move 0"), Ok(()));
        assert_matches::assert_matches!(battle.submit_choice(1, "move 0"), Ok(()));
        assert!(!battle.is_turn_complete());

        let mut displayed = Vec::new();
        while !battle.is_turn_complete() {
            if battle.advance().unwrap() {
                displayed.push(battle.current_message().unwrap().to_owned());
            }
        }
        pretty_assertions::assert_eq!(
            displayed,
            [
                "Pikachu used Tackle!",
                "Against Snorlax, Pikachu's Tackle deals 3 damage!",
                "Snorlax has 217/220 HP!",
                "Snorlax used Tackle!",
                "Against Pikachu, Snorlax's Tackle deals 6 damage!",
                "Pikachu has 89/95 HP!",
            ]
        );
        assert_eq!(battle.all_narration().count(), 8);
        assert!(
            battle
                .transcript()
                .starts_with("Side 1 sent out Pikachu!\nSide 2 sent out Snorlax!\nPikachu used Tackle!")
        );
    }
}
