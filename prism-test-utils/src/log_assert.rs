use prism::Battle;

/// Asserts that narration produced since the last read is equal to the given messages.
#[track_caller]
pub fn assert_new_narration_eq(battle: &mut Battle, want: &[&str]) {
    let got = battle.new_narration();
    let got = got.iter().map(|message| message.as_str()).collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want)
}
