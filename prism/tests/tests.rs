mod end_to_end_test;
mod immunity_test;
mod narration_test;
mod paralysis_test;
mod protocol_test;
