mod narration;

pub use narration::NarrationLog;
