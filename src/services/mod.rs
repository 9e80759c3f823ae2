pub mod event_recorder;
pub mod match_lifecycle;

pub use event_recorder::EventRecorder;
pub use match_lifecycle::MatchLifecycle;
