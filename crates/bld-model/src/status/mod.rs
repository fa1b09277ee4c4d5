mod phase;
pub use phase::BuildPhase;
