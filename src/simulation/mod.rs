pub mod encounter;

pub use encounter::{run_encounter, CombatantParams, EncounterOutcome, EncounterSetup, TrapParams};
