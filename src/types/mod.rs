pub mod errors;
pub mod member;
pub mod triage;

pub use errors::{TriageError, TriageResult};
pub use member::{CollectionMember, League, LeagueStanding};
pub use triage::{Triage, TriageReport, TriageSummary, TriagedMember, Verdict};
