pub mod event;
pub mod play;
pub mod report;
pub mod stat_line;

pub use event::{Event, HitType};
pub use play::{InningHalf, RawPlayRow};
pub use report::{
    FieldDiff, GameReport, MismatchReport, PipelineDiagnostics, PlayerDiff, ValidationReport,
    ValidationStatus,
};
pub use stat_line::{Role, StatField, StatLine};
