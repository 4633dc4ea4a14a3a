pub mod table;
pub mod variant;

pub use table::{DealError, HandSummary, PlayError, PlayOutcome, Table};
pub use variant::{ClassicWhist, GameVariant, KnockOutWhist};
