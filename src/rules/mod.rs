//! Rules module - Failure signatures and scan results

mod extract;
pub mod patterns;
pub mod results;
pub mod rule;
pub mod ruleset;

pub use results::{Detection, ScanResult};
pub use rule::{MatchPolicy, Occurrence, PolicyDefinition, Rule, RuleDefinition};
pub use ruleset::RuleSet;
