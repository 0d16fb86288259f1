pub mod generator;
pub mod imports;
pub mod model;
pub mod operations;
pub mod reference;

pub use generator::RuleGenerator;
pub use imports::ImportRefs;
