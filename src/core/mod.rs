pub mod types;

pub use types::{
    CalculationMode, GapDefinition, GapRecord, LossFigures, ProblemMapping, ProblemStatement,
};
