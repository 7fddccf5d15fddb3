//! SAT reduction components for exact cover solving

pub mod translator;
pub mod formula;
pub mod encoder;
pub mod dimacs;
pub mod oracle;

pub use translator::VariableTranslator;
pub use formula::{Clause, CnfFormula};
pub use encoder::{estimate_encoding, CnfEncoder, EncodingEstimate};
pub use dimacs::{to_dimacs, write_dimacs_file};
pub use oracle::{parse_verdict, GlucoseOracle, SolverVerdict};
