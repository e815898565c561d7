pub mod eval;
pub mod tokens;
