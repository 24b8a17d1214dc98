pub mod cli;
pub mod eval;
pub mod read;
pub mod util;
