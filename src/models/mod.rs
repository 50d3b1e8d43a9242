pub mod generation;
pub mod outcome;

pub use generation::*;
pub use outcome::*;
