mod discrete;

pub use discrete::*;
