// inclusion facility

pub use crate::error::*;

pub use crate::membership::*;

pub use crate::information::*;

pub use crate::expectation::*;

pub use crate::grand::*;
