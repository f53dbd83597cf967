mod access;
mod decimal;
mod guid;

pub use access::*;
pub use decimal::*;
pub use guid::*;
