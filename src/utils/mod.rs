pub mod delay;
pub mod jwt;
pub mod random;
pub mod validation;

pub use delay::*;
pub use jwt::*;
pub use random::*;
pub use validation::*;
