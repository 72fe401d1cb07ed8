// engine/src/policy/mod.rs
#![forbid(unsafe_code)]

mod base;
mod pursuit;
mod random;

pub use base::Policy;
pub use pursuit::PursuitPolicy;
pub use random::RandomPolicy;
