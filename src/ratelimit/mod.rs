//! Rate limiting logic and permit state management.

mod gate;
mod window;

pub use gate::PermitGate;
pub use window::TimeWindow;
