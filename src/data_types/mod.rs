pub mod axis;
pub mod params;
pub mod state;

pub use axis::*;
pub use params::*;
pub use state::*;
