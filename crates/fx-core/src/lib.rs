pub mod constants;
pub mod params;
pub mod particles;
pub mod pointer;
pub mod surface;

pub use constants::*;
pub use params::*;
pub use particles::*;
pub use pointer::*;
pub use surface::*;
