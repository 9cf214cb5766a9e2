mod browser_type;
mod client_hints;
mod device_type;
mod facets;

pub use browser_type::*;
pub use client_hints::*;
pub use device_type::*;
pub use facets::*;
