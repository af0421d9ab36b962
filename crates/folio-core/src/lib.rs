pub mod constants;
pub mod debounce;
pub mod device;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod glow;
pub mod lifecycle;
pub mod pointer;
pub mod projects;
pub mod stage;
pub mod surface;
pub mod theme;

pub use debounce::*;
pub use device::*;
pub use error::*;
pub use field::*;
pub use frame_loop::*;
pub use glow::*;
pub use lifecycle::*;
pub use pointer::*;
pub use projects::*;
pub use stage::*;
pub use surface::*;
pub use theme::*;
