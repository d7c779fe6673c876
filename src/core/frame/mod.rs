pub mod frame_cycle;
pub mod smoother;
pub mod view_window;

pub use frame_cycle::FrameUpdateCycle;
pub use smoother::{ParameterSmoother, SMOOTHING_FACTOR, SmoothedState};
pub use view_window::ViewWindow;
