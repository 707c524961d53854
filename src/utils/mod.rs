mod frame_clock;
mod macros;

pub use frame_clock::FrameClock;
