pub mod throttle;
mod timer;

pub use throttle::ThrottleDebounce;
pub use throttle::throttle_with_debounce;
