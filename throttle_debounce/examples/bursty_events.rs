//! Feeds a simulated bursty event stream (scroll offsets arriving every
//! 10ms) through the wrapper. With a 100ms window the burst collapses to one
//! immediate execution plus one trailing execution carrying the final
//! offset; the lone event afterwards is immediate again.
//!
//! Run with: `cargo run --example bursty_events`

use std::time::Duration;

use throttle_debounce::throttle_with_debounce;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).init();

    let on_scroll = throttle_with_debounce(|offset: u32| tracing::info!(offset, "scroll handler executed"), Duration::from_millis(100));

    // Burst: 10 scroll events, 10ms apart.
    for step in 0..10u32 {
        on_scroll.call(step * 40);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    // Let the trailing call fire.
    tokio::time::sleep(Duration::from_millis(200)).await;

    // An isolated event after the stream settles executes immediately.
    on_scroll.call(9000);
    tokio::time::sleep(Duration::from_millis(150)).await;
}
