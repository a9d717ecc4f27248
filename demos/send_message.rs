use std::env;
use std::error::Error;

use beacon::{Indicator, IndicatorConfig};
use beacon_testing::{RecordingDelay, Timeline, VirtualLamp, VirtualPixelStrip};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        println!("Usage: send_message <message...>");
        return Ok(());
    }
    let message = args.join(" ");

    // Virtual devices sharing one timeline, with a delay that records instead of sleeping.
    // To drive real hardware you would use PinOutput, LedStrip and HalDelay instead.
    let config = IndicatorConfig::default();
    let timeline = Timeline::new();
    let mut indicator = Indicator::new(
        config,
        VirtualLamp::with_timeline(&timeline),
        VirtualPixelStrip::with_timeline(config.pixel_count, &timeline),
        RecordingDelay::with_timeline(&timeline),
    )?;
    timeline.clear();

    let events = indicator.encode(&message);
    println!("Message: {}", message);
    println!("Morse:   {}", beacon::core::render(&events).trim_end());
    println!();

    indicator.send_morse(&message)?;

    for call in timeline.calls() {
        println!("{}", call);
    }
    println!();
    println!("Total time: {:?}", timeline.total_wait());

    Ok(())
}
