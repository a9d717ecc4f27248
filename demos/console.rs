use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use beacon::core::{ThreadDelay, TimingConfig};
use beacon::{Indicator, IndicatorConfig};
use beacon_testing::{VirtualLamp, VirtualPixelStrip};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        println!("Usage: console [unit_ms] [pixel_count]");
        println!();
        println!("unit_ms is the length of a dot in milliseconds (default 200)");
        println!("pixel_count is the number of pixels in the light array (default 7)");
        println!("Run with RUST_LOG=debug to watch the virtual devices switch");
        return Ok(());
    }

    let mut config = IndicatorConfig::default();
    if args.len() > 1 {
        config.timing = TimingConfig::new(Duration::from_millis(args[1].parse()?))?;
    }
    if args.len() > 2 {
        config.pixel_count = args[2].parse()?;
    }

    // Virtual devices, but with real waits so the rhythm can be followed in the log.
    let mut indicator = Indicator::new(
        config,
        VirtualLamp::new(),
        VirtualPixelStrip::new(config.pixel_count),
        ThreadDelay,
    )?;

    // Blink three times to show we're ready.
    indicator.blink_for(0.5, 0.5, Some(3))?;

    let stdin = io::stdin();
    loop {
        print!("Message (empty to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim_end_matches(&['\r', '\n'][..]);
        if message.is_empty() {
            break;
        }

        println!("Sending: {}", beacon::core::render(&indicator.encode(message)).trim_end());
        indicator.send_morse(message)?;
    }

    Ok(())
}
