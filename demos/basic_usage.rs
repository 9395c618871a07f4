//! Basic logger usage example
//!
//! Demonstrates every severity, the Debug verbosity gate and a file sink.
//!
//! Run with: cargo run --example basic_usage

use logorithm::prelude::*;
use logorithm::warning;

fn main() -> Result<()> {
    println!("=== Logorithm - Basic Usage Example ===\n");

    let logger = StructuredLogger::new(
        ConsoleSink::stdout(),
        false,
        "death-ray",
        "1.0.0",
        "energy-pump",
        std::process::id(),
    );

    println!("1. Logging at every severity (Debug hidden):");
    logger.emerg("reactor breach", &[])?;
    logger.alert("coolant at %d%%", &[&12])?;
    logger.critical("pump %s offline", &[&"B"])?;
    logger.error("retry %d of %d failed", &[&3, &5])?;
    logger.warning("pressure rising", &[])?;
    logger.notice("operator %s on shift", &[&"ada"])?;
    logger.info("energy output nominal", &[])?;
    logger.debug("this line is suppressed", &[])?;

    println!("\n2. Verbose mode shows Debug:");
    logger.set_verbose(true);
    logger.debug("valve positions: %v", &[&"[0.2, 0.7]"])?;
    warning!(logger, "Rust formatting works too: {:.1}", 98.64)?;

    println!("\n3. Writing to a file:");
    let path = std::env::temp_dir().join("logorithm-basic-usage.log");
    let file_logger = StructuredLogger::builder("death-ray", "1.0.0", "energy-pump")
        .timezone(TimestampZone::Utc)
        .sink(FileSink::new(&path)?)
        .build()?;
    file_logger.info("written to %s", &[&path.display()])?;
    println!("   wrote {} line(s) to {}", file_logger.metrics().lines_written(), path.display());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
