use anyhow::Result;
use fizzbuzz_check::config::Config;
use fizzbuzz_check::validation::validate_stream;

fn main() -> Result<()> {
    // Parse configuration from command line
    let config = Config::from_args_and_env()?;

    // Only --log-level decides the filter, so RUST_LOG cannot mix records into the report
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    log::debug!("Reading candidate output from {:?}", config.input);
    let reader = config.input.open()?;

    // A mismatch is reported on stderr and still exits with status 0
    let summary = validate_stream(reader, std::io::stderr().lock())?;
    log::debug!(
        "Checked {} lines, valid: {}",
        summary.lines_checked,
        summary.is_valid()
    );

    Ok(())
}
