use propgen::{
    cli, config::Config, convert, diag::StderrSink, logging::init_logging, resolver::FlagResolver,
};

fn main() -> anyhow::Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut diag = StderrSink;

    let resolver = FlagResolver::resolve(&args, &cli::flag_spec(), &mut diag)?;
    let config = Config::from_resolver(&resolver)?;

    log::debug!("Configuration: {:?}", config);

    let summary = convert::run(&config, &mut diag)?;

    log::info!(
        "Written: {} ({} entries, {} rows skipped)",
        config.output.display(),
        summary.entries,
        summary.skipped
    );

    Ok(())
}
