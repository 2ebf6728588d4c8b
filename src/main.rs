use testapp::{Config, Snapshot};

fn main() -> Result<(), testapp::Error> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let snapshot = Snapshot::capture();
    let config = Config::from_snapshot(&snapshot);

    let stdout = std::io::stdout();
    testapp::run(&snapshot, &config, &mut stdout.lock())?;
    Ok(())
}
