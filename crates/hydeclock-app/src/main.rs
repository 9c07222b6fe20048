use std::{backtrace::Backtrace, num::NonZeroUsize, panic, path::PathBuf, sync::Arc};

use clap::{Parser, command};
use flexi_logger::{Age, Cleanup, Criterion, FileSpec, LogSpecBuilder, Logger, Naming};
use hydeclock_core::{
    config::{ConfigManager, get_config},
    event_bus::EventBus,
    time::{LocalTimeSource, TimeSource},
};
use hydeclock_gui::{App, get_log_spec};
use log::{debug, error};
use tokio::runtime::Handle;

const EVENT_BUS_CAPACITY: usize = 64;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    config_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> iced::Result {
    let args = Args::parse();

    let logger = Logger::with(
        LogSpecBuilder::new()
            .default(log::LevelFilter::Info)
            .build(),
    )
    .log_to_file(FileSpec::default().directory("/tmp/hydeclock"))
    .duplicate_to_stdout(flexi_logger::Duplicate::All)
    .rotate(
        Criterion::Age(Age::Day),
        Naming::Timestamps,
        Cleanup::KeepLogFiles(7),
    )
    .start()
    .unwrap_or_else(|err| {
        eprintln!("Failed to start logger: {err}");
        std::process::exit(1);
    });

    debug!("args: {args:?}");

    panic::set_hook(Box::new(|info| {
        let b = Backtrace::capture();
        error!("Panic: {info} \n {b}");
    }));

    let (config, config_path) = get_config(args.config_path).unwrap_or_else(|err| {
        error!("Failed to read config: {err}");

        std::process::exit(1);
    });

    logger.set_new_spec(get_log_spec(&config.log_level));

    let config_manager = Arc::new(ConfigManager::new(config.clone()));
    let bus = EventBus::new(NonZeroUsize::new(EVENT_BUS_CAPACITY).unwrap_or(NonZeroUsize::MIN));
    let time_source: Arc<dyn TimeSource> = Arc::new(LocalTimeSource::new());

    iced::daemon(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .style(App::style)
        .run_with(App::new((
            logger,
            config,
            config_manager,
            config_path,
            time_source,
            bus.sender(),
            Handle::current(),
            bus.receiver(),
        )))
}
