//! Builds the `slog` logger used by the jetton tooling.

use jetton_config::logger::{Config as LoggerConfig, LogTarget};
use slog::{o, Drain, Logger};
use slog_async::{AsyncGuard, OverflowStrategy};
use std::fs::OpenOptions;
use std::io;

const ASYNC_CHAN_SIZE: usize = 8192;

/// Creates a logger writing to the target of `config`.
///
/// Lines are written by a background thread. The returned guard flushes the
/// queue when dropped, so it has to outlive every use of the logger.
pub fn new_logger(config: &LoggerConfig) -> io::Result<(Logger, AsyncGuard)> {
    let drain = match &config.target {
        LogTarget::Stdout => {
            let decorator = slog_term::TermDecorator::new().stdout().build();
            slog_term::FullFormat::new(decorator).build().fuse()
        }
        LogTarget::Stderr => {
            let decorator = slog_term::TermDecorator::new().stderr().build();
            slog_term::FullFormat::new(decorator).build().fuse()
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let decorator = slog_term::PlainSyncDecorator::new(file);
            return Ok(async_logger(
                slog_term::FullFormat::new(decorator).build().fuse(),
                config,
            ));
        }
    };
    Ok(async_logger(drain, config))
}

fn async_logger<D>(drain: D, config: &LoggerConfig) -> (Logger, AsyncGuard)
where
    D: Drain<Ok = (), Err = slog::Never> + Send + 'static,
{
    let overflow_strategy = if config.block_on_overflow {
        OverflowStrategy::Block
    } else {
        OverflowStrategy::Drop
    };
    let (drain, guard) = slog_async::Async::new(drain.filter_level(config.level).fuse())
        .chan_size(ASYNC_CHAN_SIZE)
        .overflow_strategy(overflow_strategy)
        .thread_name("jetton-logger".to_string())
        .build_with_guard();
    (Logger::root(drain.fuse(), o!()), guard)
}

/// A logger that discards everything. Meant for tests.
pub fn no_op_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}
