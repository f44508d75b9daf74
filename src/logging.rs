use crate::config::Log;
use std::error::Error;
use std::str::FromStr;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, registry};

// The host usually owns the global subscriber; this one is only installed
// when it asks for it.
pub fn setup_logging(cfg: &Log) -> Result<(), Box<dyn Error + Send + Sync>> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    logging_subscriber(cfg, &env).try_init()?;
    Ok(())
}

pub fn logging_subscriber(
    cfg: &Log,
    env_directives: &str,
) -> impl Subscriber + for<'a> registry::LookupSpan<'a> + Send + Sync + 'static {
    Registry::default()
        .with(construct_env_filter(cfg, env_directives))
        .with(construct_console_layer(cfg))
}

fn construct_env_filter(cfg: &Log, env_directives: &str) -> EnvFilter {
    let mut filter = EnvFilter::builder()
        .with_default_directive(
            LevelFilter::from_str(&cfg.level)
                .unwrap_or(LevelFilter::INFO)
                .into(),
        )
        .parse_lossy(env_directives);

    for directive in &cfg.directives {
        match directive.parse() {
            Ok(directive) => {
                filter = filter.add_directive(directive);
            }

            Err(e) => {
                eprintln!("Skipping invalid log directive '{:?}': {}", directive, e);
            }
        }
    }

    filter
}

// stdout belongs to the host application
fn construct_console_layer<S>(cfg: &Log) -> Option<Box<dyn Layer<S> + Send + Sync>>
where
    S: Subscriber + for<'a> registry::LookupSpan<'a>,
{
    if !cfg.enable_console {
        return None;
    }

    Some(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(cfg.ansi)
            .with_target(true)
            .with_line_number(true)
            .with_level(true)
            .with_span_events(FmtSpan::NONE)
            .compact()
            .boxed(),
    )
}
