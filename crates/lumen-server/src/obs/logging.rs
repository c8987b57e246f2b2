//! Global `tracing` subscriber.

use tracing::Dispatch;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use lumen_core::error::{LumenError, Result};

use crate::config::{LogFormat, LogSection};

/// Install the process-wide subscriber on stderr. `RUST_LOG` overrides
/// `cfg.level`.
pub fn init(cfg: &LogSection) -> Result<()> {
    dispatch(cfg, std::io::stderr)?
        .try_init()
        .map_err(|e| LumenError::Internal(format!("tracing init failed: {e}")))
}

/// Subscriber for `cfg`, writing formatted events to `writer`.
pub fn dispatch<W>(cfg: &LogSection, writer: W) -> Result<Dispatch>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = build_env_filter(cfg)?;
    let registry = tracing_subscriber::registry().with(filter);

    let dispatch = match cfg.format {
        LogFormat::Json => Dispatch::new(
            registry.with(
                fmt::layer()
                    .with_writer(writer)
                    .json()
                    .with_current_span(false)
                    .with_target(true),
            ),
        ),
        LogFormat::Text => Dispatch::new(
            registry.with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true)),
        ),
    };
    Ok(dispatch)
}

fn build_env_filter(cfg: &LogSection) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&cfg.level).map_err(|e| {
            LumenError::BadRequest(format!("invalid log level '{}': {e}", cfg.level))
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'w> MakeWriter<'w> for Buffer {
        type Writer = Buffer;
        fn make_writer(&'w self) -> Self::Writer {
            self.clone()
        }
    }

    impl Buffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    // Installing the global subscriber is one-shot per process, so only the
    // filter parsing is checked here.
    #[test]
    fn level_directives_parse() {
        let cfg = LogSection { level: "lumen_server=debug,info".into(), ..LogSection::default() };
        assert!(build_env_filter(&cfg).is_ok());
    }

    #[test]
    fn json_events_go_to_the_given_writer() {
        let buf = Buffer::default();
        let dispatch = dispatch(&LogSection::default(), buf.clone()).unwrap();
        tracing::dispatcher::with_default(&dispatch, || {
            tracing::error!(endpoint = "random", "Random endpoint failed");
        });

        let out = buf.text();
        let line = out.lines().next().unwrap();
        assert!(line.starts_with('{') && line.ends_with('}'), "{line}");
        assert!(line.contains(r#""level":"ERROR""#), "{line}");
        assert!(line.contains(r#""message":"Random endpoint failed""#), "{line}");
        assert!(line.contains(r#""endpoint":"random""#), "{line}");
    }

    #[test]
    fn text_format_is_plain() {
        let buf = Buffer::default();
        let cfg = LogSection { format: LogFormat::Text, ..LogSection::default() };
        let dispatch = dispatch(&cfg, buf.clone()).unwrap();
        tracing::dispatcher::with_default(&dispatch, || {
            tracing::info!("Homepage accessed");
        });

        let out = buf.text();
        assert!(out.contains("INFO"), "{out}");
        assert!(out.contains("Homepage accessed"), "{out}");
        assert!(!out.contains('\u{1b}'), "{out}");
    }
}
