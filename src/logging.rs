use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where the loader reports failures it swallows.
///
/// The loader never holds a global logger; pass one of these in instead.
pub trait ErrorSink {
    fn error(&self, message: &str);
}

impl<T: ErrorSink + ?Sized> ErrorSink for &T {
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Forwards to `tracing::error!`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::error!(target: "llmkeys::loader", "{}", message);
    }
}

/// Install the stderr subscriber used by the binary.
///
/// `RUST_LOG` wins when set; otherwise only warnings and errors from this crate.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "llmkeys=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::ConfigLoader;
    use serde_json::json;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tempfile::NamedTempFile;
    use tracing::Level;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().unwrap().clone())
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    #[test]
    fn tracing_sink_emits_one_error_for_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not valid json").unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let value = tracing::subscriber::with_default(subscriber, || {
            ConfigLoader::new().load(file.path())
        });

        assert_eq!(value, json!({}));
        let lines = captured.lines();
        assert_eq!(lines.len(), 1, "{:?}", lines);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("llmkeys::loader"));
        assert!(lines[0].contains("Failed to load LLM API Key config"));
    }

    #[test]
    fn missing_file_emits_no_error() {
        let dir = tempfile::TempDir::new().unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            ConfigLoader::new().load(dir.path().join("absent.json"))
        });

        assert!(captured.lines().iter().all(|line| !line.contains("ERROR")));
    }
}
