use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use numfield_cli::commands::{BlurRequest, parse_config, run_blur};
use numfield_cli::logging::REDACTED_VALUE;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn blur_logged_at(level: Level) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(captured.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let config = parse_config(r#"{"name": "amount", "countDecimal": 2}"#).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        run_blur(
            config,
            &BlurRequest {
                value: "987.654".to_string(),
                ..BlurRequest::default()
            },
        )
        .unwrap()
    });
    captured.contents()
}

#[test]
fn debug_logs_carry_no_field_values() {
    let output = blur_logged_at(Level::DEBUG);
    assert!(output.contains("value normalized"), "{output}");
    assert!(!output.contains("987"), "{output}");
    assert!(!output.contains(REDACTED_VALUE), "{output}");
}

#[test]
fn trace_logs_redact_values_without_log_data() {
    let output = blur_logged_at(Level::TRACE);
    assert!(output.contains("normalized value"), "{output}");
    assert!(output.contains(REDACTED_VALUE), "{output}");
    assert!(!output.contains("987"), "{output}");
}
