//! Logger capability
//!
//! Adapters take a logger by trait so recovery paths can be asserted on in
//! tests. Production code forwards to the `log` facade.

pub trait Logger: Send + Sync {
    /// `detail` is the failure detail, appended verbatim after `message`.
    fn error(&self, message: &str, detail: &str);
    fn info(&self, message: &str);
}

/// Forwards to the `log` facade configured by the shell.
pub struct FacadeLogger;

impl Logger for FacadeLogger {
    fn error(&self, message: &str, detail: &str) {
        log::error!("{message}{detail}");
    }

    fn info(&self, message: &str) {
        log::info!("{message}");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Records every error line for assertions.
    #[derive(Default)]
    pub struct RecordingLogger {
        pub errors: Mutex<Vec<(String, String)>>,
    }

    impl Logger for RecordingLogger {
        fn error(&self, message: &str, detail: &str) {
            self.errors
                .lock()
                .unwrap()
                .push((message.to_string(), detail.to_string()));
        }

        fn info(&self, _message: &str) {}
    }
}
