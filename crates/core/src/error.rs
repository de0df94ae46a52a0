use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("temperature unavailable: {0}")]
    TemperatureUnavailable(String),

    #[error("cannot run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}{}", stderr_suffix(.stderr))]
    CommandFailed {
        program: String,
        status:  String,
        stderr:  String,
    },

    #[error("No camera found.")]
    NoCamera,

    #[error("worker error: {0}")]
    Worker(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_camera_message_is_user_facing() {
        assert_eq!(Error::NoCamera.to_string(), "No camera found.");
    }

    #[test]
    fn command_failed_includes_stderr_when_present() {
        let err = Error::CommandFailed {
            program: "speedtest-cli".into(),
            status:  "exit status: 1".into(),
            stderr:  "network unreachable".into(),
        };
        assert_eq!(
            err.to_string(),
            "'speedtest-cli' exited with exit status: 1: network unreachable"
        );

        let quiet = Error::CommandFailed {
            program: "false".into(),
            status:  "exit status: 1".into(),
            stderr:  String::new(),
        };
        assert_eq!(quiet.to_string(), "'false' exited with exit status: 1");
    }
}
