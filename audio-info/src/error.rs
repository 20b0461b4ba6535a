use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Monitor error: {0}")]
    Monitor(#[from] audio_monitor::MonitorError),

    #[error("Session error: {0}")]
    Session(#[from] audio_session::SessionError),
}
