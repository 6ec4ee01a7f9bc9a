use crate::nav::NavigationPayload;
use crate::notify::ToastId;
use std::path::PathBuf;

/// Messages from background tasks to the UI thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// `toast` is the loading toast raised when this run started.
    AnalysisComplete {
        payload: NavigationPayload,
        toast: ToastId,
    },
    FilesPicked(Vec<PathBuf>),
}
