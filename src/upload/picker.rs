use crate::event::AppEvent;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// Native "Choose File" dialog, run off the UI thread.
#[derive(Clone)]
pub struct FilePicker {
    runtime_handle: Handle,
    tx: mpsc::Sender<AppEvent>,
}

impl FilePicker {
    pub fn new(runtime_handle: Handle, tx: mpsc::Sender<AppEvent>) -> Self {
        Self { runtime_handle, tx }
    }

    pub fn open(&self, accepted_extensions: &[String], repaint: egui::Context) {
        let tx = self.tx.clone();
        let pick = rfd::AsyncFileDialog::new()
            .set_title("Choose a legal document")
            .add_filter("Legal documents", accepted_extensions)
            .pick_file();

        self.runtime_handle.spawn(async move {
            let Some(handle) = pick.await else {
                debug!("file dialog dismissed");
                return;
            };
            if deliver(&tx, handle.path().to_path_buf()) {
                repaint.request_repaint();
            }
        });
    }
}

/// Returns false when the UI thread is gone.
fn deliver(tx: &mpsc::Sender<AppEvent>, path: PathBuf) -> bool {
    if tx.send(AppEvent::FilesPicked(vec![path])).is_err() {
        warn!("file picked after the window closed");
        return false;
    }
    true
}
