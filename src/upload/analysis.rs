use crate::event::AppEvent;
use crate::nav::NavigationPayload;
use crate::notify::ToastId;
use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{info, warn};

/// Stands in for document analysis: waits a fixed delay, then reports
/// completion. Scheduled runs always finish.
#[derive(Clone)]
pub struct AnalysisRunner {
    runtime_handle: Handle,
    tx: mpsc::Sender<AppEvent>,
    delay: Duration,
}

impl AnalysisRunner {
    pub fn new(runtime_handle: Handle, tx: mpsc::Sender<AppEvent>, delay: Duration) -> Self {
        Self {
            runtime_handle,
            tx,
            delay,
        }
    }

    pub fn schedule(
        &self,
        payload: NavigationPayload,
        toast: ToastId,
        repaint: Option<egui::Context>,
    ) {
        let tx = self.tx.clone();
        let delay = self.delay;
        info!(file = %payload.uploaded_file, delay_ms = delay.as_millis() as u64, "analysis scheduled");

        self.runtime_handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx
                .send(AppEvent::AnalysisComplete { payload, toast })
                .is_err()
            {
                warn!("analysis finished after the window closed");
                return;
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}
