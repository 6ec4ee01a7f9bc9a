use crate::config::UploadConfig;
use crate::error::{AppError, AppResult, UploadError};
use crate::nav::NavigationPayload;
use eframe::egui;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod analysis;
pub mod picker;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// Where a selected file came from. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOrigin {
    Path(PathBuf),
    InMemory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub byte_size: u64,
    pub origin: FileOrigin,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let metadata = fs::metadata(path).map_err(|source| AppError::FileMetadata {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            name: display_name(path),
            byte_size: metadata.len(),
            origin: FileOrigin::Path(path.to_path_buf()),
        })
    }

    /// Native drops carry a path, web drops carry bytes. A drop with
    /// neither is skipped.
    pub fn from_dropped(file: &egui::DroppedFile) -> AppResult<Option<Self>> {
        if let Some(path) = &file.path {
            let mut selected = Self::from_path(path)?;
            if !file.name.is_empty() {
                selected.name = file.name.clone();
            }
            return Ok(Some(selected));
        }

        Ok(file.bytes.as_ref().map(|bytes| Self {
            name: file.name.clone(),
            byte_size: bytes.len() as u64,
            origin: FileOrigin::InMemory,
        }))
    }

    pub fn size_label(&self) -> String {
        format_megabytes(self.byte_size)
    }

    fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

impl UploadConfig {
    pub fn check(&self, file: &SelectedFile) -> Result<(), UploadError> {
        if !self.enforce_limits {
            return Ok(());
        }

        let accepted = file.extension().is_some_and(|ext| {
            self.accepted_extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(&ext))
        });
        if !accepted {
            return Err(UploadError::UnsupportedFormat {
                name: file.name.clone(),
                accepted: self.accepted_extensions.join(", "),
            });
        }

        if file.byte_size > self.max_bytes {
            return Err(UploadError::FileTooLarge {
                name: file.name.clone(),
                size_mb: file.size_label(),
                max_mb: format_megabytes(self.max_bytes),
            });
        }

        Ok(())
    }
}

/// Drag-and-drop target holding at most one file.
#[derive(Debug, Default)]
pub struct DropZone {
    dragging: bool,
    selected: Option<SelectedFile>,
}

impl DropZone {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn drag_enter(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    pub fn drop(&mut self, files: Vec<SelectedFile>, notify: &mut dyn FnMut(Option<&SelectedFile>)) {
        self.dragging = false;
        self.select_first(files, notify);
    }

    pub fn pick(&mut self, files: Vec<SelectedFile>, notify: &mut dyn FnMut(Option<&SelectedFile>)) {
        self.select_first(files, notify);
    }

    pub fn remove(&mut self, notify: &mut dyn FnMut(Option<&SelectedFile>)) {
        self.selected = None;
        notify(None);
    }

    fn select_first(
        &mut self,
        files: Vec<SelectedFile>,
        notify: &mut dyn FnMut(Option<&SelectedFile>),
    ) {
        let Some(first) = files.into_iter().next() else {
            return;
        };
        self.selected = Some(first);
        notify(self.selected.as_ref());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Analyzing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeRequest {
    Started(NavigationPayload),
    AlreadyRunning,
}

pub struct UploadScreen {
    drop_zone: DropZone,
    limits: UploadConfig,
    selected_name: Option<String>,
    phase: UploadPhase,
}

impl UploadScreen {
    pub fn new(limits: UploadConfig) -> Self {
        Self {
            drop_zone: DropZone::default(),
            limits,
            selected_name: None,
            phase: UploadPhase::Idle,
        }
    }

    pub fn drop_zone(&self) -> &DropZone {
        &self.drop_zone
    }

    pub fn limits(&self) -> &UploadConfig {
        &self.limits
    }

    #[cfg(test)]
    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase == UploadPhase::Analyzing
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected_name.as_deref()
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        if self.is_analyzing() {
            return;
        }
        match (hovering, self.drop_zone.is_dragging()) {
            (true, false) => self.drop_zone.drag_enter(),
            (false, true) => self.drop_zone.drag_leave(),
            _ => {}
        }
    }

    pub fn drop_files(&mut self, files: Vec<SelectedFile>) -> Result<(), UploadError> {
        if self.is_analyzing() {
            self.drop_zone.drag_leave();
            return Ok(());
        }
        if let Err(err) = self.check_first(&files) {
            self.drop_zone.drag_leave();
            return Err(err);
        }
        let selected_name = &mut self.selected_name;
        self.drop_zone
            .drop(files, &mut |file| Self::record_selection(selected_name, file));
        Ok(())
    }

    pub fn pick_files(&mut self, files: Vec<SelectedFile>) -> Result<(), UploadError> {
        if self.is_analyzing() {
            return Ok(());
        }
        self.check_first(&files)?;
        let selected_name = &mut self.selected_name;
        self.drop_zone
            .pick(files, &mut |file| Self::record_selection(selected_name, file));
        Ok(())
    }

    pub fn remove_file(&mut self) {
        if self.is_analyzing() {
            return;
        }
        let selected_name = &mut self.selected_name;
        self.drop_zone
            .remove(&mut |file| Self::record_selection(selected_name, file));
    }

    /// Guards the analysis step. A second call while busy is a no-op.
    pub fn analyze(&mut self) -> Result<AnalyzeRequest, UploadError> {
        if self.is_analyzing() {
            return Ok(AnalyzeRequest::AlreadyRunning);
        }
        let Some(name) = self.selected_name.clone() else {
            return Err(UploadError::NoFileSelected);
        };

        self.phase = UploadPhase::Analyzing;
        info!(file = %name, "analysis started");
        Ok(AnalyzeRequest::Started(NavigationPayload::analyzed(name)))
    }

    fn check_first(&self, files: &[SelectedFile]) -> Result<(), UploadError> {
        match files.first() {
            Some(file) => self.limits.check(file),
            None => Ok(()),
        }
    }

    fn record_selection(slot: &mut Option<String>, file: Option<&SelectedFile>) {
        match file {
            Some(file) => debug!(file = %file.name, bytes = file.byte_size, "file selected"),
            None => debug!("file selection cleared"),
        }
        *slot = file.map(|file| file.name.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_file(name: &str, byte_size: u64) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            byte_size,
            origin: FileOrigin::InMemory,
        }
    }

    fn recorder(log: &mut Vec<Option<String>>) -> impl FnMut(Option<&SelectedFile>) + '_ {
        move |file| log.push(file.map(|file| file.name.clone()))
    }

    #[test]
    fn drag_highlight_follows_enter_leave_and_drop() {
        let mut zone = DropZone::default();
        let mut log = Vec::new();

        zone.drag_enter();
        assert!(zone.is_dragging());
        zone.drag_leave();
        assert!(!zone.is_dragging());

        zone.drag_enter();
        zone.drop(vec![memory_file("brief.pdf", 10)], &mut recorder(&mut log));
        assert!(!zone.is_dragging());
        assert_eq!(log, vec![Some("brief.pdf".to_string())]);
    }

    #[test]
    fn second_selection_replaces_the_first() {
        let mut zone = DropZone::default();
        let mut log = Vec::new();

        zone.pick(vec![memory_file("first.pdf", 1)], &mut recorder(&mut log));
        zone.drop(
            vec![memory_file("second.docx", 2), memory_file("third.pdf", 3)],
            &mut recorder(&mut log),
        );

        assert_eq!(zone.selected().map(|f| f.name.as_str()), Some("second.docx"));
        assert_eq!(
            log,
            vec![Some("first.pdf".to_string()), Some("second.docx".to_string())]
        );
    }

    #[test]
    fn empty_file_list_is_ignored_without_notification() {
        let mut zone = DropZone::default();
        let mut log = Vec::new();

        zone.pick(vec![memory_file("kept.pdf", 1)], &mut recorder(&mut log));
        zone.drag_enter();
        zone.drop(Vec::new(), &mut recorder(&mut log));

        assert!(!zone.is_dragging());
        assert_eq!(zone.selected().map(|f| f.name.as_str()), Some("kept.pdf"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn remove_clears_and_notifies_with_empty_selection() {
        let mut zone = DropZone::default();
        let mut log = Vec::new();

        zone.pick(vec![memory_file("brief.pdf", 1)], &mut recorder(&mut log));
        zone.remove(&mut recorder(&mut log));

        assert!(zone.selected().is_none());
        assert_eq!(log, vec![Some("brief.pdf".to_string()), None]);
    }

    #[test]
    fn analyze_without_file_is_rejected_and_stays_idle() {
        let mut screen = UploadScreen::new(UploadConfig::default());
        assert_eq!(screen.analyze(), Err(UploadError::NoFileSelected));
        assert_eq!(screen.phase(), UploadPhase::Idle);
        assert_eq!(
            UploadError::NoFileSelected.to_string(),
            "Please upload a file first"
        );

        screen
            .pick_files(vec![memory_file("brief.pdf", 1)])
            .expect("pick should succeed");
        screen.remove_file();
        assert_eq!(screen.analyze(), Err(UploadError::NoFileSelected));
        assert!(!screen.is_analyzing());
    }

    #[test]
    fn analyze_with_file_carries_its_name_and_is_idempotent() {
        let mut screen = UploadScreen::new(UploadConfig::default());
        screen
            .drop_files(vec![memory_file("smith-v-jones.pdf", 2048)])
            .expect("drop should succeed");

        let request = screen.analyze().expect("analysis should start");
        assert_eq!(
            request,
            AnalyzeRequest::Started(NavigationPayload::analyzed("smith-v-jones.pdf"))
        );
        assert!(screen.is_analyzing());
        assert_eq!(screen.analyze(), Ok(AnalyzeRequest::AlreadyRunning));
    }

    #[test]
    fn selection_is_locked_while_analyzing() {
        let mut screen = UploadScreen::new(UploadConfig::default());
        screen
            .pick_files(vec![memory_file("original.pdf", 1)])
            .expect("pick should succeed");
        screen.analyze().expect("analysis should start");

        screen.remove_file();
        screen
            .drop_files(vec![memory_file("late.pdf", 1)])
            .expect("drop while busy is ignored");
        screen.set_hovering(true);

        assert_eq!(screen.selected_name(), Some("original.pdf"));
        assert!(!screen.drop_zone().is_dragging());
    }

    #[test]
    fn limits_are_advisory_by_default() {
        let mut screen = UploadScreen::new(UploadConfig::default());
        screen
            .pick_files(vec![memory_file("evidence.mp4", 50 * 1024 * 1024)])
            .expect("advisory limits accept anything");
        assert_eq!(screen.selected_name(), Some("evidence.mp4"));
    }

    #[test]
    fn enforced_limits_reject_without_changing_selection() {
        let limits = UploadConfig {
            enforce_limits: true,
            ..UploadConfig::default()
        };
        let mut screen = UploadScreen::new(limits);
        screen
            .pick_files(vec![memory_file("Brief.PDF", 1024)])
            .expect("pdf within limits is accepted");

        let wrong_type = screen.drop_files(vec![memory_file("notes.txt", 10)]);
        assert!(matches!(wrong_type, Err(UploadError::UnsupportedFormat { .. })));

        let too_big = screen.pick_files(vec![memory_file("huge.docx", 11 * 1024 * 1024)]);
        assert_eq!(
            too_big,
            Err(UploadError::FileTooLarge {
                name: "huge.docx".to_string(),
                size_mb: "11.00 MB".to_string(),
                max_mb: "10.00 MB".to_string(),
            })
        );

        assert_eq!(screen.selected_name(), Some("Brief.PDF"));
        assert!(!screen.drop_zone().is_dragging());
    }

    #[test]
    fn size_label_uses_two_decimal_megabytes() {
        assert_eq!(format_megabytes(0), "0.00 MB");
        assert_eq!(format_megabytes(1_572_864), "1.50 MB");
        assert_eq!(memory_file("a.pdf", 10 * 1024 * 1024).size_label(), "10.00 MB");
    }

    #[test]
    fn from_path_reads_name_and_size_only() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("motion.pdf");
        fs::write(&path, vec![0u8; 4096]).expect("fixture should write");

        let file = SelectedFile::from_path(&path).expect("metadata should load");
        assert_eq!(file.name, "motion.pdf");
        assert_eq!(file.byte_size, 4096);
        assert_eq!(file.origin, FileOrigin::Path(path));
    }

    #[test]
    fn from_path_reports_missing_files() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let error = SelectedFile::from_path(&dir.path().join("gone.pdf"))
            .expect_err("missing file should fail");
        assert!(matches!(error, AppError::FileMetadata { .. }));
    }

    #[test]
    fn dropped_bytes_without_path_stay_in_memory() {
        let dropped = egui::DroppedFile {
            name: "upload.docx".to_string(),
            bytes: Some(vec![1u8, 2, 3].into()),
            ..Default::default()
        };
        let file = SelectedFile::from_dropped(&dropped)
            .expect("in-memory drop should not fail")
            .expect("bytes should produce a file");
        assert_eq!(file.byte_size, 3);
        assert_eq!(file.origin, FileOrigin::InMemory);

        let empty = egui::DroppedFile::default();
        assert_eq!(SelectedFile::from_dropped(&empty).ok(), Some(None));
    }
}
