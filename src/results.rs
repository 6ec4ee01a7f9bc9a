use crate::cases::{average_confidence, find_case, similar_cases, CaseRecord};
use crate::nav::NavigationPayload;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { case_id: u32 },
}

#[derive(Debug)]
pub struct ResultsScreen {
    payload: NavigationPayload,
    modal: ModalState,
}

impl ResultsScreen {
    pub fn new(payload: Option<NavigationPayload>, placeholder_file_name: &str) -> Self {
        let payload = payload.unwrap_or_else(|| NavigationPayload {
            uploaded_file: placeholder_file_name.to_string(),
            analysis_complete: false,
        });
        debug!(
            file = %payload.uploaded_file,
            analysis_complete = payload.analysis_complete,
            "results opened"
        );
        Self {
            payload,
            modal: ModalState::Closed,
        }
    }

    pub fn uploaded_file(&self) -> &str {
        &self.payload.uploaded_file
    }

    #[cfg(test)]
    pub fn payload(&self) -> &NavigationPayload {
        &self.payload
    }

    pub fn cases(&self) -> &'static [CaseRecord] {
        similar_cases()
    }

    pub fn average_confidence(&self) -> u8 {
        average_confidence(self.cases()).unwrap_or(0)
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// Returns whether a modal opened. Unknown ids leave the state alone.
    pub fn open_case(&mut self, case_id: u32) -> bool {
        if find_case(case_id).is_none() {
            return false;
        }
        debug!(case_id, "case modal opened");
        self.modal = ModalState::Open { case_id };
        true
    }

    pub fn close_case(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn selected_case(&self) -> Option<&'static CaseRecord> {
        match self.modal {
            ModalState::Closed => None,
            ModalState::Open { case_id } => find_case(case_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::Sentiment;

    fn screen() -> ResultsScreen {
        ResultsScreen::new(Some(NavigationPayload::analyzed("lease.pdf")), "placeholder.pdf")
    }

    #[test]
    fn results_ignore_the_analyzed_file_for_content() {
        let analyzed = screen();
        let placeholder = ResultsScreen::new(None, "case-document.pdf");

        assert_eq!(analyzed.cases(), placeholder.cases());
        assert_eq!(analyzed.uploaded_file(), "lease.pdf");
        assert!(analyzed.payload().analysis_complete);
        assert_eq!(placeholder.uploaded_file(), "case-document.pdf");
        assert!(!placeholder.payload().analysis_complete);
        assert_eq!(analyzed.average_confidence(), 86);
    }

    #[test]
    fn opening_a_card_scopes_modal_to_that_case() {
        let mut results = screen();
        assert_eq!(results.modal(), ModalState::Closed);

        assert!(results.open_case(3));
        let case = results.selected_case().expect("case should be selected");
        assert_eq!(case.title, "State v. Williams LLC");
        assert_eq!(
            case.citations,
            [
                "Corporate governance standards per Section 12 of Business Corporation Act",
                "Fiduciary duty principles established in Brown v. Capital Partners (2020)",
            ]
        );
        assert_eq!(case.sentiment, Sentiment::Negative);
    }

    #[test]
    fn closing_clears_selection_without_touching_cases() {
        let mut results = screen();
        let before = results.cases().to_vec();

        results.open_case(1);
        results.open_case(4);
        assert_eq!(results.modal(), ModalState::Open { case_id: 4 });
        results.close_case();

        assert_eq!(results.modal(), ModalState::Closed);
        assert!(results.selected_case().is_none());
        assert_eq!(results.cases(), before.as_slice());
    }

    #[test]
    fn unknown_case_id_does_not_open_modal() {
        let mut results = screen();
        assert!(!results.open_case(42));
        assert_eq!(results.modal(), ModalState::Closed);
    }
}
