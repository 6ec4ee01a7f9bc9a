use tracing::debug;

pub const ASSISTANT_REPLY: &str = "I've analyzed your legal query. Based on similar precedents and legal frameworks, I recommend reviewing sections 23-A and 45-B of the relevant statute. Would you like me to provide more detailed analysis?";

pub const ASSISTANT_REASONING: &str = "This response is based on pattern matching with 1,245 similar legal cases and cross-referencing with current statutory provisions.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
    pub explanation: Option<String>,
}

impl ChatTurn {
    fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            explanation: None,
        }
    }

    fn canned_reply() -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: ASSISTANT_REPLY.to_string(),
            explanation: Some(ASSISTANT_REASONING.to_string()),
        }
    }
}

/// Append-only turn list for one visit to the home screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Transcript {
    #[default]
    Empty,
    HasTurns(Vec<ChatTurn>),
}

impl Transcript {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn turns(&self) -> &[ChatTurn] {
        match self {
            Self::Empty => &[],
            Self::HasTurns(turns) => turns,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.turns().len()
    }

    fn push(&mut self, turn: ChatTurn) {
        match self {
            Self::Empty => *self = Self::HasTurns(vec![turn]),
            Self::HasTurns(turns) => turns.push(turn),
        }
    }
}

/// Enter submits; Shift+Enter is reserved for a newline.
pub fn is_submit_chord(enter_pressed: bool, shift_held: bool) -> bool {
    enter_pressed && !shift_held
}

#[derive(Debug, Default)]
pub struct ChatScreen {
    transcript: Transcript,
    pub input: String,
    scroll_to_bottom: bool,
}

impl ChatScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Returns whether the input was accepted. Blank input leaves both the
    /// transcript and the buffer untouched.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        let text = std::mem::take(&mut self.input);
        debug!(chars = text.chars().count(), "chat submission");
        self.transcript.push(ChatTurn::user(text));
        self.transcript.push(ChatTurn::canned_reply());
        self.scroll_to_bottom = true;
        true
    }

    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_never_changes_transcript() {
        let mut chat = ChatScreen::new();
        for input in ["", "   ", "\n\t "] {
            chat.input = input.to_string();
            assert!(!chat.submit());
            assert!(chat.transcript().is_empty());
            assert_eq!(chat.input, input);
        }
    }

    #[test]
    fn submission_appends_user_then_assistant_and_clears_input() {
        let mut chat = ChatScreen::new();
        chat.input = "  Is a verbal lease binding? ".to_string();

        assert!(chat.submit());
        let turns = chat.transcript().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, Speaker::User);
        assert_eq!(turns[0].text, "  Is a verbal lease binding? ");
        assert!(turns[0].explanation.is_none());
        assert_eq!(turns[1].speaker, Speaker::Assistant);
        assert_eq!(turns[1].text, ASSISTANT_REPLY);
        assert_eq!(turns[1].explanation.as_deref(), Some(ASSISTANT_REASONING));
        assert!(chat.input.is_empty());
        assert!(chat.take_scroll_request());
        assert!(!chat.take_scroll_request());
    }

    #[test]
    fn transcript_only_grows_in_submission_order() {
        let mut chat = ChatScreen::new();
        for question in ["first", "second", "third"] {
            chat.input = question.to_string();
            chat.submit();
        }

        let turns = chat.transcript().turns();
        assert_eq!(chat.transcript().len(), 6);
        let user_texts: Vec<_> = turns
            .iter()
            .filter(|turn| turn.speaker == Speaker::User)
            .map(|turn| turn.text.as_str())
            .collect();
        assert_eq!(user_texts, ["first", "second", "third"]);
        assert!(turns
            .chunks(2)
            .all(|pair| pair[0].speaker == Speaker::User && pair[1].speaker == Speaker::Assistant));
    }

    #[test]
    fn shift_enter_does_not_submit() {
        assert!(is_submit_chord(true, false));
        assert!(!is_submit_chord(true, true));
        assert!(!is_submit_chord(false, false));
    }
}
