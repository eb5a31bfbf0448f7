use dioxus::prelude::*;

use crate::timing::{sleep_ms, use_animation};

pub const PHRASES: &[&str] = &[
    "Java Developer",
    "Full-Stack Developer",
    "Spring Boot Expert",
    "Problem Solver",
    "Tech Enthusiast",
];

pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const FULL_PAUSE_MS: u32 = 2000;
pub const EMPTY_PAUSE_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PausingFull,
    Deleting,
    PausingEmpty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    paused: bool,
}

impl TypingState {
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn phase(&self) -> TypingPhase {
        match (self.deleting, self.paused) {
            (false, false) => TypingPhase::Typing,
            (true, true) => TypingPhase::PausingFull,
            (true, false) => TypingPhase::Deleting,
            (false, true) => TypingPhase::PausingEmpty,
        }
    }

    /// Applies one character mutation and returns the text to display plus
    /// how long to wait before the next step. Returns `None` when there is
    /// nothing to type.
    pub fn step(&mut self, phrases: &[&str]) -> Option<TypingStep> {
        if phrases.iter().all(|phrase| phrase.is_empty()) {
            return None;
        }
        self.phrase_index %= phrases.len();
        while phrases[self.phrase_index].is_empty() {
            self.phrase_index = (self.phrase_index + 1) % phrases.len();
            self.char_index = 0;
            self.deleting = false;
        }

        let phrase = phrases[self.phrase_index];
        let length = phrase.chars().count();
        self.paused = false;

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(length);
        }
        let text: String = phrase.chars().take(self.char_index).collect();

        let delay_ms = if !self.deleting && self.char_index == length {
            self.deleting = true;
            self.paused = true;
            FULL_PAUSE_MS
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.paused = true;
            self.phrase_index = (self.phrase_index + 1) % phrases.len();
            EMPTY_PAUSE_MS
        } else if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };

        Some(TypingStep { text, delay_ms })
    }
}

#[component]
pub fn TypingText() -> Element {
    let mut text = use_signal(String::new);

    use_animation(move || async move {
        tracing::debug!("typing: start");
        let mut state = TypingState::default();
        while let Some(step) = state.step(PHRASES) {
            text.set(step.text);
            sleep_ms(step.delay_ms).await;
        }
    });

    rsx! {
        span { id: "typing", class: "typing-text", "{text}" }
        span { class: "typing-cursor", "|" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(state: &mut TypingState, phrases: &[&str], steps: usize) -> Vec<TypingStep> {
        (0..steps).filter_map(|_| state.step(phrases)).collect()
    }

    #[test]
    fn types_then_deletes_then_advances() {
        let mut state = TypingState::default();
        let steps = run(&mut state, &["abc", "de"], 8);
        let texts: Vec<&str> = steps.iter().map(|step| step.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "ab", "abc", "ab", "a", "", "d", "de"]);
        let delays: Vec<u32> = steps.iter().map(|step| step.delay_ms).collect();
        assert_eq!(
            delays,
            vec![
                TYPE_DELAY_MS,
                TYPE_DELAY_MS,
                FULL_PAUSE_MS,
                DELETE_DELAY_MS,
                DELETE_DELAY_MS,
                EMPTY_PAUSE_MS,
                TYPE_DELAY_MS,
                FULL_PAUSE_MS,
            ]
        );
    }

    #[test]
    fn phases_follow_the_cycle() {
        let mut state = TypingState::default();
        assert_eq!(state.phase(), TypingPhase::Typing);
        state.step(&["ab"]);
        assert_eq!(state.phase(), TypingPhase::Typing);
        state.step(&["ab"]);
        assert_eq!(state.phase(), TypingPhase::PausingFull);
        state.step(&["ab"]);
        assert_eq!(state.phase(), TypingPhase::Deleting);
        state.step(&["ab"]);
        assert_eq!(state.phase(), TypingPhase::PausingEmpty);
        state.step(&["ab"]);
        assert_eq!(state.phase(), TypingPhase::Typing);
    }

    #[test]
    fn wraps_back_to_first_phrase() {
        let mut state = TypingState::default();
        // "x" takes two steps (type, delete) per cycle.
        run(&mut state, &["x", "y"], 4);
        assert_eq!(state.phrase_index(), 0);
        assert_eq!(state.step(&["x", "y"]).map(|step| step.text), Some("x".to_string()));
    }

    #[test]
    fn prefixes_are_character_based() {
        let mut state = TypingState::default();
        let steps = run(&mut state, &["né"], 2);
        assert_eq!(steps[1].text, "né");
    }

    #[test]
    fn empty_phrases_are_skipped() {
        let mut state = TypingState::default();
        let first = state.step(&["", "ok"]).map(|step| step.text);
        assert_eq!(first, Some("o".to_string()));
        assert_eq!(state.step(&[]), None);
        assert_eq!(state.step(&["", ""]), None);
    }
}
