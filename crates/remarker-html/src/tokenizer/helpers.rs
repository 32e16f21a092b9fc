//! Helper functions for the tokenizer.
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Token emission, including the pending text run

use super::core::{HTMLTokenizer, TokenizerState};
use super::token::Token;

/// Elements whose content is raw text up to the matching end tag.
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Switch to the X state"
    ///
    /// Transitions to a new state. The next character will be consumed on the
    /// next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Consume the next input character"
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// "If the next few characters are..."
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        self.input[self.current_pos..].starts_with(target)
    }

    /// ASCII case-insensitive variant of [`Self::next_few_characters_are`].
    #[must_use]
    pub fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        self.input[self.current_pos..]
            .get(..target.len())
            .is_some_and(|next| next.eq_ignore_ascii_case(target))
    }

    /// Consume the given string from the input.
    /// Caller must have already verified the characters are present.
    pub const fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HTMLTokenizer {
    /// Emit the pending run of text, if any, as a single text token.
    pub(super) fn flush_text(&mut self) {
        if !self.pending_text.is_empty() {
            let data = std::mem::take(&mut self.pending_text);
            self.token_stream.push(Token::Text { data });
        }
    }

    /// Emit a non-text token, flushing pending text first so order is kept.
    pub(super) fn emit_token(&mut self, token: Token) {
        self.flush_text();
        self.token_stream.push(token);
    }

    /// "Emit the current tag token" and return to the data state, or to the
    /// raw text state after `<script>` and `<style>`.
    pub(super) fn emit_current_tag(&mut self) {
        let Some(mut token) = self.current_token.take() else {
            self.switch_to(TokenizerState::Data);
            return;
        };
        token.remove_duplicate_attributes();

        self.raw_text_end = match &token {
            Token::StartTag {
                name,
                self_closing: false,
                ..
            } if RAW_TEXT_ELEMENTS.contains(&name.as_str()) => Some(format!("/{name}")),
            _ => None,
        };
        self.switch_to(if self.raw_text_end.is_some() {
            TokenizerState::RawText
        } else {
            TokenizerState::Data
        });
        self.emit_token(token);
    }

    /// Emit the comment or declaration collected so far.
    pub(super) fn emit_buffered(&mut self, as_comment: bool) {
        let data = std::mem::take(&mut self.comment_buffer);
        self.emit_token(if as_comment {
            Token::Comment { data }
        } else {
            Token::Declaration { data }
        });
    }
}
