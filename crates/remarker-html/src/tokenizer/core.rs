use strum_macros::Display;

use super::token::Token;

/// The tokenizer state machine.
///
/// A reduced version of the WHATWG tokenizer states: enough to read the
/// hand-written HTML 4 of the reference pages without ever failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Character data, `&` references, `<` opens a tag.
    Data,
    /// Content of `<script>`/`<style>`, up to the matching end tag.
    RawText,
    /// Just consumed `<`.
    TagOpen,
    /// Just consumed `</`.
    EndTagOpen,
    /// Reading a tag name.
    TagName,
    /// Between attributes.
    BeforeAttributeName,
    /// Reading an attribute name.
    AttributeName,
    /// After an attribute name, before `=` or the next attribute.
    AfterAttributeName,
    /// After `=`.
    BeforeAttributeValue,
    /// Inside `"..."`.
    AttributeValueDoubleQuoted,
    /// Inside `'...'`.
    AttributeValueSingleQuoted,
    /// Reading an unquoted value.
    AttributeValueUnquoted,
    /// Just consumed `/` inside a tag.
    SelfClosingStartTag,
    /// Inside `<!-- ... -->`.
    Comment,
    /// Inside `<!...>` or `<?...>` that is not a comment.
    BogusDeclaration,
}

/// Tokenizer for the reference documents.
///
/// Produces a flat token stream: call [`HTMLTokenizer::run`] once, then
/// take the tokens with [`HTMLTokenizer::into_tokens`].
pub struct HTMLTokenizer {
    pub(super) state: TokenizerState,
    pub(super) input: String,
    pub(super) current_pos: usize,
    pub(super) current_input_character: Option<char>,
    pub(super) current_token: Option<Token>,
    pub(super) token_stream: Vec<Token>,
    // When true, the next iteration of the main loop will not consume a new character.
    pub(super) reconsume: bool,
    /// Character data not yet emitted.
    pub(super) pending_text: String,
    /// Data of the comment or declaration being read.
    pub(super) comment_buffer: String,
    /// `/script` or `/style` while inside raw text.
    pub(super) raw_text_end: Option<String>,
}

impl HTMLTokenizer {
    /// Create a new tokenizer for the given input.
    #[must_use]
    pub const fn new(input: String) -> Self {
        Self {
            state: TokenizerState::Data,
            input,
            current_pos: 0,
            current_input_character: None,
            current_token: None,
            token_stream: Vec::new(),
            reconsume: false,
            pending_text: String::new(),
            comment_buffer: String::new(),
            raw_text_end: None,
        }
    }

    /// Consume the tokenizer and return the token stream.
    /// Call this after run() to get the tokens for the parser.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    /// Run the tokenizer to completion.
    pub fn run(&mut self) {
        loop {
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_input_character = self.consume();
            }

            let Some(c) = self.current_input_character else {
                self.handle_eof();
                break;
            };

            match self.state {
                TokenizerState::Data => self.handle_data_state(c),
                TokenizerState::RawText => self.handle_raw_text_state(c),
                TokenizerState::TagOpen => self.handle_tag_open_state(c),
                TokenizerState::EndTagOpen => self.handle_end_tag_open_state(c),
                TokenizerState::TagName => self.handle_tag_name_state(c),
                TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(c),
                TokenizerState::AttributeName => self.handle_attribute_name_state(c),
                TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(c),
                TokenizerState::BeforeAttributeValue => {
                    self.handle_before_attribute_value_state(c);
                }
                TokenizerState::AttributeValueDoubleQuoted => {
                    self.handle_attribute_value_quoted_state(c, '"');
                }
                TokenizerState::AttributeValueSingleQuoted => {
                    self.handle_attribute_value_quoted_state(c, '\'');
                }
                TokenizerState::AttributeValueUnquoted => {
                    self.handle_attribute_value_unquoted_state(c);
                }
                TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(c),
                TokenizerState::Comment => self.handle_comment_state(c),
                TokenizerState::BogusDeclaration => self.handle_bogus_declaration_state(c),
            }
        }
    }

    fn handle_data_state(&mut self, c: char) {
        match c {
            '&' => {
                let decoded = self.consume_character_reference();
                self.pending_text.push_str(&decoded);
            }
            '<' => self.switch_to(TokenizerState::TagOpen),
            _ => self.pending_text.push(c),
        }
    }

    fn handle_raw_text_state(&mut self, c: char) {
        let closes = c == '<'
            && self
                .raw_text_end
                .as_deref()
                .is_some_and(|end| self.next_few_characters_are_case_insensitive(end));
        if closes {
            self.raw_text_end = None;
            self.switch_to(TokenizerState::TagOpen);
        } else {
            self.pending_text.push(c);
        }
    }

    fn handle_tag_open_state(&mut self, c: char) {
        match c {
            '/' => self.switch_to(TokenizerState::EndTagOpen),
            '!' if self.next_few_characters_are("--") => {
                self.consume_string("--");
                self.comment_buffer.clear();
                self.switch_to(TokenizerState::Comment);
            }
            '!' | '?' => {
                self.comment_buffer.clear();
                self.switch_to(TokenizerState::BogusDeclaration);
            }
            c if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_start_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            // A lone '<' in text stays text.
            _ => {
                self.pending_text.push('<');
                self.reconsume_in(TokenizerState::Data);
            }
        }
    }

    fn handle_end_tag_open_state(&mut self, c: char) {
        match c {
            c if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_end_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            // "</>" is dropped entirely.
            '>' => self.switch_to(TokenizerState::Data),
            _ => {
                self.comment_buffer.clear();
                self.reconsume_in(TokenizerState::BogusDeclaration);
            }
        }
    }

    fn handle_tag_name_state(&mut self, c: char) {
        match c {
            c if c.is_ascii_whitespace() => self.switch_to(TokenizerState::BeforeAttributeName),
            '/' => self.switch_to(TokenizerState::SelfClosingStartTag),
            '>' => self.emit_current_tag(),
            _ => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_tag_name(c);
                }
            }
        }
    }

    fn handle_before_attribute_name_state(&mut self, c: char) {
        match c {
            c if c.is_ascii_whitespace() => {}
            '/' => self.switch_to(TokenizerState::SelfClosingStartTag),
            '>' => self.emit_current_tag(),
            _ => {
                if let Some(token) = self.current_token.as_mut() {
                    token.start_new_attribute();
                }
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    fn handle_attribute_name_state(&mut self, c: char) {
        match c {
            c if c.is_ascii_whitespace() => self.switch_to(TokenizerState::AfterAttributeName),
            '/' => self.switch_to(TokenizerState::SelfClosingStartTag),
            '=' => self.switch_to(TokenizerState::BeforeAttributeValue),
            '>' => self.emit_current_tag(),
            _ => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_current_attribute_name(c);
                }
            }
        }
    }

    fn handle_after_attribute_name_state(&mut self, c: char) {
        match c {
            c if c.is_ascii_whitespace() => {}
            '/' => self.switch_to(TokenizerState::SelfClosingStartTag),
            '=' => self.switch_to(TokenizerState::BeforeAttributeValue),
            '>' => self.emit_current_tag(),
            _ => {
                if let Some(token) = self.current_token.as_mut() {
                    token.start_new_attribute();
                }
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    fn handle_before_attribute_value_state(&mut self, c: char) {
        match c {
            c if c.is_ascii_whitespace() => {}
            '"' => self.switch_to(TokenizerState::AttributeValueDoubleQuoted),
            '\'' => self.switch_to(TokenizerState::AttributeValueSingleQuoted),
            '>' => self.emit_current_tag(),
            _ => self.reconsume_in(TokenizerState::AttributeValueUnquoted),
        }
    }

    fn handle_attribute_value_quoted_state(&mut self, c: char, quote: char) {
        if c == quote {
            self.switch_to(TokenizerState::BeforeAttributeName);
        } else if c == '&' {
            let decoded = self.consume_character_reference();
            self.append_to_attribute_value(&decoded);
        } else {
            self.append_to_attribute_value(c.encode_utf8(&mut [0; 4]));
        }
    }

    fn handle_attribute_value_unquoted_state(&mut self, c: char) {
        match c {
            c if c.is_ascii_whitespace() => self.switch_to(TokenizerState::BeforeAttributeName),
            '>' => self.emit_current_tag(),
            '&' => {
                let decoded = self.consume_character_reference();
                self.append_to_attribute_value(&decoded);
            }
            _ => self.append_to_attribute_value(c.encode_utf8(&mut [0; 4])),
        }
    }

    fn handle_self_closing_start_tag_state(&mut self, c: char) {
        if c == '>' {
            if let Some(token) = self.current_token.as_mut() {
                token.set_self_closing();
            }
            self.emit_current_tag();
        } else {
            self.reconsume_in(TokenizerState::BeforeAttributeName);
        }
    }

    fn handle_comment_state(&mut self, c: char) {
        if c == '-' && self.next_few_characters_are("->") {
            self.consume_string("->");
            self.emit_buffered(true);
            self.switch_to(TokenizerState::Data);
        } else {
            self.comment_buffer.push(c);
        }
    }

    fn handle_bogus_declaration_state(&mut self, c: char) {
        if c == '>' {
            self.emit_buffered(false);
            self.switch_to(TokenizerState::Data);
        } else {
            self.comment_buffer.push(c);
        }
    }

    /// End of input: keep what can be kept, drop half-read tags.
    fn handle_eof(&mut self) {
        match self.state {
            TokenizerState::TagOpen => self.pending_text.push('<'),
            TokenizerState::EndTagOpen => self.pending_text.push_str("</"),
            TokenizerState::Comment => self.emit_buffered(true),
            TokenizerState::BogusDeclaration => self.emit_buffered(false),
            _ => self.current_token = None,
        }
        self.flush_text();
        self.token_stream.push(Token::EndOfFile);
    }

    fn append_to_attribute_value(&mut self, s: &str) {
        if let Some(token) = self.current_token.as_mut() {
            token.append_to_current_attribute_value(s);
        }
    }
}
