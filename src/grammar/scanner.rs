use super::*;

impl<'a> Grammar<'a> {
    pub(super) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub(super) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(super) fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Advance past the current character.
    pub(super) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Text matched since `start`.
    pub(super) fn since(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    pub(super) fn rewind(&mut self, to: usize) {
        self.pos = to;
    }

    /// Record that `expected` did not match at the current position.
    pub(super) fn fail(&mut self, expected: &'static str) {
        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.expected.clear();
        }
        if self.pos == self.furthest && !self.expected.contains(&expected) {
            self.expected.push(expected);
        }
    }

    pub(super) fn eat(&mut self, ch: char, expected: &'static str) -> bool {
        if self.peek() == Some(ch) {
            self.bump();
            true
        } else {
            self.fail(expected);
            false
        }
    }

    pub(super) fn eat_str(&mut self, s: &str, expected: &'static str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            self.fail(expected);
            false
        }
    }

    /// Consume a run of ASCII digits, returning how many were read.
    pub(super) fn digits(&mut self) -> usize {
        let count = self.rest().bytes().take_while(u8::is_ascii_digit).count();
        self.pos += count;
        if count == 0 {
            self.fail("digit");
        }
        count
    }

    /// Skip spaces and tabs. Newlines are significant outside arrays.
    pub(super) fn skip_spaces(&mut self) {
        while let Some(' ' | '\t') = self.peek() {
            self.bump();
        }
    }

    /// Consume `\n` or `\r\n`.
    pub(super) fn newline(&mut self) -> bool {
        if self.rest().starts_with("\r\n") {
            self.pos += 2;
            true
        } else if self.peek() == Some('\n') {
            self.pos += 1;
            true
        } else {
            self.fail("newline");
            false
        }
    }

    pub(super) fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            self.overflow.get_or_insert(self.pos);
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn leave_nesting(&mut self) {
        self.depth -= 1;
    }

    /// Whether an unrecoverable limit was hit. Ordered choice stops trying
    /// alternatives once this is set.
    pub(super) fn aborted(&self) -> bool {
        self.overflow.is_some()
    }
}

pub(super) fn is_key_char(c: char) -> bool {
    !matches!(c, ' ' | '\t' | '\r' | '\n' | '=' | '.' | '[' | ']' | ',' | '"')
}

pub(super) fn is_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}')
}
