//! Byte-stream tokenizer.
//!
//! Words are runs of bytes between boundary bytes. A boundary is ASCII
//! whitespace or ASCII punctuation, except the hyphen, so compounds such as
//! `well-known` stay whole. A hyphen is an ordinary word byte, which means a
//! free-standing dash or run of dashes (`well - known -- fact`) is a word of
//! its own and gets counted. Apostrophes are punctuation, which leaves a lone
//! `s` or `d` behind possessives and contractions (`dog's`, `I'd`); those
//! one-byte fragments are dropped instead of counted.
//!
//! Words are yielded as raw bytes. Input need not be valid UTF-8.

use std::io::{Bytes, Read};

use log::trace;

use crate::error::{FreqError, Result};

/// Longest word the tokenizer accepts, in characters.
pub const MAX_WORD_LEN: usize = 28;

// No UTF-8 character is longer than four bytes.
const MAX_WORD_BYTES: usize = MAX_WORD_LEN * 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Accumulating,
    Boundary,
}

pub fn is_boundary(byte: u8) -> bool {
    // `is_ascii_whitespace` leaves out vertical tab, C's isspace does not.
    byte != b'-' && (byte.is_ascii_whitespace() || byte == 0x0b || byte.is_ascii_punctuation())
}

fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

fn is_clitic(fragment: &[u8]) -> bool {
    matches!(fragment, [b's'] | [b'd'])
}

/// Lazily splits a reader into words.
///
/// Yields `Err` at most once (`TokenTooLong` or `Read`) and then stops.
pub struct Tokenizer<R> {
    bytes: Bytes<R>,
    buf: Vec<u8>,
    chars: usize,
    state: State,
    done: bool,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Tokenizer {
            bytes: reader.bytes(),
            buf: Vec::with_capacity(MAX_WORD_LEN),
            chars: 0,
            state: State::Boundary,
            done: false,
        }
    }

    fn take_token(&mut self) -> Vec<u8> {
        self.chars = 0;
        std::mem::replace(&mut self.buf, Vec::with_capacity(MAX_WORD_LEN))
    }

    fn fail(&mut self, err: FreqError) -> Option<Result<Vec<u8>>> {
        self.done = true;
        self.buf.clear();
        self.chars = 0;
        Some(Err(err))
    }

    fn too_long(&self, byte: u8) -> bool {
        if is_continuation(byte) {
            self.buf.len() == MAX_WORD_BYTES
        } else {
            self.chars == MAX_WORD_LEN
        }
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let byte = match self.bytes.next() {
                Some(Ok(byte)) => byte,
                Some(Err(err)) => return self.fail(FreqError::Read(err)),
                None => {
                    self.done = true;
                    // Input without a trailing boundary still ends a word.
                    if self.state == State::Accumulating && !self.buf.is_empty() {
                        return Some(Ok(self.take_token()));
                    }
                    return None;
                }
            };

            if is_boundary(byte) {
                let prev = std::mem::replace(&mut self.state, State::Boundary);
                if prev == State::Boundary {
                    continue;
                }
                if is_clitic(&self.buf) {
                    trace!("dropping clitic fragment {:?}", self.buf[0] as char);
                    self.buf.clear();
                    self.chars = 0;
                    continue;
                }
                let token = self.take_token();
                trace!("token {:?}", String::from_utf8_lossy(&token));
                return Some(Ok(token));
            }

            if self.too_long(byte) {
                return self.fail(FreqError::TokenTooLong { max: MAX_WORD_LEN });
            }
            if !is_continuation(byte) {
                self.chars += 1;
            }
            self.buf.push(byte);
            self.state = State::Accumulating;
        }
    }
}
