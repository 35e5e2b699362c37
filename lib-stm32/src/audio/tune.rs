use core::iter::FusedIterator;

use super::note::Step;

/// A tune as note/duration/pause character triplets, e.g. `"E2,F4,"`.
///
/// The tune ends at the end of the slice or at the first NUL byte, whichever
/// comes first, so C-style strings can be passed through untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tune<'a> {
    bytes: &'a [u8],
}

impl<'a> Tune<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Tune { bytes }
    }

    /// Raw text up to (not including) the sentinel.
    pub fn as_bytes(&self) -> &'a [u8] {
        match self.bytes.iter().position(|b| *b == 0) {
            Some(end) => &self.bytes[..end],
            None => self.bytes,
        }
    }

    pub fn steps(&self) -> Steps<'a> {
        Steps {
            bytes: self.as_bytes(),
            cursor: 0,
            state: ParseState::ReadNote,
        }
    }

    pub fn len_steps(&self) -> usize {
        self.as_bytes().len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.len_steps() == 0
    }
}

impl<'a> From<&'a [u8]> for Tune<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Tune::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Tune<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Tune::new(bytes)
    }
}

impl<'a> From<&'a str> for Tune<'a> {
    fn from(text: &'a str) -> Self {
        Tune::new(text.as_bytes())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ParseState {
    ReadNote,
    ReadDuration { note: u8 },
    ReadPause { note: u8, duration: u8 },
    Done,
}

/// Iterator over the complete triplets of a [`Tune`].
///
/// An incomplete trailing triplet is dropped.
#[derive(Clone, Debug)]
pub struct Steps<'a> {
    bytes: &'a [u8],
    cursor: usize,
    state: ParseState,
}

impl<'a> Steps<'a> {
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.cursor).copied();
        if byte.is_some() {
            self.cursor += 1;
        }
        byte
    }
}

impl<'a> Iterator for Steps<'a> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            self.state = match self.state {
                ParseState::Done => return None,
                ParseState::ReadNote => match self.next_byte() {
                    Some(note) => ParseState::ReadDuration { note },
                    None => ParseState::Done,
                },
                ParseState::ReadDuration { note } => match self.next_byte() {
                    Some(duration) => ParseState::ReadPause { note, duration },
                    None => ParseState::Done,
                },
                ParseState::ReadPause { note, duration } => match self.next_byte() {
                    Some(pause) => {
                        self.state = ParseState::ReadNote;
                        return Some(Step::from_codes(note, duration, pause));
                    }
                    None => ParseState::Done,
                },
            };
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.state {
            ParseState::Done => 0,
            _ => (self.bytes.len() - self.cursor) / 3,
        };
        (remaining, Some(remaining))
    }
}

impl<'a> FusedIterator for Steps<'a> {}
