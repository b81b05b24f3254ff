//! Monotonic request tokens for discarding out-of-order responses.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

/// Token attached to one in-flight read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Issues tokens; only the most recently issued one is current.
#[derive(Clone, Debug, Default)]
pub struct RequestSeq {
    issued: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }
}
