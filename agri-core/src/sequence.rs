//! Request-sequence tokens for last-writer-wins snapshots.
//!
//! Each refresh takes a token before it is sent. A response may only replace
//! the snapshot if its token is newer than the one behind the current
//! snapshot, so a slow response can never overwrite a fresher one.

/// Ticket identifying one outgoing request.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    issued: u64,
    applied: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next token. Tokens start at 1 and strictly increase.
    pub fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// True when a response carrying `token` may still replace the snapshot.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 > self.applied
    }

    /// Record that the response for `token` was applied. Returns false (and
    /// records nothing) for a stale token.
    pub fn mark_applied(&mut self, token: RequestToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.applied = token.0;
        true
    }

    /// Token of the last applied response, if any.
    pub fn last_applied(&self) -> Option<RequestToken> {
        (self.applied > 0).then_some(RequestToken(self.applied))
    }
}
