//! Poison tracking shared by the packer and the unpacker.
//!
//! Both sides of the codec observe the same rule: once any operation
//! fails with a non-OK code, the context is poisoned and every further
//! call is rejected with [`Code::Stopped`] without touching the buffer.
//! The originally stored code is never overwritten by a later `Stopped`.

use crate::error::Code;

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Sticky(Option<Code>);

impl Sticky {
    /// Reject the call with [`Code::Stopped`] if already poisoned.
    pub(crate) fn check(&self) -> Result<(), Code> {
        match self.0 {
            Some(_) => Err(Code::Stopped),
            None => Ok(()),
        }
    }

    /// Record the poisoning code, first poison wins.
    pub(crate) fn poison(&mut self, code: Code) {
        if self.0.is_none() {
            self.0 = Some(code);
        }
    }

    /// The originally stored poison code, if any.
    pub(crate) fn code(&self) -> Option<Code> {
        self.0
    }
}
