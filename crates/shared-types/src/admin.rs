//! # Administrative Threads
//!
//! The three privileged control channels of the permissioned ledger. Each
//! genesis block anchors them with one zero-value output apiece, always in
//! the order Root, Provision, Issue.

use serde::{Deserialize, Serialize};

/// `OP_0`
pub const OP_0: u8 = 0x00;
/// `OP_1` (push the number 1)
pub const OP_1: u8 = 0x51;
/// `OP_2` (push the number 2)
pub const OP_2: u8 = 0x52;
/// Terminator marking an administrative thread output.
pub const OP_CHECKTHREAD: u8 = 0xbb;

/// One of the three administrative threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AdminThread {
    /// Root authority.
    Root,
    /// Key-provisioning authority.
    Provision,
    /// Issuance authority.
    Issue,
}

impl AdminThread {
    /// All threads in their canonical genesis order.
    pub const ALL: [AdminThread; 3] = [AdminThread::Root, AdminThread::Provision, AdminThread::Issue];

    /// The fixed 2-byte output script for this thread.
    pub const fn script(self) -> [u8; 2] {
        match self {
            AdminThread::Root => [OP_0, OP_CHECKTHREAD],
            AdminThread::Provision => [OP_1, OP_CHECKTHREAD],
            AdminThread::Issue => [OP_2, OP_CHECKTHREAD],
        }
    }

    /// Recognize a thread marker script. Anything else is not a thread.
    pub fn from_script(script: &[u8]) -> Option<Self> {
        match script {
            [OP_0, OP_CHECKTHREAD] => Some(AdminThread::Root),
            [OP_1, OP_CHECKTHREAD] => Some(AdminThread::Provision),
            [OP_2, OP_CHECKTHREAD] => Some(AdminThread::Issue),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AdminThread::Root => "root",
            AdminThread::Provision => "provision",
            AdminThread::Issue => "issue",
        }
    }
}

impl std::fmt::Display for AdminThread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
