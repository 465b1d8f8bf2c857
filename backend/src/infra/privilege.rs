//! Infrastructure implementation of the `PrivilegeGate` port.

use nix::unistd::{Uid, geteuid};

use crate::application::ports::PrivilegeGate;

/// Passes when the effective uid is root. Checked, never acquired: setuid
/// install or sudo is the caller's concern.
pub struct EffectiveUid;

impl PrivilegeGate for EffectiveUid {
    fn is_privileged(&self) -> bool {
        is_root(geteuid())
    }
}

fn is_root(uid: Uid) -> bool {
    uid.is_root()
}
