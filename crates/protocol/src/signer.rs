//! The golden touch account, which signs the protocol's anchor transactions.

use alloy_primitives::{address, b256, Address, B256};
use core::fmt;

/// The address of the "golden touch" account, used to sign the `anchor` L2 transactions.
pub const GOLDEN_TOUCH_ADDRESS: Address = address!("0000777735367b36bC9B61C50022d9D0700dB4Ec");

/// The private key of the "golden touch" account.
///
/// It corresponds to the address: `0x0000777735367b36bC9B61C50022d9D0700dB4Ec`.
pub const GOLDEN_TOUCH_PRIVATE_KEY: B256 =
    b256!("92954368afd3caa1f3ce3ead0069c1af414054aefe1ef9aeacc1bf426222ce38");

/// The fixed credential of the protocol's privileged system transaction sender.
///
/// The key is public knowledge and only marks anchor transactions; it never holds value.
/// [fmt::Debug] still omits it so it does not end up in logs next to real keys.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GoldenTouchSigner {
    address: Address,
    private_key: B256,
}

impl GoldenTouchSigner {
    /// The golden touch credential of the Taiko protocol.
    pub const TAIKO: Self = Self::new(GOLDEN_TOUCH_ADDRESS, GOLDEN_TOUCH_PRIVATE_KEY);

    /// Creates a new [GoldenTouchSigner] from an address and its private key.
    pub const fn new(address: Address, private_key: B256) -> Self {
        Self { address, private_key }
    }

    /// Returns the signer address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the signer private key.
    pub const fn private_key(&self) -> B256 {
        self.private_key
    }

    /// Returns true if `sender` is the golden touch account.
    pub fn is_golden_touch(&self, sender: Address) -> bool {
        self.address == sender
    }
}

impl Default for GoldenTouchSigner {
    fn default() -> Self {
        Self::TAIKO
    }
}

impl fmt::Debug for GoldenTouchSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoldenTouchSigner")
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_taiko() {
        let signer = GoldenTouchSigner::default();
        assert_eq!(signer.address(), GOLDEN_TOUCH_ADDRESS);
        assert_eq!(signer.private_key(), GOLDEN_TOUCH_PRIVATE_KEY);
        assert!(signer.is_golden_touch(GOLDEN_TOUCH_ADDRESS));
        assert!(!signer.is_golden_touch(Address::ZERO));
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", GoldenTouchSigner::TAIKO);
        assert!(debug.contains("redacted"));
        assert!(!debug.contains("92954368"));
    }
}
