//! Address window used to select intercepted accesses.
//!
//! A window is a `(base, mask)` pair. The bits set in `mask` are the window's
//! constant bits: an address belongs to the window when those bits equal the
//! corresponding bits of `base`. The remaining bits form the local address.

/// Immutable `(base, mask)` address window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessWindow {
    base: u64,
    mask: u64,
}

impl AccessWindow {
    /// Builds a window, normalizing `base` to `base & mask`.
    pub const fn new(base: u64, mask: u64) -> Self {
        Self {
            base: base & mask,
            mask,
        }
    }

    pub const fn base(&self) -> u64 {
        self.base
    }

    pub const fn mask(&self) -> u64 {
        self.mask
    }

    /// Returns `true` when `addr` falls inside the window.
    #[inline]
    pub const fn contains(&self, addr: u64) -> bool {
        addr & self.mask == self.base
    }

    /// Strips the window's constant bits from `addr`.
    #[inline]
    pub const fn local_address(&self, addr: u64) -> u64 {
        addr & !self.mask
    }

    /// A zero mask with a zero base captures every address, which is almost
    /// always a misconfiguration.
    pub const fn matches_everything(&self) -> bool {
        self.mask == 0 && self.base == 0
    }
}

#[cfg(test)]
mod tests {
    use super::AccessWindow;
    use proptest::prelude::*;

    const WINDOW: AccessWindow = AccessWindow::new(0x8000_0000, 0xF000_0000);

    #[test]
    fn base_is_normalized() {
        let window = AccessWindow::new(0x8000_1234, 0xF000_0000);
        assert_eq!(window.base(), 0x8000_0000);
        assert_eq!(window, WINDOW);
    }

    #[test]
    fn tohost_style_window() {
        assert!(WINDOW.contains(0x8000_0010));
        assert!(WINDOW.contains(0x8FFF_FFFF));
        assert!(!WINDOW.contains(0x7000_0010));
        assert_eq!(WINDOW.local_address(0x8000_0010), 0x10);
        // Bits above the mask take no part in the match.
        assert!(WINDOW.contains(0x1_8000_0010));
        assert_eq!(WINDOW.local_address(0x1_8000_0010), 0x1_0000_0010);
    }

    #[test]
    fn zero_window_is_flagged() {
        let window = AccessWindow::new(0, 0);
        assert!(window.matches_everything());
        assert!(window.contains(0));
        assert!(window.contains(u64::MAX));
        assert!(!WINDOW.matches_everything());
        // A zero mask with a nonzero base still normalizes to the catch-all window.
        assert!(AccessWindow::new(0x1234, 0).matches_everything());
    }

    proptest! {
        #[test]
        fn membership_matches_masked_compare(
            base in any::<u64>(),
            mask in any::<u64>(),
            addr in any::<u64>(),
        ) {
            let window = AccessWindow::new(base, mask);
            prop_assert_eq!(window.contains(addr), (addr & mask) == (base & mask));
        }

        #[test]
        fn local_address_recombines(
            base in any::<u64>(),
            mask in any::<u64>(),
            offset in any::<u64>(),
        ) {
            let window = AccessWindow::new(base, mask);
            let addr = window.base() | (offset & !mask);
            prop_assert!(window.contains(addr));
            prop_assert_eq!(window.local_address(addr), offset & !mask);
        }
    }
}
