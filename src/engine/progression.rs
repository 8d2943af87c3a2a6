//! XP accrual and level roll-over
//!
//! The XP cap grows by 20% (floored) on every level up, so the loop in
//! `apply_xp_gain` terminates after at most `gained / min_cap` iterations.

/// Growth applied to the XP cap on each level up: cap' = floor(cap * 12 / 10)
const CAP_GROWTH_NUM: u64 = 12;
const CAP_GROWTH_DEN: u64 = 10;

/// The three progression fields of a profile, detached for pure computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    pub level: u32,
    pub xp: u64,
    /// XP required to advance from `level` to `level + 1`; always > 0
    pub xp_cap: u64,
}

impl Progression {
    /// Accrue `gained` XP, rolling over into as many level ups as it covers.
    ///
    /// Post-condition: `xp < xp_cap` (equality triggers a roll-over and is
    /// never stored). Implemented as a bounded loop so a huge single gain
    /// cannot grow the stack.
    pub fn apply_xp_gain(self, gained: u64) -> Progression {
        let mut level = self.level;
        let mut xp = self.xp.saturating_add(gained);
        let mut cap = self.xp_cap.max(1);

        while xp >= cap {
            xp -= cap;
            level = level.saturating_add(1);
            // Floored 20% growth; never let the cap shrink to zero
            cap = (cap.saturating_mul(CAP_GROWTH_NUM) / CAP_GROWTH_DEN).max(1);
        }

        Progression {
            level,
            xp,
            xp_cap: cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prog(level: u32, xp: u64, xp_cap: u64) -> Progression {
        Progression { level, xp, xp_cap }
    }

    #[test]
    fn test_zero_gain_is_identity() {
        let p = prog(3, 450, 1728);
        assert_eq!(p.apply_xp_gain(0), p);
    }

    #[test]
    fn test_gain_below_cap_accumulates() {
        let p = prog(1, 100, 1000).apply_xp_gain(400);
        assert_eq!(p, prog(1, 500, 1000));
    }

    #[test]
    fn test_single_roll_over_grows_cap() {
        // 950 + 100 = 1050 >= 1000: level up, cap 1000 -> 1200
        let p = prog(1, 950, 1000).apply_xp_gain(100);
        assert_eq!(p, prog(2, 50, 1200));
    }

    #[test]
    fn test_multiple_roll_overs_in_one_gain() {
        // 0 + 3300 covers level 1 (3000) and leaves 300 under the grown cap
        let p = prog(1, 0, 3000).apply_xp_gain(3300);
        assert_eq!(p, prog(2, 300, 3600));

        // A gain spanning several levels: 1000 + 1200 = 2200, then 2200+...
        let p = prog(1, 0, 1000).apply_xp_gain(2500);
        // level 2 at cap 1200 (xp 1500), level 3 at cap 1440 (xp 300)
        assert_eq!(p, prog(3, 300, 1440));
    }

    #[test]
    fn test_split_gains_equal_one_large_gain() {
        let a = prog(1, 0, 3000).apply_xp_gain(500).apply_xp_gain(2800);
        let b = prog(1, 0, 3000).apply_xp_gain(3300);
        assert_eq!(a, b);
    }

    #[test]
    fn test_post_condition_invariant_holds() {
        for gained in [0u64, 1, 999, 1000, 12345, 1_000_000] {
            let p = prog(1, 0, 1000).apply_xp_gain(gained);
            assert!(p.xp < p.xp_cap, "xp {} >= cap {}", p.xp, p.xp_cap);
            assert!(p.level >= 1);
        }
    }

    #[test]
    fn test_cap_growth_is_floored() {
        // 1250 * 1.2 = 1500 exactly; 1111 * 1.2 = 1333.2 -> 1333
        let p = prog(1, 0, 1111).apply_xp_gain(1111);
        assert_eq!(p.xp_cap, 1333);
    }

    #[test]
    fn test_degenerate_cap_is_repaired() {
        // A zero cap would never occur through the engine, but the loop must
        // still terminate if handed one.
        let p = prog(1, 0, 0).apply_xp_gain(10);
        assert!(p.xp < p.xp_cap);
    }
}
