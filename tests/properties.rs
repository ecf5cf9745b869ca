//! Property tests for the invariants the unit tests only spot-check.

use proptest::prelude::*;

use fieldkit::bits::{clear_bit_at, has_bit_at, invert_bit_at, set_bit_at};
use fieldkit::geo::{haversine, GeoFence, GeoPoint};
use fieldkit::ipv4::{canonical_ipv4_pool, int_to_ipv4, ipv4_to_int, zero_out32};
use fieldkit::threshold::{did_fall_through, did_rise_through, Band};

proptest! {
    #[test]
    fn ipv4_int_round_trips(n in any::<u32>()) {
        prop_assert_eq!(ipv4_to_int(&int_to_ipv4(n)), n);
    }

    #[test]
    fn canonical_pool_is_idempotent(n in any::<u32>(), prefix in 0u32..=32) {
        let pool = format!("{}/{}", int_to_ipv4(n), prefix);
        let once = canonical_ipv4_pool(&pool);
        prop_assert_eq!(canonical_ipv4_pool(&once), once);
    }

    #[test]
    fn masking_is_idempotent_and_shrinking(n in any::<u32>(), k in 0u32..=32) {
        let masked = zero_out32(n, k);
        prop_assert_eq!(zero_out32(masked, k), masked);
        prop_assert!(masked <= n);
    }

    #[test]
    fn haversine_is_symmetric(
        lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
        lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
    ) {
        let a = GeoPoint::new(lat1, lon1);
        let b = GeoPoint::new(lat2, lon2);
        prop_assert_eq!(haversine(a, b), haversine(b, a));
        prop_assert!(haversine(a, b) >= 0.0);
    }

    #[test]
    fn point_at_fence_center_is_inside(
        lat in -90.0f64..90.0, lon in -180.0f64..180.0,
        radius in 0.0f64..1000.0,
    ) {
        let center = GeoPoint::new(lat, lon);
        prop_assert!(GeoFence::new(center, radius).is_inside(center));
    }

    #[test]
    fn rise_and_fall_are_mirror_images(b in -1e6f64..1e6, prev in -1e6f64..1e6, cur in -1e6f64..1e6) {
        prop_assert_eq!(
            did_rise_through(b, prev, cur),
            did_fall_through(b, cur, prev)
        );
        // A single pair cannot cross the same boundary both ways
        prop_assert!(!(did_rise_through(b, prev, cur) && did_fall_through(b, prev, cur)));
    }

    #[test]
    fn band_entry_and_exit_are_exclusive(
        a in -100.0f64..100.0, b in -100.0f64..100.0,
        prev in -200.0f64..200.0, cur in -200.0f64..200.0,
    ) {
        let band = Band::new(a, b);
        prop_assert!(!(band.did_enter(prev, cur) && band.did_exit(prev, cur)));
    }

    #[test]
    fn bit_ops_agree(b in any::<u32>(), n in 0u32..32) {
        prop_assert!(has_bit_at(set_bit_at(b, n), n));
        prop_assert!(!has_bit_at(clear_bit_at(b, n), n));
        prop_assert_eq!(invert_bit_at(invert_bit_at(b, n), n), b);
    }
}
