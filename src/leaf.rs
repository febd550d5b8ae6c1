// Randomized look of one floating leaf. The dom layer turns this into a
// fixed-position emoji element and removes it after its lifetime.

use rand::Rng;

pub const LEAF_ICONS: [&str; 4] = ["\u{1F33F}", "\u{1F340}", "\u{1F331}", "\u{1F342}"];
pub const LEAF_LIFETIME_MS: i32 = 22_000;

pub struct LeafSpec {
    pub icon: &'static str,
    pub left_vw: f64,
    pub font_size_px: f64,
    pub fall_duration_s: f64,
}

impl LeafSpec {
    pub fn random<R: Rng>(rng: &mut R) -> LeafSpec {
        LeafSpec {
            icon: LEAF_ICONS[rng.gen_range(0, LEAF_ICONS.len())],
            left_vw: rng.gen::<f64>() * 100.0,
            font_size_px: rng.gen::<f64>() * 16.0 + 12.0,
            fall_duration_s: rng.gen::<f64>() * 10.0 + 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_specs_stay_in_the_documented_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let spec = LeafSpec::random(&mut rng);
            assert!(LEAF_ICONS.contains(&spec.icon));
            assert!(spec.left_vw >= 0.0 && spec.left_vw < 100.0);
            assert!(spec.font_size_px >= 12.0 && spec.font_size_px < 28.0);
            assert!(spec.fall_duration_s >= 12.0 && spec.fall_duration_s < 22.0);
        }
    }

    #[test]
    fn every_icon_shows_up_eventually() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut seen = [false; LEAF_ICONS.len()];
        for _ in 0..200 {
            let spec = LeafSpec::random(&mut rng);
            let idx = LEAF_ICONS.iter().position(|i| *i == spec.icon).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
