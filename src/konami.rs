// Sliding-window matcher for the up-up-down-down-left-right-left-right-B-A
// easter egg. Key codes go in one at a time; a match reports once and resets.

pub const KONAMI_SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

pub struct KonamiDetector {
    window: Vec<u32>,
}

impl KonamiDetector {
    pub fn new() -> KonamiDetector {
        KonamiDetector {
            window: Vec::with_capacity(KONAMI_SEQUENCE.len()),
        }
    }

    // Feed one key code; true exactly when the last ten codes are the sequence
    pub fn push(&mut self, key_code: u32) -> bool {
        self.window.push(key_code);
        if self.window.len() > KONAMI_SEQUENCE.len() {
            self.window.remove(0);
        }
        if self.window == KONAMI_SEQUENCE {
            self.window.clear();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_sequence_matches() {
        let mut detector = KonamiDetector::new();
        let mut fired = false;
        for &code in &KONAMI_SEQUENCE {
            fired = detector.push(code);
        }
        assert!(fired);
    }

    #[test]
    fn match_resets_the_window() {
        let mut detector = KonamiDetector::new();
        for &code in &KONAMI_SEQUENCE {
            detector.push(code);
        }
        // a lone trailing A must not re-fire against the stale window
        assert!(!detector.push(65));
    }

    #[test]
    fn sequence_matches_after_leading_noise() {
        let mut detector = KonamiDetector::new();
        for code in [13, 27, 32].iter() {
            assert!(!detector.push(*code));
        }
        let mut fired = false;
        for &code in &KONAMI_SEQUENCE {
            fired = detector.push(code);
        }
        assert!(fired);
    }

    #[test]
    fn interleaved_wrong_code_prevents_a_match() {
        let mut detector = KonamiDetector::new();
        for &code in &KONAMI_SEQUENCE[..9] {
            detector.push(code);
        }
        assert!(!detector.push(66)); // B instead of the final A
        assert!(!detector.push(65));
    }

    #[test]
    fn window_never_grows_past_the_sequence_length() {
        let mut detector = KonamiDetector::new();
        for code in 0..100 {
            detector.push(code);
        }
        assert!(detector.window.len() <= KONAMI_SEQUENCE.len());
    }
}
