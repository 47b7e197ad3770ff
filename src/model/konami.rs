use std::collections::VecDeque;

/// The classic sequence: up, up, down, down, left, right, left, right, B, A.
pub const KONAMI_SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// Rolling keystroke buffer that recognizes the Konami code.
///
/// Holds at most the last `KONAMI_SEQUENCE.len()` key codes; every push
/// compares the buffer against the sequence by value.
#[derive(Clone, Debug, Default)]
pub struct KonamiDetector {
    buffer: VecDeque<u32>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key code and reports whether the sequence just completed.
    pub fn push(&mut self, key_code: u32) -> bool {
        self.buffer.push_back(key_code);
        if self.buffer.len() > KONAMI_SEQUENCE.len() {
            self.buffer.pop_front();
        }
        self.buffer.len() == KONAMI_SEQUENCE.len()
            && self.buffer.iter().copied().eq(KONAMI_SEQUENCE)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the exact sequence triggers on its final key.
    ///
    /// Expected: false for every prefix key, true on the last
    #[test]
    fn exact_sequence_triggers_on_last_key() {
        let mut detector = KonamiDetector::new();
        for code in &KONAMI_SEQUENCE[..KONAMI_SEQUENCE.len() - 1] {
            assert!(!detector.push(*code));
        }
        assert!(detector.push(KONAMI_SEQUENCE[KONAMI_SEQUENCE.len() - 1]));
    }

    /// Tests that a same-length but different sequence never triggers.
    ///
    /// Expected: false on every push
    #[test]
    fn wrong_sequence_of_same_length_never_triggers() {
        let mut detector = KonamiDetector::new();
        for code in [38, 38, 40, 40, 37, 39, 37, 39, 65, 66] {
            assert!(!detector.push(code));
        }
    }

    /// Tests recognition after leading noise keystrokes.
    ///
    /// Expected: older keys rotate out and the sequence still completes
    #[test]
    fn triggers_after_leading_noise() {
        let mut detector = KonamiDetector::new();
        for code in [13, 27, 72] {
            assert!(!detector.push(code));
        }
        let mut triggered = false;
        for code in KONAMI_SEQUENCE {
            triggered = detector.push(code);
        }
        assert!(triggered);
    }

    /// Tests that the buffer is capped at the sequence length.
    ///
    /// Expected: length never exceeds ten entries
    #[test]
    fn buffer_never_exceeds_sequence_length() {
        let mut detector = KonamiDetector::new();
        for code in 0..50 {
            detector.push(code);
            assert!(detector.len() <= KONAMI_SEQUENCE.len());
        }
    }

    /// Tests that a completed sequence can trigger again.
    ///
    /// Expected: two full sequences back to back both trigger
    #[test]
    fn retriggers_on_repeat() {
        let mut detector = KonamiDetector::new();
        for _ in 0..2 {
            let mut triggered = false;
            for code in KONAMI_SEQUENCE {
                triggered = detector.push(code);
            }
            assert!(triggered);
        }
    }
}
