use std::iter::FusedIterator;

/// Yields `start - 1` down to `0`, one value per call, then stays exhausted.
#[derive(Debug, Clone)]
pub struct Countdown {
    current: u32,
}

impl Countdown {
    pub fn new(start: u32) -> Self {
        Self { current: start }
    }
}

impl Iterator for Countdown {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Countdown {}

impl FusedIterator for Countdown {}

#[cfg(test)]
mod tests {
    use super::Countdown;

    #[test]
    fn counts_down_to_zero() {
        let values: Vec<u32> = Countdown::new(5).collect();
        assert_eq!(values, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn zero_start_is_already_exhausted() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.len(), 0);
        assert_eq!(countdown.next(), None);
    }

    #[test]
    fn second_traversal_yields_nothing() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.len(), 3);

        let first: Vec<u32> = countdown.by_ref().collect();
        assert_eq!(first, vec![2, 1, 0]);

        let second: Vec<u32> = countdown.by_ref().collect();
        assert!(second.is_empty());
        assert_eq!(countdown.next(), None);
    }

    #[test]
    fn keeps_position_between_calls() {
        let mut countdown = Countdown::new(4);
        assert_eq!(countdown.next(), Some(3));
        assert_eq!(countdown.len(), 3);
        assert_eq!(countdown.next(), Some(2));
        assert_eq!(countdown.collect::<Vec<_>>(), vec![1, 0]);
    }
}
