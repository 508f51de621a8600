//! Drawing random integers from an injected generator.

use errors::*;

use rand::Rng;
use rand::distributions::{Distribution, Uniform};

/// Return an integer drawn uniformly from `start ..= end` if `inclusive` is
/// true, or from `start .. end` otherwise.
///
/// The caller supplies the generator: the demo passes `rand::thread_rng()`,
/// tests pass a seeded `XorShift128Plus`. Fails with
/// `ErrorKind::InvalidArgument` unless `start < end`.
pub fn randint<R: Rng + ?Sized>(rng: &mut R, start: i64, end: i64, inclusive: bool) -> Result<i64> {
    if start >= end {
        bail!(ErrorKind::InvalidArgument(
            format!("'start' ({}) must be less than 'end' ({})", start, end)));
    }

    let value = if inclusive {
        Uniform::new_inclusive(start, end).sample(rng)
    } else {
        Uniform::new(start, end).sample(rng)
    };
    Ok(value)
}

#[cfg(test)]
mod test {
    use errors::ErrorKind;
    use super::randint;
    use xorshift::XorShift128Plus;

    #[test]
    fn rejects_empty_ranges() {
        let mut rng = XorShift128Plus::from_u64(1);
        for &(start, end, inclusive) in &[(5, 5, true), (5, 5, false), (9, 0, true)] {
            match *randint(&mut rng, start, end, inclusive).unwrap_err().kind() {
                ErrorKind::InvalidArgument(_) => (),
                ref other => panic!("unexpected error kind: {:?}", other),
            }
        }
    }

    #[test]
    fn exclusive_never_returns_end() {
        let mut rng = XorShift128Plus::from_u64(2);
        for _ in 0..2000 {
            let n = randint(&mut rng, 5, 10, false).unwrap();
            assert!(5 <= n && n < 10, "{} outside 5..10", n);
        }
    }

    #[test]
    fn inclusive_reaches_both_ends() {
        let mut rng = XorShift128Plus::from_u64(3);
        let mut seen = [false; 10];
        for _ in 0..2000 {
            let n = randint(&mut rng, 0, 9, true).unwrap();
            assert!(0 <= n && n <= 9, "{} outside 0..=9", n);
            seen[n as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "not every digit drawn: {:?}", seen);
    }

    #[test]
    fn offset_by_start() {
        let mut rng = XorShift128Plus::from_u64(4);
        for _ in 0..500 {
            let n = randint(&mut rng, -3, -1, true).unwrap();
            assert!(-3 <= n && n <= -1, "{} outside -3..=-1", n);
        }
    }

    #[test]
    fn reproducible_from_seed() {
        let draw = |seed| {
            let mut rng = XorShift128Plus::from_u64(seed);
            (0..32).map(|_| randint(&mut rng, 0, 100, false).unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(draw(99), draw(99));
    }
}
