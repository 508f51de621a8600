//! The xorshift128+ random number generator, used wherever a grid must be
//! reproducible from a seed.

use rand::{Error, RngCore};

/// A stream of pseudo-random numbers generated using the xorshift+ technique
/// described here:
///
/// Vigna, Sebastiano (2014). "Further scramblings of Marsaglia's xorshift
/// generators". arXiv:1404.0390 (http://arxiv.org/abs/1404.0390)
///
/// The stream repeats every 2**128 - 1 calls. The all-zero state is a fixed
/// point of the recurrence, so the constructors never produce it.
///
/// This generator is not suitable as a cryptographically secure random number
/// generator.
///
/// Unlike the RNGs in the rand crate, this one implements Hash and serde's
/// Serialize and Deserialize traits, so a generator's position can be saved
/// alongside the parameters it was used with.
#[derive(Debug, Hash, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XorShift128Plus {
    state: [u64; 2]
}

/// Substituted for an all-zero seed.
const ZERO_SEED_REPLACEMENT: [u64; 2] = [0x9e37_79b9_7f4a_7c15, 0xbf58_476d_1ce4_e5b9];

impl XorShift128Plus {
    pub fn new(seed: [u64; 2]) -> XorShift128Plus {
        if seed == [0, 0] {
            XorShift128Plus { state: ZERO_SEED_REPLACEMENT }
        } else {
            XorShift128Plus { state: seed }
        }
    }

    /// Construct a generator from a single `u64`, spreading its bits over the
    /// full 128-bit state with two rounds of splitmix64.
    pub fn from_u64(seed: u64) -> XorShift128Plus {
        let mut x = seed;
        let first = splitmix64(&mut x);
        let second = splitmix64(&mut x);
        XorShift128Plus::new([first, second])
    }
}

fn splitmix64(x: &mut u64) -> u64 {
    *x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *x;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl RngCore for XorShift128Plus {
    fn next_u64(&mut self) -> u64 {
        let mut s1 = self.state[0];
        let s0 = self.state[1];
        self.state[0] = s0;
        s1 ^= s1 << 23;
        self.state[1] = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26);
        self.state[1].wrapping_add(s0)
    }

    fn next_u32(&mut self) -> u32 {
        // The low bits of xorshift+ are its weakest; take the high half.
        (self.next_u64() >> 32) as u32
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            let len = chunk.len();
            chunk.copy_from_slice(&bytes[..len]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[test]
fn simple() {
    let mut rng = XorShift128Plus::new([1, 4]);

    // Calculated by hand following the algorithm given in the paper. The upper
    // bits are mostly zero because we started with a poor seed.
    assert_eq!(rng.next_u64(), 0x800049);
    assert_eq!(rng.next_u64(), 0x3000186);
    assert_eq!(rng.next_u64(), 0x400003001145);
}

#[test]
fn zero_seed_is_replaced() {
    let mut rng = XorShift128Plus::new([0, 0]);
    assert_ne!(rng.next_u64(), 0);
    assert_eq!(XorShift128Plus::new([0, 0]), XorShift128Plus::new(ZERO_SEED_REPLACEMENT));
}

#[test]
fn same_seed_same_stream() {
    let mut a = XorShift128Plus::from_u64(42);
    let mut b = XorShift128Plus::from_u64(42);
    let mut c = XorShift128Plus::from_u64(43);
    let from_a: Vec<u64> = (0..16).map(|_| a.next_u64()).collect();
    let from_b: Vec<u64> = (0..16).map(|_| b.next_u64()).collect();
    let from_c: Vec<u64> = (0..16).map(|_| c.next_u64()).collect();
    assert_eq!(from_a, from_b);
    assert_ne!(from_a, from_c);
}

#[test]
fn fill_bytes_matches_next_u64() {
    let mut words = XorShift128Plus::from_u64(7);
    let mut bytes = XorShift128Plus::from_u64(7);

    let first = words.next_u64().to_le_bytes();
    let second = words.next_u64().to_le_bytes();

    // An odd length exercises the partial final chunk.
    let mut buf = [0u8; 11];
    bytes.fill_bytes(&mut buf);
    assert_eq!(&buf[..8], &first[..]);
    assert_eq!(&buf[8..], &second[..3]);
}
