//! Kmer hashes as input values for minimisers, and the resulting density.
//!
//! Texts are over a 2-bit alphabet `0..4` where `c ^ 3` is the complement of `c`.

use crate::{error::Result, MinimiserConfig};
use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaChaRng,
};
use serde::Serialize;

const SEED: u64 = 213456;

/// Generate a random string.
pub fn generate_random_string(n: usize, sigma: usize) -> Vec<u8> {
    let mut rng = ChaChaRng::seed_from_u64(SEED);
    (0..n)
        .map(|_| ((rng.next_u64() as usize) % sigma) as u8)
        .collect()
}

/// The reverse complement of a text.
pub fn reverse_complement(text: &[u8]) -> Vec<u8> {
    text.iter().rev().map(|&c| c ^ 3).collect()
}

/// Random hash of a kmer.
#[inline(always)]
pub fn hash(kmer: &[u8]) -> u64 {
    wyhash::wyhash(kmer, SEED)
}

/// Hashes of all kmers of `text`, left to right.
pub fn kmer_hashes(
    text: &[u8],
    k: usize,
) -> impl ExactSizeIterator<Item = u64> + DoubleEndedIterator + Clone + '_ {
    assert!(k > 0);
    text.windows(k).map(hash)
}

/// Hashes of the reverse complement of each kmer of `text`, left to right.
pub fn revcomp_kmer_hashes(
    text: &[u8],
    k: usize,
) -> impl ExactSizeIterator<Item = u64> + DoubleEndedIterator + Clone + '_ {
    assert!(k > 0);
    text.windows(k).map(|kmer| hash(&reverse_complement(kmer)))
}

/// Number of distinct minimiser positions relative to the number of windows.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Density {
    pub k: usize,
    pub w: usize,
    pub canonical: bool,
    pub windows: usize,
    pub minimisers: usize,
    pub density: f64,
}

/// Sample the minimisers of the kmer hashes of `text` and compute their density.
///
/// With `canonical`, each kmer is represented by the minimum of its forward and
/// reverse-complement hash.
pub fn density(text: &[u8], k: usize, w: usize, canonical: bool) -> Result<Density> {
    let config = MinimiserConfig::new(w);
    let minimisers = if canonical {
        config
            .dual_view(kmer_hashes(text, k), revcomp_kmer_hashes(text, k))?
            .iter()
            .count()
    } else {
        config.view(kmer_hashes(text, k))?.iter().count()
    };
    let kmers = (text.len() + 1).saturating_sub(k);
    let windows = if kmers == 0 {
        0
    } else {
        kmers.saturating_sub(w) + 1
    };
    let density = if windows == 0 {
        0.0
    } else {
        minimisers as f64 / windows as f64
    };
    Ok(Density {
        k,
        w,
        canonical,
        windows,
        minimisers,
        density,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::MinimiserError;
    use itertools::Itertools;

    #[test]
    fn random_string_is_seeded() {
        let a = generate_random_string(1000, 4);
        assert_eq!(a, generate_random_string(1000, 4));
        assert!(a.iter().all(|&c| c < 4));
    }

    #[test]
    fn revcomp_hashes_mirror_forward_hashes() {
        let k = 7;
        let text = generate_random_string(200, 4);
        let rc = reverse_complement(&text);
        assert_eq!(reverse_complement(&rc), text);
        let fw = kmer_hashes(&rc, k).rev().collect_vec();
        let bw = revcomp_kmer_hashes(&text, k).collect_vec();
        assert_eq!(fw.len(), text.len() - k + 1);
        assert_eq!(fw, bw);
    }

    #[test]
    fn random_minimiser_density() {
        let text = generate_random_string(100_000, 4);
        let (k, w) = (21, 11);
        let d = density(&text, k, w, false).unwrap();
        assert_eq!(d.windows, text.len() - k - w + 2);
        // Random minimisers have density close to 2/(w+1).
        assert!(0.14 < d.density && d.density < 0.20, "{d:?}");
        let c = density(&text, k, w, true).unwrap();
        assert!(0.14 < c.density && c.density < 0.20, "{c:?}");
    }

    #[test]
    fn short_text() {
        let d = density(&[0, 1, 2], 5, 4, false).unwrap();
        assert_eq!((d.windows, d.minimisers, d.density), (0, 0, 0.0));
        // Fewer kmers than the window size still give one window.
        let d = density(&[0, 1, 2, 3, 0, 1], 5, 4, true).unwrap();
        assert_eq!((d.windows, d.minimisers), (1, 1));
        assert_eq!(
            density(&[0, 1, 2], 1, 1, false).unwrap_err(),
            MinimiserError::DegenerateWindow
        );
    }
}
