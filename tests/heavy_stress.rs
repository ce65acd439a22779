#![cfg(feature = "heavy")]
use lcs_all::{compute_lcs, utils::lcs_length, LcsEngine, Variant};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

#[test]
fn heavy_identical_inputs() {
    let mut rng = StdRng::seed_from_u64(7);
    let s = random_dna(&mut rng, 2_000);
    assert_eq!(compute_lcs(&s, &s, Variant::Traceback), vec![s.clone()]);

    // Distinct symbols keep every full-DP cell a singleton.
    let distinct: Vec<u16> = (0..300).collect();
    assert_eq!(
        compute_lcs(&distinct, &distinct, Variant::FullDp),
        vec![distinct.clone()]
    );
}

#[test]
fn heavy_random_cross_check() {
    let mut rng = StdRng::seed_from_u64(123);
    for _ in 0..20 {
        let s = random_dna(&mut rng, 12);
        let t = random_dna(&mut rng, 12);
        let agreed = LcsEngine::new(&s, &t).cross_check().expect("variants agree");
        let len = lcs_length(&s, &t);
        assert!(agreed.iter().all(|sub| sub.len() == len));
    }
}
