use fixture_model::*;

#[test]
fn single_category_round_trip() {
    for i in 1..CATEGORY_COUNT {
        let bits = bits_of(&[i]);
        assert_eq!(bits, 1u32 << (i - 1), "index {i}");
        assert_eq!(indices_of(bits), vec![i]);
    }
    assert_eq!(bits_of(&[0]), ALL_CATEGORIES);
}

#[test]
fn subsets_recovered_from_bits() {
    // Walk a spread of subsets of 1..=31 driven by a simple LCG.
    let mut seed: u32 = 0x2545_F491;
    for _ in 0..256 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let subset: Vec<usize> = (1..CATEGORY_COUNT).filter(|i| seed & (1 << (i - 1)) != 0).collect();
        let bits = bits_of(&subset);
        let expected = subset.iter().fold(0u32, |acc, i| acc | (1 << (i - 1)));
        assert_eq!(bits, expected);
        assert_eq!(indices_of(bits), subset);
    }
}

#[test]
fn wildcard_with_others_saturates() {
    assert_eq!(bits_of(&[0, 3, 7]), ALL_CATEGORIES);
    assert_eq!(indices_of(ALL_CATEGORIES).len(), CATEGORY_COUNT - 1);
}
