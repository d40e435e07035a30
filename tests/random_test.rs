use vignette::random::{Lcg, Xorshift32};

#[test]
fn xorshift_default_stream() {
    let mut rng = Xorshift32::new();
    assert_eq!(rng.next_u32(), 0x794f4f05);
    assert_eq!(rng.next_u32(), 0x855b4d12);
    assert_eq!(rng.next_u32(), 0x73d616ae);
    assert_eq!(rng.next_u32(), 0x91724bcf);
}

#[test]
fn xorshift_seeding_is_scrambled_but_deterministic() {
    let mut rng = Xorshift32::seeded(42);
    assert_eq!(rng.next_u32(), 0xcdb30471);
    assert_eq!(rng.next_u32(), 0x0a932f0f);
    assert_eq!(rng.next_u32(), 0x812dee76);

    let mut a = Xorshift32::seeded(7);
    let mut b = Xorshift32::seeded(7);
    for _ in 0..100 {
        assert_eq!(a.next_u32(), b.next_u32());
    }

    assert_ne!(
        Xorshift32::seeded(7).next_u32(),
        Xorshift32::seeded(8).next_u32()
    );
}

#[test]
fn xorshift_floats_are_unit_interval() {
    let mut rng = Xorshift32::new();
    for _ in 0..1000 {
        let f = rng.next_f32();
        assert!((0.0..1.0).contains(&f));
    }
}

#[test]
fn lcg_recombines_both_steps() {
    let mut rng = Lcg::new();
    assert_eq!(rng.next_u32(), 0xdbdea24d);
    assert_eq!(rng.next_u32(), 0x3b3237eb);
    assert_eq!(rng.next_u32(), 0x478bf349);
    assert_eq!(rng.next_u32(), 0x9c30e912);
}

#[test]
fn lcg_bounded_draws() {
    let mut rng = Lcg::new();
    assert_eq!(rng.next_below(0x7fff), 23053);
    assert_eq!(rng.next_below(0x7fff), 11856);
    for _ in 0..1000 {
        assert!(rng.next_below(17) < 17);
    }
}
