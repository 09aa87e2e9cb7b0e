use std::f32::consts::PI;

use bevy::prelude::*;
use rand::{
    Rng,
    SeedableRng,
    rngs::StdRng,
};

use bevy_meadow::{
    CloudSpec,
    OrnamentSpec,
    TreeSpec,
    cross_section_diameter,
    ring_reach,
    scatter::{
        cloud::BASE_SQUASH,
        tree::SITE_EXCLUSION_RADIUS,
    },
};


#[test]
fn cloud_lobes_pair_up() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let spec: CloudSpec = rng.gen();
        let bumps = spec.bump_count();
        assert!((2..=5).contains(&bumps));

        let transforms = spec.lobe_transforms();
        assert_eq!(transforms.len(), 2 * bumps);

        for pair in transforms.chunks(2) {
            let (bump, base) = (pair[0], pair[1]);
            assert_eq!(bump.translation.x, base.translation.x);
            assert_eq!(bump.translation.z, base.translation.z);
            assert_eq!(bump.scale.x, base.scale.x);
            assert_eq!(bump.scale.z, base.scale.z);
            assert_eq!(base.scale.y, BASE_SQUASH);
        }
    }
}

#[test]
fn cloud_draws_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let spec: CloudSpec = rng.gen();
        assert!((15.0..=20.0).contains(&spec.height));
        assert!((-60.0..=60.0).contains(&spec.origin.x));
        assert!((-60.0..=60.0).contains(&spec.origin.y));

        for lobe in &spec.lobes {
            assert!((0.7..=1.3).contains(&lobe.scale.x));
            assert!((0.5..=1.5).contains(&lobe.scale.y));
            assert!((0.8..=1.2).contains(&lobe.scale.z));
        }
    }
}

#[test]
fn bumps_march_east_in_a_shared_lane() {
    let mut rng = StdRng::seed_from_u64(5);
    let spec: CloudSpec = rng.gen();
    let transforms = spec.lobe_transforms();

    for (pair_index, pair) in transforms.chunks(2).enumerate() {
        let expected_x = spec.origin.x + 2.0 * pair_index as f32;
        assert_eq!(pair[0].translation.x, expected_x);
        assert_eq!(pair[0].translation.y, spec.height);
        assert_eq!(pair[0].translation.z, spec.origin.y);
    }
}

#[test]
fn trees_avoid_the_center() {
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..1000 {
        let spec: TreeSpec = rng.gen();
        assert!(spec.site.length() >= SITE_EXCLUSION_RADIUS);
        assert_eq!(spec.trunk_translation().y, 2.0);
        assert_eq!(
            spec.canopy_translation(),
            spec.trunk_translation() + Vec3::Y * 2.0,
        );
    }
}

#[test]
fn ornaments_sit_on_the_cone_surface() {
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..500 {
        let spec: OrnamentSpec = rng.gen();
        assert!((0.0..5.0).contains(&spec.offset.y));
        assert!(spec.palette_index < 4);

        let diameter = cross_section_diameter(spec.offset.y);
        assert!(spec.offset.x.abs() <= 3.2 * diameter);

        // a zero sign draw collapses z; any surviving z clears the ring
        if spec.offset.z != 0.0 {
            let reach = (spec.offset.x.powi(2) + spec.offset.z.powi(2)).sqrt();
            assert!(reach >= PI * diameter);
        }
    }
}

#[test]
fn ring_reach_walks_to_the_target_radius() {
    // widest cross-section, at the cone base
    let diameter = cross_section_diameter(0.0);
    assert!((diameter - 0.6).abs() < 1e-6);

    let reach = PI * diameter;
    let z = ring_reach(0.5, reach);
    assert!((0.5f32 * 0.5 + z * z).sqrt() >= reach);
    assert!(z > 1.8 && z < 1.84);

    // already beyond the ring: no outward walk needed
    assert_eq!(ring_reach(2.0, reach), 0.0);
}

#[test]
fn seeded_sampling_is_reproducible() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let (left, right): (CloudSpec, CloudSpec) = (a.gen(), b.gen());
        assert_eq!(left, right);

        let (left, right): (TreeSpec, TreeSpec) = (a.gen(), b.gen());
        assert_eq!(left, right);

        let (left, right): (OrnamentSpec, OrnamentSpec) = (a.gen(), b.gen());
        assert_eq!(left, right);
    }
}
