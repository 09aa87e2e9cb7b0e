use bevy::{
    asset::AssetPlugin,
    ecs::query::QueryFilter,
    prelude::*,
};

use bevy_meadow::{
    MeadowPlugin,
    MeadowSettings,
    ground::Ground,
    scatter::{
        cloud::{
            CloudDrift,
            CloudLobe,
            DRIFT_WEST_EDGE,
            drift_clouds,
        },
        ornament::Ornament,
        tree::{
            Canopy,
            Trunk,
        },
    },
};


// windowed runs are too flaky for ci; population and drift only need the
// asset plumbing, so the harness stays headless
fn harness_app(settings: MeadowSettings) -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        AssetPlugin::default(),
    ));
    app.init_asset::<Mesh>();
    app.init_asset::<Image>();
    app.init_asset::<Scene>();
    app.init_asset::<StandardMaterial>();

    app.insert_resource(settings);
    app.add_plugins(MeadowPlugin);

    app
}

fn count_with<F: QueryFilter>(world: &mut World) -> usize {
    let mut query = world.query_filtered::<(), F>();
    query.iter(world).count()
}


#[test]
fn populates_the_fixed_scene() {
    let mut app = harness_app(MeadowSettings::default());
    app.update();

    let world = app.world_mut();
    let ground = count_with::<With<Ground>>(world);
    let trunks = count_with::<With<Trunk>>(world);
    let canopies = count_with::<With<Canopy>>(world);
    let ornaments = count_with::<With<Ornament>>(world);
    let lobes = count_with::<With<CloudLobe>>(world);

    assert_eq!(ground, 1);
    assert_eq!(trunks, 201);
    assert_eq!(canopies, 201);
    assert_eq!(ornaments, 200);
    assert_eq!(ground + trunks + canopies + ornaments, 803);

    // 15 clouds at 2..=5 bump pairs each
    assert_eq!(lobes % 2, 0);
    assert!((60..=150).contains(&lobes));
}

#[test]
fn population_counts_follow_settings() {
    let mut app = harness_app(MeadowSettings {
        cloud_count: 3,
        tree_count: 10,
        ornament_count: 25,
        ..MeadowSettings::default()
    });
    app.update();

    let world = app.world_mut();
    let trunks = count_with::<With<Trunk>>(world);
    let ornaments = count_with::<With<Ornament>>(world);
    let lobes = count_with::<With<CloudLobe>>(world);

    assert_eq!(trunks, 11);
    assert_eq!(ornaments, 25);
    assert!((12..=30).contains(&lobes));
}

#[test]
fn drift_speeds_follow_creation_order() {
    let mut app = harness_app(MeadowSettings::default());
    app.update();

    let world = app.world_mut();
    let mut query = world.query::<&CloudDrift>();
    let mut speeds: Vec<f32> = query.iter(world).map(|drift| drift.speed).collect();
    speeds.sort_by(f32::total_cmp);
    speeds.dedup();

    assert_eq!(speeds.len(), 15);
    for (index, speed) in speeds.iter().enumerate() {
        assert_eq!(*speed, 0.002 + 0.0005 * index as f32);
    }
}

#[test]
fn wrapping_lobe_lands_exactly_on_the_west_edge() {
    let mut app = App::new();
    app.add_systems(Update, drift_clouds);

    let lobe = app
        .world_mut()
        .spawn((
            CloudLobe,
            CloudDrift { speed: 0.01 },
            Transform::from_xyz(61.0, 18.0, 0.0),
        ))
        .id();

    // the wrap lands exactly on the edge, with no drift applied that frame
    app.update();
    let x = app.world().get::<Transform>(lobe).unwrap().translation.x;
    assert_eq!(x, DRIFT_WEST_EDGE);

    // the following frame drifts east again
    app.update();
    let x = app.world().get::<Transform>(lobe).unwrap().translation.x;
    assert_eq!(x, DRIFT_WEST_EDGE + 0.01);
}

#[test]
fn lobes_short_of_the_edge_keep_drifting() {
    let mut app = App::new();
    app.add_systems(Update, drift_clouds);

    let lobe = app
        .world_mut()
        .spawn((
            CloudLobe,
            CloudDrift { speed: 0.25 },
            Transform::from_xyz(59.9, 18.0, 0.0),
        ))
        .id();

    // crossing the edge only triggers the wrap on the following frame
    app.update();
    let x = app.world().get::<Transform>(lobe).unwrap().translation.x;
    assert_eq!(x, 59.9 + 0.25);

    app.update();
    let x = app.world().get::<Transform>(lobe).unwrap().translation.x;
    assert_eq!(x, DRIFT_WEST_EDGE);
}
