use bevy::prelude::*;
use glam::DVec2;
use quickhull2d::ConvexHull2d;
use rand::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Quickhull 2D".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup)
        .add_systems(Update, draw)
        .run();
}

#[derive(Resource)]
struct Scatter(ConvexHull2d);

fn setup(mut commands: Commands) {
    // Scatter a reproducible point cloud.
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<DVec2> = (0..400)
        .map(|_| {
            DVec2::new(
                rng.random_range(-300.0..300.0),
                rng.random_range(-250.0..250.0),
            )
        })
        .collect();

    let hull = match ConvexHull2d::try_from_points(&points) {
        Ok(hull) => hull,
        Err(e) => {
            error!("Failed to set up convex hull: {e}");
            return;
        }
    };

    // First access computes the hull; later frames read the cache.
    let now = std::time::Instant::now();
    let hull_points = hull.hull_points();
    info!("Computed convex hull in {:.4?}", now.elapsed());
    info!(
        "Hull has {} of {} input points",
        hull_points.len(),
        hull.input_points().len()
    );

    commands.insert_resource(Scatter(hull));
    commands.spawn(Camera2d);
}

fn draw(scatter: Option<Res<Scatter>>, mut gizmos: Gizmos) {
    let Some(scatter) = scatter else {
        return;
    };

    for point in scatter.0.input_points() {
        gizmos.circle_2d(as_vec2(point), 2.0, Color::srgb(0.6, 0.6, 0.6));
    }

    let hull = scatter.0.hull_points();
    let outline = hull
        .iter()
        .chain(hull.first())
        .map(as_vec2)
        .collect::<Vec<_>>();
    gizmos.linestrip_2d(outline, Color::srgb(0.9, 0.6, 0.1));

    for point in hull {
        gizmos.circle_2d(as_vec2(point), 4.0, Color::srgb(0.9, 0.6, 0.1));
    }
}

fn as_vec2(point: &DVec2) -> Vec2 {
    Vec2::new(point.x as f32, point.y as f32)
}
