//! Window, drawables and the fixed-rate loop driving the field.
//!
//! The field lives in the app as a resource. One simulation tick runs per
//! fixed step; drawables only read the pixel positions it leaves behind.

use bevy::prelude::*;
use bevy::time::fixed_timestep::FixedTime;
use bevy::window::close_on_esc;
use bevy_prototype_lyon::prelude::*;

use crate::body::Body;
use crate::components::{Anchored, BodyIndex};
use crate::config::{Settings, BODY_RADIUS, FIELD_HEIGHT, FIELD_WIDTH, WINDOW_TITLE};
use crate::field::GravityField;

pub struct ViewerPlugin;

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugin(ShapePlugin)
            .insert_resource(ClearColor(Color::BLACK))
            .add_startup_system(setup_camera)
            .add_startup_system(spawn_bodies)
            .add_system(gravity_tick_system.in_schedule(CoreSchedule::FixedUpdate))
            .add_system(sync_transforms_system)
            .add_system(close_on_esc);
    }
}

/// Run the viewer until the window is closed.
pub fn run(settings: Settings, field: GravityField) {
    let tick = settings.tick_seconds();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.to_string(),
                resolution: (FIELD_WIDTH as f32, FIELD_HEIGHT as f32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(FixedTime::new_from_secs(tick))
        .insert_resource(settings)
        .insert_resource(field)
        .add_plugin(ViewerPlugin)
        .run();
}

/// Map a pixel (origin top-left, y down) to a translation in bevy's
/// centered, y-up 2D frame.
pub fn pixel_to_translation(pixel: IVec2) -> Vec3 {
    Vec3::new(
        pixel.x as f32 - FIELD_WIDTH as f32 / 2.0,
        FIELD_HEIGHT as f32 / 2.0 - pixel.y as f32,
        0.0,
    )
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn spawn_bodies(mut commands: Commands, field: Res<GravityField>, settings: Res<Settings>) {
    info!(
        "{:?} scenario: {} bodies at {} ticks per second",
        settings.scenario,
        field.len(),
        settings.ticks_per_second
    );

    let circle = shapes::Circle {
        radius: BODY_RADIUS,
        center: Vec2::ZERO,
    };

    for (id, body) in field.iter() {
        let mut entity = commands.spawn((
            ShapeBundle {
                path: GeometryBuilder::build_as(&circle),
                transform: Transform::from_translation(pixel_to_translation(body.pixel_position())),
                ..default()
            },
            Fill::color(body_color(body)),
            BodyIndex(id),
        ));
        if body.is_immobile() {
            entity.insert(Anchored);
        }
    }
}

fn body_color(body: &Body) -> Color {
    if body.is_immobile() {
        Color::YELLOW
    } else {
        Color::WHITE
    }
}

fn gravity_tick_system(mut field: ResMut<GravityField>) {
    field.tick();
}

fn sync_transforms_system(
    field: Res<GravityField>,
    mut query: Query<(&BodyIndex, &mut Transform), Without<Anchored>>,
) {
    if !field.is_changed() {
        return;
    }
    for (BodyIndex(id), mut transform) in &mut query {
        if let Some(body) = field.body(*id) {
            transform.translation = pixel_to_translation(body.pixel_position());
        }
    }
}
