//! Bevy 2D viewer
//!
//! Physics runs on `FixedUpdate` at the engine frame rate, drawing on `Update`.
//! Virtual time is clamped to one tick period per rendered frame, so a slow
//! frame never runs a backlog of simulated days: at most one tick per frame,
//! at most `frame_rate` ticks per second.

use bevy::app::AppExit;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::simulation::scenario::Scenario;
use crate::visualization::view::{distance_label, ViewCommand, ViewSettings, ViewState};

#[derive(Component)]
struct BodyIndex(pub usize);

/// Distance-to-anchor text next to a body
#[derive(Component)]
struct DistanceLabel(pub usize);

const BODY_Z: f32 = 1.0;
const LABEL_Z: f32 = 2.0;
const LABEL_FONT_SIZE: f32 = 16.0;

/// Gap between a disc's top edge and its label, in pixels
const LABEL_GAP: f32 = 4.0;

pub fn run_2d(scenario: Scenario, settings: ViewSettings) -> AppExit {
    let ViewSettings { view, window } = settings;
    let frame_rate = scenario.engine.frame_rate;
    let tick_period = scenario.engine.tick_period();

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        // one physics tick per fixed step, 60 per second by default
        .insert_resource(Time::<Fixed>::from_hz(frame_rate))
        .insert_resource(Time::<Virtual>::from_max_delta(tick_period))
        .insert_resource(scenario)
        .insert_resource(view)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: window.title,
                resolution: WindowResolution::new(window.width, window.height),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(
            Update,
            (view_input_system, sync_transforms_system, draw_trails_system).chain(),
        )
        .run()
}

/// Map a released key to the command it stands for, everything else is ignored
pub fn view_command(key: KeyCode) -> Option<ViewCommand> {
    match key {
        KeyCode::Equal | KeyCode::NumpadAdd => Some(ViewCommand::ZoomIn),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(ViewCommand::ZoomOut),
        KeyCode::Escape => Some(ViewCommand::Quit),
        _ => None,
    }
}

/// Screen pixels (origin top-left, y down) to Bevy 2D world space (origin centered, y up)
pub fn screen_to_world(pixel: [f64; 2], viewport: [f32; 2]) -> Vec2 {
    Vec2::new(
        pixel[0] as f32 - viewport[0] / 2.0,
        viewport[1] / 2.0 - pixel[1] as f32,
    )
}

/// Label anchor point: centered just above the disc, clear of it
pub fn label_position(body: Vec2, disc_radius: f32) -> Vec2 {
    Vec2::new(body.x, body.y + disc_radius + LABEL_GAP)
}

fn viewport(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<[f32; 2]> {
    windows.get_single().ok().map(|w| [w.width(), w.height()])
}

fn body_color(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    info!("starting 2D viewer with {} bodies", scenario.system.bodies.len());

    commands.spawn(Camera2dBundle::default());

    // unit disc, scaled to the display radius every frame
    let disc = Mesh2dHandle(meshes.add(Circle::new(1.0)));

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: disc.clone(),
                material: materials.add(ColorMaterial::from(body_color(body.color))),
                transform: Transform::from_xyz(0.0, 0.0, BODY_Z),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        if !body.anchor {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        String::new(),
                        TextStyle {
                            font_size: LABEL_FONT_SIZE,
                            color: Color::WHITE,
                            ..Default::default()
                        },
                    ),
                    text_anchor: Anchor::BottomCenter,
                    transform: Transform::from_xyz(0.0, 0.0, LABEL_Z),
                    ..Default::default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();
    trace!("tick {}", scenario.system.ticks.value());
}

fn view_input_system(keys: Res<ButtonInput<KeyCode>>, mut view: ResMut<ViewState>, mut exit: EventWriter<AppExit>) {
    for key in keys.get_just_released() {
        let Some(command) = view_command(*key) else {
            continue;
        };
        if !view.apply(command) {
            info!("quit requested");
            exit.send(AppExit::Success);
        }
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    view: Res<ViewState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut bodies: Query<(&BodyIndex, &mut Transform, &mut Visibility), Without<DistanceLabel>>,
    mut labels: Query<(&DistanceLabel, &mut Transform, &mut Text), Without<BodyIndex>>,
) {
    let Some(viewport) = viewport(&windows) else {
        return;
    };

    for (BodyIndex(i), mut transform, mut visibility) in &mut bodies {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let pos = screen_to_world(view.to_pixels(&b.x, viewport), viewport);
            let radius = view.display_radius(b.radius) as f32;
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
            // zoomed out past zero: nothing to draw
            if radius > 0.0 {
                transform.scale = Vec3::splat(radius);
                *visibility = Visibility::Inherited;
            } else {
                *visibility = Visibility::Hidden;
            }
        }
    }

    for (DistanceLabel(i), mut transform, mut text) in &mut labels {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let body = screen_to_world(view.to_pixels(&b.x, viewport), viewport);
            let pos = label_position(body, view.display_radius(b.radius) as f32);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
            text.sections[0].value = distance_label(b.anchor_distance);
        }
    }
}

fn draw_trails_system(
    scenario: Res<Scenario>,
    view: Res<ViewState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let Some(viewport) = viewport(&windows) else {
        return;
    };

    for b in &scenario.system.bodies {
        // fewer than 3 points is not a path yet, the disc is still drawn
        if !b.trail.is_drawable() {
            continue;
        }
        let points = b
            .trail
            .iter()
            .map(|p| screen_to_world(view.to_pixels(p, viewport), viewport));
        gizmos.linestrip_2d(points, body_color(b.color));
    }
}
