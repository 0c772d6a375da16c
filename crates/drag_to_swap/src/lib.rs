use bevy::prelude::*;
use swap_helpers::title_bar::spawn_title_bar;

pub mod animation;
pub mod config;
pub mod coordinator;
mod events;
pub mod grid;
pub mod hit_test;
pub mod image;
mod input;
pub mod preview;
pub mod state;

use animation::AnimationPlugin;
use config::SwapConfig;
use coordinator::DragCoordinator;
use events::DragEventsPlugin;
use grid::GridPlugin;
use image::{ImageRepository, InMemoryImageRepository};
use input::InputPlugin;
use preview::PreviewPlugin;
use state::SwapState;

/// Frame order: pointer input feeds the coordinator, its events are played, state
/// observers catch up, then animations advance.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SwapSystemSet {
    Input,
    Events,
    Sync,
    Animate,
}

/// Creates the coordinator over `repository` and publishes its images to a fresh
/// [`SwapState`].
pub fn insert_repository(app: &mut App, repository: Box<dyn ImageRepository>) {
    let mut state = SwapState::default();
    let coordinator = DragCoordinator::new(repository, &mut state);
    app.insert_resource(state).insert_resource(coordinator);
}

/// Everything but the window: resources, grid, preview, input and animations.
///
/// Falls back to [`SwapConfig::default`] and the sample repository when the app did
/// not provide its own.
pub struct SwapPlugin;

impl Plugin for SwapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SwapConfig>();
        if !app.world().contains_resource::<DragCoordinator>() {
            insert_repository(app, Box::new(InMemoryImageRepository::sample()));
        }
        let layout = app.world().resource::<SwapConfig>().slot_layout();

        app.insert_resource(layout)
            .configure_sets(
                Update,
                (
                    SwapSystemSet::Input,
                    SwapSystemSet::Events,
                    SwapSystemSet::Sync,
                    SwapSystemSet::Animate,
                )
                    .chain(),
            )
            .add_plugins((
                InputPlugin,
                DragEventsPlugin,
                GridPlugin,
                PreviewPlugin,
                AnimationPlugin,
            ));
    }
}

pub fn run() {
    swap_helpers::get_default_app(env!("CARGO_PKG_NAME"))
        .insert_resource(SwapConfig::default())
        .add_plugins(SwapPlugin)
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
    spawn_title_bar(
        &mut commands,
        "Drag to swap",
        Some("Drag a photo onto another one to swap them"),
    );
}
