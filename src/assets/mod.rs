//! Asynchronous texture loading with guaranteed fallback.
//!
//! All textures named by the [`BodyRegistry`] are requested at startup. The
//! asset server decodes them in the background; [`poll_textures`] is the
//! barrier that waits for every request to finish and then moves the app
//! from [`AppState::Loading`] to [`AppState::Running`].

pub mod loader;

use bevy::asset::LoadState;
use bevy::image::ImageLoaderSettings;
use bevy::prelude::*;

use crate::registry::BodyRegistry;
use crate::types::AppState;

pub use loader::{
    AssetLoadFailure, FALLBACK_TEXTURE_FILL, FALLBACK_TEXTURE_SIZE, LoadedTexture, SlotStatus,
    TextureBatch, TextureOrigin, TextureSlot, fallback_image,
};

/// Shared placeholder texture handle.
#[derive(Resource, Clone, Debug)]
pub struct FallbackTexture(pub Handle<Image>);

/// Plugin providing texture requests and the loading barrier.
pub struct TextureLoaderPlugin;

impl Plugin for TextureLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (create_fallback_texture, request_textures).chain())
            .add_systems(Update, poll_textures.run_if(in_state(AppState::Loading)));
    }
}

/// Create the placeholder once so every failed slot shares one image.
pub fn create_fallback_texture(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let handle = images.add(fallback_image());
    commands.insert_resource(FallbackTexture(handle));
}

/// Fan out one load per registry texture.
fn request_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    registry: Res<BodyRegistry>,
) {
    let batch = TextureBatch::request(registry.texture_paths(), |path| {
        asset_server.load_with_settings(path.to_owned(), |settings: &mut ImageLoaderSettings| {
            settings.is_srgb = true;
        })
    });

    info!("Requested {} textures", batch.len());
    commands.insert_resource(batch);
}

/// Map the asset server's view of a handle onto a slot status.
fn slot_status(asset_server: &AssetServer, handle: &Handle<Image>) -> SlotStatus {
    match asset_server.get_load_state(handle.id()) {
        Some(LoadState::Loaded) => SlotStatus::Ready,
        Some(LoadState::Failed(err)) => SlotStatus::Failed(err.to_string()),
        _ => SlotStatus::Pending,
    }
}

/// Resolve finished loads and leave `Loading` once the batch is complete.
pub fn poll_textures(
    asset_server: Res<AssetServer>,
    fallback: Res<FallbackTexture>,
    mut batch: ResMut<TextureBatch>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !batch.poll(|slot| slot_status(&asset_server, slot.handle()), &fallback.0) {
        return;
    }

    let placeholders = batch
        .slots()
        .iter()
        .filter(|s| s.resolved().is_some_and(LoadedTexture::is_placeholder))
        .count();
    info!(
        "All {} textures resolved ({} placeholders)",
        batch.len(),
        placeholders
    );
    next_state.set(AppState::Running);
}
