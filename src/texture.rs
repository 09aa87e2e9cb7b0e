use bevy::{
    image::{
        ImageAddressMode,
        ImageFilterMode,
        ImageLoaderSettings,
        ImageSampler,
        ImageSamplerDescriptor,
    },
    math::Affine2,
    prelude::*,
};


/// Per-axis tiling density for a repeat-wrapped texture.
///
/// The axes are configured independently; a surface may stretch the same
/// image differently along u and v.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct TextureRepeat {
    pub x: f32,
    pub y: f32,
}

impl TextureRepeat {
    pub fn splat(n: f32) -> Self {
        Self { x: n, y: n }
    }

    pub fn uv_transform(&self) -> Affine2 {
        Affine2::from_scale(Vec2::new(self.x, self.y))
    }
}

/// Loads an sRGB image that wraps on both axes with nearest-neighbor
/// magnification. Completion is asynchronous; until the bytes arrive the
/// owning material renders with its base color alone.
pub fn load_wrapped(asset_server: &AssetServer, path: &'static str) -> Handle<Image> {
    asset_server.load_with_settings(path, |settings: &mut ImageLoaderSettings| {
        settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::Repeat,
            address_mode_v: ImageAddressMode::Repeat,
            mag_filter: ImageFilterMode::Nearest,
            ..ImageSamplerDescriptor::default()
        });
    })
}
