use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::glyph::Bitmap;
use crate::hud::{DisplaySink, SinkError};
use crate::palette;

/// Marker for the sprite spawned by the HUD.
#[derive(Component)]
pub struct HudSprite;

/// Draw order for HUD sprites, above gameplay at z = 0.
const HUD_Z: f32 = 100.0;

/// [`DisplaySink`] that spawns sprites straight into a Bevy `World`.
///
/// Positions are window pixels with the origin at the top-left; the sprite is
/// centred on the requested point. `scale` is the on-screen size of one
/// bitmap pixel.
pub struct WorldSink<'w> {
    world: &'w mut World,
    viewport: Vec2,
    scale: f32,
}

impl<'w> WorldSink<'w> {
    pub fn new(world: &'w mut World, viewport: Vec2, scale: f32) -> Self {
        Self { world, viewport, scale }
    }

    fn to_world(&self, x: f32, y: f32) -> Vec3 {
        Vec3::new(x - self.viewport.x / 2.0, self.viewport.y / 2.0 - y, HUD_Z)
    }
}

/// Upload a bitmap as an RGBA texture.
pub fn bitmap_to_image(bitmap: &Bitmap) -> Image {
    Image::new(
        Extent3d {
            width: bitmap.width() as u32,
            height: bitmap.height() as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        palette::to_rgba8(bitmap),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

impl DisplaySink for WorldSink<'_> {
    type Handle = Entity;

    fn render(&mut self, bitmap: &Bitmap, x: f32, y: f32) -> Result<Entity, SinkError> {
        let transform = Transform::from_translation(self.to_world(x, y)).with_scale(Vec3::splat(self.scale));

        // Zero-sized textures are invalid on the GPU, so an empty bitmap gets
        // a sprite-less entity that still acts as the HUD handle.
        if bitmap.is_empty() {
            return Ok(self.world.spawn((transform, HudSprite)).id());
        }

        let image = match self.world.get_resource_mut::<Assets<Image>>() {
            Some(mut images) => images.add(bitmap_to_image(bitmap)),
            None => return Err(SinkError::Rejected("image assets are not initialised".into())),
        };

        let entity = self
            .world
            .spawn((
                Sprite {
                    image,
                    ..default()
                },
                transform,
                HudSprite,
            ))
            .id();
        Ok(entity)
    }

    fn clear(&mut self, handle: &Entity) -> Result<(), SinkError> {
        if self.world.despawn(*handle) {
            Ok(())
        } else {
            Err(SinkError::EntityMissing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::HudController;

    fn hud_world() -> World {
        let mut world = World::new();
        world.init_resource::<Assets<Image>>();
        world
    }

    fn hud_count(world: &mut World) -> usize {
        let mut q = world.query::<&HudSprite>();
        q.iter(world).count()
    }

    #[test]
    fn render_spawns_centred_sprite() {
        let mut world = hud_world();
        let entity = {
            let mut sink = WorldSink::new(&mut world, Vec2::new(200.0, 100.0), 4.0);
            sink.render(&crate::compositor::compose("12", 1), 100.0, 10.0).unwrap()
        };
        let transform = world.get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation, Vec3::new(0.0, 40.0, HUD_Z));
        assert_eq!(transform.scale, Vec3::splat(4.0));
        let sprite = world.get::<Sprite>(entity).unwrap();
        let images = world.resource::<Assets<Image>>();
        let image = images.get(&sprite.image).unwrap();
        assert_eq!(image.width(), 10);
        assert_eq!(image.height(), 5);
    }

    #[test]
    fn controller_keeps_one_sprite_alive() {
        let mut world = hud_world();
        let mut hud: HudController<Entity> = HudController::new();
        {
            let mut sink = WorldSink::new(&mut world, Vec2::new(160.0, 120.0), 1.0);
            hud.show_text(&mut sink, "00:00", 10.0, 10.0, 1).unwrap();
            hud.show_text(&mut sink, "1.25", 10.0, 10.0, 2).unwrap();
        }
        assert_eq!(hud_count(&mut world), 1);
        {
            let mut sink = WorldSink::new(&mut world, Vec2::new(160.0, 120.0), 1.0);
            hud.hide(&mut sink).unwrap();
            hud.hide(&mut sink).unwrap();
        }
        assert_eq!(hud_count(&mut world), 0);
    }

    #[test]
    fn empty_bitmap_gets_sprite_less_entity() {
        let mut world = hud_world();
        let entity = {
            let mut sink = WorldSink::new(&mut world, Vec2::new(160.0, 120.0), 1.0);
            sink.render(&Bitmap::new(0, 5), 0.0, 0.0).unwrap()
        };
        assert!(world.get::<Sprite>(entity).is_none());
        assert!(world.get::<HudSprite>(entity).is_some());
    }

    #[test]
    fn clearing_twice_reports_missing() {
        let mut world = hud_world();
        let mut sink = WorldSink::new(&mut world, Vec2::new(160.0, 120.0), 1.0);
        let e = sink.render(&crate::compositor::compose("7", 1), 0.0, 0.0).unwrap();
        assert!(sink.clear(&e).is_ok());
        assert!(matches!(sink.clear(&e), Err(SinkError::EntityMissing)));
    }
}
