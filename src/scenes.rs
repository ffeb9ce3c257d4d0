//! Ready-made scene builders for the demo driver and benchmarks.

use super::color::*;
use super::light::*;
use super::scene::*;
use super::sphere::*;
use super::types::*;
pub use rand::Rng;
pub use rand::SeedableRng;

/// Seedable generator for the randomized scene. Xoshiro gives solid
/// statistical quality at trivial cost and reproduces a scene exactly
/// from its seed.
pub type SceneRng = rand_xoshiro::Xoshiro128Plus;

/// The classic four-sphere arrangement: red, blue and green spheres
/// resting on a giant yellow floor sphere, under one light of each kind.
pub fn book_scene() -> Scene {
    let mut scene = Scene::new();

    scene.add_sphere(
        Sphere::new(Vec3f::new(0., -1., 3.), 1., Color::new(0xFF, 0x00, 0x00))
            .with_specular(500)
            .with_reflective(0.2),
    );
    scene.add_sphere(
        Sphere::new(Vec3f::new(2., 0., 4.), 1., Color::new(0x00, 0x00, 0xFF))
            .with_specular(500)
            .with_reflective(0.3),
    );
    scene.add_sphere(
        Sphere::new(Vec3f::new(-2., 0., 4.), 1., Color::new(0x00, 0xFF, 0x00))
            .with_specular(10)
            .with_reflective(0.4),
    );
    scene.add_sphere(
        Sphere::new(
            Vec3f::new(0., -5001., 0.),
            5000.,
            Color::new(0xFF, 0xFF, 0x00),
        )
        .with_specular(1000)
        .with_reflective(0.5),
    );

    scene.add_light(Light::ambient(0.2));
    scene.add_light(Light::point(0.6, Vec3f::new(2., 1., 0.)));
    scene.add_light(Light::directional(0.2, Vec3f::new(1., 4., 4.)));

    scene
}

/// A field of small colored spheres on a gray floor, laid out on a jittered
/// grid in front of the camera. Fully determined by `rng`'s seed.
pub fn random_scene(rng: &mut SceneRng) -> Scene {
    let mut scene = Scene::new();

    scene.add_sphere(
        Sphere::new(
            Vec3f::new(0., -5001., 0.),
            5000.,
            Color::new(0xB0, 0xB0, 0xB0),
        )
        .with_specular(800)
        .with_reflective(0.3),
    );

    for a in -4..5 {
        for b in 4..13 {
            let center = Vec3f::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                -0.7,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );
            let color = Color::new(rng.gen(), rng.gen(), rng.gen());
            let sphere = if rng.gen::<f32>() < 0.7 {
                // Dull
                Sphere::new(center, 0.3, color)
                    .with_specular(10)
                    .with_reflective(0.05)
            } else {
                // Mirror-ish
                Sphere::new(center, 0.3, color)
                    .with_specular(900)
                    .with_reflective(0.6)
            };
            scene.add_sphere(sphere);
        }
    }

    scene.add_light(Light::ambient(0.2));
    scene.add_light(Light::point(0.6, Vec3f::new(0., 3., 2.)));
    scene.add_light(Light::directional(0.2, Vec3f::new(1., 4., 4.)));

    scene
}
