//! Time-driven scene mutation.
//!
//! Each driver builds its scene once and then reshapes entity parameters
//! every frame from a monotonically increasing clock. Entity counts never
//! change after construction, so the indices captured at build time stay
//! valid for the driver's whole life.

use super::color::*;
use super::light::*;
use super::math::*;
use super::scene::*;
use super::sphere::*;
use super::types::*;
use std::f32::consts::TAU;

/// A strategy that mutates a scene as time advances. `time_ms` is the
/// driver clock in milliseconds since the session started.
pub trait Animate {
    fn update(&mut self, scene: &mut Scene, time_ms: f32);
}

fn sin01(x: f32) -> f32 {
    x.sin() * 0.5 + 0.5
}

fn cos01(x: f32) -> f32 {
    x.cos() * 0.5 + 0.5
}

/// A ring of small white spheres orbiting over a color-pulsing floor,
/// with the point light bobbing up and down. Viewed top-down.
pub struct OrbitRing {
    ring: Vec<usize>,
    floor: usize,
    point_light: usize,
}

impl OrbitRing {
    pub const SPHERE_COUNT: usize = 48;
    const PERIOD_MS: f32 = 1000.;

    pub fn build() -> (Scene, OrbitRing) {
        let mut scene = Scene::new();
        let ring = (0..Self::SPHERE_COUNT)
            .map(|_| {
                scene.add_sphere(
                    Sphere::new(Vec3f::new(1., 0., 0.), 0.05, Color::WHITE)
                        .with_specular(900)
                        .with_reflective(0.3),
                )
            })
            .collect();
        let floor = scene.add_sphere(
            Sphere::new(Vec3f::new(0., -5001., 0.), 5000., Color::WHITE)
                .with_specular(800)
                .with_reflective(0.4),
        );
        scene.add_light(Light::ambient(0.2));
        let point_light = scene.add_light(Light::point(0.6, Vec3f::new(0., 1., 0.)));
        scene.add_light(Light::directional(0.4, Vec3f::new(0., -1., 0.)));

        scene.camera.pitch = 90.;
        scene.camera.position = Vec3f::new(0., 4., 0.);

        (scene, OrbitRing { ring, floor, point_light })
    }
}

impl Animate for OrbitRing {
    fn update(&mut self, scene: &mut Scene, time_ms: f32) {
        scene.camera.pitch = 90.;
        scene.camera.position = Vec3f::new(0., 4., 0.);

        let interval = 360. / Self::SPHERE_COUNT as f32;
        let phase = TAU / Self::PERIOD_MS;
        let rot_speed = 0.1;
        // Steps through 0..8 once a second, changing the wave pattern the
        // ring traces out.
        let wave_sides = ((time_ms / 1000.) as u64 % 8) as f32;
        let shift = Self::PERIOD_MS / Self::SPHERE_COUNT as f32;

        for (i, &index) in self.ring.iter().enumerate() {
            let angle = interval * i as f32 + time_ms * rot_speed;
            let mut center =
                rotate_direction(rotation_about_y(angle), Vec3f::new(1., 0., 0.));
            center.y = sin01(phase * (time_ms + i as f32 * shift * wave_sides));
            scene.spheres[index].center = center;
        }

        if let Light::Point { position, .. } = &mut scene.lights[self.point_light] {
            *position = Vec3f::new(0., 1., 0.) * (5. * sin01(phase / 2. * time_ms));
        }

        scene.spheres[self.floor].color = Color::new(
            (130. + 125. * sin01(phase * time_ms)) as u8,
            (155. + 100. * cos01(phase * time_ms)) as u8,
            0xFF,
        );
    }
}

/// A spiral of spheres fading through the rainbow, growing outward and
/// upward; radius and reflectivity breathe with the clock.
pub struct RainbowRing {
    ring: Vec<usize>,
    floor: usize,
}

impl RainbowRing {
    // One slot under the upload capacity, leaving room for the floor.
    pub const SPHERE_COUNT: usize = 99;
    const PERIOD_MS: f32 = 5000.;

    pub fn build() -> (Scene, RainbowRing) {
        let mut scene = Scene::new();
        let ring = (0..Self::SPHERE_COUNT)
            .map(|_| {
                scene.add_sphere(
                    Sphere::new(Vec3f::new(1., 0., 0.), 0.05, Color::WHITE)
                        .with_specular(900)
                        .with_reflective(0.3),
                )
            })
            .collect();
        let floor = scene.add_sphere(
            Sphere::new(Vec3f::new(0., -5001., 0.), 5000., Color::WHITE)
                .with_specular(800)
                .with_reflective(0.4),
        );
        scene.add_light(Light::ambient(0.6));
        scene.add_light(Light::point(0.6, Vec3f::new(0., 5., 0.)));
        scene.add_light(Light::directional(0.4, Vec3f::new(0., -1., 0.)));

        scene.camera.pitch = 90.;
        scene.camera.position = Vec3f::new(0., 1.7, 0.);

        (scene, RainbowRing { ring, floor })
    }
}

impl Animate for RainbowRing {
    fn update(&mut self, scene: &mut Scene, time_ms: f32) {
        scene.camera.pitch = 90.;
        scene.camera.position = Vec3f::new(0., 1.7, 0.);

        let count = Self::SPHERE_COUNT as f32;
        let interval = 360. / count;
        let phase = TAU / Self::PERIOD_MS;
        let sin_lerp = sin01(phase * time_ms);
        let cos_lerp = cos01(phase * time_ms);
        let rot_speed = 0.1;
        let wave_sides = (time_ms / 5000.) * sin01(TAU / 10000. * time_ms);

        for (i, &index) in self.ring.iter().enumerate() {
            let fraction = i as f32 / count;
            let spread = 0.6 * (i as f32 / 80.);
            let angle = interval * 7. * i as f32 + time_ms * rot_speed;
            let mut center =
                rotate_direction(rotation_about_y(angle), Vec3f::new(spread, 0., 0.));
            center.y = sin01(phase * (time_ms + i as f32 * wave_sides));

            let sphere = &mut scene.spheres[index];
            sphere.center = center;
            sphere.reflective = cos_lerp;
            sphere.radius = fraction * 0.3;
            sphere.color = Color::new(
                (sin01(TAU / 100. + 50.) * fraction * 255.) as u8,
                (sin_lerp * fraction * 255.) as u8,
                (cos_lerp * fraction * 255.) as u8,
            );
        }

        let fade = ((sin_lerp * 0.2 + 0.8) * 255.) as u8;
        scene.spheres[self.floor].color = Color::new(fade, fade, fade);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_ring_mutates_parameters_but_not_structure() {
        let (mut scene, mut driver) = OrbitRing::build();
        let spheres = scene.spheres.len();
        let lights = scene.lights.len();
        assert_eq!(spheres, OrbitRing::SPHERE_COUNT + 1);

        let before = scene.spheres[0].center;
        driver.update(&mut scene, 250.);
        assert_eq!(scene.spheres.len(), spheres);
        assert_eq!(scene.lights.len(), lights);
        let after = scene.spheres[0].center;
        assert!(before.x != after.x || before.y != after.y || before.z != after.z);
    }

    #[test]
    fn orbit_ring_accepts_time_zero() {
        let (mut scene, mut driver) = OrbitRing::build();
        driver.update(&mut scene, 0.);
        for sphere in &scene.spheres {
            assert!(sphere.center.x.is_finite());
            assert!(sphere.center.y.is_finite());
            assert!(sphere.center.z.is_finite());
        }
    }

    #[test]
    fn orbit_ring_moves_the_point_light() {
        let (mut scene, mut driver) = OrbitRing::build();
        driver.update(&mut scene, 250.);
        let first = match scene.lights[1] {
            Light::Point { position, .. } => position.y,
            _ => panic!("expected the point light at index 1"),
        };
        driver.update(&mut scene, 500.);
        let second = match scene.lights[1] {
            Light::Point { position, .. } => position.y,
            _ => panic!("expected the point light at index 1"),
        };
        assert!(first != second);
    }

    #[test]
    fn rainbow_ring_breathes_radius_and_reflectivity() {
        let (mut scene, mut driver) = RainbowRing::build();
        driver.update(&mut scene, 1250.);
        let last = scene.spheres[RainbowRing::SPHERE_COUNT - 1];
        assert!(last.radius > 0.);
        assert!(last.reflective >= 0. && last.reflective <= 1.);

        driver.update(&mut scene, 2500.);
        let later = scene.spheres[RainbowRing::SPHERE_COUNT - 1];
        assert!(last.reflective != later.reflective);
    }

    #[test]
    fn animated_scenes_fit_the_upload_buffers() {
        use crate::buffers::UploadBuffers;
        let (scene, _) = RainbowRing::build();
        let mut buffers = UploadBuffers::new();
        scene.serialize(&mut buffers).unwrap();
    }
}
