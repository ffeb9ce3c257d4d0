//! The recursive ray tracer.
//!
//! Geometry queries are free functions over a borrowed scene; `Tracer`
//! carries the viewport configuration and drives the per-pixel loop.

use super::color::*;
use super::light::*;
use super::math::*;
use super::scene::*;
use super::sphere::*;
use super::types::*;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Offset applied to shadow rays so a surface never occludes itself.
const SHADOW_EPSILON: f32 = 0.01;
/// Offset applied to reflection rays, for the same reason.
const REFLECT_EPSILON: f32 = 0.1;
/// Specular alignments below this contribute nothing; filters out
/// near-perpendicular artifacts.
const SPECULAR_THRESHOLD: f32 = 0.05;

/// Solves |O + tD - C|^2 = r^2 for t. Returns both roots (equal when the
/// ray is tangent), or `None` when the ray misses. A zero-length
/// direction also reports a miss rather than producing NaN roots.
pub fn intersect_ray_sphere(ray: &Ray, sphere: &Sphere) -> Option<(f32, f32)> {
    let co = ray.origin - sphere.center;
    let a = ray.direction.dot(ray.direction);
    if a == 0. {
        return None;
    }
    let b = 2. * co.dot(ray.direction);
    let c = co.dot(co) - sphere.radius * sphere.radius;
    let discriminant = b * b - 4. * a * c;
    if discriminant < 0. {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    Some(((-b + sqrt_d) / (2. * a), (-b - sqrt_d) / (2. * a)))
}

/// Linear scan for the nearest root strictly inside (t_min, t_max).
/// Ties between spheres go to the earlier one in scene order; that
/// ordering is an implementation detail, not a contract.
pub fn closest_intersection<'scene>(
    scene: &'scene Scene,
    ray: &Ray,
    t_min: f32,
    t_max: f32,
) -> Option<(&'scene Sphere, f32)> {
    let mut closest_t = f32::MAX;
    let mut closest_sphere = None;
    for sphere in &scene.spheres {
        if let Some((t1, t2)) = intersect_ray_sphere(ray, sphere) {
            if t1 > t_min && t1 < t_max && t1 < closest_t {
                closest_t = t1;
                closest_sphere = Some(sphere);
            }
            if t2 > t_min && t2 < t_max && t2 < closest_t {
                closest_t = t2;
                closest_sphere = Some(sphere);
            }
        }
    }
    closest_sphere.map(|sphere| (sphere, closest_t))
}

/// Reflects `ray` about `normal`: N * (2 N.R) - R. Both the specular
/// highlight and the mirror-bounce paths use this one formula so the two
/// stay sign-consistent.
pub fn reflect_ray(ray: Vec3f, normal: Vec3f) -> Vec3f {
    normal * (2. * normal.dot(ray)) - ray
}

/// Accumulated light intensity at `point`. Not clamped to 1; callers
/// clamp when applying it to a color.
pub fn compute_lighting(
    scene: &Scene,
    point: Vec3f,
    normal: Vec3f,
    to_view: Vec3f,
    specular: i32,
) -> f32 {
    let mut intensity = 0.;
    for light in &scene.lights {
        let (light_intensity, light_vec) = match *light {
            Light::Ambient { intensity: i } => {
                intensity += i;
                continue;
            }
            Light::Point { intensity: i, position } => (i, position - point),
            Light::Directional { intensity: i, direction } => (i, direction),
        };

        // Hard shadows: any occluder kills this light entirely.
        let shadow_ray = Ray {
            origin: point,
            direction: light_vec,
        };
        if closest_intersection(scene, &shadow_ray, SHADOW_EPSILON, f32::MAX).is_some() {
            continue;
        }

        // Diffuse
        let n_dot_l = normal.dot(light_vec);
        if n_dot_l > 0. {
            intensity += light_intensity * n_dot_l / (normal.mag() * light_vec.mag());
        }

        // Specular
        if specular != -1 {
            let reflection = reflect_ray(light_vec, normal);
            let r_dot_v = reflection.dot(to_view);
            if r_dot_v > SPECULAR_THRESHOLD {
                intensity += light_intensity
                    * (r_dot_v / (reflection.mag() * to_view.mag())).powi(specular);
            }
        }
    }
    intensity
}

/// A rendered image: packed RGBA8, row-major, top row first.
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

/// Viewport configuration plus the recursive trace loop. One tracer can
/// render any number of scenes; it holds no per-scene state.
pub struct Tracer {
    pub background: Color,
    /// Reflection bounce budget per primary ray.
    pub depth: u32,
    viewport_width: f32,
    viewport_height: f32,
    dist_to_viewport: f32,
}

impl Tracer {
    pub fn new() -> Tracer {
        Tracer {
            background: Color::BLACK,
            depth: 2,
            viewport_width: 1.,
            viewport_height: 1.,
            dist_to_viewport: 0.5,
        }
    }

    /// Maps a centered canvas coordinate onto the viewport plane.
    pub fn canvas_to_viewport(&self, x: i32, y: i32, canvas_w: usize, canvas_h: usize) -> Vec3f {
        Vec3f::new(
            x as f32 * self.viewport_width / canvas_w as f32,
            y as f32 * self.viewport_height / canvas_h as f32,
            self.dist_to_viewport,
        )
    }

    /// Sets the horizontal field of view by moving the viewport plane.
    pub fn set_fov(&mut self, degrees: f32) {
        self.dist_to_viewport = (self.viewport_width / 2.) / (degrees.to_radians() / 2.).tan();
    }

    /// Current field of view in degrees, in [0, 360).
    pub fn fov(&self) -> f32 {
        let degrees = 2. * ((self.viewport_width / 2.) / self.dist_to_viewport)
            .atan()
            .to_degrees();
        degrees.rem_euclid(360.)
    }

    /// Traces one ray to a color. Recurses on reflective surfaces until
    /// the depth budget runs out; depth strictly decreases, so arbitrary
    /// scene reflectivity cannot recurse forever.
    pub fn trace_ray(&self, scene: &Scene, ray: &Ray, t_min: f32, t_max: f32, depth: u32) -> Color {
        let (sphere, closest_t) = match closest_intersection(scene, ray, t_min, t_max) {
            Some(hit) => hit,
            None => return self.background,
        };

        let point = ray.point_at(closest_t);
        let normal = (point - sphere.center).normalized();
        let local_color = sphere.color
            * compute_lighting(scene, point, normal, -ray.direction, sphere.specular);

        let reflective = sphere.reflective;
        if depth == 0 || reflective <= 0. {
            return local_color;
        }

        let reflected_ray = Ray {
            origin: point,
            direction: reflect_ray(-ray.direction, normal),
        };
        let reflected_color =
            self.trace_ray(scene, &reflected_ray, REFLECT_EPSILON, f32::MAX, depth - 1);

        local_color * (1. - reflective) + reflected_color * reflective
    }

    /// Renders a full frame. Pixels are independent and the scene is
    /// borrowed read-only, so the loop fans out across the rayon pool.
    pub fn render(&self, scene: &Scene, width: usize, height: usize) -> Frame {
        let start = Instant::now();
        let rotation = scene.camera.rotation_y() * scene.camera.rotation_x();
        let origin = scene.camera.position;

        const BYTES_PER_PIXEL: usize = 4;
        let mut pixels = vec![0u8; width * height * BYTES_PER_PIXEL];
        pixels
            .par_chunks_mut(BYTES_PER_PIXEL)
            .enumerate()
            .for_each(|(idx, chunk)| {
                // Centered canvas coordinates, +y up.
                let x = (idx % width) as i32 - (width / 2) as i32;
                let y = (height / 2) as i32 - (idx / width) as i32 - 1;
                let direction =
                    rotate_direction(rotation, self.canvas_to_viewport(x, y, width, height));
                let ray = Ray { origin, direction };
                let color = self.trace_ray(scene, &ray, 1., f32::MAX, self.depth);
                chunk.copy_from_slice(&[color.r, color.g, color.b, color.a]);
            });

        debug!("rendered {}x{} in {:.2?}", width, height, start.elapsed());
        Frame {
            width,
            height,
            pixels,
        }
    }
}

impl Default for Tracer {
    fn default() -> Tracer {
        Tracer::new()
    }
}
