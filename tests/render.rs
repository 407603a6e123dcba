use glam::Vec3A;
use std::path::Path;

use mirrorpath::camera::Camera;
use mirrorpath::hittable::{Color, Scene};
use mirrorpath::motor::Motor;
use mirrorpath::render::{render, shade_pixel, TILE_SIZE};
use mirrorpath::scene_file::{default_scene, load_scene};
use mirrorpath::sphere::Sphere;
use mirrorpath::tracer::{skybox, trace};

fn bright_scene() -> Scene {
    Scene::from_spheres(vec![
        Sphere::new(Motor::translation(Vec3A::new(4.0, 0.0, 0.0)), Color::ONE, 1.5),
        Sphere::new(Motor::translation(Vec3A::new(3.0, 2.0, 1.0)), Color::new(1.0, 0.2, 0.4), 0.75),
        Sphere::new(Motor::translation(Vec3A::new(0.0, -101.0, 0.0)), Color::splat(0.9), 100.0),
    ])
}

#[test]
fn empty_scene_renders_pure_sky() {
    let camera = Camera::new();
    let (width, height) = (37, 21);
    let frame = render(&camera, &Scene::new(), width, height);

    for (x, y, pixel) in frame.enumerate_pixels() {
        let sky = skybox(&camera.get_ray(x, y, width, height));
        let rgb = Vec3A::new(pixel.0[0], pixel.0[1], pixel.0[2]);
        assert!((rgb - sky).abs().max_element() < 1e-6, "pixel ({x}, {y})");
        assert_eq!(pixel.0[3], 1.0);
    }
}

#[test]
fn zero_bounce_budget_renders_black() {
    let camera = Camera {
        max_bounces: 0,
        ..Camera::new()
    };
    let frame = render(&camera, &bright_scene(), 20, 20);
    assert!(frame.pixels().all(|p| p.0 == [0.0, 0.0, 0.0, 1.0]));
}

#[test]
fn every_channel_is_clamped() {
    let (camera, animated) = default_scene();
    let frame = render(&camera, &animated.scene_at(0.3), 48, 32);
    for pixel in frame.pixels() {
        assert!(pixel.0.iter().all(|c| (0.0..=1.0).contains(c)));
        assert_eq!(pixel.0[3], 1.0);
    }
}

#[test]
fn over_bright_albedo_is_clamped_to_one() {
    let camera = Camera::new();
    let scene = Scene::from_spheres(vec![Sphere::new(
        Motor::translation(Vec3A::new(4.0, 0.0, 0.0)),
        Color::splat(4.0),
        1.5,
    )]);
    let (width, height) = (9, 9);

    let raw = trace(camera.get_ray(4, 4, width, height), &camera, &scene);
    assert!(raw.max_element() > 1.0, "expected an over-bright trace, got {raw:?}");

    let pixel = shade_pixel(4, 4, width, height, &camera, &scene).unwrap();
    assert!(pixel.0.iter().all(|c| (0.0..=1.0).contains(c)), "got {pixel:?}");
    assert_eq!(pixel.0, [1.0, 1.0, 1.0, 1.0]);

    let frame = render(&camera, &scene, width, height);
    assert_eq!(*frame.get_pixel(4, 4), pixel);
    assert!(frame.pixels().all(|p| p.0.iter().all(|c| (0.0..=1.0).contains(c))));
}

#[test]
fn tiled_render_matches_per_pixel_evaluation() {
    let camera = Camera {
        transform: Motor::rotation_xy(0.1).then(Motor::translation(Vec3A::new(-2.0, 0.5, 0.0))),
        ..Camera::new()
    };
    let scene = bright_scene();
    // Deliberately not a multiple of the tile size in either direction.
    let (width, height) = (TILE_SIZE * 2 + 5, TILE_SIZE + 3);
    let frame = render(&camera, &scene, width, height);

    assert_eq!(frame.dimensions(), (width, height));
    for (x, y, pixel) in frame.enumerate_pixels() {
        let expected = shade_pixel(x, y, width, height, &camera, &scene).unwrap();
        assert_eq!(*pixel, expected, "pixel ({x}, {y})");
    }
}

#[test]
fn render_is_deterministic() {
    let (camera, animated) = default_scene();
    let scene = animated.scene_at(1.25);
    let first = render(&camera, &scene, 40, 30);
    let second = render(&camera, &scene, 40, 30);
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn demo_scene_center_sees_green_ball() {
    let (camera, animated) = default_scene();
    // At t = 0 the ball sits at (0, 2, 1); move it onto the view axis instead.
    let mut scene = animated.scene_at(0.0);
    scene.spheres[1].transform = Motor::IDENTITY;

    let ray = camera.get_ray(50, 50, 100, 100);
    let color = trace(ray, &camera, &scene);
    assert!(color.y > color.x && color.y > color.z, "got {color:?}");
}

#[test]
fn shade_pixel_skips_tile_overhang() {
    let camera = Camera::new();
    let scene = bright_scene();
    assert!(shade_pixel(TILE_SIZE - 1, 0, TILE_SIZE - 3, 4, &camera, &scene).is_none());
    assert!(shade_pixel(0, TILE_SIZE - 1, 4, TILE_SIZE - 3, &camera, &scene).is_none());
}

#[test]
fn bundled_scene_loads_and_renders() {
    let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/mirror_hall.json"));
    let (camera, animated) = load_scene(path).expect("bundled scene is valid");
    assert_eq!(animated.len(), 6);
    assert_eq!(camera.max_bounces, 12);

    let frame = render(&camera, &animated.scene_at(0.0), 24, 16);
    assert!(frame.pixels().any(|p| p.0[..3] != [0.0, 0.0, 0.0]));
}
