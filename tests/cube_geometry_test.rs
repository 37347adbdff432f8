use std::f64::consts::{PI, TAU};

use tui_cube::core::cube::{face_normal, unscale_y};
use tui_cube::core::{Cube, Face, FaceMask, Light, Vec3};
use tui_cube::types::{AMBIENT_INTENSITY, Y_SCALE};

/// Angles across a full turn, offset so no face is ever exactly edge-on.
fn sample_rotations() -> impl Iterator<Item = Vec3> {
    (0..24).flat_map(|i| {
        let a = TAU * (i as f64 + 0.37) / 24.0;
        [
            Vec3::new(a, 0.0, 0.0),
            Vec3::new(0.0, a, 0.0),
            Vec3::new(a * 0.3, -a, 0.5),
            Vec3::new(a, a * 0.7, -a * 0.4),
        ]
    })
}

#[test]
fn unrotated_cube_shows_only_the_plus_z_face() {
    let mut cube = Cube::new(2.0);
    cube.set_origin(Vec3::ZERO);
    cube.set_rotation(Vec3::ZERO);

    assert_eq!(cube.visible_faces(), FaceMask::from_faces(&[Face::Back]));
}

#[test]
fn visibility_does_not_depend_on_the_light() {
    let lights = [
        Light::default(),
        Light::new(Vec3::new(0.0, 0.0, -1.0), 0.1),
        Light::new(Vec3::new(-3.0, 2.0, 0.5), 0.9),
    ];
    for rot in sample_rotations() {
        let masks: Vec<FaceMask> = lights
            .iter()
            .map(|light| {
                let mut cube = Cube::new(2.0).with_light(*light);
                cube.set_rotation(rot);
                cube.visible_faces()
            })
            .collect();
        assert!(masks.windows(2).all(|w| w[0] == w[1]), "rot={rot:?}");
    }
}

#[test]
fn half_turn_about_y_shows_the_opposite_face() {
    let mut cube = Cube::new(2.0);
    assert!(cube.visible_faces().contains(Face::Back));
    assert!(!cube.visible_faces().contains(Face::Front));

    cube.set_rotation(Vec3::new(0.0, PI, 0.0));
    assert!(cube.visible_faces().contains(Face::Front));
    assert!(!cube.visible_faces().contains(Face::Back));
}

#[test]
fn opposite_faces_are_never_both_visible() {
    let pairs = [
        (Face::Front, Face::Back),
        (Face::Left, Face::Right),
        (Face::Top, Face::Bottom),
    ];
    for rot in sample_rotations() {
        let mut cube = Cube::new(45.0);
        cube.set_origin(Vec3::new(100.0, 30.0, 50.0));
        cube.set_rotation(rot);
        let mask = cube.visible_faces();
        assert!(mask.len() <= 3, "rot={rot:?} mask={mask:?}");
        for (a, b) in pairs {
            assert!(!(mask.contains(a) && mask.contains(b)), "rot={rot:?}");
        }
    }
}

#[test]
fn visibility_is_a_pure_function_of_rotation() {
    let rot = Vec3::new(0.7, -2.1, 0.5);
    let mut a = Cube::new(45.0);
    a.set_rotation(rot);
    let mut b = Cube::new(45.0);
    b.set_rotation(Vec3::new(9.0, 9.0, 9.0));
    b.set_rotation(rot);
    assert_eq!(a.visible_faces(), b.visible_faces());
    assert_eq!(a.vertices(), b.vertices());
}

#[test]
fn brightness_stays_between_ambient_and_one() {
    for rot in sample_rotations() {
        let mut cube = Cube::new(45.0);
        cube.set_rotation(rot);
        for face in Face::ALL {
            let b = cube.brightness(face);
            assert!(
                (AMBIENT_INTENSITY..=1.0).contains(&b),
                "face={} rot={rot:?} b={b}",
                face.as_str()
            );
        }
    }
}

#[test]
fn faces_turned_from_the_light_get_exactly_ambient() {
    let cube = Cube::new(2.0);
    let light = cube.light();
    for face in Face::ALL {
        let n = face_normal(&cube.vertices(), face).normalize();
        if n.dot(light.direction()) <= 0.0 {
            assert_eq!(cube.brightness(face), AMBIENT_INTENSITY, "{}", face.as_str());
        }
    }
    // Front faces -Z; the light points toward +Z.
    assert_eq!(cube.brightness(Face::Front), AMBIENT_INTENSITY);
    let expected_back = AMBIENT_INTENSITY + (1.0 / 3f64.sqrt()) * (1.0 - AMBIENT_INTENSITY);
    assert!((cube.brightness(Face::Back) - expected_back).abs() < 1e-12);
}

#[test]
fn projection_round_trips_without_rotation() {
    let mut cube = Cube::new(45.0);
    let origin = Vec3::new(101.0, 27.0, 50.0);
    cube.set_origin(origin);

    let anchor = 27.0;
    let projected = cube.project(anchor);
    for (p, v) in projected.iter().zip(cube.vertices().iter()) {
        assert_eq!(p.x, v.x);
        assert!((unscale_y(p.y, anchor, Y_SCALE) - v.y).abs() < 1e-9);
    }
}

#[test]
fn projection_squashes_height_toward_the_anchor() {
    let mut cube = Cube::new(40.0);
    cube.set_origin(Vec3::new(100.0, 30.0, 50.0));
    let pts = cube.project(30.0);
    let min_y = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    assert!((max_y - min_y - 40.0 * Y_SCALE).abs() < 1e-9);
    assert!(((min_y + max_y) / 2.0 - 30.0).abs() < 1e-9);
}
