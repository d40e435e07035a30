use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector2, Vector3, Vector4};
use vignette::camera::{Camera, Projection, invert_orthonormal, trackball_rotation};

fn assert_near(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() < eps, "{} != {}", a, b);
}

#[test]
fn orthonormal_inverse_undoes_a_rigid_transform() {
    let m = Matrix4::from_angle_y(cgmath::Deg(37.0))
        * Matrix4::from_angle_x(cgmath::Deg(-12.0))
        * Matrix4::from_translation(Vector3::new(1.5, -2.0, 4.0));
    let id = m * invert_orthonormal(m);
    let expected = Matrix4::<f32>::identity();
    for c in 0..4 {
        for r in 0..4 {
            assert_near(id[c][r], expected[c][r], 1e-5);
        }
    }
}

#[test]
fn trackball_of_equal_points_is_identity() {
    let p = Vector2::new(0.3, -0.2);
    let q = trackball_rotation(p, p);
    assert_near(q.s, 1.0, 1e-6);
    assert_near(q.v.magnitude(), 0.0, 1e-6);
}

#[test]
fn trackball_rotations_are_unit_quaternions() {
    let q = trackball_rotation(Vector2::new(-0.4, 0.1), Vector2::new(0.2, 0.3));
    assert_near(q.magnitude(), 1.0, 1e-5);

    let q = trackball_rotation(Vector2::new(0.9, 0.9), Vector2::new(-0.9, -0.8));
    assert_near(q.magnitude(), 1.0, 1e-5);
}

#[test]
fn horizontal_drag_spins_about_the_vertical_axis() {
    let q = trackball_rotation(Vector2::new(0.0, 0.0), Vector2::new(0.2, 0.0));
    // Crossing two points in the x/z plane leaves only a y component.
    assert_near(q.v.x, 0.0, 1e-6);
    assert_near(q.v.z, 0.0, 1e-6);
    assert!(q.v.y.abs() > 1e-3, "drag produced no rotation");
}

#[test]
fn trackball_orbit_keeps_the_distance_to_the_origin() {
    let mut camera = Camera::at_z(5.0);
    for (from, to) in [
        (Vector2::new(0.0, 0.0), Vector2::new(0.3, 0.1)),
        (Vector2::new(0.3, 0.1), Vector2::new(-0.2, 0.4)),
        (Vector2::new(-0.2, 0.4), Vector2::new(0.0, -0.5)),
    ] {
        camera.trackball(trackball_rotation(from, to));
        assert_near(camera.position().magnitude(), 5.0, 1e-4);
    }
}

#[test]
fn orbit_y_swings_the_camera_around_the_vertical() {
    let mut camera = Camera::at_z(5.0);
    camera.orbit_y(std::f32::consts::FRAC_PI_2);
    let pos = camera.position();
    assert_near(pos.magnitude(), 5.0, 1e-5);
    assert_near(pos.x, -5.0, 1e-4);
    assert_near(pos.y, 0.0, 1e-5);
    assert_near(pos.z, 0.0, 1e-4);
}

#[test]
fn dolly_moves_along_the_view_axis() {
    let mut camera = Camera::new();
    camera.dolly(0.1);
    let pos = camera.position();
    assert_near(pos.x, 0.0, 1e-6);
    assert_near(pos.y, 0.0, 1e-6);
    assert_near(pos.z, 0.1, 1e-6);
}

#[test]
fn orthographic_projection_keeps_the_quad_visible() {
    let proj = Projection::orthographic().matrix();
    // The fullscreen quad lives at z = 0; it must land inside wgpu's 0..1
    // depth range, not on the clipped side.
    let p = proj * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert_near(p.z / p.w, 0.5, 1e-6);
    let corner = proj * Vector4::new(1.0, -1.0, 0.0, 1.0);
    assert_near(corner.x / corner.w, 1.0, 1e-6);
    assert_near(corner.y / corner.w, -1.0, 1e-6);
}

#[test]
fn perspective_near_plane_maps_to_zero_depth() {
    let proj = Projection::perspective(800, 450);
    let m = proj.matrix();
    let p = m * Vector4::new(0.0, 0.0, -proj.near, 1.0);
    assert_near(p.z / p.w, 0.0, 1e-5);
    let far = m * Vector4::new(0.0, 0.0, -proj.far, 1.0);
    assert_near(far.z / far.w, 1.0, 1e-5);
}

#[test]
fn zoom_narrows_the_frustum() {
    let mut proj = Projection::perspective(800, 450);
    let edge = Vector4::new(1.0, 0.0, -1.0, 1.0);
    let before = proj.matrix() * edge;
    proj.zoom_by(2.0);
    let after = proj.matrix() * edge;
    // The same world point moves outward in clip space when zoomed in.
    assert_near(after.x / after.w, 2.0 * before.x / before.w, 1e-5);
}

#[test]
fn aspect_rides_in_zoom_y() {
    let mut proj = Projection::perspective(800, 450);
    assert_near(proj.zoom_y, 450.0 / 800.0, 1e-6);
    proj.zoom_x = 2.0;
    proj.resize(1000, 500);
    assert_near(proj.zoom_y, 1.0, 1e-6);
}
