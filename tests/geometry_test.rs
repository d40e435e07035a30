use vignette::data_structures::mesh::{cube, point_quads, quad, skybox, sphere_points};

fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[test]
fn cube_has_four_vertices_per_face() {
    let (vertices, indices) = cube();
    assert_eq!(vertices.len(), 24);
    assert_eq!(indices.len(), 36);
    assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
}

#[test]
fn cube_vertices_lie_on_their_face_plane() {
    let (vertices, _) = cube();
    for v in &vertices {
        assert!((length(v.normal) - 1.0).abs() < 1e-6, "normal not unit");
        // A face vertex projected onto its normal sits at distance 1.
        assert!((dot(v.position, v.normal) - 1.0).abs() < 1e-6);
        // Corners of the unit cube.
        for c in v.position {
            assert!((c.abs() - 1.0).abs() < 1e-6);
        }
    }
}

#[test]
fn cube_faces_index_their_own_vertices() {
    let (_, indices) = cube();
    for face in 0..6 {
        let range = (face * 4) as u32..(face * 4 + 4) as u32;
        for &i in &indices[face * 6..face * 6 + 6] {
            assert!(range.contains(&i), "face {} reaches into another face", face);
        }
    }
}

#[test]
fn skybox_is_a_unit_cube_triangle_soup() {
    let (vertices, indices) = skybox();
    assert_eq!(vertices.len(), 36);
    assert_eq!(indices, (0..36).collect::<Vec<u32>>());
    for v in &vertices {
        for c in v.position {
            assert!((c.abs() - 1.0).abs() < 1e-6);
        }
        assert!((length(v.normal) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn quad_spans_clip_space() {
    let (vertices, indices) = quad();
    assert_eq!(vertices.len(), 4);
    assert_eq!(indices, vec![0, 1, 2, 0, 2, 3]);
    for v in &vertices {
        assert_eq!(v.position[2], 0.0);
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        assert_eq!(v.position[0].abs(), 1.0);
        assert_eq!(v.position[1].abs(), 1.0);
    }
    // Texture coordinates follow the corner signs.
    for v in &vertices {
        assert_eq!(v.tex_coords[0], (v.position[0] + 1.0) / 2.0);
        assert_eq!(v.tex_coords[1], (v.position[1] + 1.0) / 2.0);
    }
}

#[test]
fn sphere_points_sit_on_the_unit_sphere() {
    let points = sphere_points(20, 20);
    assert_eq!(points.len(), 400);
    for p in &points {
        assert!((length(*p) - 1.0).abs() < 1e-5);
    }
}

#[test]
fn point_quads_are_centered_on_their_points() {
    let points = sphere_points(7, 5);
    let colors: Vec<u32> = (0..points.len()).map(|i| 0xff000000 | i as u32).collect();
    let eps = 0.05;
    let (vertices, indices) = point_quads(&points, &colors, eps);

    assert_eq!(vertices.len(), points.len() * 4);
    assert_eq!(indices.len(), points.len() * 6);
    assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));

    for (j, p) in points.iter().enumerate() {
        let quad = &vertices[j * 4..j * 4 + 4];
        for v in quad {
            assert_eq!(v.normal, *p);
            assert_eq!(v.color, colors[j]);
        }
        // The two span directions are symmetric about the point.
        for pair in [(0, 1), (2, 3)] {
            for k in 0..3 {
                let mid = (quad[pair.0].position[k] + quad[pair.1].position[k]) / 2.0;
                assert!((mid - p[k]).abs() < 1e-5);
            }
        }
    }
}

#[test]
fn point_quad_spans_are_perpendicular_to_the_point() {
    let points = vec![[0.0, 0.0, 1.0], [0.6, 0.8, 0.0]];
    let colors = vec![0xff0000ff, 0xff00ff00];
    let (vertices, _) = point_quads(&points, &colors, 0.05);
    for (j, p) in points.iter().enumerate() {
        for v in &vertices[j * 4..j * 4 + 4] {
            let offset = [
                v.position[0] - p[0],
                v.position[1] - p[1],
                v.position[2] - p[2],
            ];
            assert!(dot(offset, *p).abs() < 1e-6, "span not tangent to sphere");
        }
    }
}
