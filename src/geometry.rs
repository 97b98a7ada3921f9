use rand::Rng;
use three_d::*;

/// Builds a torus with `radial_segments` around the tube and
/// `tubular_segments` around the ring. `radius` is measured from the ring
/// center to the tube center, `tube` is the tube radius.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> CpuMesh {
    let num_vertices = ((radial_segments + 1) * (tubular_segments + 1)) as usize;
    let mut positions = Vec::with_capacity(num_vertices);
    let mut normals = Vec::with_capacity(num_vertices);
    let mut uvs = Vec::with_capacity(num_vertices);
    let mut indices = Vec::with_capacity((radial_segments * tubular_segments * 6) as usize);

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * 2.0 * std::f32::consts::PI;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * 2.0 * std::f32::consts::PI;

            let vertex = vec3(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            // Normal points away from the nearest point on the ring centerline.
            let center = vec3(radius * u.cos(), radius * u.sin(), 0.0);
            positions.push(vertex);
            normals.push((vertex - center).normalize());
            uvs.push(vec2(
                i as f32 / tubular_segments as f32,
                j as f32 / radial_segments as f32,
            ));
        }
    }

    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = (tubular_segments + 1) * j + i - 1;
            let b = (tubular_segments + 1) * (j - 1) + i - 1;
            let c = (tubular_segments + 1) * (j - 1) + i;
            let d = (tubular_segments + 1) * j + i;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    CpuMesh {
        positions: Positions::F32(positions),
        indices: Indices::U32(indices),
        normals: Some(normals),
        uvs: Some(uvs),
        ..Default::default()
    }
}

/// Builds a latitude/longitude sphere with texture coordinates.
pub fn uv_sphere(radius: f32, lat_segments: u32, long_segments: u32) -> CpuMesh {
    let num_vertices = ((lat_segments + 1) * (long_segments + 1)) as usize;
    let mut positions = Vec::with_capacity(num_vertices);
    let mut normals = Vec::with_capacity(num_vertices);
    let mut uvs = Vec::with_capacity(num_vertices);
    let mut indices = Vec::with_capacity((lat_segments * long_segments * 6) as usize);

    for lat in 0..=lat_segments {
        let theta = lat as f32 * std::f32::consts::PI / lat_segments as f32;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for long in 0..=long_segments {
            let phi = long as f32 * 2.0 * std::f32::consts::PI / long_segments as f32;

            let normal = vec3(sin_theta * phi.cos(), cos_theta, sin_theta * phi.sin());
            positions.push(normal * radius);
            normals.push(normal);
            uvs.push(vec2(
                long as f32 / long_segments as f32,
                1.0 - lat as f32 / lat_segments as f32,
            ));
        }
    }

    for lat in 0..lat_segments {
        for long in 0..long_segments {
            let first = lat * (long_segments + 1) + long;
            let second = first + 1;
            let third = (lat + 1) * (long_segments + 1) + long;
            let fourth = third + 1;

            indices.extend_from_slice(&[first, second, third]);
            indices.extend_from_slice(&[second, fourth, third]);
        }
    }

    CpuMesh {
        positions: Positions::F32(positions),
        indices: Indices::U32(indices),
        normals: Some(normals),
        uvs: Some(uvs),
        ..Default::default()
    }
}

/// Builds an axis-aligned box centered on the origin, 24 vertices so each
/// face gets its own normals and a full [0,1]² texture patch.
pub fn cuboid(width: f32, height: f32, depth: f32) -> CpuMesh {
    let half = vec3(width / 2.0, height / 2.0, depth / 2.0);
    // (outward normal, u axis, v axis) per face
    let faces = [
        (vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0), vec3(0.0, 1.0, 0.0)),
        (vec3(-1.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0), vec3(0.0, 1.0, 0.0)),
        (vec3(0.0, 1.0, 0.0), vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0)),
        (vec3(0.0, -1.0, 0.0), vec3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)),
        (vec3(0.0, 0.0, 1.0), vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)),
        (vec3(0.0, 0.0, -1.0), vec3(-1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)),
    ];

    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    let scale = |axis: Vec3| vec3(axis.x * half.x, axis.y * half.y, axis.z * half.z);

    for (normal, u_axis, v_axis) in faces {
        let base = positions.len() as u32;
        let center = scale(normal);
        let u_half = scale(u_axis);
        let v_half = scale(v_axis);

        positions.push(center - u_half - v_half);
        positions.push(center + u_half - v_half);
        positions.push(center + u_half + v_half);
        positions.push(center - u_half + v_half);
        normals.extend_from_slice(&[normal; 4]);
        uvs.extend_from_slice(&[
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(1.0, 1.0),
            vec2(0.0, 1.0),
        ]);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    CpuMesh {
        positions: Positions::F32(positions),
        indices: Indices::U32(indices),
        normals: Some(normals),
        uvs: Some(uvs),
        ..Default::default()
    }
}

/// Uniformly scattered positions in a cube of edge length `spread` centered
/// on the origin, i.e. each coordinate lands in [-spread/2, spread/2].
pub fn scatter<R: Rng>(count: usize, spread: f32, rng: &mut R) -> Vec<Vec3> {
    let half = spread / 2.0;
    (0..count)
        .map(|_| {
            vec3(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn positions(mesh: &CpuMesh) -> &[Vec3] {
        match &mesh.positions {
            Positions::F32(positions) => positions,
            _ => panic!("expected f32 positions"),
        }
    }

    fn indices(mesh: &CpuMesh) -> &[u32] {
        match &mesh.indices {
            Indices::U32(indices) => indices,
            _ => panic!("expected u32 indices"),
        }
    }

    fn assert_indices_in_bounds(mesh: &CpuMesh) {
        let num_vertices = positions(mesh).len() as u32;
        assert!(indices(mesh).iter().all(|i| *i < num_vertices));
    }

    #[test]
    fn torus_vertex_and_index_counts() {
        let mesh = torus(10.0, 3.0, 16, 100);
        assert_eq!(positions(&mesh).len(), 17 * 101);
        assert_eq!(indices(&mesh).len(), 16 * 100 * 6);
        assert_indices_in_bounds(&mesh);
    }

    #[test]
    fn torus_stays_within_outer_radius() {
        let mesh = torus(10.0, 3.0, 16, 100);
        for p in positions(&mesh) {
            assert!(p.magnitude() <= 13.0 + 1e-4);
            assert!(p.magnitude() >= 7.0 - 1e-4);
            assert!(p.z.abs() <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn torus_normals_are_unit_length() {
        let mesh = torus(10.0, 3.0, 16, 100);
        for n in mesh.normals.as_ref().unwrap() {
            assert!((n.magnitude() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_vertices_sit_on_the_radius() {
        let mesh = uv_sphere(3.0, 32, 32);
        assert_eq!(positions(&mesh).len(), 33 * 33);
        assert_indices_in_bounds(&mesh);
        for p in positions(&mesh) {
            assert!((p.magnitude() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_uvs_cover_the_unit_square() {
        let mesh = uv_sphere(3.0, 32, 32);
        for uv in mesh.uvs.as_ref().unwrap() {
            assert!((0.0..=1.0).contains(&uv.x));
            assert!((0.0..=1.0).contains(&uv.y));
        }
    }

    #[test]
    fn cuboid_has_one_face_per_side() {
        let mesh = cuboid(3.0, 3.0, 3.0);
        assert_eq!(positions(&mesh).len(), 24);
        assert_eq!(indices(&mesh).len(), 36);
        assert_indices_in_bounds(&mesh);
        for p in positions(&mesh) {
            assert_eq!(p.x.abs(), 1.5);
            assert_eq!(p.y.abs(), 1.5);
            assert_eq!(p.z.abs(), 1.5);
        }
    }

    #[test]
    fn scatter_respects_count_and_spread() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = scatter(200, 100.0, &mut rng);
        assert_eq!(points.len(), 200);
        for p in &points {
            assert!(p.x.abs() <= 50.0);
            assert!(p.y.abs() <= 50.0);
            assert!(p.z.abs() <= 50.0);
        }
        // not all in one spot
        assert!(points.iter().any(|p| (*p - points[0]).magnitude() > 1.0));
    }
}
