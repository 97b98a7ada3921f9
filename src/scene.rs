use three_d::*;

use crate::animate::Spin;
use crate::config::SceneConfig;
use crate::geometry;
use crate::log;

/// The fixed object graph: one torus ring, a 200-sphere starfield, a textured
/// cube, a textured moon, two lights, the space backdrop and the debug
/// helpers. Built once, then mutated per frame / per scroll change.
pub struct Scene {
    torus: Gm<Mesh, PhysicalMaterial>,
    stars: Gm<InstancedMesh, PhysicalMaterial>,
    cube: Gm<Mesh, ColorMaterial>,
    moon: Gm<Mesh, PhysicalMaterial>,
    skybox: Option<Skybox>,
    helpers: Option<Helpers>,
    ambient: AmbientLight,
    point: PointLight,
    torus_spin: Spin,
    cube_spin: Spin,
    moon_spin: Spin,
    moon_translation: Mat4,
}

impl Scene {
    pub async fn load(context: &Context, config: &SceneConfig) -> Self {
        // ring
        let torus = Gm::new(
            Mesh::new(
                context,
                &geometry::torus(
                    config.torus.radius,
                    config.torus.tube,
                    config.torus.radial_segments,
                    config.torus.tubular_segments,
                ),
            ),
            PhysicalMaterial::new_opaque(
                context,
                &CpuMaterial {
                    albedo: rgb(config.torus.color),
                    ..Default::default()
                },
            ),
        );

        // starfield, one instanced draw instead of one mesh per star
        let mut rng = rand::thread_rng();
        let transformations = geometry::scatter(config.stars.count, config.stars.spread, &mut rng)
            .into_iter()
            .map(Mat4::from_translation)
            .collect();
        let stars = Gm::new(
            InstancedMesh::new(
                context,
                &Instances {
                    transformations,
                    ..Default::default()
                },
                &geometry::uv_sphere(
                    config.stars.radius,
                    config.stars.segments,
                    config.stars.segments,
                ),
            ),
            PhysicalMaterial::new_opaque(
                context,
                &CpuMaterial {
                    albedo: Color::WHITE,
                    ..Default::default()
                },
            ),
        );

        // cube, unlit so the texture shows at full brightness
        let cube = Gm::new(
            Mesh::new(
                context,
                &geometry::cuboid(config.cube.size, config.cube.size, config.cube.size),
            ),
            ColorMaterial::new_opaque(
                context,
                &CpuMaterial {
                    albedo: Color::WHITE,
                    albedo_texture: load_texture(&config.cube.texture).await,
                    ..Default::default()
                },
            ),
        );

        // moon with albedo + normal map
        let mut moon_mesh =
            geometry::uv_sphere(config.moon.radius, config.moon.segments, config.moon.segments);
        let moon_material = CpuMaterial {
            albedo: Color::WHITE,
            albedo_texture: load_texture(&config.moon.texture).await,
            normal_texture: load_texture(&config.moon.normal_texture).await,
            ..Default::default()
        };
        if moon_material.normal_texture.is_some() {
            // normal mapping needs a tangent attribute
            moon_mesh.compute_tangents();
        }
        let mut moon = Gm::new(
            Mesh::new(context, &moon_mesh),
            PhysicalMaterial::new_opaque(context, &moon_material),
        );
        let moon_translation = Mat4::from_translation(config.moon.position.into());
        moon.set_transformation(moon_translation);

        let skybox = load_texture(&config.background.texture)
            .await
            .map(|texture| Skybox::new_from_equirectangular(context, &texture));

        let helpers = if config.helpers.enabled {
            Some(Helpers::new(context, config))
        } else {
            None
        };

        let ambient = AmbientLight::new(
            context,
            config.lights.ambient_intensity,
            rgb(config.lights.ambient_color),
        );
        let point = PointLight::new(
            context,
            config.lights.point_intensity,
            rgb(config.lights.point_color),
            &config.lights.point_position.into(),
            Attenuation {
                constant: 1.0,
                linear: 0.0,
                quadratic: 0.0,
            },
        );

        Self {
            torus,
            stars,
            cube,
            moon,
            skybox,
            helpers,
            ambient,
            point,
            torus_spin: Spin::new(config.torus.spin),
            cube_spin: Spin::new(config.cube.scroll_spin),
            moon_spin: Spin::new(config.moon.scroll_spin),
            moon_translation,
        }
    }

    /// Per-frame mutation: the ring keeps turning.
    pub fn step(&mut self) {
        self.torus_spin.step();
        self.torus.set_transformation(self.torus_spin.matrix());
    }

    /// Per-scroll mutation: the moon and the cube turn.
    pub fn on_scroll(&mut self) {
        self.moon_spin.step();
        self.moon
            .set_transformation(self.moon_translation * self.moon_spin.matrix());
        self.cube_spin.step();
        self.cube.set_transformation(self.cube_spin.matrix());
    }

    pub fn objects(&self) -> Vec<&dyn Object> {
        let mut objects: Vec<&dyn Object> =
            vec![&self.torus, &self.stars, &self.cube, &self.moon];
        if let Some(skybox) = &self.skybox {
            objects.push(skybox);
        }
        if let Some(helpers) = &self.helpers {
            objects.push(&helpers.light_marker);
            objects.push(&helpers.grid);
        }
        objects
    }

    pub fn lights(&self) -> [&dyn Light; 2] {
        [&self.ambient, &self.point]
    }
}

/// Debug geometry: a marker sphere at the point light and a ground grid.
struct Helpers {
    light_marker: Gm<Mesh, ColorMaterial>,
    grid: Gm<InstancedMesh, ColorMaterial>,
}

impl Helpers {
    const GRID_LINE_THICKNESS: f32 = 0.05;

    fn new(context: &Context, config: &SceneConfig) -> Self {
        let mut light_marker = Gm::new(
            Mesh::new(context, &geometry::uv_sphere(1.0, 16, 16)),
            ColorMaterial {
                color: rgb(config.lights.point_color),
                ..Default::default()
            },
        );
        light_marker
            .set_transformation(Mat4::from_translation(config.lights.point_position.into()));

        Self {
            light_marker,
            grid: Self::grid(context, config.helpers.grid_size, config.helpers.grid_divisions),
        }
    }

    /// Grid in the xz plane, built from thin instanced boxes.
    fn grid(context: &Context, size: f32, divisions: u32) -> Gm<InstancedMesh, ColorMaterial> {
        let half = size / 2.0;
        let step = size / divisions as f32;
        let mut transformations = Vec::with_capacity(2 * (divisions as usize + 1));
        for i in 0..=divisions {
            let offset = -half + i as f32 * step;
            // line along x, then along z
            transformations.push(
                Mat4::from_translation(vec3(0.0, 0.0, offset))
                    * Mat4::from_nonuniform_scale(size, 1.0, 1.0),
            );
            transformations.push(
                Mat4::from_translation(vec3(offset, 0.0, 0.0))
                    * Mat4::from_angle_y(degrees(90.0))
                    * Mat4::from_nonuniform_scale(size, 1.0, 1.0),
            );
        }

        Gm::new(
            InstancedMesh::new(
                context,
                &Instances {
                    transformations,
                    ..Default::default()
                },
                &geometry::cuboid(1.0, Self::GRID_LINE_THICKNESS, Self::GRID_LINE_THICKNESS),
            ),
            ColorMaterial {
                color: Color::new_opaque(136, 136, 136),
                ..Default::default()
            },
        )
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::new_opaque(r, g, b)
}

/// Fetches and decodes a texture; a missing or broken asset degrades to
/// untextured rendering instead of aborting the scene.
async fn load_texture(path: &str) -> Option<CpuTexture> {
    match three_d_asset::io::load_async(&[path]).await {
        Ok(mut loaded) => match loaded.deserialize::<CpuTexture>(path) {
            Ok(texture) => Some(texture),
            Err(e) => {
                log!("load_texture(): failed to decode {}: {}", path, e);
                None
            }
        },
        Err(e) => {
            log!("load_texture(): failed to fetch {}: {}", path, e);
            None
        }
    }
}
