use serde::{Deserialize, Serialize};

/// All scene parameters in one place. Every sub-struct uses `#[serde(default)]`
/// so a page can override any subset from JSON and keep the rest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub torus: TorusConfig,
    pub stars: StarsConfig,
    pub cube: CubeConfig,
    pub moon: MoonConfig,
    pub lights: LightsConfig,
    pub background: BackgroundConfig,
    pub helpers: HelpersConfig,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub position: [f32; 3],
    /// Camera position per scrolled pixel, one factor per axis.
    pub scroll_coefficients: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            z_near: 0.1,
            z_far: 1000.0,
            position: [-1.0, 0.0, 30.0],
            scroll_coefficients: [-0.001, -0.0002, -0.01],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusConfig {
    pub radius: f32,
    pub tube: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
    pub color: [u8; 3],
    /// Rotation added every frame, radians per axis.
    pub spin: [f32; 3],
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            tube: 3.0,
            radial_segments: 16,
            tubular_segments: 100,
            color: [0xff, 0x63, 0x47],
            spin: [0.01, 0.005, 0.01],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarsConfig {
    pub count: usize,
    pub radius: f32,
    pub segments: u32,
    /// Stars land uniformly in a cube of this edge length, centered on origin.
    pub spread: f32,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            count: 200,
            radius: 0.25,
            segments: 24,
            spread: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub size: f32,
    pub texture: String,
    /// Rotation added per scroll change, radians per axis.
    pub scroll_spin: [f32; 3],
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 3.0,
            texture: String::from("jeff.png"),
            scroll_spin: [0.0, 0.01, 0.01],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoonConfig {
    pub radius: f32,
    pub segments: u32,
    pub texture: String,
    pub normal_texture: String,
    pub position: [f32; 3],
    /// Rotation added per scroll change, radians per axis.
    pub scroll_spin: [f32; 3],
}

impl Default for MoonConfig {
    fn default() -> Self {
        Self {
            radius: 3.0,
            segments: 32,
            texture: String::from("moon.jpg"),
            normal_texture: String::from("normal.jpg"),
            position: [-10.0, 0.0, 30.0],
            scroll_spin: [0.05, 0.075, 0.05],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightsConfig {
    pub point_color: [u8; 3],
    pub point_intensity: f32,
    pub point_position: [f32; 3],
    pub ambient_color: [u8; 3],
    pub ambient_intensity: f32,
}

impl Default for LightsConfig {
    fn default() -> Self {
        Self {
            point_color: [255, 255, 255],
            point_intensity: 1.0,
            point_position: [5.0, 5.0, 5.0],
            ambient_color: [255, 255, 255],
            ambient_intensity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Equirectangular texture rendered as the scene backdrop.
    pub texture: String,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            texture: String::from("space.jpg"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
    /// Shows the light marker and the ground grid.
    pub enabled: bool,
    pub grid_size: f32,
    pub grid_divisions: u32,
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            grid_size: 200.0,
            grid_divisions: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_scene_literals() {
        let config = SceneConfig::default();
        assert_eq!(config.torus.radius, 10.0);
        assert_eq!(config.torus.tube, 3.0);
        assert_eq!(config.torus.radial_segments, 16);
        assert_eq!(config.torus.tubular_segments, 100);
        assert_eq!(config.torus.color, [0xff, 0x63, 0x47]);
        assert_eq!(config.stars.count, 200);
        assert_eq!(config.stars.spread, 100.0);
        assert_eq!(config.moon.position, [-10.0, 0.0, 30.0]);
        assert_eq!(config.lights.point_position, [5.0, 5.0, 5.0]);
        assert_eq!(config.camera.position, [-1.0, 0.0, 30.0]);
        assert_eq!(config.camera.scroll_coefficients, [-0.001, -0.0002, -0.01]);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config =
            SceneConfig::from_json(r#"{ "torus": { "radius": 5.0 }, "helpers": { "enabled": false } }"#)
                .unwrap();
        assert_eq!(config.torus.radius, 5.0);
        assert_eq!(config.torus.tube, 3.0);
        assert!(!config.helpers.enabled);
        assert_eq!(config.stars.count, 200);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(SceneConfig::from_json("{ torus").is_err());
    }
}
