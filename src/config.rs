//! Command-line configuration shared by the viewers.

use std::path::PathBuf;

use clap::Parser;

use crate::world::{Camera, Level, LevelError, TileMap};

/// Viewer options handled via `clap` derive.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct ViewConfig {
    /// Text level file (one line per x column); built-in level when omitted
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Start position, tile units
    #[arg(long, default_value_t = 22.0)]
    pub x: f32,

    #[arg(long, default_value_t = 12.0)]
    pub y: f32,

    /// Initial heading in degrees, 0 = +X, counter-clockwise
    #[arg(long, default_value_t = 180.0, allow_negative_numbers = true)]
    pub angle: f32,

    /// Horizontal field of view in degrees, strictly between 0 and 180
    #[arg(long, default_value_t = 90.0, value_parser = parse_fov)]
    pub fov: f32,

    /// Window width in pixels (one ray per column)
    #[arg(long, default_value_t = 1280)]
    pub width: usize,

    #[arg(long, default_value_t = 720)]
    pub height: usize,

    /// Redraw a coloured camera log in the terminal
    #[arg(long)]
    pub hud: bool,
}

/// Wrap to `[0, 360)` and convert.
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0).to_radians()
}

/// `tan(fov / 2)` must stay finite and positive.
fn parse_fov(s: &str) -> Result<f32, String> {
    let fov: f32 = s.parse().map_err(|e| format!("`{s}`: {e}"))?;
    if fov > 0.0 && fov < 180.0 {
        Ok(fov)
    } else {
        Err(format!("field of view must be in (0, 180) degrees, got {fov}"))
    }
}

impl ViewConfig {
    /// The level named by `--map`, or a copy of the built-in one.
    pub fn load_level(&self) -> Result<Level, LevelError> {
        match &self.map {
            Some(path) => Level::from_file(path),
            None => Ok(Level::classic().clone()),
        }
    }

    pub fn camera(&self) -> Camera {
        Camera::new(
            self.x,
            self.y,
            degrees_to_radians(self.angle),
            degrees_to_radians(self.fov),
        )
    }

    /// [`Self::camera`], refusing a start tile that is not open floor.
    pub fn camera_on(&self, level: &Level) -> Result<Camera, LevelError> {
        let camera = self.camera();
        let start = camera.position();
        if level.is_empty(start.x.floor() as i32, start.y.floor() as i32) {
            Ok(camera)
        } else {
            Err(LevelError::BlockedStart {
                x: start.x,
                y: start.y,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn defaults() {
        let cfg = ViewConfig::try_parse_from(["view"]).unwrap();
        assert_eq!((cfg.x, cfg.y), (22.0, 12.0));
        assert_eq!(cfg.fov, 90.0);
        assert!(cfg.map.is_none());
        assert!(!cfg.hud);

        let cam = cfg.camera();
        assert!((cam.direction().x + 1.0).abs() < 1e-6);
        assert!((cam.plane_length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn parses_flags() {
        let cfg = ViewConfig::try_parse_from([
            "view", "--map", "room.map", "--x", "2.5", "--angle", "-90", "--fov", "60", "--hud",
        ])
        .unwrap();
        assert_eq!(cfg.map.as_deref(), Some(std::path::Path::new("room.map")));
        assert_eq!(cfg.x, 2.5);
        assert_eq!(cfg.angle, -90.0);
        assert!(cfg.hud);
    }

    #[test]
    fn rejects_degenerate_fov() {
        for bad in ["0", "180", "270", "-5", "wide"] {
            assert!(
                ViewConfig::try_parse_from(["view", "--fov", bad]).is_err(),
                "accepted fov {bad}"
            );
        }
    }

    #[test]
    fn degrees_wrap() {
        assert!((degrees_to_radians(90.0) - FRAC_PI_2).abs() < 1e-6);
        assert!((degrees_to_radians(540.0) - PI).abs() < 1e-5);
        assert!((degrees_to_radians(-90.0) - 3.0 * FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn start_must_be_open_floor() {
        let lvl = Level::classic();
        let cfg = ViewConfig::try_parse_from(["view"]).unwrap();
        assert!(cfg.camera_on(lvl).is_ok());

        // border wall, then off the grid entirely
        for (x, y) in [("0.5", "0.5"), ("30", "12"), ("3", "24")] {
            let cfg = ViewConfig::try_parse_from(["view", "--x", x, "--y", y]).unwrap();
            assert!(
                matches!(cfg.camera_on(lvl), Err(LevelError::BlockedStart { .. })),
                "accepted start ({x}, {y})"
            );
        }
    }

    #[test]
    fn default_level_is_builtin() {
        let cfg = ViewConfig::try_parse_from(["view"]).unwrap();
        let lvl = cfg.load_level().unwrap();
        assert_eq!(&lvl, Level::classic());
    }
}
