//! Scene loading.
//!
//! Two sources are supported:
//!
//! - the line-oriented scene text format read by [`parse_scene`] /
//!   [`load_scene`]:
//!
//!   ```text
//!   2                                  <- header, ignored
//!   255,0,0,0,0,5,0,4,5,4,0,5          <- r,g,b then x,y,z of v0, v1, v2
//!   0,255,0,10,10,2,10,20,2,20,10,2
//!   0,0,-1                             <- light direction (last line)
//!   ```
//!
//! - Wavefront OBJ files through `tobj` ([`load_obj`]).

use std::fmt;
use std::path::Path;

use crate::colors::Color;
use crate::math::vec3::Vec3;
use crate::scene::{Polygon, Scene};

/// Error loading a scene.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    /// A malformed line; `line` is 1-based.
    Parse { line: usize, message: String },
    /// The file has no light line.
    MissingLight,
    Obj(tobj::LoadError),
}

impl LoadError {
    fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read scene: {}", e),
            LoadError::Parse { line, message } => {
                write!(f, "scene parse error at line {}: {}", line, message)
            }
            LoadError::MissingLight => write!(f, "scene has no light direction line"),
            LoadError::Obj(e) => write!(f, "failed to load OBJ: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Obj(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

/// Reads and parses a scene text file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let scene = parse_scene(&text)?;
    log::info!("loaded {} polygons from {}", scene.len(), path.display());
    Ok(scene)
}

/// Parses the scene text format.
///
/// The first line is skipped. Blank lines are ignored. The last remaining
/// line is the light direction; every other line is one polygon.
pub fn parse_scene(text: &str) -> Result<Scene, LoadError> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .skip(1)
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let Some((&(light_line, light_text), polygon_lines)) = lines.split_last() else {
        return Err(LoadError::MissingLight);
    };

    let light = match parse_floats(light_line, light_text)?.as_slice() {
        &[x, y, z] => Vec3::new(x, y, z),
        other => {
            return Err(LoadError::parse(
                light_line,
                format!("expected 3 light components, found {}", other.len()),
            ))
        }
    };

    let polygons = polygon_lines
        .iter()
        .map(|&(line, text)| parse_polygon(line, text))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Scene::new(polygons, light))
}

fn parse_polygon(line: usize, text: &str) -> Result<Polygon, LoadError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != 12 {
        return Err(LoadError::parse(
            line,
            format!("expected 12 fields, found {}", fields.len()),
        ));
    }

    let mut channels = [0u8; 3];
    for (channel, field) in channels.iter_mut().zip(&fields[..3]) {
        *channel = field.parse().map_err(|_| {
            LoadError::parse(line, format!("color channel {:?} is not in 0..=255", field))
        })?;
    }

    let mut coords = [0.0f32; 9];
    for (coord, field) in coords.iter_mut().zip(&fields[3..]) {
        *coord = parse_float(line, field)?;
    }

    let vertex = |i: usize| Vec3::new(coords[i * 3], coords[i * 3 + 1], coords[i * 3 + 2]);
    Ok(Polygon::new(
        vertex(0),
        vertex(1),
        vertex(2),
        Color::new(channels[0], channels[1], channels[2]),
    ))
}

fn parse_floats(line: usize, text: &str) -> Result<Vec<f32>, LoadError> {
    text.split(',')
        .map(|field| parse_float(line, field.trim()))
        .collect()
}

fn parse_float(line: usize, field: &str) -> Result<f32, LoadError> {
    field
        .parse::<f32>()
        .map_err(|_| LoadError::parse(line, format!("{:?} is not a number", field)))
}

/// Loads every mesh in an OBJ file as one scene.
///
/// Faces are triangulated. Each face takes its material's diffuse color when
/// the file has one, `reflectance` otherwise. OBJ is y-up with front faces
/// wound counter-clockwise toward +z; vertices are turned half a revolution
/// about X so those faces land y-down and facing the viewer here.
pub fn load_obj<P: AsRef<Path> + fmt::Debug>(
    path: P,
    reflectance: Color,
    light: Vec3,
) -> Result<Scene, LoadError> {
    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    let (models, materials) = tobj::load_obj(&path, &options)?;
    let materials = materials.unwrap_or_else(|e| {
        log::warn!("ignoring materials for {:?}: {}", path, e);
        Vec::new()
    });

    let mut polygons = Vec::new();
    for model in &models {
        let mesh = &model.mesh;
        let color = mesh
            .material_id
            .and_then(|id| materials.get(id))
            .and_then(|m| m.diffuse)
            .map(|[r, g, b]| Color::from_f32(r * 255.0, g * 255.0, b * 255.0))
            .unwrap_or(reflectance);

        let vertex = |index: u32| {
            let i = index as usize * 3;
            Vec3::new(
                mesh.positions[i],
                -mesh.positions[i + 1],
                -mesh.positions[i + 2],
            )
        };

        for face in mesh.indices.chunks_exact(3) {
            polygons.push(Polygon::new(
                vertex(face[0]),
                vertex(face[1]),
                vertex(face[2]),
                color,
            ));
        }
    }

    log::info!(
        "loaded {} polygons from {} OBJ meshes in {:?}",
        polygons.len(),
        models.len(),
        path
    );
    Ok(Scene::new(polygons, light))
}
