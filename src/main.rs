use std::path::{Path, PathBuf};

use flatshade::colors::Color;
use flatshade::config::RenderConfig;
use flatshade::engine::Engine;
use flatshade::export;
use flatshade::loader;
use flatshade::logging::{init_logging, level_for_verbosity};
use flatshade::math::vec3::Vec3;
use flatshade::scene::Scene;
use flatshade::window::{FrameLimiter, Window, WindowEvent};

const USAGE: &str = "usage: flatshade <scene.txt|model.obj> [--png OUT] [--width N] [--height N] \
[--ambient R,G,B] [--light-color R,G,B] [--fit] [-v|--verbose]...";

/// Share of the canvas a fitted scene fills.
const FIT_COVERAGE: f32 = 0.8;

#[derive(Debug, PartialEq)]
struct Args {
    scene: PathBuf,
    png: Option<PathBuf>,
    fit: bool,
    verbosity: u8,
    config: RenderConfig,
}

fn parse_color(value: &str) -> Result<Color, String> {
    let channels = value
        .split(',')
        .map(|c| c.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("invalid color {:?}, expected R,G,B in 0..=255", value))?;
    match channels.as_slice() {
        &[r, g, b] => Ok(Color::new(r, g, b)),
        _ => Err(format!("invalid color {:?}, expected R,G,B", value)),
    }
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Args, String> {
    let mut scene = None;
    let mut png = None;
    let mut fit = false;
    let mut verbosity = 0u8;
    let mut config = RenderConfig::default();

    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("{} needs a value", name));
        match arg.as_str() {
            "--png" => png = Some(PathBuf::from(value("--png")?)),
            "--width" => {
                config.width = value("--width")?
                    .parse()
                    .map_err(|_| "--width must be a positive integer".to_string())?
            }
            "--height" => {
                config.height = value("--height")?
                    .parse()
                    .map_err(|_| "--height must be a positive integer".to_string())?
            }
            "--ambient" => config.ambient = parse_color(&value("--ambient")?)?,
            "--light-color" => config.light_color = parse_color(&value("--light-color")?)?,
            "--fit" => fit = true,
            "-v" | "--verbose" => verbosity = verbosity.saturating_add(1),
            flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
            path if scene.is_none() => scene = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument {}", extra)),
        }
    }

    if config.width == 0 || config.height == 0 {
        return Err("canvas size must be non-zero".to_string());
    }

    Ok(Args {
        scene: scene.ok_or("missing scene file")?,
        png,
        fit,
        verbosity,
        config,
    })
}

fn is_obj(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("obj"))
}

fn load(path: &Path) -> Result<Scene, String> {
    let scene = if is_obj(path) {
        loader::load_obj(path, Color::grey(200), Vec3::BACK)
    } else {
        loader::load_scene(path)
    };
    scene.map_err(|e| e.to_string())
}

fn run_viewer(mut engine: Engine) -> Result<(), String> {
    let config = *engine.config();
    let mut window = Window::new("flatshade", config.width, config.height)?;
    let mut limiter = FrameLimiter::new(&window);
    let mut frame = engine.render();

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                engine.resize(w, h);
                frame = engine.render();
            }
            WindowEvent::Command(command) => {
                engine.apply(command);
                frame = engine.render();
            }
            WindowEvent::None => {}
        }

        window.present(&frame)?;
        limiter.wait_and_get_delta(&window);
    }

    Ok(())
}

fn main() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1)).map_err(|e| format!("{}\n{}", e, USAGE))?;
    init_logging(level_for_verbosity(args.verbosity));

    let scene = load(&args.scene)?;
    if scene.is_empty() {
        log::warn!("{} contains no polygons", args.scene.display());
    }

    let mut engine = Engine::new(scene, args.config);
    if args.fit || is_obj(&args.scene) {
        engine.fit_to_canvas(FIT_COVERAGE);
    }

    match args.png {
        Some(out) => export::save_png(&engine.render(), &out).map_err(|e| e.to_string()),
        None => run_viewer(engine),
    }
}
