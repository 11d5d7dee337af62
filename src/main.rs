use std::f32::consts::{PI, TAU};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};

use inkline::math::{Mat4, Vec3};
use inkline::prelude::*;

const USAGE: &str = "\
usage: inkline <model.obj> <width> <height> <scale> [options]

options:
  -o, --output <path>        output TGA path (default: render.tga)
      --pitch <degrees>      camera pitch
      --yaw <degrees>        camera yaw of the first view
      --lightangle <x y z>   light direction (default: 1 -2 0)
      --lightcolor <r g b>   light color (default: 1 1 1)
      --cull <front|back|none>
      --views <n>            turntable view count (default: 8)
      --autocompute-normals  derive flat normals from face geometry";

struct Args {
    obj_path: PathBuf,
    width: i32,
    height: i32,
    size_factor: f32,
    output: PathBuf,
    pitch: f32,
    yaw: f32,
    light_angle: Vec3,
    light_color: Color,
    cullmode: CullMode,
    autocompute_normals: bool,
    views: i32,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    if args.len() < 4 {
        return Err("need at least 4 arguments: model, width, height, scale factor".into());
    }

    let width: i32 = args[1].parse().map_err(|_| "bad image width".to_string())?;
    let height: i32 = args[2].parse().map_err(|_| "bad image height".to_string())?;
    let size_factor: f32 = args[3].parse().map_err(|_| "bad size factor".to_string())?;
    if width <= 0 || height <= 0 {
        return Err("image dimensions must be positive".into());
    }
    if size_factor == 0.0 {
        return Err("bad size factor".into());
    }

    let mut parsed = Args {
        obj_path: PathBuf::from(&args[0]),
        width,
        height,
        size_factor,
        output: PathBuf::from("render.tga"),
        pitch: 0.0,
        yaw: 0.0,
        light_angle: Vec3::new(1.0, -2.0, 0.0),
        light_color: Color::new(1.0, 1.0, 1.0),
        cullmode: CullMode::None,
        autocompute_normals: false,
        views: 8,
    };

    fn next<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
        *i += 1;
        args.get(*i)
            .map(String::as_str)
            .ok_or_else(|| format!("{flag} needs an argument"))
    }
    fn next_f32(args: &[String], i: &mut usize, flag: &str) -> Result<f32, String> {
        next(args, i, flag)?
            .parse()
            .map_err(|_| format!("{flag} expects a number"))
    }

    let mut i = 4;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => parsed.output = PathBuf::from(next(args, &mut i, "--output")?),
            "--pitch" => parsed.pitch = next_f32(args, &mut i, "--pitch")? * PI / 180.0,
            "--yaw" => parsed.yaw = next_f32(args, &mut i, "--yaw")? * PI / 180.0,
            "--lightangle" => {
                let x = next_f32(args, &mut i, "--lightangle")?;
                let y = next_f32(args, &mut i, "--lightangle")?;
                let z = next_f32(args, &mut i, "--lightangle")?;
                parsed.light_angle = Vec3::new(x, y, z);
            }
            "--lightcolor" => {
                let r = next_f32(args, &mut i, "--lightcolor")?;
                let g = next_f32(args, &mut i, "--lightcolor")?;
                let b = next_f32(args, &mut i, "--lightcolor")?;
                parsed.light_color = Color::new(r, g, b);
            }
            "--cull" => {
                parsed.cullmode = match next(args, &mut i, "--cull")? {
                    "front" => CullMode::Front,
                    "back" => CullMode::Back,
                    "none" => CullMode::None,
                    _ => return Err("--cull expects 'front', 'back', or 'none'".into()),
                }
            }
            "--views" => {
                parsed.views = next(args, &mut i, "--views")?
                    .parse()
                    .map_err(|_| "--views expects a positive count".to_string())?;
                if parsed.views <= 0 {
                    return Err("--views expects a positive count".into());
                }
            }
            "--autocompute-normals" => parsed.autocompute_normals = true,
            other => return Err(format!("do not recognize {other}")),
        }
        i += 1;
    }

    Ok(parsed)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut mesh = Mesh::load_obj(&args.obj_path)?;
    if args.autocompute_normals {
        mesh.autocompute_normals();
    }
    info!(
        "loaded {}: {} faces",
        args.obj_path.display(),
        mesh.faces().len()
    );

    let background = Color::new(0.5, 0.5, 0.5);
    let mut canvas = Canvas::new(args.width * args.views, args.height, background);
    let lights = [SunLight::new(args.light_angle, args.light_color)];

    for view in 0..args.views {
        // Model space to screen space: yaw for this view, then pitch, then
        // scale to pixels, then center in the view region.
        let scale = args.size_factor * args.height as f32;
        let transform = Mat4::translation(Vec3::new(
            args.width as f32 / 2.0,
            args.height as f32 / 2.0,
            0.0,
        )) * Mat4::scaling(Vec3::splat(scale))
            * Mat4::rotation(args.pitch, Vec3::X)
            * Mat4::rotation(args.yaw + view as f32 * TAU / args.views as f32, Vec3::Y);

        let mut region = Canvas::new(args.width, args.height, background);
        render(&mesh, transform, &lights, &mut region, args.cullmode);
        canvas.blit(&region, view * args.width, 0);
        info!("rendered view {}/{}", view + 1, args.views);
    }

    let file = File::create(&args.output)?;
    canvas.write_tga(&mut BufWriter::new(file))?;
    info!("wrote {}", args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
