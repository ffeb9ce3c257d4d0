use clap::{App, Arg};
use log::{info, LevelFilter};
use pbr::ProgressBar;
use spheretrace::animation::*;
use spheretrace::scenes::*;
use spheretrace::{Scene, Tracer, UploadBuffers};

/// Fixed timestep standing in for the platform clock: time advances one
/// sixtieth of a second per frame.
const FRAME_STEP_MS: f32 = 1000. / 60.;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .init();

    let arg_matches = App::new("spheretrace")
        .version("0.1.0")
        .about("Renders animated sphere scenes with a recursive ray tracer")
        .arg(
            Arg::new("resolution")
                .long("resolution")
                .short('r')
                .takes_value(true)
                .default_value("500x500")
                .about("output resolution in pixels"),
        )
        .arg(
            Arg::new("scene")
                .long("scene")
                .short('c')
                .takes_value(true)
                .default_value("orbit")
                .about("scene to render: book, orbit, rainbow or random"),
        )
        .arg(
            Arg::new("frames")
                .long("frames")
                .short('f')
                .takes_value(true)
                .default_value("1")
                .about("number of animation frames to render"),
        )
        .arg(
            Arg::new("fov")
                .long("fov")
                .takes_value(true)
                .default_value("90")
                .about("horizontal field of view in degrees"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('e')
                .takes_value(true)
                .default_value("0")
                .about("rng seed for the random scene"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .takes_value(true)
                .default_value("frame")
                .about("output file prefix"),
        )
        .arg(
            Arg::new("buffers")
                .long("buffers")
                .short('b')
                .about("also dump the serialized upload buffers per frame"),
        )
        .get_matches();

    let (w, h) = match parse_resolution(arg_matches.value_of("resolution")) {
        Some(v) => v,
        None => {
            eprintln!("invalid resolution");
            return;
        }
    };
    let frames: usize = match parse_arg(arg_matches.value_of("frames")) {
        Some(v) => v,
        None => {
            eprintln!("invalid frame count");
            return;
        }
    };
    let fov: f32 = match parse_arg(arg_matches.value_of("fov")) {
        Some(v) if v > 0. && v < 180. => v,
        _ => {
            eprintln!("invalid field of view");
            return;
        }
    };
    let seed: u64 = match parse_arg(arg_matches.value_of("seed")) {
        Some(v) => v,
        None => {
            eprintln!("invalid rng seed");
            return;
        }
    };
    let prefix = arg_matches.value_of("output").unwrap_or("frame");
    let dump_buffers = arg_matches.is_present("buffers");

    let (mut scene, mut driver) = match arg_matches.value_of("scene") {
        Some("book") => (book_scene(), None),
        Some("random") => (
            random_scene(&mut SceneRng::seed_from_u64(seed)),
            None,
        ),
        Some("orbit") => {
            let (scene, driver) = OrbitRing::build();
            (scene, Some(Box::new(driver) as Box<dyn Animate>))
        }
        Some("rainbow") => {
            let (scene, driver) = RainbowRing::build();
            (scene, Some(Box::new(driver) as Box<dyn Animate>))
        }
        _ => {
            eprintln!("unknown scene");
            return;
        }
    };

    let mut tracer = Tracer::new();
    tracer.set_fov(fov);

    info!(
        "rendering {} frame(s) at {}x{}, fov {}",
        frames, w, h, fov
    );
    let mut pb = ProgressBar::new(frames as u64);
    for frame_index in 0..frames {
        let time_ms = frame_index as f32 * FRAME_STEP_MS;
        if let Some(driver) = driver.as_mut() {
            driver.update(&mut scene, time_ms);
        }

        let frame = tracer.render(&scene, w, h);
        let path = format!("{}_{:04}.png", prefix, frame_index);
        if let Err(e) = image::save_buffer(
            &path,
            &frame.pixels[..],
            frame.width as u32,
            frame.height as u32,
            image::ColorType::Rgba8,
        ) {
            eprintln!("failed to write {}: {}", path, e);
            return;
        }

        if dump_buffers {
            if let Err(e) = dump_upload_buffers(&scene, prefix, frame_index) {
                eprintln!("buffer dump failed: {}", e);
                return;
            }
        }
        pb.inc();
    }
    pb.finish_print("done");
}

/// Serializes the scene and writes both upload blocks next to the frame,
/// standing in for the GPU upload the real evaluator would perform.
fn dump_upload_buffers(
    scene: &Scene,
    prefix: &str,
    frame_index: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut buffers = UploadBuffers::new();
    scene.serialize(&mut buffers)?;
    std::fs::write(
        format!("{}_{:04}_spheres.bin", prefix, frame_index),
        buffers.spheres.as_bytes(),
    )?;
    std::fs::write(
        format!("{}_{:04}_lights.bin", prefix, frame_index),
        buffers.lights.as_bytes(),
    )?;
    Ok(())
}

fn parse_resolution(s: Option<&str>) -> Option<(usize, usize)> {
    let (w, h) = s?.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

fn parse_arg<T: std::str::FromStr>(s: Option<&str>) -> Option<T> {
    s?.parse().ok()
}
