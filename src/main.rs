use clap::{value_t, App, Arg};
use image::imageops::FilterType;
use image::Rgb;
use imageproc::drawing;
use log::{debug, info, warn};
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

use plate_gate::display::VideoWindow;
use plate_gate::error::GateError;
use plate_gate::registry::Registry;
use plate_gate::PlateGate;

// fixed canvas for the cropped-plate preview window
const PLATE_PREVIEW_WIDTH: u32 = 320;
const PLATE_PREVIEW_HEIGHT: u32 = 120;
// run the detector on one frame out of this many
const PROCESS_EVERY: u64 = 5;

fn main() -> Result<(), GateError> {
    env_logger::init();

    let matches = App::new("plate-gate")
        .version("0.1.0")
        .about("Checks plates seen by a live camera against a registry of allowed plates")
        .arg(Arg::with_name("REGISTRY")
            .help("text file with one registered plate per line")
            .required(true)
            .index(1))
        .arg(Arg::with_name("camera")
            .short("c")
            .long("camera")
            .takes_value(true)
            .default_value("0")
            .help("index of the capture device"))
        .get_matches();

    let registry_path = matches.value_of("REGISTRY").unwrap_or_default();
    let camera_index = value_t!(matches, "camera", u32).unwrap_or_else(|e| e.exit());

    run(registry_path, camera_index)
}

fn run(registry_path: &str, camera_index: u32) -> Result<(), GateError> {
    let registry = Registry::load(registry_path)?;
    info!("loaded {} registered plates from {}", registry.len(), registry_path);
    let gate = PlateGate::new(registry);

    let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
    let mut camera = Camera::new(CameraIndex::Index(camera_index), requested)?;
    camera.open_stream()?;
    let resolution = camera.resolution();
    info!("camera {} open at {}x{}", camera_index, resolution.width(), resolution.height());

    let mut frame_window = VideoWindow::new(
        "plate-gate",
        resolution.width() as usize,
        resolution.height() as usize,
    )?;
    let mut plate_window: Option<VideoWindow> = None;

    let mut frame_count: u64 = 0;
    let mut granted = false;

    while frame_window.is_open() && !frame_window.quit_requested() {
        let frame = match camera.frame() {
            Ok(frame) => frame,
            Err(e) => {
                // end of stream, not a fatal error
                warn!("capture ended: {}", e);
                break;
            }
        };
        frame_count += 1;
        if frame_count % PROCESS_EVERY != 0 {
            // keep the event loop alive so the quit key stays responsive
            frame_window.poll();
            continue;
        }

        let frame = frame.decode_image::<RgbFormat>()?;
        let recognition = gate.process_frame(&frame)?;

        let mut shown = frame;
        match &recognition {
            Some(recognition) => {
                drawing::draw_hollow_rect_mut(&mut shown, recognition.bbox, Rgb([0, 255, 0]));
            }
            None => debug!("no plate-shaped contour in frame {}", frame_count),
        }
        frame_window.show_rgb(&shown)?;

        if let Some(recognition) = recognition {
            println!("recognized plate: {}", recognition.text);

            let preview = image::imageops::resize(
                &recognition.plate,
                PLATE_PREVIEW_WIDTH,
                PLATE_PREVIEW_HEIGHT,
                FilterType::Nearest,
            );
            if plate_window.is_none() {
                plate_window = Some(VideoWindow::new(
                    "detected plate",
                    PLATE_PREVIEW_WIDTH as usize,
                    PLATE_PREVIEW_HEIGHT as usize,
                )?);
            }
            if let Some(window) = plate_window.as_mut() {
                window.show_gray(&preview)?;
            }

            if recognition.allowed {
                println!("access granted");
                granted = true;
                break;
            } else {
                println!("not registered");
            }
        }
    }

    // single teardown path for quit, end-of-stream and a granted match
    camera.stop_stream()?;
    if granted {
        info!("gate opened after {} frames", frame_count);
    } else {
        info!("stopped after {} frames", frame_count);
    }
    Ok(())
}
