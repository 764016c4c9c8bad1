use std::env::args;
use std::error::Error;
use std::process;

use plate_gate::registry::Registry;
use plate_gate::PlateGate;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = args();
    args.next();
    let (registry_path, image_path) = match (args.next(), args.next()) {
        (Some(registry), Some(image)) => (registry, image),
        _ => {
            eprintln!("usage: recognize <registry-file> <image-file>");
            process::exit(1);
        }
    };

    let registry = Registry::load(&registry_path)?;
    let gate = PlateGate::new(registry);
    let frame = image::open(&image_path)?.to_rgb8();

    match gate.process_frame(&frame)? {
        Some(recognition) => {
            println!("recognized plate: {}", recognition.text);
            if recognition.allowed {
                println!("access granted");
            } else {
                println!("not registered");
            }
        }
        None => println!("no plate-shaped region found"),
    }
    Ok(())
}
