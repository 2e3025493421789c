use resources::images;
use std::env;
use std::path::Path;

const USAGE: &str = "Usage: sdlimg [OPTIONS] [COMMAND] <output>

Commands:
  generate  Write the bitmaps the tutorial programs load into the given directory.

Options:
  -h, --help     Show this help message and exit.

Examples:
  sdlimg generate ./Images
      Create hello_world.bmp, x.bmp, press.bmp, up.bmp, down.bmp, left.bmp,
      right.bmp and stretch.bmp in ./Images.

Description:
  The tutorial programs read fixed 24-bit bitmaps from the Images directory
  next to where they are started. This tool produces a matching set.";

fn main() {
    env_logger::init();

    let args = env::args().collect::<Vec<String>>();
    if args.len() < 3 || args[1] == "-h" || args[1] == "--help" {
        println!("{USAGE}");
        std::process::exit(1);
    }
    match args[1].as_str() {
        "generate" => match images::generate_all(Path::new(&args[2])) {
            Ok(written) => println!("{} images written to {}", written.len(), &args[2]),
            Err(e) => {
                eprintln!("sdlimg: generating images in {} failed: {e}", &args[2]);
                std::process::exit(1);
            }
        },
        s => {
            eprintln!("Unknown subcommand {s}\n\n{USAGE}");
            std::process::exit(1);
        }
    }
}
