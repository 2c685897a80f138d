use std::{fs, path::Path};

use clap::Parser;
use pitchlang::{
    interpreter::{encoder::encode, env::Env, value::Value},
    midi::{player::play, reader::read_performance},
    notation::Pitch,
    run_pitches,
};

/// pitchlang is a tiny functional language whose source bytes are musical
/// pitch names: programs can be typed, recorded, evaluated, or played.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pitchlang to look at a file instead of inline source text.
    #[arg(short, long)]
    file: bool,

    /// Treat the input as the path of a recorded performance (a standard
    /// MIDI file) and use its notes as the program.
    #[arg(short, long)]
    midi: bool,

    /// Treat the input as whitespace-separated pitch names, e.g. "C4 B4 C4".
    #[arg(short, long)]
    notes: bool,

    /// Play the program's pitch sequence on the default MIDI output instead
    /// of evaluating it.
    #[arg(short, long)]
    play: bool,

    /// Path of a prelude program evaluated first (in an empty environment);
    /// its value is bound in the main environment. A `.mid` path is read as
    /// a performance, anything else as source text.
    #[arg(long)]
    prelude: Option<String>,

    /// Name under which the prelude value is bound.
    #[arg(long, default_value = "G")]
    prelude_name: String,

    /// Source text, pitch names, or a path, depending on the flags.
    contents: String,
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Runs the program selected by the command line.
///
/// Returns `None` when the program was played rather than evaluated.
fn run(args: &Args) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let pitches = load_pitches(args)?;

    if args.play {
        play(&pitches)?;
        return Ok(None);
    }

    let mut env = Env::new();
    if let Some(path) = &args.prelude {
        let prelude = load_prelude(path)?;
        let value = run_pitches(&prelude, &Env::new())?;
        env = env.put(&args.prelude_name, value);
    }

    run_pitches(&pitches, &env).map(Some)
}

/// Produces the program's pitch sequence from whichever input form the
/// flags selected.
fn load_pitches(args: &Args) -> Result<Vec<Pitch>, Box<dyn std::error::Error>> {
    if args.midi {
        return Ok(read_performance(Path::new(&args.contents))?);
    }

    let text = if args.file {
        fs::read_to_string(&args.contents)?
    } else {
        args.contents.clone()
    };

    if args.notes {
        let pitches = text.split_whitespace()
                          .map(str::parse)
                          .collect::<Result<Vec<Pitch>, _>>()?;
        Ok(pitches)
    } else {
        Ok(encode(&text)?)
    }
}

/// Loads a prelude program as a pitch sequence.
fn load_prelude(path: &str) -> Result<Vec<Pitch>, Box<dyn std::error::Error>> {
    if Path::new(path).extension().is_some_and(|ext| ext == "mid" || ext == "midi") {
        Ok(read_performance(Path::new(path))?)
    } else {
        Ok(encode(&fs::read_to_string(path)?)?)
    }
}
