extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate failure;
extern crate fractalnoise;
extern crate image;
#[macro_use]
extern crate log;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use fractalnoise::{Algorithm, ColorMode, FieldEvaluator, GenerationParameters, GradientTable};
use image::ColorType;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_parse<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const FREQUENCY: &str = "frequency";
const LACUNARITY: &str = "lacunarity";
const GAIN: &str = "gain";
const OCTAVES: &str = "octaves";
const ALGORITHM: &str = "algorithm";
const COLORMODE: &str = "colormode";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("noisegen")
        .version("0.1.0")
        .about("Fractal noise field generator")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; the format follows the extension"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(FREQUENCY)
                .long(FREQUENCY)
                .short("f")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.01")
                .validator(|s| validate_parse::<f32>(&s, "Could not parse frequency"))
                .help("Frequency of the first octave"),
        )
        .arg(
            Arg::with_name(LACUNARITY)
                .long(LACUNARITY)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("3.0")
                .validator(|s| validate_parse::<f32>(&s, "Could not parse lacunarity"))
                .help("Frequency multiplier between octaves"),
        )
        .arg(
            Arg::with_name(GAIN)
                .long(GAIN)
                .short("g")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.2")
                .validator(|s| validate_parse::<f32>(&s, "Could not parse gain"))
                .help("Amplitude multiplier between octaves"),
        )
        .arg(
            Arg::with_name(OCTAVES)
                .long(OCTAVES)
                .short("n")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("3")
                .validator(|s| validate_parse::<i32>(&s, "Could not parse octave count"))
                .help("Number of octaves"),
        )
        .arg(
            Arg::with_name(ALGORITHM)
                .long(ALGORITHM)
                .short("a")
                .takes_value(true)
                .default_value("fbm")
                .validator(|s| validate_parse::<Algorithm>(&s, "Algorithm must be fbm or turbulence"))
                .help("fbm or turbulence"),
        )
        .arg(
            Arg::with_name(COLORMODE)
                .long(COLORMODE)
                .short("c")
                .takes_value(true)
                .default_value("quadruple")
                .validator(|s| {
                    validate_parse::<ColorMode>(
                        &s,
                        "Color mode must be single, dual, triple or quadruple",
                    )
                })
                .help("Gradient to paint with"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of worker threads (default: one per CPU)"),
        )
        .get_matches()
}

fn value_of<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, failure::Error> {
    matches
        .value_of(name)
        .and_then(|s| T::from_str(s).ok())
        .ok_or_else(|| format_err!("Could not parse --{}", name))
}

fn write_image(outfile: &str, pixels: &[u8], bounds: (usize, usize)) -> Result<(), std::io::Error> {
    image::save_buffer(
        outfile,
        pixels,
        bounds.0 as u32,
        bounds.1 as u32,
        ColorType::RGBA(8),
    )
}

fn run() -> Result<(), failure::Error> {
    let matches = args();
    let output = matches
        .value_of(OUTPUT)
        .ok_or_else(|| format_err!("An output file is required"))?;
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<usize>(s, 'x'))
        .ok_or_else(|| format_err!("Error parsing image dimensions"))?;

    let params = GenerationParameters {
        frequency: value_of(&matches, FREQUENCY)?,
        lacunarity: value_of(&matches, LACUNARITY)?,
        gain: value_of(&matches, GAIN)?,
        octaves: value_of(&matches, OCTAVES)?,
        algorithm: value_of(&matches, ALGORITHM)?,
        color_mode: value_of(&matches, COLORMODE)?,
        width,
        height,
    };
    let threads = match matches.value_of(THREADS) {
        Some(_) => value_of(&matches, THREADS)?,
        None => num_cpus::get(),
    };

    let field = FieldEvaluator::new(params)?.with_workers(threads).generate()?;
    let gradient = GradientTable::for_mode(params.color_mode);
    let mut pixels = vec![255u8; field.len() * 4];
    field.colorize(&gradient, &mut pixels)?;
    write_image(output, &pixels, (width, height))?;
    info!("wrote {}", output);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
