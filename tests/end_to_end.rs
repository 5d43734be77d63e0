extern crate fractalnoise;

use fractalnoise::{
    generate, Algorithm, Color, ColorMode, Direction, FieldEvaluator, GenerationParameters,
    GradientTable, Knob, NoiseError,
};

fn terrain() -> GradientTable {
    GradientTable::new(
        ColorMode::Quadruple,
        &[
            Color::new(0, 0, 100),
            Color::new(80, 100, 200),
            Color::new(210, 210, 0),
            Color::new(100, 80, 0),
            Color::new(50, 160, 20),
            Color::new(0, 80, 10),
            Color::new(100, 100, 100),
            Color::new(250, 250, 250),
        ],
    )
    .unwrap()
}

fn render(params: GenerationParameters, gradient: &GradientTable) -> Vec<u8> {
    let field = generate(params).unwrap();
    let mut pixels = vec![0u8; params.width * params.height * 4];
    field
        .colorize(gradient, &mut pixels)
        .expect("buffer is sized from the parameters");
    pixels
}

#[test]
fn repeated_renders_are_byte_identical() {
    let params = GenerationParameters {
        width: 800,
        height: 600,
        frequency: 0.01,
        lacunarity: 3.0,
        gain: 0.2,
        octaves: 3,
        algorithm: Algorithm::Fbm,
        color_mode: ColorMode::Quadruple,
    };
    let gradient = terrain();
    let first = render(params, &gradient);
    let second = render(params, &gradient);
    assert_eq!(first.len(), 800 * 600 * 4);
    assert!(first == second);
    // Alpha was never written.
    assert!(first.chunks(4).all(|p| p[3] == 0));
    // Some of the image is not the first gradient color.
    let c = gradient[0];
    assert!(first.chunks(4).any(|p| p[..3] != [c.r, c.g, c.b]));
}

#[test]
fn turbulence_renders_deterministically_across_worker_counts() {
    let params = GenerationParameters {
        algorithm: Algorithm::Turbulence,
        octaves: 5,
        ..GenerationParameters::with_size(131, 67)
    };
    let gradient = GradientTable::for_mode(ColorMode::Triple);
    let mut reference = vec![0u8; params.len() * 4];
    FieldEvaluator::new(params)
        .unwrap()
        .with_workers(1)
        .generate()
        .unwrap()
        .colorize(&gradient, &mut reference)
        .unwrap();
    for workers in &[2, 9, 64] {
        let mut pixels = vec![0u8; params.len() * 4];
        FieldEvaluator::new(params)
            .unwrap()
            .with_workers(*workers)
            .generate()
            .unwrap()
            .colorize(&gradient, &mut pixels)
            .unwrap();
        assert!(pixels == reference, "{} workers differ", workers);
    }
}

#[test]
fn flat_field_renders_as_one_color() {
    let params = GenerationParameters {
        octaves: 0,
        ..GenerationParameters::with_size(40, 30)
    };
    let gradient = GradientTable::for_mode(ColorMode::Dual);
    let field = generate(params).unwrap();
    assert_eq!((field.min(), field.max()), (0.0, 0.0));
    let mut pixels = vec![0u8; params.len() * 4];
    field.colorize(&gradient, &mut pixels).unwrap();
    let c = gradient[0];
    assert!(pixels.chunks(4).all(|p| p == [c.r, c.g, c.b, 0]));
}

#[test]
fn undersized_buffer_is_a_precondition_failure() {
    let params = GenerationParameters::with_size(10, 10);
    let field = generate(params).unwrap();
    let mut pixels = vec![0u8; 10 * 9 * 4];
    assert_eq!(
        field.colorize(&GradientTable::for_mode(ColorMode::Single), &mut pixels),
        Err(NoiseError::BufferSize {
            expected: 400,
            actual: 360
        })
    );
}

#[test]
fn stepping_knobs_drives_regeneration() {
    let start = GenerationParameters {
        octaves: 1,
        ..GenerationParameters::with_size(48, 32)
    };
    let before = generate(start).unwrap();

    let turbulent = start.step(Knob::Algorithm, Direction::Up);
    assert_eq!(turbulent.algorithm, Algorithm::Turbulence);
    let after = generate(turbulent).unwrap();
    assert!(after.min() >= 0.0);
    assert!(before.values() != after.values());

    // Holding the octave key down past zero is reported, not rendered.
    let flat = start.step(Knob::Octaves, Direction::Down);
    assert_eq!(generate(flat).unwrap().max(), 0.0);
    let negative = flat.step(Knob::Octaves, Direction::Down);
    assert_eq!(
        generate(negative).unwrap_err(),
        NoiseError::NegativeOctaves(-1)
    );

    let dual = start
        .step(Knob::ColorMode, Direction::Down)
        .step(Knob::ColorMode, Direction::Down);
    let gradient = GradientTable::for_mode(dual.color_mode);
    assert_eq!(gradient.mode(), ColorMode::Dual);
    let mut pixels = vec![0u8; dual.len() * 4];
    generate(dual).unwrap().colorize(&gradient, &mut pixels).unwrap();
}
