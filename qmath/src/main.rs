use std::error::Error;

use clap::{value_parser, Arg, ArgAction, Command};
use env_logger::{Builder, Target};
use log::{debug, info, LevelFilter};
use qmath::prelude::{gates, Matrix, TensorProductMode};

use crate::defaults::{DEFAULT_DEMO, DEFAULT_KRON_MODE, DEFAULT_PRECISION, DEMOS};

mod defaults;

/// Shared settings for every demo.
#[derive(Debug, Clone, Copy)]
struct DemoOptions {
    kron_mode: TensorProductMode,
    precision: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    // read CLI arguments
    let matches = Command::new("qmath demo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints worked complex-matrix and quantum-gate computations")
        .arg(
            Arg::new("demo")
                .value_name("demo")
                .help(format!("Selects the demonstration to run [default: {DEFAULT_DEMO}]"))
                .required(false)
                .value_parser(DEMOS),
        )
        .arg(
            Arg::new("kron_mode")
                .value_name("mode")
                .short('k')
                .long("kron-mode")
                .help(format!(
                    "Sets the tensor-product index convention [default: {DEFAULT_KRON_MODE}]"
                ))
                .required(false)
                .value_parser(["kronecker", "reference"]),
        )
        .arg(
            Arg::new("precision")
                .value_name("digits")
                .short('p')
                .long("precision")
                .help(format!(
                    "Sets the number of decimal places printed [default: {DEFAULT_PRECISION}]"
                ))
                .required(false)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Use debug mode"),
        )
        .get_matches();

    let demo = matches
        .get_one::<String>("demo")
        .map_or(DEFAULT_DEMO, String::as_str);
    let kron_mode = match matches.get_one::<String>("kron_mode") {
        Some(mode) => mode.parse::<TensorProductMode>()?,
        None => DEFAULT_KRON_MODE,
    };
    let precision = *matches
        .get_one::<usize>("precision")
        .unwrap_or(&DEFAULT_PRECISION);
    let debug_mode = matches.get_flag("debug");

    // initialise logger
    let mut builder = Builder::new();
    if debug_mode {
        builder.filter_level(LevelFilter::Debug);
    } else {
        builder.filter_level(LevelFilter::Info);
    }
    builder.parse_default_env();
    builder.target(Target::Stderr);
    builder.init();

    info!("Demo: {demo}");
    info!("Tensor product mode: {kron_mode}");
    debug!("Display precision: {precision}");

    let opts = DemoOptions {
        kron_mode,
        precision,
    };
    match demo {
        "products" => products(opts)?,
        "hadamard" => hadamard(opts),
        "tensor" => tensor(opts)?,
        "bell" => bell(opts)?,
        _ => {
            products(opts)?;
            println!();
            hadamard(opts);
            println!();
            tensor(opts)?;
            println!();
            bell(opts)?;
        }
    }
    Ok(())
}

/// Both orders of the product of two fixed 2x2 matrices.
fn products(opts: DemoOptions) -> Result<(), Box<dyn Error>> {
    let m1 = Matrix::from_vec(2, 2, vec![1, 2, 3, 4])?;
    let m2 = Matrix::from_vec(2, 2, vec![5, 6, 7, 8])?;

    println!("{:.*}", opts.precision, m1.matmul(&m2)?);
    println!();
    println!("{:.*}", opts.precision, m2.matmul(&m1)?);
    Ok(())
}

/// The Hadamard gate, built as `[[1, 1], [1, -1]]` scaled by `1/√2`.
fn hadamard(opts: DemoOptions) {
    let h = Matrix::from_rows(&[[1.0, 1.0], [1.0, -1.0]]).scale(1.0 / 2.0_f64.sqrt());
    println!("{:.*}", opts.precision, h);
}

/// `H ⊗ X`, then the row vector `⟨00|` multiplied through it.
fn tensor(opts: DemoOptions) -> Result<(), Box<dyn Error>> {
    let hx = gates::hadamard().tensor_product_with(&gates::pauli_x(), opts.kron_mode)?;
    println!("{:.*}", opts.precision, hx);
    println!();

    let bra = Matrix::row_vector(vec![1.0, 0.0, 0.0, 0.0]);
    println!("{:.*}", opts.precision, bra.matmul(&hx)?);
    Ok(())
}

/// `CNOT · (H ⊗ I) · |00⟩`, the Bell state `(|00⟩ + |11⟩)/√2`.
fn bell(opts: DemoOptions) -> Result<(), Box<dyn Error>> {
    let layer = gates::hadamard().tensor_product_with(&gates::identity(2), opts.kron_mode)?;
    let circuit = gates::cnot().matmul(&layer)?;
    let state = circuit.matmul(&gates::ket("00")?)?;
    println!("{:.*}", opts.precision, state);

    let probabilities: Vec<String> = state
        .iter()
        .map(|z| format!("{:.*}", opts.precision, z.norm_sqr()))
        .collect();
    info!("Measurement probabilities: [{}]", probabilities.join(", "));
    Ok(())
}
