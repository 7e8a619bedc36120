//! Command-line driver for the CORDIC hardware model.

use clap::{Args, Parser, Subcommand};
use pyo3::prelude::*;
use pyo3::types::PyList;
use serde::Serialize;
use std::ffi::CString;
use std::path::{Path, PathBuf};
use std::{fs, process};

use cordic_sim::core::units::alu::AdderIo;
use cordic_sim::sim::loader;
use cordic_sim::sim::reference::{self, ReferenceResult, UlpError};
use cordic_sim::stats::SimStats;
use cordic_sim::{
    AdderSubtractor, Config, CordicEngine, CordicOutput, CordicSample, Direction, Fixed, Mode,
    RotationType, SimError,
};

#[derive(Parser, Debug)]
#[command(
    name = "cordic-sim",
    author,
    version,
    about = "Cycle-accurate fixed-point CORDIC model",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single CORDIC transaction.
    Run {
        #[arg(long, default_value = "rotation")]
        mode: Mode,

        #[arg(long, default_value = "circular")]
        rot_type: RotationType,

        /// Raw x port value (decimal, 0x.., or 0b..).
        #[arg(long, allow_hyphen_values = true)]
        x: Fixed,

        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        y: Fixed,

        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        z: Fixed,

        #[command(flatten)]
        opts: EngineOpts,
    },

    /// Run every sample in a JSON stimulus file, in order.
    Batch {
        #[arg(short = 'f', long)]
        file: PathBuf,

        #[command(flatten)]
        opts: EngineOpts,
    },

    /// Evaluate the adder/subtractor once.
    Addsub {
        #[arg(long, allow_hyphen_values = true)]
        a: Fixed,

        #[arg(long, allow_hyphen_values = true)]
        b: Fixed,

        /// Drive D high (A - B).
        #[arg(long)]
        subtract: bool,
    },

    /// Python script to run against the bindings.
    Script {
        script: PathBuf,

        /// Arguments passed to the script as sys.argv[1:].
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        script_args: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct EngineOpts {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every micro-rotation.
    #[arg(long)]
    trace: bool,

    /// Emit machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,
}

/// One transaction as reported to the user.
#[derive(Serialize, Debug)]
struct Report {
    input: CordicSample,
    output: CordicOutput,
    reference: ReferenceResult,
    ulp_error: UlpError,
    in_domain: bool,
}

#[derive(Serialize, Debug)]
struct BatchReport<'a> {
    results: &'a [Report],
    stats: &'a SimStats,
}

fn main() {
    let cli = Cli::parse();

    let trace = match &cli.command {
        Command::Run { opts, .. } | Command::Batch { opts, .. } => opts.trace,
        _ => false,
    };
    init_logging(trace);

    let result = match cli.command {
        Command::Run {
            mode,
            rot_type,
            x,
            y,
            z,
            opts,
        } => {
            let sample = CordicSample::new(x, y, z, mode, rot_type);
            cmd_run(vec![sample], &opts)
        }
        Command::Batch { file, opts } => {
            loader::load_stimulus(&file).and_then(|samples| cmd_run(samples, &opts))
        }
        Command::Addsub { a, b, subtract } => {
            cmd_addsub(a, b, subtract);
            Ok(())
        }
        Command::Script {
            script,
            script_args,
        } => {
            run_python_script(&script, script_args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("\n\x1b[1;31merror:\x1b[0m {}", e);
        process::exit(1);
    }
}

fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn load_config(opts: &EngineOpts) -> Result<Config, SimError> {
    let mut config = match &opts.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.trace |= opts.trace;
    Ok(config)
}

fn cmd_run(samples: Vec<CordicSample>, opts: &EngineOpts) -> Result<(), SimError> {
    let config = load_config(opts)?;
    let mut engine = CordicEngine::new(&config);
    engine.reset();
    log::debug!(
        "cli: {} samples, policy {:?}",
        samples.len(),
        engine.policy()
    );

    let mut reports = Vec::with_capacity(samples.len());
    for input in samples {
        let output = engine.process(input)?;
        let reference = reference::expected(&input);
        reports.push(Report {
            input,
            output,
            reference,
            ulp_error: reference::ulp_error(&output, &reference),
            in_domain: reference::in_convergence_domain(&input),
        });
    }

    if opts.json {
        let doc = BatchReport {
            results: &reports,
            stats: engine.stats(),
        };
        let text = serde_json::to_string_pretty(&doc).map_err(|source| SimError::Json {
            what: "report",
            source,
        })?;
        println!("{text}");
    } else {
        for (i, r) in reports.iter().enumerate() {
            print_report(i, r);
        }
        engine.stats().print();
    }
    Ok(())
}

fn print_report(index: usize, r: &Report) {
    println!(
        "\n[{index}] {} x={} y={} z={}",
        r.input.control(),
        r.input.x,
        r.input.y,
        r.input.z
    );
    println!(
        "    out x={} y={} z={}",
        r.output.x, r.output.y, r.output.z
    );
    println!(
        "    ref x={:.6} y={:.6} z={:.6}",
        r.reference.x, r.reference.y, r.reference.z
    );
    println!(
        "    err x={:.2} y={:.2} z={:.2} ulp",
        r.ulp_error.x, r.ulp_error.y, r.ulp_error.z
    );
    if !r.in_domain {
        println!("    \x1b[1;33mwarning:\x1b[0m input outside the convergence domain");
    }
}

fn cmd_addsub(a: Fixed, b: Fixed, subtract: bool) {
    let io = AdderIo {
        a,
        b,
        d: Direction::from_bit(subtract),
    };
    let s = AdderSubtractor::new().evaluate(&io);
    let op = if subtract { '-' } else { '+' };
    println!("{a} {op} {b} = {s}");
}

/// Reads a script and converts its source and file name to the C strings
/// the interpreter expects.
fn read_script(script_path: &Path) -> Result<(CString, CString), String> {
    let script_content = fs::read_to_string(script_path)
        .map_err(|e| format!("Error reading script {}: {}", script_path.display(), e))?;
    let code_c = CString::new(script_content).map_err(|e| {
        format!(
            "Script {} contains a NUL byte at offset {}",
            script_path.display(),
            e.nul_position()
        )
    })?;
    let file_c = CString::new(script_path.display().to_string())
        .map_err(|_| format!("Script path {} contains a NUL byte", script_path.display()))?;
    Ok((code_c, file_c))
}

fn run_python_script(script_path: &Path, script_args: Vec<String>) {
    let (code_c, file_c) = read_script(script_path).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });
    let script_name = script_path.display().to_string();

    Python::with_gil(|py| {
        let sys = py.import("sys").expect("sys");
        let path = sys.getattr("path").expect("path");
        path.call_method1("insert", (0, ".")).expect("path.insert");

        // Inject the extension as `cordic_sim._core` so test benches import
        // it the same way they would from an installed wheel.
        let m = PyModule::new(py, "cordic_sim._core").expect("module");
        _core::register_module(&m).expect("register");
        let modules = sys.getattr("modules").expect("modules");
        modules.set_item("cordic_sim._core", m).expect("inject");

        let mut full_args = vec![script_name];
        full_args.extend(script_args);
        let py_args = PyList::new(py, &full_args).expect("argv");
        sys.setattr("argv", py_args).expect("argv");

        let name_c = c"__main__";

        if let Err(e) = PyModule::from_code(py, &code_c, &file_c, name_c) {
            e.print(py);
            process::exit(1);
        }
    });
}
