use std::{env, f64::consts::PI, io::Cursor, sync::Arc};

use anyhow::{Context, Result, bail};
use log::info;

use tabulated::{
    ArrayTabulatedFunction, FunctionPoint, StorageKind,
    factory::{
        LinkedListTabulatedFunctionFactory, reset_tabulated_function_factory,
        set_tabulated_function_factory, tabulate, tabulate_with,
    },
    function::{
        Function,
        basic::{Cos, Exp, Sin},
    },
    integration::integral,
    io::{
        input_tabulated_function, output_tabulated_function, read_columnar,
        read_tabulated_function, write_columnar, write_tabulated_function,
    },
    tabulated::TabulatedFunction,
    types::Validate,
};

const SCENARIOS: [&str; 6] = ["points", "tabulate", "reflect", "integrate", "io", "threads"];

fn main() -> Result<()> {
    env_logger::init();

    let scenario = env::args().nth(1).unwrap_or_else(|| "all".to_string());
    match scenario.as_str() {
        "all" => {
            for name in SCENARIOS {
                run(name)?;
            }
            Ok(())
        }
        name => run(name),
    }
}

fn run(scenario: &str) -> Result<()> {
    println!("--------------- {} ---------------", scenario);
    match scenario {
        "points" => points(),
        "tabulate" => global_factory(),
        "reflect" => type_directed(),
        "integrate" => integrate(),
        "io" => round_trips(),
        "threads" => threads(),
        other => bail!(
            "unknown scenario '{}', expected one of {:?} or 'all'",
            other,
            SCENARIOS
        ),
    }
}

fn points() -> Result<()> {
    let f = ArrayTabulatedFunction::new(0.0, 10.0, 9)?;
    for point in &f {
        println!("{}", point);
    }
    Ok(())
}

fn global_factory() -> Result<()> {
    let tf = tabulate(&Cos, 0.0, PI, 11)?;
    println!("{}", tf.storage_kind());

    set_tabulated_function_factory(Arc::new(LinkedListTabulatedFunctionFactory));
    let tf = tabulate(&Cos, 0.0, PI, 11)?;
    println!("{}", tf.storage_kind());

    reset_tabulated_function_factory();
    let tf = tabulate(&Cos, 0.0, PI, 11)?;
    println!("{}", tf.storage_kind());
    Ok(())
}

fn type_directed() -> Result<()> {
    let f = StorageKind::Array.create_with_count(0.0, 10.0, 3)?;
    println!("{}: {}", f.storage_kind(), f);

    let f = StorageKind::Array.create_with_values(0.0, 10.0, &[0.0, 10.0])?;
    println!("{}: {}", f.storage_kind(), f);

    let kind: StorageKind = "linked_list".parse()?;
    let f = kind.create_from_points(&[
        FunctionPoint::new(0.0, 0.0),
        FunctionPoint::new(10.0, 10.0),
    ])?;
    println!("{}: {}", f.storage_kind(), f);

    let f = tabulate_with(kind, &Sin, 0.0, PI, 11)?;
    println!("{}: {}", f.storage_kind(), f);
    Ok(())
}

fn integrate() -> Result<()> {
    let expected = std::f64::consts::E - 1.0;
    println!("step\t\tintegral\terror");
    for step in [0.1, 0.01, 0.001, 0.0001] {
        let value = integral(&Exp, 0.0, 1.0, step)?;
        let error = (value - expected).abs();
        println!("{:.6}\t{:.8}\t{:.2e}", step, value, error);
        if error < 1e-7 {
            info!("step {} reaches 1e-7 accuracy", step);
            break;
        }
    }
    Ok(())
}

fn round_trips() -> Result<()> {
    let f = tabulate_with(StorageKind::LinkedList, &Exp, 0.0, 1.0, 5)?;
    if !f.validate().is_valid() {
        bail!("tabulated exp violates its invariants");
    }

    let mut bytes = Vec::new();
    output_tabulated_function(f.as_ref(), &mut bytes)?;
    let interleaved = input_tabulated_function(&mut Cursor::new(&bytes))
        .context("reading interleaved binary")?;
    println!("interleaved ({} bytes): {}", bytes.len(), interleaved);

    bytes.clear();
    write_columnar(f.as_ref(), &mut bytes)?;
    let columnar = read_columnar(&mut Cursor::new(&bytes)).context("reading columnar binary")?;
    println!("columnar ({} bytes): {}", bytes.len(), columnar);

    let mut text = Vec::new();
    write_tabulated_function(f.as_ref(), &mut text)?;
    let parsed = read_tabulated_function(&mut Cursor::new(&text)).context("reading text")?;
    println!("text: {}", String::from_utf8_lossy(&text));

    println!(
        "all equal: {}",
        *interleaved == *f && *columnar == *f && *parsed == *f
    );
    println!("value at 0.5: {}", parsed.value_at(0.5));
    Ok(())
}

#[cfg(feature = "threads")]
fn threads() -> Result<()> {
    let report = tabulated::threads::run_pipeline(100, Some(std::time::Duration::from_secs(10)))?;
    println!(
        "produced {}, processed {}, failed {}{}",
        report.produced,
        report.processed,
        report.failed,
        if report.cancelled { " (cancelled)" } else { "" }
    );
    Ok(())
}

#[cfg(not(feature = "threads"))]
fn threads() -> Result<()> {
    bail!("built without the 'threads' feature")
}
