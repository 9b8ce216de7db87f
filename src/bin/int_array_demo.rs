//! Runs a fixed script of operations against an `IntArray` and logs each
//! result. Failing steps are logged and the script carries on.

use anyhow::Context;
use clap::Parser;
use int_array::{predicate, Error, IntArray};

#[derive(Parser)]
#[command(about = "Exercise an exact-size integer array")]
struct Cli{
    /// Number of zeroed elements the array starts with
    size: usize,
}

fn check<T>(step: &str, result: Result<T, Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(step, %error, "step failed");
            None
        }
    }
}

fn show(array: &mut IntArray) {
    if let Some(text) = check("render", array.render()) {
        println!("{text}");
    }
}

fn show_search(step: &str, result: Result<Option<usize>, Error>) {
    match check(step, result) {
        Some(Some(index)) => println!("{step}: {index}"),
        Some(None) => println!("{step}: not found"),
        None => {}
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let mut array = IntArray::new(cli.size).context("creating the array")?;

    tracing::info!("append 1 through 5");
    for value in 1..=5 {
        check("append", array.append(value));
    }
    show(&mut array);

    for (index, value) in [(1, 2), (11, 2), (3, 9)] {
        tracing::info!(index, value, "insert_at");
        check("insert_at", array.insert_at(index, value));
        show(&mut array);
    }

    for index in [0, 20] {
        tracing::info!(index, "remove_at");
        check("remove_at", array.remove_at(index));
    }
    show(&mut array);

    tracing::info!("reverse");
    check("reverse", array.reverse());
    show(&mut array);

    tracing::info!(index = 5, value = -7, "insert_at");
    check("insert_at", array.insert_at(5, -7));
    show(&mut array);

    tracing::info!("clone");
    let mut copy = check("clone", array.try_clone());
    if let Some(clone) = copy.as_mut() {
        show(clone);
    }
    check("delete clone", IntArray::delete(&mut copy));

    tracing::info!("reverse");
    check("reverse", array.reverse());
    show(&mut array);

    show_search("index_of(5)", array.index_of(5));
    show_search("index_of(1)", array.index_of(1));
    show_search("last_index_of(2)", array.last_index_of(2));
    show_search("index_of(9)", array.index_of(9));

    tracing::info!(index = 0, "remove_at");
    check("remove_at", array.remove_at(0));
    show(&mut array);

    for value in 1..=3 {
        tracing::info!(value, "append");
        check("append", array.append(value));
        show(&mut array);
    }

    for (name, condition) in predicate::ALL {
        show_search(&format!("find({name})"), array.find(condition));
    }

    tracing::info!("fill with 5");
    check("fill", array.fill(5));
    show(&mut array);

    tracing::info!("set index 0 to 42, then probe get");
    check("set", array.set(0, 42));
    for index in [0, array.len()] {
        if let Some(value) = check("get", array.get(index)) {
            println!("get({index}): {value}");
        }
    }

    let mut slot = Some(array);
    IntArray::delete(&mut slot).context("deleting the array")?;
    Ok(())
}
