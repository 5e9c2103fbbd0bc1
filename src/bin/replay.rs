use anyhow::{anyhow, Context};
use serde_json::json;
use tictactoe::{init_logging, GameEngine};

/// Parse a 1-indexed `row,col` argument into board indices.
fn parse_coord(arg: &str) -> anyhow::Result<(usize, usize)> {
    let (r, c) = arg
        .split_once(',')
        .ok_or_else(|| anyhow!("expected <row>,<col>, got '{}'", arg))?;
    let r: usize = r.trim().parse().with_context(|| format!("bad row in '{}'", arg))?;
    let c: usize = c.trim().parse().with_context(|| format!("bad column in '{}'", arg))?;
    if r == 0 || c == 0 {
        return Err(anyhow!("coordinates are 1-indexed, got '{}'", arg));
    }
    Ok((r - 1, c - 1))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <row,col>...", args[0]);
        std::process::exit(1);
    }

    let mut engine = GameEngine::new();
    for arg in &args[1..] {
        let (r, c) = parse_coord(arg)?;
        engine
            .apply_move(r, c)
            .with_context(|| format!("move {} rejected", arg))?;
    }

    let board: Vec<String> = engine
        .board()
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|s| s.symbol().to_string())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    let result = json!({
        "status": format!("{:?}", engine.status()),
        "moves": engine.history().len(),
        "board": board,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
