use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polyseq::{ConvexPolygon, PolygonSequence};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Explore sequences of regular polygons with a shared circumradius")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Sequence parameters shared by every subcommand that builds one.
#[derive(Args, Clone, Copy)]
struct SeqArgs {
    /// Largest side count in the sequence (>= 3)
    #[arg(long)]
    max_sides: i64,
    /// Circumradius shared by all polygons
    #[arg(long)]
    radius: f64,
}

impl SeqArgs {
    fn build(self) -> Result<PolygonSequence> {
        PolygonSequence::new(self.max_sides, self.radius)
            .with_context(|| format!("max_sides={} radius={}", self.max_sides, self.radius))
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print one row per polygon; optionally write the table as CSV
    Table {
        #[command(flatten)]
        seq: SeqArgs,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print the polygons selected by a slice (negative values count from the end)
    Slice {
        #[command(flatten)]
        seq: SeqArgs,
        #[arg(long, allow_negative_numbers = true)]
        start: Option<isize>,
        #[arg(long, allow_negative_numbers = true)]
        stop: Option<isize>,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        step: isize,
    },
    /// Print the polygon with the largest area/perimeter ratio as JSON
    Efficient {
        #[command(flatten)]
        seq: SeqArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Table { seq, out } => table(seq, out),
        Action::Slice {
            seq,
            start,
            stop,
            step,
        } => slice(seq, start, stop, step),
        Action::Efficient { seq } => efficient(seq),
        Action::Report => report(),
    }
}

/// JSON view of a polygon.
#[derive(Serialize)]
struct PolygonRow {
    sides: u32,
    circumradius: f64,
    side_length: f64,
    interior_angle: f64,
    apothem: f64,
    area: f64,
    perimeter: f64,
    efficiency: f64,
}

impl From<&ConvexPolygon> for PolygonRow {
    fn from(p: &ConvexPolygon) -> Self {
        Self {
            sides: p.sides(),
            circumradius: p.circumradius(),
            side_length: p.side_length(),
            interior_angle: p.interior_angle(),
            apothem: p.apothem(),
            area: p.area(),
            perimeter: p.perimeter(),
            efficiency: p.efficiency(),
        }
    }
}

fn print_rows<'a>(polys: impl IntoIterator<Item = &'a ConvexPolygon>) {
    println!(
        "{:>6} {:>12} {:>10} {:>12} {:>12} {:>10}",
        "sides", "side_length", "angle", "area", "perimeter", "a/p"
    );
    for p in polys {
        println!(
            "{:>6} {:>12.6} {:>10.4} {:>12.6} {:>12.6} {:>10.6}",
            p.sides(),
            p.side_length(),
            p.interior_angle(),
            p.area(),
            p.perimeter(),
            p.efficiency()
        );
    }
}

fn table(args: SeqArgs, out: Option<String>) -> Result<()> {
    let seq = args.build()?;
    tracing::info!(%seq, out = ?out, "table");
    let polys: Vec<_> = seq.iterate().collect();
    print_rows(polys.iter().map(|p| p.as_ref()));

    if let Some(out) = out {
        let rows = table::write_csv(&seq, &out)?;
        tracing::info!(rows, out, "table_csv");
        let table_path = std::path::Path::new(&out);
        let prov = provenance::TableProvenance::new(&seq, table_path, rows).write(table_path)?;
        tracing::info!(provenance = %prov.display(), "provenance");
    }
    Ok(())
}

fn slice(args: SeqArgs, start: Option<isize>, stop: Option<isize>, step: isize) -> Result<()> {
    let seq = args.build()?;
    tracing::info!(%seq, start = ?start, stop = ?stop, step, "slice");
    let polys = seq.get_range(start, stop, step)?;
    print_rows(polys.iter().map(|p| p.as_ref()));
    Ok(())
}

fn efficient(args: SeqArgs) -> Result<()> {
    let seq = args.build()?;
    let best = seq.max_efficiency_polygon();
    tracing::info!(%seq, sides = best.sides(), "efficient");
    println!(
        "{}",
        serde_json::to_string_pretty(&PolygonRow::from(best.as_ref()))?
    );
    Ok(())
}

fn report() -> Result<()> {
    let stats = polyseq::global_cache_stats();
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "polyseq_version": polyseq::VERSION,
        "cache": {
            "capacity": polyseq::cache::DEFAULT_CACHE_CAPACITY,
            "hits": stats.hits,
            "misses": stats.misses,
            "evictions": stats.evictions,
        },
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
