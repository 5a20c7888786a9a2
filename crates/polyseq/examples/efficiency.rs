//! Print a polygon sequence and its most efficient member.
//!
//! Usage:
//!   cargo run -p polyseq --example efficiency -- 10 4
//!
//! Arguments are `max_sides` and `circumradius` (defaults 10 and 4).

use polyseq::PolygonSequence;

fn main() {
    let mut args = std::env::args().skip(1);
    let max_sides: i64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
    let radius: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(4.0);
    let seq = match PolygonSequence::new(max_sides, radius) {
        Ok(seq) => seq,
        Err(err) => {
            eprintln!("usage: efficiency [max_sides] [circumradius]: {err}");
            return;
        }
    };
    println!("{seq}");
    for p in &seq {
        println!(
            "n={:>3}  area={:>10.4}  perimeter={:>10.4}  area/perimeter={:.6}",
            p.sides(),
            p.area(),
            p.perimeter(),
            p.efficiency()
        );
    }
    let best = seq.max_efficiency_polygon();
    println!("most efficient: {best}");
}
