use std::env;
use std::time::Instant;

use lcs_all::utils::{is_subsequence, lcs_length};
use lcs_all::{compute_lcs, Variant};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("lcs_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let x: Vec<char> = options.x.chars().collect();
    let y: Vec<char> = options.y.chars().collect();
    let expected_len = lcs_length(&x, &y);

    eprintln!(
        "Probing |X|={} |Y|={} (LCS length {expected_len})",
        x.len(),
        y.len()
    );

    let mut sys = System::new();
    let total = options.variants.len();
    let mut measurements = Vec::with_capacity(total);
    for (idx, &variant) in options.variants.iter().enumerate() {
        eprint!("  [{}/{}] {variant}... ", idx + 1, total);
        let m = measure(variant, &mut sys, || compute_lcs(&x, &y, variant));
        let status = verify(&m.results, &x, &y, expected_len);
        eprintln!(
            "{} ({:.3}s, {} result(s))",
            status.label(),
            m.wall_s,
            m.results.len()
        );
        measurements.push((m, status));
    }

    let disagreement = measurements
        .windows(2)
        .find(|w| w[0].0.results != w[1].0.results)
        .map(|w| (w[0].0.variant, w[1].0.variant));
    if let Some((left, right)) = disagreement {
        eprintln!("lcs_probe: {left} and {right} disagree");
    }

    options.format.write(&measurements);

    let failed = measurements
        .iter()
        .any(|(_, status)| matches!(status, Status::Failed(_)));
    if failed || disagreement.is_some() {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    variants: Vec<Variant>,
    x: String,
    y: String,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Lines;
        let mut variants = vec![Variant::default()];
        let mut inputs = Vec::with_capacity(2);

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--variant=") {
                variants = parse_variants(value)?;
            } else if arg == "--variant" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --variant".to_string())?
                    .into();
                variants = parse_variants(&value)?;
            } else if arg.starts_with("--") {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                inputs.push(arg);
            }
        }

        let mut inputs = inputs.into_iter();
        match (inputs.next(), inputs.next(), inputs.next()) {
            (Some(x), Some(y), None) => Ok(Self {
                format,
                variants,
                x,
                y,
            }),
            _ => Err("expected exactly two input sequences".to_string()),
        }
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin lcs_probe -- [options] <X> <Y>

Options:
  --variant <brute-force|full-dp|traceback|all>   Solver(s) to run (default: traceback)
  --format <lines|csv|json>                       Output format (default: lines)
  -h, --help                                      Print this help message

Examples:
  cargo run --bin lcs_probe -- AGCAT GAC
  cargo run --bin lcs_probe -- --variant all --format json BANANA ATANA
"
        );
    }
}

fn parse_variants(value: &str) -> Result<Vec<Variant>, String> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(Variant::ALL.to_vec());
    }
    value
        .parse::<Variant>()
        .map(|v| vec![v])
        .map_err(|err| err.to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Lines,
    Csv,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "lines" => Ok(Self::Lines),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[(Measurement, Status)]) {
        match self {
            OutputFormat::Lines => write_lines(measurements),
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    variant: Variant,
    wall_s: f64,
    rss_delta_kib: u64,
    results: Vec<String>,
}

enum Status {
    Passed,
    Failed(String),
}

impl Status {
    fn label(&self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed(_) => "failed",
        }
    }

    fn detail(&self) -> Option<&str> {
        match self {
            Status::Passed => None,
            Status::Failed(detail) => Some(detail.as_str()),
        }
    }
}

fn measure<F>(variant: Variant, sys: &mut System, f: F) -> Measurement
where
    F: FnOnce() -> Vec<Vec<char>>,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let raw = f();
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);
    Measurement {
        variant,
        wall_s,
        rss_delta_kib: after.saturating_sub(before),
        results: raw.into_iter().map(|s| s.into_iter().collect()).collect(),
    }
}

fn verify(results: &[String], x: &[char], y: &[char], expected_len: usize) -> Status {
    if results.is_empty() {
        return Status::Failed("empty result set".to_string());
    }
    if results.windows(2).any(|w| w[0] >= w[1]) {
        return Status::Failed("results not strictly ascending".to_string());
    }
    for s in results {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != expected_len {
            return Status::Failed(format!(
                "'{s}' has length {}, expected {expected_len}",
                symbols.len()
            ));
        }
        if !is_subsequence(&symbols, x) || !is_subsequence(&symbols, y) {
            return Status::Failed(format!("'{s}' is not common to both inputs"));
        }
    }
    Status::Passed
}

fn write_lines(measurements: &[(Measurement, Status)]) {
    for (m, _) in measurements {
        println!("# {}", m.variant);
        for s in &m.results {
            println!("{s:?}");
        }
    }
}

fn write_csv(measurements: &[(Measurement, Status)]) {
    println!("variant,wall_s,rss_delta_kib,status,count,results");
    for (m, status) in measurements {
        println!(
            "{},{:.6},{},{},{},{}",
            m.variant,
            m.wall_s,
            m.rss_delta_kib,
            status.label(),
            m.results.len(),
            m.results.join(";")
        );
    }
}

fn write_json(measurements: &[(Measurement, Status)]) {
    println!("[");
    for (idx, (m, status)) in measurements.iter().enumerate() {
        let results = m
            .results
            .iter()
            .map(|s| format!("\"{}\"", escape_json(s)))
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "  {{\"variant\":\"{}\",\"wall_s\":{:.6},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}},\"results\":[{}]}}{}",
            m.variant,
            m.wall_s,
            m.rss_delta_kib,
            status.label(),
            match status.detail() {
                Some(d) => format!("\"{}\"", escape_json(d)),
                None => "null".to_string(),
            },
            results,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
}

fn escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
