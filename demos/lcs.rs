//! Example: every longest common subsequence under each solver variant.
//!
//! Run with:
//! `cargo run --example lcs`

use lcs_all::{compute_lcs_str, utils::lcs_length, Variant};

fn main() {
    let x = "AGCAT";
    let y = "GAC";

    let xs: Vec<char> = x.chars().collect();
    let ys: Vec<char> = y.chars().collect();
    println!("LCS length of {x} and {y}: {}", lcs_length(&xs, &ys));

    for variant in Variant::ALL {
        let all = compute_lcs_str(x, y, variant);
        println!("{variant:>12}: {all:?}");
    }
}
