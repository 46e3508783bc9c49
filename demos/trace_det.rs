//! Line-oriented console harness around the sparse matrix core.
//!
//! Input: one line `rows cols`, then `rows` lines of `cols` space-separated
//! values for the first matrix, then the same number of lines for a second
//! matrix of the same shape. Output: the first matrix, its trace, the
//! elementwise sum, the determinant of the first matrix, and a yes/no
//! indicator for a nonzero determinant.

use std::io::{self, BufRead};

use dokmat::{DokMatrix, add, determinant};

fn read_matrix(
    lines: &mut impl Iterator<Item = String>,
    rows: usize,
    cols: usize,
) -> DokMatrix<f64> {
    let mut m = DokMatrix::new(rows, cols);
    for i in 1..=rows {
        let line = lines.next().expect("missing matrix row");
        let mut tokens = line.split_whitespace();
        for j in 1..=cols {
            let v: f64 = tokens
                .next()
                .expect("missing value")
                .parse()
                .expect("non-numeric value");
            m.set(i, j, v);
        }
    }
    m
}

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines().map(|l| l.expect("read error"));

    let header = lines.next().expect("missing dimensions");
    let mut dims = header
        .split_whitespace()
        .map(|t| t.parse::<usize>().expect("non-numeric dimension"));
    let rows = dims.next().expect("missing row count");
    let cols = dims.next().expect("missing column count");

    let a = read_matrix(&mut lines, rows, cols);
    let b = read_matrix(&mut lines, rows, cols);

    println!("{a}");
    println!("trace = {}", a.trace().unwrap());

    let sum = add(&a, &b).unwrap();
    println!("{sum}");

    let det = determinant(&a).unwrap();
    println!("det = {det}");
    println!("{}", if det != 0.0 { "да" } else { "нет" });
}
