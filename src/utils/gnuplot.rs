// Reading gnuplot style data files

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::utils::error::Result;

/// One parsed line of a data file
///
/// Lines with more than three columns produce a point with no values at all,
/// which the extractors then skip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DataPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: None,
        }
    }

    pub const fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }
}

/// Parse whitespace separated columns from `reader`
///
/// Blank lines and `#` comments are skipped. A single column is taken as `y`
/// with `x` counting the single column lines seen so far.
///
/// Each line is read number by number until a token does not start with a
/// decimal number. A token like `1.5abc` still yields `1.5` but ends the line,
/// and `nan`, `inf` or out of range values end it without a value.
pub fn read_gnuplot_data<R: BufRead>(reader: R) -> Result<Vec<DataPoint>> {
    let mut data = Vec::new();
    let mut index = 0_u32;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut values = Vec::new();
        for token in trimmed.split_whitespace() {
            let Some((value, whole)) = leading_number(token) else {
                break;
            };
            values.push(value);
            if !whole {
                break;
            }
        }

        let point = match values.as_slice() {
            [] => continue,
            [y] => {
                let point = DataPoint::new(f64::from(index), *y);
                index += 1;
                point
            }
            [x, y] => DataPoint::new(*x, *y),
            [x, y, z] => DataPoint::with_z(*x, *y, *z),
            _ => DataPoint::default(),
        };
        data.push(point);
    }

    debug!(points = data.len(), "read gnuplot data");
    Ok(data)
}

/// Longest prefix of `token` that reads as a finite decimal number, and
/// whether that prefix is the whole token
fn leading_number(token: &str) -> Option<(f64, bool)> {
    let bytes = token.as_bytes();
    let digits_from = |start: usize| start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_end = digits_from(end);
    let mut mantissa_digits = integer_end - end;
    end = integer_end;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        mantissa_digits += fraction_end - end - 1;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    let value: f64 = token[..end].parse().ok()?;
    value.is_finite().then_some((value, end == token.len()))
}

/// Open `path` and parse it with [`read_gnuplot_data`]
pub fn read_gnuplot_file<P: AsRef<Path>>(path: P) -> Result<Vec<DataPoint>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| {
        io::Error::new(
            err.kind(),
            format!("Could not open file: {} ({err})", path.display()),
        )
    })?;
    read_gnuplot_data(BufReader::new(file))
}

/// `x` and `y` columns of every point that has both, in input order
pub fn extract_1d(data: &[DataPoint]) -> (Vec<f64>, Vec<f64>) {
    data.iter()
        .filter_map(|point| Some((point.x?, point.y?)))
        .unzip()
}

/// Sorted unique `x` and `y` of the complete points, plus `z[ix][iy]`
///
/// Grid cells that no point fills are left at zero.
pub fn extract_2d(data: &[DataPoint]) -> (Vec<f64>, Vec<f64>, Vec<Vec<f64>>) {
    let complete: Vec<(f64, f64, f64)> = data
        .iter()
        .filter_map(|point| Some((point.x?, point.y?, point.z?)))
        .collect();

    // -0 and 0 share a grid line
    let x = unique_sorted(complete.iter().map(|&(x, _, _)| x));
    let y = unique_sorted(complete.iter().map(|&(_, y, _)| y));

    let x_index = index_of(&x);
    let y_index = index_of(&y);

    let mut z = vec![vec![0.0; y.len()]; x.len()];
    for (px, py, pz) in complete {
        if let (Some(&i), Some(&j)) = (x_index.get(&grid_key(px)), y_index.get(&grid_key(py))) {
            z[i][j] = pz;
        }
    }

    (x, y, z)
}

fn unique_sorted(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.map(|value| value + 0.0).collect();
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| a.total_cmp(b).is_eq());
    values
}

fn index_of(values: &[f64]) -> HashMap<u64, usize> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| (grid_key(value), i))
        .collect()
}

fn grid_key(value: f64) -> u64 {
    (value + 0.0).to_bits()
}
