use std::io::{self, Write};

use serde_json::json;

use crate::models::method::Method;
use crate::utils::error::Result;

/// Print the available integration methods
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCommand {
    pub json: bool,
}

impl ListCommand {
    /// Execute the list command
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.json {
            let methods: Vec<_> = Method::ALL
                .iter()
                .map(|method| {
                    let dimensions: Vec<u8> = (1..=2).filter(|&d| method.supports_dimensions(d)).collect();
                    json!({
                        "name": method.name(),
                        "description": method.description(),
                        "dimensions": dimensions,
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&methods)?)?;
        } else {
            for method in Method::ALL {
                writeln!(out, "\t'{}' : {}", method.name(), method.description())?;
            }
        }
        Ok(())
    }
}
