//! Categories command implementation
//!
//! Lists the identifier categories the gate detects, in evaluation order.

use crate::detection::IdentifierReason;
use clap::Args;

/// Arguments for the categories command
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> anyhow::Result<i32> {
        if self.json {
            let labels: Vec<&str> = IdentifierReason::ALL.iter().map(|r| r.label()).collect();
            println!("{}", serde_json::to_string_pretty(&labels)?);
            return Ok(0);
        }

        println!("Identifier categories ({}):", IdentifierReason::ALL.len());
        println!();
        for reason in IdentifierReason::ALL {
            println!("  {:30} {}", reason.label(), reason.description());
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_execute() {
        let args = CategoriesArgs { json: false };
        assert_eq!(args.execute().unwrap(), 0);
    }

    #[test]
    fn test_categories_execute_json() {
        let args = CategoriesArgs { json: true };
        assert_eq!(args.execute().unwrap(), 0);
    }
}
