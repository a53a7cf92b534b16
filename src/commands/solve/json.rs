use ladder_core::error::Result;
use ladder_core::graph::LadderResult;

/// Output in JSON format
pub fn output_json(result: &LadderResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
