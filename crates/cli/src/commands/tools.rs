//! `veggietools tools`: Print the tool catalog.

pub fn run() -> veggietools_core::Result<()> {
    let catalog = veggietools_tools::catalog();
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}
