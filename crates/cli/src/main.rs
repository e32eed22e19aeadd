use anyhow::Result;

fn main() -> Result<()> {
    locator_cli::main_entry()
}
