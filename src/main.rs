use anyhow::Result;

fn main() -> Result<()> {
    remedy_finder::cli::run()
}
