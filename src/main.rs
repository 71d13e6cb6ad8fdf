use anyhow::Result;

fn main() -> Result<()> {
    org_loc::cli::run()
}
