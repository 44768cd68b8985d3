use adapter_plots::cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::entry()
}
