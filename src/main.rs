mod cli;
mod clipboard;
mod model;
mod store;
mod ui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("STASHDIR_LOG", "warn"))
        .init();
    cli::run()
}
