mod command;
mod config;
mod input;
mod logging;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
