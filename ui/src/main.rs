#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use triggers_ui::config::Config;
use triggers_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let config = Config::init()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_min_inner_size([640.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Triggers",
        native_options,
        Box::new(move |_cc| {
            let mut state = State::new(config);
            if state.config.snapshot_path().is_some() {
                state.reload();
            }
            Ok(Box::new(triggers_ui::TriggersApp::new(state)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to start eframe: {err}"))
}
