mod app;
mod settings;
mod viewport;

use app::CubeApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rubik_gui=info".into()),
        )
        .init();

    // Parse --shuffle <n> argument
    let shuffle_override = parse_shuffle_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Rubik — cube simulator")
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "rubik-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(CubeApp::new(cc, shuffle_override)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_shuffle_arg() -> Option<u32> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--shuffle" && i + 1 < args.len() {
            match args[i + 1].parse::<u32>() {
                Ok(n) => return Some(n),
                Err(e) => {
                    tracing::error!("Invalid --shuffle value {:?}: {e}", args[i + 1]);
                }
            }
            break;
        }
        i += 1;
    }
    None
}
