use clap::Parser;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Button};
use log::{info, warn};
use std::path::PathBuf;

use confdeck::config::{default_options, AppConfig, InstallationConfig};
use confdeck::ui::InstallationsPanel;

const APP_ID: &str = "com.github.confdeck";

/// confdeck - A GTK4 editor for analysis-server installation settings
#[derive(Parser, Debug, Clone)]
#[command(name = "confdeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Installation file to load at startup
    #[arg(value_name = "INSTALLATIONS_FILE")]
    installations_file: Option<String>,
}

/// Global CLI options accessible from build_ui
static CLI_OPTIONS: std::sync::OnceLock<Cli> = std::sync::OnceLock::new();

fn main() {
    let cli = Cli::parse();

    // Logger verbosity follows the -d/--debug flag; RUST_LOG overrides it
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting confdeck v{}", env!("CARGO_PKG_VERSION"));

    CLI_OPTIONS.set(cli).expect("CLI options already set");

    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(build_ui);

    // Run the application (pass empty args since we already parsed them)
    app.run_with_args(&["confdeck"]);
}

fn build_ui(app: &Application) {
    info!("Building UI");

    let cli = CLI_OPTIONS.get().cloned().unwrap_or(Cli {
        debug: 0,
        installations_file: None,
    });

    // Load installations - from the CLI path if given, otherwise from the
    // default location
    let app_config = if let Some(ref file) = cli.installations_file {
        let path = PathBuf::from(file);
        match AppConfig::load_from_path(&path) {
            Ok(config) => {
                info!("Loaded installations from: {}", file);
                config
            }
            Err(e) => {
                warn!("Failed to load installation file '{}': {}", file, e);
                AppConfig::load().unwrap_or_default()
            }
        }
    } else {
        match AppConfig::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load installations, using defaults: {}", e);
                AppConfig::default()
            }
        }
    };

    let panel = std::rc::Rc::new(InstallationsPanel::from_config(&app_config));

    let toolbar = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);
    toolbar.set_margin_start(12);
    toolbar.set_margin_end(12);
    toolbar.set_margin_top(6);
    toolbar.set_margin_bottom(6);

    let add_button = Button::with_label("Add Installation");
    toolbar.append(&add_button);

    let panel_clone = panel.clone();
    add_button.connect_clicked(move |_| {
        let number = panel_clone.section_count() + 1;
        let config = InstallationConfig {
            name: format!("Installation {}", number),
            server_url: String::new(),
            server_version: None,
            database_url: String::new(),
            server_password: String::new(),
            options: default_options(),
        };
        let editor = panel_clone.add_installation(&config);
        panel_clone.refresh(&editor);
    });

    let scrolled = gtk4::ScrolledWindow::new();
    scrolled.set_vexpand(true);
    scrolled.set_child(Some(panel.widget()));

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    content.append(&toolbar);
    content.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));
    content.append(&scrolled);

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Server Installations")
        .default_width(540)
        .default_height(680)
        .child(&content)
        .build();

    // Evaluate every section's version rule once the fragment is attached
    panel.initialize();

    window.present();
}
